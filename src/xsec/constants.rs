//! # 物理常数
//!
//! 温度轴换算所需的 SI 常数。
//!
//! ## 依赖关系
//! - 被 `xsec/plot.rs` 使用

/// Boltzmann 常数 (J/K)
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// 基本电荷 (C)
pub const Q_ELEMENTARY: f64 = 1.602176634e-19;

/// 1 barn 对应的截面 (m²)
pub const BARN_M2: f64 = 1e-28;

/// keV -> K 换算因子，即 1e3·e/kB
pub const KELVIN_PER_KEV: f64 = 1e3 * Q_ELEMENTARY / K_BOLTZMANN;

/// 质心系能量 (keV) 换算为等效温度 (K)，T = E/kB
pub fn kev_to_kelvin(energy_kev: f64) -> f64 {
    energy_kev * KELVIN_PER_KEV
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kev_to_kelvin() {
        // 1 keV ≈ 1.16045e7 K
        let t = kev_to_kelvin(1.0);
        assert!((t - 1.16045e7).abs() / 1.16045e7 < 1e-3);
    }
}
