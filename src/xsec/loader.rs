//! # 截面读取与归一化
//!
//! 实现截面数据的核心换算流程。
//!
//! ## 算法概述
//! 1. 解析两列数据表（实验室系能量，截面，源单位）
//! 2. 两体运动学约化：E_cm = E_lab · m₂/(m₁+m₂)
//! 3. 能量乘以 `energy_scale` 归一化到 keV
//! 4. 截面乘以 `xs_scale` 归一化到 m²
//!
//! 其中 m₁ 为入射粒子质量，m₂ 为静止靶粒子质量；
//! E_cm 为质心系中可用于反应的动能（非相对论近似）。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/export.rs` 调用
//! - 使用 `parsers/table.rs` 解析数据
//! - 使用 `xsec/masses.rs` 解析反应道粒子质量
//! - 产出 `models/channel.rs` 的 ReactionCurve

use crate::error::{FusionXsError, Result};
use crate::models::{ReactionChannel, ReactionCurve};
use crate::parsers::{parse_xsec_file, RawTable};
use crate::xsec::constants::BARN_M2;
use crate::xsec::masses;

use std::path::Path;

/// 默认能量换算因子（源单位 -> keV）
pub const DEFAULT_ENERGY_SCALE: f64 = 1e3;

/// 默认截面换算因子（源单位 barn -> m²）
pub const DEFAULT_XS_SCALE: f64 = BARN_M2;

/// 截面读取器
///
/// 每次调用相互独立，无共享状态。
#[derive(Debug, Clone, Copy)]
pub struct XsecLoader {
    /// 入射粒子质量 (u)
    collider_mass: f64,
    /// 靶粒子质量 (u)
    target_mass: f64,
    /// 能量单位换算因子（源单位 -> keV）
    energy_scale: f64,
    /// 截面单位换算因子（源单位 -> m²）
    xs_scale: f64,
}

impl XsecLoader {
    /// 创建新的读取器（默认换算因子：keV×1e3，barn）
    pub fn new(collider_mass: f64, target_mass: f64) -> Self {
        Self {
            collider_mass,
            target_mass,
            energy_scale: DEFAULT_ENERGY_SCALE,
            xs_scale: DEFAULT_XS_SCALE,
        }
    }

    /// 设置单位换算因子
    pub fn with_scales(mut self, energy_scale: f64, xs_scale: f64) -> Self {
        self.energy_scale = energy_scale;
        self.xs_scale = xs_scale;
        self
    }

    /// 从反应道定义创建读取器（解析注册表中的粒子质量）
    pub fn for_channel(channel: &ReactionChannel) -> Result<Self> {
        let collider_mass = masses::particle_mass(channel.collider)
            .ok_or_else(|| FusionXsError::UnknownParticle(channel.collider.to_string()))?;
        let target_mass = masses::particle_mass(channel.target)
            .ok_or_else(|| FusionXsError::UnknownParticle(channel.target.to_string()))?;

        Ok(Self::new(collider_mass, target_mass).with_scales(channel.energy_scale, channel.xs_scale))
    }

    /// 读取数据文件并归一化
    pub fn load(&self, path: &Path, label: &str) -> Result<ReactionCurve> {
        let table = parse_xsec_file(path)?;
        self.convert(&table, label)
    }

    /// 对已解析的数据表应用运动学约化和单位换算
    pub fn convert(&self, table: &RawTable, label: &str) -> Result<ReactionCurve> {
        // 检查质量
        if self.collider_mass <= 0.0 || self.target_mass <= 0.0 {
            return Err(FusionXsError::InvalidArgument(format!(
                "particle masses must be positive (collider = {}, target = {})",
                self.collider_mass, self.target_mass
            )));
        }

        let cm_factor = self.target_mass / (self.collider_mass + self.target_mass);

        let energies_kev = table
            .energies
            .iter()
            .map(|e| e * cm_factor * self.energy_scale)
            .collect();

        let xs_m2 = table
            .cross_sections
            .iter()
            .map(|xs| xs * self.xs_scale)
            .collect();

        Ok(ReactionCurve {
            label: label.to_string(),
            energies_kev,
            xs_m2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(f64, f64)]) -> RawTable {
        RawTable {
            energies: rows.iter().map(|(e, _)| *e).collect(),
            cross_sections: rows.iter().map(|(_, xs)| *xs).collect(),
        }
    }

    #[test]
    fn test_cm_energy_below_lab_energy() {
        // E_cm = E·m₂/(m₁+m₂) < E 对所有正质量成立
        let loader = XsecLoader::new(2.014, 3.016).with_scales(1.0, 1.0);
        let curve = loader.convert(&table(&[(100.0, 1.0)]), "test").unwrap();

        assert!(curve.energies_kev[0] < 100.0);
        let expected = 100.0 * 3.016 / (2.014 + 3.016);
        assert!((curve.energies_kev[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_equal_masses_halve_energy() {
        // m₁ == m₂ 时 E_cm = E/2，截面不变
        let loader = XsecLoader::new(2.014, 2.014).with_scales(1.0, 1.0);
        let curve = loader
            .convert(&table(&[(10.0, 0.1), (20.0, 0.2)]), "D + D")
            .unwrap();

        assert_eq!(curve.energies_kev, vec![5.0, 10.0]);
        assert_eq!(curve.xs_m2, vec![0.1, 0.2]);
    }

    #[test]
    fn test_scaling_scenario() {
        let loader = XsecLoader::new(2.0, 2.0).with_scales(1000.0, 1e-28);
        let curve = loader
            .convert(&table(&[(1.0, 10.0), (2.0, 20.0)]), "scenario")
            .unwrap();

        assert_eq!(curve.energies_kev, vec![500.0, 1000.0]);
        assert_eq!(curve.xs_m2, vec![1e-27, 2e-27]);
    }

    #[test]
    fn test_length_preserved() {
        let rows: Vec<(f64, f64)> = (1..=37).map(|i| (i as f64, i as f64 * 0.5)).collect();
        let loader = XsecLoader::new(1.0072, 15.9949);
        let curve = loader.convert(&table(&rows), "len").unwrap();

        assert_eq!(curve.len(), 37);
        assert_eq!(curve.energies_kev.len(), curve.xs_m2.len());
    }

    #[test]
    fn test_empty_table() {
        // 零行输入产生空曲线，不是错误
        let loader = XsecLoader::new(2.014, 3.016);
        let curve = loader.convert(&RawTable::default(), "empty").unwrap();

        assert!(curve.is_empty());
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let loader = XsecLoader::new(0.0, 3.016);
        let err = loader.convert(&table(&[(1.0, 1.0)]), "bad").unwrap_err();

        assert!(matches!(err, FusionXsError::InvalidArgument(_)));

        let loader = XsecLoader::new(2.014, -1.0);
        assert!(loader.convert(&table(&[(1.0, 1.0)]), "bad").is_err());
    }

    #[test]
    fn test_for_channel_resolves_masses() {
        let dt = crate::models::channel::find_channel("d-t").unwrap();
        let loader = XsecLoader::for_channel(dt).unwrap();

        // D + T: E_cm/E_lab = 3.016/5.030
        let curve = loader.convert(&table(&[(1.0, 1.0)]), dt.label).unwrap();
        let expected = 3.016 / (2.014 + 3.016) * 1e3;
        assert!((curve.energies_kev[0] - expected).abs() < 1e-9);
        assert!((curve.xs_m2[0] - 1e-28).abs() < 1e-40);
    }
}
