//! # 反应道数据模型
//!
//! 定义聚变反应道注册表和归一化后的截面曲线。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `xsec/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 反应道定义（静态注册表条目）
///
/// 每个反应道对应一个数据文件，文件中的能量/截面单位由
/// `energy_scale` / `xs_scale` 归一化到 keV / m²。
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionChannel {
    /// 反应道标识符（命令行选择用）
    pub id: &'static str,
    /// 显示标签（图例、表格）
    pub label: &'static str,
    /// 约定数据文件名（相对于数据目录）
    pub filename: &'static str,
    /// 入射粒子名称
    pub collider: &'static str,
    /// 靶粒子名称
    pub target: &'static str,
    /// 能量单位换算因子（源单位 -> keV）
    pub energy_scale: f64,
    /// 截面单位换算因子（源单位 -> m²）
    pub xs_scale: f64,
}

/// 内置反应道注册表
///
/// D 系列数据来自 ENDF（能量 eV，截面 barn）；
/// O+p 数据来自 TENDL（能量 MeV，截面 mb）。
pub const CHANNELS: &[ReactionChannel] = &[
    ReactionChannel {
        id: "d-t",
        label: "D + T → α + n",
        filename: "D_T_-_a_n.txt",
        collider: "D",
        target: "T",
        energy_scale: 1e3,
        xs_scale: 1e-28,
    },
    ReactionChannel {
        id: "d-d-t",
        label: "D + D → T + p",
        filename: "D_D_-_T_p.txt",
        collider: "D",
        target: "D",
        energy_scale: 1e3,
        xs_scale: 1e-28,
    },
    ReactionChannel {
        id: "d-d-he3",
        label: "D + D → ³He + n",
        filename: "D_D_-_3He_n.txt",
        collider: "D",
        target: "D",
        energy_scale: 1e3,
        xs_scale: 1e-28,
    },
    ReactionChannel {
        id: "d-he3",
        label: "D + ³He → α + p",
        filename: "D_3He_-_4He_p.txt",
        collider: "D",
        target: "3He",
        energy_scale: 1e3,
        xs_scale: 1e-28,
    },
    ReactionChannel {
        id: "o16-p",
        label: "¹⁶O + p → ¹⁷F",
        filename: "O16_p-17F.txt",
        collider: "O16",
        target: "p",
        energy_scale: 1e6,
        xs_scale: 1e-31,
    },
    ReactionChannel {
        id: "o18-p",
        label: "¹⁸O + p → ¹⁹F",
        filename: "O18_p-19F.txt",
        collider: "O18",
        target: "p",
        energy_scale: 1e6,
        xs_scale: 1e-31,
    },
];

/// 按标识符查找反应道
pub fn find_channel(id: &str) -> Option<&'static ReactionChannel> {
    CHANNELS.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

/// 归一化截面曲线
///
/// 能量为质心系 keV，截面为 m²。两个序列等长，按下标一一对应；
/// 能量沿文件顺序排列（约定升序，不做检查）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionCurve {
    /// 反应道显示标签
    pub label: String,
    /// 质心系能量 (keV)
    pub energies_kev: Vec<f64>,
    /// 截面 (m²)
    pub xs_m2: Vec<f64>,
}

impl ReactionCurve {
    /// 数据点数量
    pub fn len(&self) -> usize {
        self.energies_kev.len()
    }

    /// 是否为空曲线
    pub fn is_empty(&self) -> bool {
        self.energies_kev.is_empty()
    }

    /// 能量范围 (keV)
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        let min = self
            .energies_kev
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max = self
            .energies_kev
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// 峰值截面及其能量 (keV, m²)
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.energies_kev
            .iter()
            .zip(self.xs_m2.iter())
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(e, xs)| (*e, *xs))
    }

    /// 逐点迭代 (能量, 截面)
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies_kev
            .iter()
            .copied()
            .zip(self.xs_m2.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_channel() {
        let dt = find_channel("d-t").expect("d-t should exist");
        assert_eq!(dt.collider, "D");
        assert_eq!(dt.target, "T");
        assert_eq!(dt.filename, "D_T_-_a_n.txt");

        // 大小写不敏感
        assert!(find_channel("D-T").is_some());
        assert!(find_channel("d-x").is_none());
    }

    #[test]
    fn test_registry_scales() {
        // ENDF 系列: eV/barn, TENDL 系列: MeV/mb
        for ch in CHANNELS {
            if ch.id.starts_with("o1") {
                assert_eq!(ch.energy_scale, 1e6);
                assert_eq!(ch.xs_scale, 1e-31);
            } else {
                assert_eq!(ch.energy_scale, 1e3);
                assert_eq!(ch.xs_scale, 1e-28);
            }
        }
    }

    #[test]
    fn test_curve_stats() {
        let curve = ReactionCurve {
            label: "test".to_string(),
            energies_kev: vec![10.0, 100.0, 1000.0],
            xs_m2: vec![1e-30, 5e-28, 2e-29],
        };

        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());
        assert_eq!(curve.energy_range(), Some((10.0, 1000.0)));
        assert_eq!(curve.peak(), Some((100.0, 5e-28)));
    }

    #[test]
    fn test_empty_curve() {
        let curve = ReactionCurve {
            label: "empty".to_string(),
            energies_kev: Vec::new(),
            xs_m2: Vec::new(),
        };

        assert!(curve.is_empty());
        assert_eq!(curve.energy_range(), None);
        assert_eq!(curve.peak(), None);
    }
}
