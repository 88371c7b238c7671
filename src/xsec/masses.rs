//! # 粒子质量数据库
//!
//! 反应物质量（原子质量单位 u），仅作运动学换算因子使用。
//! 启动时静态初始化，不可变。
//!
//! ## 依赖关系
//! - 被 `xsec/loader.rs` 和 `commands/list.rs` 使用

/// 已知粒子及其质量 (u)
pub const PARTICLES: &[(&str, f64)] = &[
    ("p", 1.0072),
    ("D", 2.014),
    ("T", 3.016),
    ("3He", 3.016),
    ("O16", 15.9949),
    ("O18", 17.999),
    ("17F", 17.0020),
];

/// 查找粒子质量 (u)
pub fn particle_mass(name: &str) -> Option<f64> {
    match name.to_lowercase().as_str() {
        "p" | "h1" | "proton" => Some(1.0072),
        "d" | "h2" | "deuteron" => Some(2.014),
        "t" | "h3" | "triton" => Some(3.016),
        "3he" | "he3" => Some(3.016),
        "o16" | "16o" => Some(15.9949),
        "o18" | "18o" => Some(17.999),
        "17f" | "f17" => Some(17.0020),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_mass_lookup() {
        assert_eq!(particle_mass("D"), Some(2.014));
        assert_eq!(particle_mass("d"), Some(2.014));
        assert_eq!(particle_mass("3He"), Some(3.016));
        assert_eq!(particle_mass("he3"), Some(3.016));
        assert_eq!(particle_mass("O16"), Some(15.9949));
        assert_eq!(particle_mass("X99"), None);
    }

    #[test]
    fn test_registry_names_resolve() {
        // 注册表中的每个粒子名都能在质量表中找到
        for (name, mass) in PARTICLES {
            assert_eq!(particle_mass(name), Some(*mass), "particle {}", name);
        }
    }
}
