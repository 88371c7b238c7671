//! # 截面处理模块
//!
//! 提供聚变反应截面的读取、归一化、绘图与导出功能。
//!
//! ## 子模块
//! - `constants`: 物理常数
//! - `masses`: 粒子质量数据库
//! - `loader`: 截面读取与单位/参考系归一化
//! - `plot`: 对数坐标比较图生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/table.rs` 和 `models/channel.rs`

pub mod constants;
pub mod export;
pub mod loader;
pub mod masses;
pub mod plot;

pub use loader::XsecLoader;
