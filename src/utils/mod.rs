//! # 工具模块
//!
//! 通用工具函数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用
//! - 子模块: output

pub mod output;
