//! # 数据模型模块
//!
//! 定义反应道注册表和归一化截面曲线数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `xsec/`, `commands/` 使用
//! - 子模块: channel

pub mod channel;

pub use channel::{ReactionChannel, ReactionCurve, CHANNELS};
