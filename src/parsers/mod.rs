//! # 解析器模块
//!
//! 提供截面数据表的文本解析器。
//!
//! ## 依赖关系
//! - 被 `xsec/loader.rs` 使用
//! - 子模块: table

pub mod table;

pub use table::{parse_xsec_file, RawTable};
