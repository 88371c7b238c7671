//! # list 子命令 CLI 定义
//!
//! 列出内置反应道注册表的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::Args;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Also print the particle mass table (atomic mass units)
    #[arg(long, default_value_t = false)]
    pub masses: bool,
}
