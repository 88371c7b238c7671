//! # export 子命令 CLI 定义
//!
//! 导出归一化截面数据的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 数据输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV data file (energy_kev, xs_m2)
    Csv,
    /// XY data file (same two-column shape the loader reads)
    Xy,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Xy => write!(f, "xy"),
        }
    }
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory containing the reaction channel data files
    #[arg(default_value = ".")]
    pub data_dir: PathBuf,

    /// Output directory for the exported files
    #[arg(short, long, default_value = "xsec_export")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Comma-separated channel ids to export, or 'all' (see `fusionxs list`)
    #[arg(short, long, default_value = "all")]
    pub channels: String,
}
