//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `plot`: 绘制截面比较图
//! - `export`: 导出归一化截面数据
//! - `list`: 列出内置反应道与粒子质量表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: plot, export, list

pub mod export;
pub mod list;
pub mod plot;

use clap::{Parser, Subcommand};

/// fusionxs - 聚变反应截面比较工具
#[derive(Parser)]
#[command(name = "fusionxs")]
#[command(version)]
#[command(about = "Fusion reaction cross-section comparison and visualization tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Render a log-log comparison plot of reaction cross-sections
    Plot(plot::PlotArgs),

    /// Export normalized cross-section tables (keV, m^2) to data files
    Export(export::ExportArgs),

    /// List built-in reaction channels and particle masses
    List(list::ListArgs),
}
