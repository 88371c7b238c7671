//! # plot 子命令 CLI 定义
//!
//! 绘制截面比较图的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotFormat {
    /// PNG image (publication quality)
    Png,
    /// SVG vector image
    Svg,
}

impl std::fmt::Display for PlotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotFormat::Png => write!(f, "png"),
            PlotFormat::Svg => write!(f, "svg"),
        }
    }
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Directory containing the reaction channel data files
    #[arg(default_value = ".")]
    pub data_dir: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "fusion_xsecs.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotFormat>,

    /// Comma-separated channel ids to plot, or 'all' (see `fusionxs list`)
    #[arg(short, long, default_value = "all")]
    pub channels: String,

    /// Lower bound of the energy axis (keV, center of mass)
    #[arg(long, default_value_t = 1.0)]
    pub e_min: f64,

    /// Upper bound of the energy axis (keV, center of mass)
    #[arg(long, default_value_t = 1e9)]
    pub e_max: f64,

    /// Lower bound of the cross-section axis (m^2)
    #[arg(long, default_value_t = 1e-32)]
    pub xs_min: f64,

    /// Upper bound of the cross-section axis (m^2)
    #[arg(long, default_value_t = 1e-27)]
    pub xs_max: f64,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,

    /// Suppress the secondary temperature axis (T = E/kB)
    #[arg(long, default_value_t = false)]
    pub no_temp_axis: bool,
}
