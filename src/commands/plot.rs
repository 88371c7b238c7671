//! # plot 子命令实现
//!
//! 读取所选反应道的数据文件，归一化后绘制双对数比较图。
//!
//! ## 功能
//! - 每个反应道独立读取，互不依赖
//! - 任一文件缺失或无法解析立即中止
//! - 输出高质量图像 (PNG/SVG)
//! - 绘制完成后打印各反应道摘要表
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 PlotArgs
//! - 使用 `xsec/` 模块进行归一化与绘图

use crate::cli::plot::{PlotArgs, PlotFormat};
use crate::error::Result;
use crate::models::ReactionCurve;
use crate::utils::output;
use crate::xsec::plot::PlotConfig;
use crate::xsec::{self, XsecLoader};

use std::path::Path;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Fusion Cross-Section Comparison");

    let channels = super::select_channels(&args.channels)?;

    output::print_info(&format!("Data directory: '{}'", args.data_dir.display()));

    // 逐个反应道读取并归一化（一次失败即中止）
    let mut curves = Vec::with_capacity(channels.len());
    for channel in &channels {
        let path = args.data_dir.join(channel.filename);
        let curve = XsecLoader::for_channel(channel)?.load(&path, channel.label)?;

        if curve.is_empty() {
            output::print_warning(&format!(
                "{}: '{}' contains no data rows",
                channel.id,
                path.display()
            ));
        } else {
            output::print_success(&format!(
                "Loaded {}: {} points from '{}'",
                channel.id,
                curve.len(),
                path.display()
            ));
        }

        curves.push(curve);
    }

    // 确定输出格式
    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    output::print_info(&format!("Output format: {}", format));

    let mut config = PlotConfig::default();
    config.width = args.width;
    config.height = args.height;
    config.e_min = args.e_min;
    config.e_max = args.e_max;
    config.xs_min = args.xs_min;
    config.xs_max = args.xs_max;
    config.temp_axis = !args.no_temp_axis;
    if let Some(title) = args.title {
        config.title = title;
    }

    xsec::plot::generate_comparison_plot(&curves, &args.output, &config, format == PlotFormat::Svg)?;

    print_curve_table(&curves);
    output::print_success(&format!("Plot saved to '{}'", args.output.display()));

    Ok(())
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> PlotFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => PlotFormat::Svg,
        _ => PlotFormat::Png,
    }
}

/// 打印反应道摘要表
fn print_curve_table(curves: &[ReactionCurve]) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct CurveRow {
        #[tabled(rename = "Channel")]
        label: String,
        #[tabled(rename = "Points")]
        points: usize,
        #[tabled(rename = "E_cm range (keV)")]
        range: String,
        #[tabled(rename = "Peak σ (m²)")]
        peak: String,
    }

    let rows: Vec<CurveRow> = curves
        .iter()
        .map(|c| CurveRow {
            label: c.label.clone(),
            points: c.len(),
            range: match c.energy_range() {
                Some((lo, hi)) => format!("{:.2e} - {:.2e}", lo, hi),
                None => "-".to_string(),
            },
            peak: match c.peak() {
                Some((e, xs)) => format!("{:.2e} @ {:.2e} keV", xs, e),
                None => "-".to_string(),
            },
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("Loaded {} Channels", rows.len()));
        let table = Table::new(&rows);
        println!("{}", table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_format() {
        assert_eq!(
            guess_format_from_extension(Path::new("out.svg")),
            PlotFormat::Svg
        );
        assert_eq!(
            guess_format_from_extension(Path::new("out.SVG")),
            PlotFormat::Svg
        );
        assert_eq!(
            guess_format_from_extension(Path::new("out.png")),
            PlotFormat::Png
        );
        assert_eq!(
            guess_format_from_extension(Path::new("figure")),
            PlotFormat::Png
        );
    }
}
