//! # 截面比较图生成
//!
//! 使用 `plotters` 库生成双对数坐标的截面比较图。
//!
//! ## 功能
//! - 每个反应道一条曲线，共享坐标轴与图例
//! - 顶部温度副轴：T = E/kB（keV -> K）
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/channel.rs` 的 ReactionCurve 结构
//! - 使用 `xsec/constants.rs` 的温度换算因子
//! - 使用 `plotters` 渲染图表

use crate::error::{FusionXsError, Result};
use crate::models::ReactionCurve;
use crate::xsec::constants::kev_to_kelvin;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::combinators::LogCoord;
use plotters::prelude::*;
use std::path::Path;

/// 曲线颜色表（按反应道顺序循环使用）
const CURVE_COLORS: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// 比较图配置
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// 图表标题
    pub title: String,
    /// 图像宽度（像素/点）
    pub width: u32,
    /// 图像高度（像素/点）
    pub height: u32,
    /// 能量轴下限 (keV)
    pub e_min: f64,
    /// 能量轴上限 (keV)
    pub e_max: f64,
    /// 截面轴下限 (m²)
    pub xs_min: f64,
    /// 截面轴上限 (m²)
    pub xs_max: f64,
    /// 是否绘制顶部温度副轴
    pub temp_axis: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Fusion reaction cross-sections".to_string(),
            width: 1200,
            height: 800,
            e_min: 1.0,
            e_max: 1e9,
            xs_min: 1e-32,
            xs_max: 1e-27,
            temp_axis: true,
        }
    }
}

/// 生成截面比较图
pub fn generate_comparison_plot(
    curves: &[ReactionCurve],
    output_path: &Path,
    config: &PlotConfig,
    use_svg: bool,
) -> Result<()> {
    // 对数坐标要求正的有限范围
    if !(config.e_min > 0.0 && config.e_max > config.e_min) {
        return Err(FusionXsError::InvalidArgument(format!(
            "energy range must satisfy 0 < min < max (got {} - {})",
            config.e_min, config.e_max
        )));
    }
    if !(config.xs_min > 0.0 && config.xs_max > config.xs_min) {
        return Err(FusionXsError::InvalidArgument(format!(
            "cross-section range must satisfy 0 < min < max (got {} - {})",
            config.xs_min, config.xs_max
        )));
    }

    if use_svg {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_comparison_chart(&root, curves, config)?;
        root.present()
            .map_err(|e| FusionXsError::Other(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_comparison_chart(&root, curves, config)?;
        root.present()
            .map_err(|e| FusionXsError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制比较图的核心逻辑
fn draw_comparison_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curves: &[ReactionCurve],
    config: &PlotConfig,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| FusionXsError::Other(format!("{:?}", e)))?;

    let mut builder = ChartBuilder::on(root);
    builder
        .caption(&config.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70);

    if config.temp_axis {
        builder.top_x_label_area_size(50);

        let t_min = kev_to_kelvin(config.e_min);
        let t_max = kev_to_kelvin(config.e_max);

        let mut chart = builder
            .build_cartesian_2d(
                (config.e_min..config.e_max).log_scale(),
                (config.xs_min..config.xs_max).log_scale(),
            )
            .map_err(|e| FusionXsError::Other(format!("{:?}", e)))?
            .set_secondary_coord(
                (t_min..t_max).log_scale(),
                (config.xs_min..config.xs_max).log_scale(),
            );

        draw_mesh(&mut *chart)?;

        chart
            .configure_secondary_axes()
            .x_desc("T [K]")
            .x_label_formatter(&|v| format!("{:.1e}", v))
            .label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 18))
            .draw()
            .map_err(|e| FusionXsError::Other(format!("{:?}", e)))?;

        draw_curves(&mut *chart, curves)?;
        draw_legend(&mut *chart)?;
    } else {
        let mut chart = builder
            .build_cartesian_2d(
                (config.e_min..config.e_max).log_scale(),
                (config.xs_min..config.xs_max).log_scale(),
            )
            .map_err(|e| FusionXsError::Other(format!("{:?}", e)))?;

        draw_mesh(&mut chart)?;
        draw_curves(&mut chart, curves)?;
        draw_legend(&mut chart)?;
    }

    Ok(())
}

/// 绘制网格与主轴标签
fn draw_mesh<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<LogCoord<f64>, LogCoord<f64>>>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    chart
        .configure_mesh()
        .x_desc("E (Center of Mass) [keV]")
        .y_desc("σ [m²]")
        .x_label_formatter(&|v| format!("{:.0e}", v))
        .y_label_formatter(&|v| format!("{:.0e}", v))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| FusionXsError::Other(format!("{:?}", e)))?;

    Ok(())
}

/// 绘制全部截面曲线
fn draw_curves<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<LogCoord<f64>, LogCoord<f64>>>,
    curves: &[ReactionCurve],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    for (i, curve) in curves.iter().enumerate() {
        // 对数坐标下丢弃非正值数据点
        let points: Vec<(f64, f64)> = curve
            .points()
            .filter(|(e, xs)| *e > 0.0 && *xs > 0.0)
            .collect();

        if points.is_empty() {
            continue;
        }

        let color = CURVE_COLORS[i % CURVE_COLORS.len()];

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| FusionXsError::Other(format!("{:?}", e)))?
            .label(curve.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    Ok(())
}

/// 绘制图例
fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<LogCoord<f64>, LogCoord<f64>>>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| FusionXsError::Other(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ranges_rejected() {
        let curves: Vec<ReactionCurve> = Vec::new();
        let path = Path::new("unused.png");

        let mut config = PlotConfig::default();
        config.e_min = 0.0;
        assert!(generate_comparison_plot(&curves, path, &config, false).is_err());

        let mut config = PlotConfig::default();
        config.xs_max = config.xs_min;
        assert!(generate_comparison_plot(&curves, path, &config, false).is_err());
    }
}
