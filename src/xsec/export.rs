//! # 截面数据导出
//!
//! 导出归一化截面曲线到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: energy_kev, xs_m2 两列
//! - XY: `#` 注释头 + 空白分隔两列（与解析器读取的格式一致）
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 调用
//! - 使用 `models/channel.rs` 的 ReactionCurve 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{FusionXsError, Result};
use crate::models::ReactionCurve;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 导出曲线为 CSV 格式
pub fn to_csv(curve: &ReactionCurve, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(FusionXsError::CsvError)?;

    wtr.write_record(["energy_kev", "xs_m2"])
        .map_err(FusionXsError::CsvError)?;

    for (energy, xs) in curve.points() {
        wtr.write_record([format!("{:.6e}", energy), format!("{:.6e}", xs)])
            .map_err(FusionXsError::CsvError)?;
    }

    wtr.flush().map_err(|e| FusionXsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出曲线为 XY 格式
pub fn to_xy(curve: &ReactionCurve, output_path: &Path) -> Result<()> {
    let mut file = File::create(output_path).map_err(|e| FusionXsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_xy(&mut file, curve).map_err(|e| FusionXsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 写入 XY 内容
fn write_xy<W: Write>(out: &mut W, curve: &ReactionCurve) -> std::io::Result<()> {
    writeln!(out, "# Reaction: {}", curve.label)?;
    writeln!(out, "# Columns: E_cm (keV), sigma (m^2)")?;
    writeln!(out, "#")?;

    for (energy, xs) in curve.points() {
        writeln!(out, "{:.6e}\t{:.6e}", energy, xs)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::table::parse_xsec;
    use std::io::Cursor;

    fn sample_curve() -> ReactionCurve {
        ReactionCurve {
            label: "D + T → α + n".to_string(),
            energies_kev: vec![500.0, 1000.0],
            xs_m2: vec![1e-27, 2e-27],
        }
    }

    #[test]
    fn test_xy_format() {
        let mut buf = Vec::new();
        write_xy(&mut buf, &sample_curve()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("# Reaction: D + T"));
        assert!(text.contains("5.000000e2\t1.000000e-27"));
        assert!(text.contains("1.000000e3\t2.000000e-27"));
    }

    #[test]
    fn test_xy_round_trips_through_parser() {
        // XY 输出应能被解析器原样读回
        let mut buf = Vec::new();
        write_xy(&mut buf, &sample_curve()).unwrap();

        let table = parse_xsec(Cursor::new(buf), "exported").unwrap();
        assert_eq!(table.energies, vec![500.0, 1000.0]);
        assert_eq!(table.cross_sections, vec![1e-27, 2e-27]);
    }

    #[test]
    fn test_xy_empty_curve() {
        let curve = ReactionCurve {
            label: "empty".to_string(),
            energies_kev: Vec::new(),
            xs_m2: Vec::new(),
        };

        let mut buf = Vec::new();
        write_xy(&mut buf, &curve).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // 只有注释头，没有数据行
        assert_eq!(text.lines().count(), 3);
    }
}
