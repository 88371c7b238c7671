//! # 两列截面数据表解析器
//!
//! 解析空白分隔的两列数值文本（第一列能量，第二列截面），
//! `#` 起始的内容为注释（整行或行尾）。
//!
//! ## 格式约定
//! - 能量按文件顺序排列，约定升序（解析器不做检查）
//! - 每个数据行必须恰好包含两个数值，否则解析失败
//!
//! ## 依赖关系
//! - 被 `xsec/loader.rs` 调用
//! - 使用 `error.rs` 的 ParseError

use crate::error::{FusionXsError, Result};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 原始数据表（源文件单位）
///
/// 两个序列等长，按下标一一对应。
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// 能量（源单位，实验室系）
    pub energies: Vec<f64>,
    /// 截面（源单位）
    pub cross_sections: Vec<f64>,
}

/// 解析截面数据文件
pub fn parse_xsec_file(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(FusionXsError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| FusionXsError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xsec(BufReader::new(file), &path.display().to_string())
}

/// 从任意读取器解析两列数据表
///
/// `source` 仅用于错误消息中标识数据来源。
pub fn parse_xsec<R: BufRead>(reader: R, source: &str) -> Result<RawTable> {
    let mut table = RawTable::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| FusionXsError::FileReadError {
            path: source.to_string(),
            source: e,
        })?;

        // 去掉 '#' 之后的注释（整行或行尾）
        let data = match line.find('#') {
            Some(pos) => &line[..pos],
            None => &line[..],
        };

        let data = data.trim();
        if data.is_empty() {
            continue;
        }

        let fields: Vec<&str> = data.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(parse_error(
                source,
                lineno + 1,
                &format!("expected 2 columns, found {}", fields.len()),
            ));
        }

        let energy: f64 = fields[0]
            .parse()
            .map_err(|_| parse_error(source, lineno + 1, &format!("bad number '{}'", fields[0])))?;
        let xs: f64 = fields[1]
            .parse()
            .map_err(|_| parse_error(source, lineno + 1, &format!("bad number '{}'", fields[1])))?;

        table.energies.push(energy);
        table.cross_sections.push(xs);
    }

    Ok(table)
}

/// 构造带行号的解析错误
fn parse_error(source: &str, lineno: usize, reason: &str) -> FusionXsError {
    FusionXsError::ParseError {
        format: "cross-section table".to_string(),
        path: source.to_string(),
        reason: format!("line {}: {}", lineno, reason),
    }
}
