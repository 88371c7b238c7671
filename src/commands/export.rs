//! # export 子命令实现
//!
//! 读取所选反应道的数据文件，归一化后导出为 CSV/XY 数据文件，
//! 每个反应道一个文件。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的 ExportArgs
//! - 使用 `xsec/loader.rs` 归一化
//! - 使用 `xsec/export.rs` 写出数据

use crate::cli::export::{ExportArgs, ExportFormat};
use crate::error::{FusionXsError, Result};
use crate::utils::output;
use crate::xsec::{self, XsecLoader};

use std::fs;

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Cross-Section Data Export");

    let channels = super::select_channels(&args.channels)?;

    output::print_info(&format!("Data directory: '{}'", args.data_dir.display()));
    output::print_info(&format!("Output format: {}", args.format));

    // 确保输出目录存在
    fs::create_dir_all(&args.output).map_err(|e| FusionXsError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let ext = match args.format {
        ExportFormat::Csv => "csv",
        ExportFormat::Xy => "xy",
    };

    for channel in &channels {
        let input = args.data_dir.join(channel.filename);
        let curve = XsecLoader::for_channel(channel)?.load(&input, channel.label)?;

        let output_file = args.output.join(format!("{}_xsec.{}", channel.id, ext));

        match args.format {
            ExportFormat::Csv => xsec::export::to_csv(&curve, &output_file)?,
            ExportFormat::Xy => xsec::export::to_xy(&curve, &output_file)?,
        }

        output::print_conversion(
            &input.display().to_string(),
            &output_file.display().to_string(),
        );
    }

    output::print_separator();
    output::print_success(&format!(
        "Exported {} channels to '{}'",
        channels.len(),
        args.output.display()
    ));

    Ok(())
}
