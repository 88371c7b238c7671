//! # fusionxs - 聚变反应截面比较工具
//!
//! 读取各反应道的 (能量, 截面) 数据表，归一化到质心系 keV / m²，
//! 绘制带温度副轴的双对数比较图。
//!
//! ## 子命令
//! - `plot`   - 绘制截面比较图 (PNG/SVG)
//! - `export` - 导出归一化数据 (CSV/XY)
//! - `list`   - 列出内置反应道与粒子质量表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (数据表解析器)
//!   │     ├── xsec/      (归一化、绘图、导出)
//!   │     └── models/    (反应道数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;
mod xsec;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
