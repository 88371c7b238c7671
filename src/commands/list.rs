//! # list 子命令实现
//!
//! 打印内置反应道注册表，可选打印粒子质量表。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的 ListArgs
//! - 使用 `models/channel.rs` 的注册表
//! - 使用 `xsec/masses.rs` 的质量表

use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::models::CHANNELS;
use crate::utils::output;
use crate::xsec::masses;

use tabled::{Table, Tabled};

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    print_channel_table();

    if args.masses {
        print_mass_table();
    }

    Ok(())
}

/// 打印反应道注册表
fn print_channel_table() {
    #[derive(Tabled)]
    struct ChannelRow {
        #[tabled(rename = "Id")]
        id: &'static str,
        #[tabled(rename = "Reaction")]
        label: &'static str,
        #[tabled(rename = "Data file")]
        filename: &'static str,
        #[tabled(rename = "Collider")]
        collider: &'static str,
        #[tabled(rename = "Target")]
        target: &'static str,
        #[tabled(rename = "E → keV")]
        energy_scale: String,
        #[tabled(rename = "σ → m²")]
        xs_scale: String,
    }

    let rows: Vec<ChannelRow> = CHANNELS
        .iter()
        .map(|c| ChannelRow {
            id: c.id,
            label: c.label,
            filename: c.filename,
            collider: c.collider,
            target: c.target,
            energy_scale: format!("×{:.0e}", c.energy_scale),
            xs_scale: format!("×{:.0e}", c.xs_scale),
        })
        .collect();

    output::print_header(&format!("{} Built-in Reaction Channels", rows.len()));
    println!("{}", Table::new(&rows));
}

/// 打印粒子质量表
fn print_mass_table() {
    #[derive(Tabled)]
    struct MassRow {
        #[tabled(rename = "Particle")]
        name: &'static str,
        #[tabled(rename = "Mass (u)")]
        mass: String,
    }

    let rows: Vec<MassRow> = masses::PARTICLES
        .iter()
        .map(|&(name, mass)| MassRow {
            name,
            mass: format!("{:.4}", mass),
        })
        .collect();

    output::print_header("Particle Masses");
    println!("{}", Table::new(&rows));
}
