//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `xsec/`, `utils/`
//! - 子模块: plot, export, list

pub mod export;
pub mod list;
pub mod plot;

use crate::cli::Commands;
use crate::error::{FusionXsError, Result};
use crate::models::{channel, ReactionChannel, CHANNELS};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Plot(args) => plot::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::List(args) => list::execute(args),
    }
}

/// 解析 --channels 参数（逗号分隔的标识符列表，或 'all'）
fn select_channels(arg: &str) -> Result<Vec<&'static ReactionChannel>> {
    if arg.trim().eq_ignore_ascii_case("all") {
        return Ok(CHANNELS.iter().collect());
    }

    arg.split(',')
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(|id| {
            channel::find_channel(id).ok_or_else(|| FusionXsError::UnknownChannel(id.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_channels() {
        let channels = select_channels("all").unwrap();
        assert_eq!(channels.len(), CHANNELS.len());

        let channels = select_channels(" ALL ").unwrap();
        assert_eq!(channels.len(), CHANNELS.len());
    }

    #[test]
    fn test_select_subset() {
        let channels = select_channels("d-t, d-he3").unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].id, "d-t");
        assert_eq!(channels[1].id, "d-he3");
    }

    #[test]
    fn test_select_unknown_channel() {
        let err = select_channels("d-t,p-b11").unwrap_err();
        assert!(matches!(err, FusionXsError::UnknownChannel(id) if id == "p-b11"));
    }
}
