use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "invoice-form")]
#[command(about = "請求書入力フォーム（明細・合計・送信済みサマリ）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話的に請求書を入力
    Fill {
        /// 初期値として読み込むドラフトJSON
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// ドラフトJSONを送信してサマリを表示
    Summary {
        /// ドラフトJSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// ドラフトJSONの入力制約を検査
    Check {
        /// ドラフトJSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 期日の初期値（今日からの日数）を設定
        #[arg(long)]
        set_default_due_days: Option<u32>,

        /// 破棄前の確認を有効/無効にする
        #[arg(long)]
        set_confirm_remove: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fill_with_from() {
        let cli = Cli::try_parse_from(["invoice-form", "fill", "--from", "draft.json"]).unwrap();
        match cli.command {
            Commands::Fill { from } => assert_eq!(from, Some(PathBuf::from("draft.json"))),
            _ => panic!("expected fill"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_summary_requires_input() {
        assert!(Cli::try_parse_from(["invoice-form", "summary"]).is_err());
        let cli = Cli::try_parse_from(["invoice-form", "-v", "summary", "a.json"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_config_flags() {
        let cli = Cli::try_parse_from([
            "invoice-form",
            "config",
            "--set-default-due-days",
            "30",
            "--set-confirm-remove",
            "false",
        ])
        .unwrap();
        match cli.command {
            Commands::Config { set_default_due_days, set_confirm_remove, show } => {
                assert_eq!(set_default_due_days, Some(30));
                assert_eq!(set_confirm_remove, Some(false));
                assert!(!show);
            }
            _ => panic!("expected config"),
        }
    }
}
