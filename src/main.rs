use clap::Parser;
use invoice_form::{cli, config, draft_file, error, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use invoice_form_common::{validate, InvoiceForm};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Fill { from } => {
            println!("🧾 invoice-form - 請求書入力\n");

            let form = match from {
                Some(path) => InvoiceForm::with_draft(draft_file::load_draft(&path)?),
                None => InvoiceForm::new(),
            };

            let form = session::run_interactive(form, &config)?;
            if let Some(summary) = form.summary() {
                println!("\n{}", summary);
            }
        }

        Commands::Summary { input } => {
            let mut form = InvoiceForm::with_draft(draft_file::load_draft(&input)?);
            form.submit()?;
            if let Some(summary) = form.summary() {
                println!("{}", summary);
            }
        }

        Commands::Check { input } => {
            let draft = draft_file::load_draft(&input)?;
            let violations = validate(&draft);
            if violations.is_empty() {
                println!("✔ OK");
            } else {
                for violation in violations.iter() {
                    println!("✗ {}", violation);
                }
                std::process::exit(2);
            }
        }

        Commands::Config { set_default_due_days, set_confirm_remove, show } => {
            let mut config = config;

            if let Some(days) = set_default_due_days {
                config.set_default_due_days(days)?;
                println!("✔ 期日の初期値を設定しました: {}日後", days);
            }

            if let Some(confirm) = set_confirm_remove {
                config.set_confirm_remove(confirm)?;
                println!("✔ 破棄前の確認: {}", if confirm { "有効" } else { "無効" });
            }

            if show {
                println!("設定:");
                println!(
                    "  期日の初期値: {}",
                    match config.default_due_days {
                        Some(days) => format!("{}日後", days),
                        None => "未設定".to_string(),
                    }
                );
                println!("  破棄前の確認: {}", if config.confirm_remove { "有効" } else { "無効" });
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
