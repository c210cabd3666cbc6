use crate::error::{InvoiceFormError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DUE_DAYS_ENV: &str = "INVOICE_FORM_DEFAULT_DUE_DAYS";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 期日入力の初期値（今日からの日数）
    pub default_due_days: Option<u32>,
    /// 送信済み請求書を破棄する前に確認する
    pub confirm_remove: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_due_days: None,
            confirm_remove: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| InvoiceFormError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("invoice-form").join("config.json"))
    }

    /// 期日の初期日数（環境変数を優先）
    pub fn due_days(&self) -> Result<Option<u32>> {
        match std::env::var(DUE_DAYS_ENV) {
            Ok(value) => parse_due_days(&value).map(Some),
            Err(_) => Ok(self.default_due_days),
        }
    }

    pub fn set_default_due_days(&mut self, days: u32) -> Result<()> {
        self.default_due_days = Some(days);
        self.save()
    }

    pub fn set_confirm_remove(&mut self, confirm: bool) -> Result<()> {
        self.confirm_remove = confirm;
        self.save()
    }
}

fn parse_due_days(value: &str) -> Result<u32> {
    value.trim().parse::<u32>().map_err(|_| {
        InvoiceFormError::Config(format!("{} must be a non-negative integer: {}", DUE_DAYS_ENV, value))
    })
}
