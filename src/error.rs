use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceFormError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] invoice_form_common::Error),
}

impl From<dialoguer::Error> for InvoiceFormError {
    fn from(e: dialoguer::Error) -> Self {
        InvoiceFormError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InvoiceFormError>;
