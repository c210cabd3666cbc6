//! エラー型定義

use crate::validation::Violations;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(Violations),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Item index {index} out of range (items: {len})")]
    ItemOutOfRange { index: usize, len: usize },

    #[error("Invoice is submitted; edit or remove it before changing the draft")]
    Locked,

    #[error("No submitted invoice")]
    NotSubmitted,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
