//! 請求書入力フォーム（ターミナル版）

pub mod cli;
pub mod config;
pub mod draft_file;
pub mod error;
pub mod session;
