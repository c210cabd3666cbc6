//! 請求書ドラフトJSONの読み込み
//!
//! 読み込み専用。フォームの状態はファイルに書き戻さない。

use crate::error::{InvoiceFormError, Result};
use invoice_form_common::InvoiceDraft;
use std::path::Path;

pub fn load_draft(path: &Path) -> Result<InvoiceDraft> {
    if !path.exists() {
        return Err(InvoiceFormError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let draft: InvoiceDraft = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), items = draft.items.len(), "draft loaded");
    Ok(draft)
}
