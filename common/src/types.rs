//! 請求書フォームの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - LineItem: 明細1行
//! - InvoiceDraft: 編集中の請求書
//! - SubmittedInvoice: 送信時点のスナップショット

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 明細行
///
/// 位置以外の識別子は持たない（構造的等価）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    pub name: String,
    pub quantity: f64,
    pub amount: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: f64, amount: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            amount,
        }
    }

    /// 数量 × 単価
    pub fn line_total(&self) -> f64 {
        self.quantity * self.amount
    }
}

/// 編集中の請求書
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub client: String,
    pub items: Vec<LineItem>,
    pub due_date: Option<NaiveDate>,
}

impl InvoiceDraft {
    /// 明細の合計金額
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

/// 送信済み請求書
///
/// 送信時のドラフトの値コピー。以後のドラフト変更とは独立している。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedInvoice(InvoiceDraft);

impl SubmittedInvoice {
    pub(crate) fn capture(draft: &InvoiceDraft) -> Self {
        Self(draft.clone())
    }

    pub fn invoice(&self) -> &InvoiceDraft {
        &self.0
    }

    pub fn into_draft(self) -> InvoiceDraft {
        self.0
    }
}

/// ドラフトのトップレベル項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    InvoiceNumber,
    Client,
    DueDate,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::InvoiceNumber => "invoiceNumber",
            DraftField::Client => "client",
            DraftField::DueDate => "dueDate",
        }
    }
}

/// 明細行の項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Quantity,
    Amount,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Quantity => "quantity",
            ItemField::Amount => "amount",
        }
    }
}
