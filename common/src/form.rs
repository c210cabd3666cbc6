//! 請求書フォームの状態機械
//!
//! 状態は2つ:
//! - Editing: 送信済みスナップショットなし。ドラフトを編集できる
//! - Submitted: スナップショットあり。ドラフトはロックされる
//!
//! 遷移: Editing --submit--> Submitted --edit/remove--> Editing

use crate::error::{Error, Result};
use crate::summary::Summary;
use crate::types::{DraftField, InvoiceDraft, ItemField, LineItem, SubmittedInvoice};
use crate::validation;
use chrono::NaiveDate;

/// フォームの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitted,
}

/// 請求書フォーム
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceForm {
    draft: InvoiceDraft,
    submitted: Option<SubmittedInvoice>,
}

impl InvoiceForm {
    /// 空のドラフトで開始
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存ドラフトから開始（Editing状態）
    pub fn with_draft(draft: InvoiceDraft) -> Self {
        Self {
            draft,
            submitted: None,
        }
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    pub fn submitted(&self) -> Option<&SubmittedInvoice> {
        self.submitted.as_ref()
    }

    pub fn state(&self) -> FormState {
        if self.submitted.is_some() {
            FormState::Submitted
        } else {
            FormState::Editing
        }
    }

    /// 送信済みの間は入力を受け付けない
    pub fn is_locked(&self) -> bool {
        self.submitted.is_some()
    }

    /// トップレベル項目を更新
    ///
    /// 期日は空文字（クリア）か `YYYY-MM-DD` のみ受け付ける。
    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        self.ensure_editing()?;

        let mut next = self.draft.clone();
        match field {
            DraftField::InvoiceNumber => next.invoice_number = value.to_string(),
            DraftField::Client => next.client = value.to_string(),
            DraftField::DueDate => next.due_date = parse_due_date(value)?,
        }
        self.draft = next;
        Ok(())
    }

    /// 明細行の項目を更新
    pub fn update_item(&mut self, index: usize, field: ItemField, value: &str) -> Result<()> {
        self.ensure_editing()?;

        let len = self.draft.items.len();
        let current = self
            .draft
            .items
            .get(index)
            .ok_or(Error::ItemOutOfRange { index, len })?;

        let mut item = current.clone();
        match field {
            ItemField::Name => item.name = value.to_string(),
            ItemField::Quantity => item.quantity = parse_number(value)?,
            ItemField::Amount => item.amount = parse_number(value)?,
        }
        self.draft.items[index] = item;
        Ok(())
    }

    /// 空の明細行を末尾に追加
    pub fn add_item(&mut self) -> Result<()> {
        self.ensure_editing()?;
        self.draft.items.push(LineItem::default());
        tracing::debug!(items = self.draft.items.len(), "line item added");
        Ok(())
    }

    /// 明細行を削除（範囲外は何もしない）
    pub fn remove_item(&mut self, index: usize) -> Result<()> {
        self.ensure_editing()?;
        self.draft.items = self
            .draft
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect();
        Ok(())
    }

    /// 入力制約を検査し、通ればスナップショットを作成
    pub fn submit(&mut self) -> Result<&SubmittedInvoice> {
        self.ensure_editing()?;

        let violations = validation::validate(&self.draft);
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "submit blocked by validation");
            return Err(Error::Validation(violations));
        }

        tracing::debug!(invoice = %self.draft.invoice_number, "invoice submitted");
        Ok(&*self.submitted.insert(SubmittedInvoice::capture(&self.draft)))
    }

    /// スナップショットをドラフトに戻して編集を再開
    pub fn edit(&mut self) -> Result<()> {
        let snapshot = self.submitted.take().ok_or(Error::NotSubmitted)?;
        self.draft = snapshot.into_draft();
        tracing::debug!("submitted invoice reopened for editing");
        Ok(())
    }

    /// スナップショットを破棄（ドラフトは送信時のまま残る）
    pub fn remove(&mut self) -> Result<()> {
        self.submitted.take().ok_or(Error::NotSubmitted)?;
        tracing::debug!("submitted invoice discarded");
        Ok(())
    }

    /// ドラフト明細の合計金額
    ///
    /// 送信済み表示の合計もドラフトから計算する（ロック中は一致する）。
    pub fn total(&self) -> f64 {
        self.draft.total()
    }

    /// 送信済み表示用のサマリ
    pub fn summary(&self) -> Option<Summary> {
        self.submitted
            .as_ref()
            .map(|snapshot| Summary::new(snapshot.invoice(), self.total()))
    }

    fn ensure_editing(&self) -> Result<()> {
        if self.is_locked() {
            tracing::warn!("draft mutation rejected while submitted");
            return Err(Error::Locked);
        }
        Ok(())
    }
}

/// 期日入力の解釈（空文字はクリア）
pub fn parse_due_date(value: &str) -> Result<Option<NaiveDate>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

/// 数値入力の解釈（空文字は0）
pub fn parse_number(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(Error::InvalidNumber(value.to_string())),
    }
}
