//! 入力制約チェック
//!
//! ブラウザのネイティブ制約（required / min）と同じ規則を明示的に検査する。
//! どのフロントエンドでも同じ条件で送信をブロックするために使う。

use crate::types::{DraftField, InvoiceDraft, ItemField};
use std::fmt;

/// 数量の最小値
pub const MIN_QUANTITY: f64 = 1.0;
/// 単価の最小値
pub const MIN_AMOUNT: f64 = 0.0;

/// 違反した項目の位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Draft(DraftField),
    Item { index: usize, field: ItemField },
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Draft(field) => write!(f, "{}", field.as_str()),
            FieldPath::Item { index, field } => write!(f, "items[{}].{}", index, field.as_str()),
        }
    }
}

/// 違反の種類
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViolationKind {
    /// 必須項目が空
    Missing,
    /// 数値が最小値未満（NaN含む）
    BelowMinimum { min: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: FieldPath,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "{} is required", self.field),
            ViolationKind::BelowMinimum { min } => {
                write!(f, "{} must be at least {}", self.field, min)
            }
        }
    }
}

/// 違反リスト（送信1回分）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn contains_field(&self, field: FieldPath) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    fn push(&mut self, field: FieldPath, kind: ViolationKind) {
        self.0.push(Violation { field, kind });
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// ドラフト全体を検査して違反を返す
pub fn validate(draft: &InvoiceDraft) -> Violations {
    let mut violations = Violations::default();

    if draft.invoice_number.is_empty() {
        violations.push(FieldPath::Draft(DraftField::InvoiceNumber), ViolationKind::Missing);
    }
    if draft.client.is_empty() {
        violations.push(FieldPath::Draft(DraftField::Client), ViolationKind::Missing);
    }

    for (index, item) in draft.items.iter().enumerate() {
        if item.name.is_empty() {
            violations.push(
                FieldPath::Item { index, field: ItemField::Name },
                ViolationKind::Missing,
            );
        }
        if !meets_minimum(item.quantity, MIN_QUANTITY) {
            violations.push(
                FieldPath::Item { index, field: ItemField::Quantity },
                ViolationKind::BelowMinimum { min: MIN_QUANTITY },
            );
        }
        if !meets_minimum(item.amount, MIN_AMOUNT) {
            violations.push(
                FieldPath::Item { index, field: ItemField::Amount },
                ViolationKind::BelowMinimum { min: MIN_AMOUNT },
            );
        }
    }

    if draft.due_date.is_none() {
        violations.push(FieldPath::Draft(DraftField::DueDate), ViolationKind::Missing);
    }

    violations
}

fn meets_minimum(value: f64, min: f64) -> bool {
    value.is_finite() && value >= min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;
    use chrono::NaiveDate;

    fn valid_draft() -> InvoiceDraft {
        InvoiceDraft {
            invoice_number: "INV-1".to_string(),
            client: "Acme".to_string(),
            items: vec![LineItem::new("Widget", 2.0, 5.0)],
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn test_zero_items_is_valid() {
        let draft = InvoiceDraft { items: Vec::new(), ..valid_draft() };
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_all_required() {
        let violations = validate(&InvoiceDraft::default());
        assert_eq!(violations.len(), 3);
        assert!(violations.contains_field(FieldPath::Draft(DraftField::InvoiceNumber)));
        assert!(violations.contains_field(FieldPath::Draft(DraftField::Client)));
        assert!(violations.contains_field(FieldPath::Draft(DraftField::DueDate)));
    }

    #[test]
    fn test_default_item_fails_name_and_quantity() {
        let mut draft = valid_draft();
        draft.items.push(LineItem::default());

        let violations = validate(&draft);
        assert_eq!(violations.len(), 2);
        assert!(violations.contains_field(FieldPath::Item { index: 1, field: ItemField::Name }));
        assert!(violations.contains_field(FieldPath::Item { index: 1, field: ItemField::Quantity }));
    }

    #[test]
    fn test_amount_zero_allowed_negative_rejected() {
        let mut draft = valid_draft();
        draft.items[0].amount = 0.0;
        assert!(validate(&draft).is_empty());

        draft.items[0].amount = -0.01;
        let violations = validate(&draft);
        assert!(violations.contains_field(FieldPath::Item { index: 0, field: ItemField::Amount }));
    }

    #[test]
    fn test_quantity_minimum_boundary() {
        let mut draft = valid_draft();
        draft.items[0].quantity = 1.0;
        assert!(validate(&draft).is_empty());

        draft.items[0].quantity = 0.5;
        let violations = validate(&draft);
        assert_eq!(violations.len(), 1);
        assert!(violations.contains_field(FieldPath::Item { index: 0, field: ItemField::Quantity }));
    }

    #[test]
    fn test_nan_quantity_rejected() {
        let mut draft = valid_draft();
        draft.items[0].quantity = f64::NAN;
        assert_eq!(validate(&draft).len(), 1);
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        // ネイティブの required と同じく空文字のみを欠落とみなす
        let draft = InvoiceDraft { client: " ".to_string(), ..valid_draft() };
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_violation_display() {
        let violations = validate(&InvoiceDraft {
            invoice_number: String::new(),
            items: vec![LineItem::new("Widget", 0.0, 1.0)],
            ..valid_draft()
        });
        let display = violations.to_string();
        assert!(display.contains("invoiceNumber is required"));
        assert!(display.contains("items[0].quantity must be at least 1"));
    }
}
