//! 送信済み請求書のサマリ表示
//!
//! 金額は通貨換算・桁区切りなしで出力する（`$` は固定の記号）。

use crate::types::{InvoiceDraft, LineItem};
use std::fmt;

/// サマリ（表示用の値を保持）
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub invoice_number: String,
    pub client: String,
    pub due_date: String,
    pub items: Vec<LineItem>,
    pub total: f64,
}

impl Summary {
    /// 合計は呼び出し側から受け取る（フォームはドラフトから計算する）
    pub fn new(invoice: &InvoiceDraft, total: f64) -> Self {
        Self {
            invoice_number: invoice.invoice_number.clone(),
            client: invoice.client.clone(),
            due_date: invoice
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            items: invoice.items.clone(),
            total,
        }
    }

    pub fn header_lines(&self) -> Vec<String> {
        vec![
            format!("Invoice Number: {}", self.invoice_number),
            format!("Client: {}", self.client),
            format!("Due Date: {}", self.due_date),
        ]
    }

    pub fn item_lines(&self) -> Vec<String> {
        self.items.iter().map(item_line).collect()
    }

    pub fn total_line(&self) -> String {
        format!("Total Amount: ${}", format_number(self.total))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.header_lines() {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "Items:")?;
        for line in self.item_lines() {
            writeln!(f, "  {}", line)?;
        }
        write!(f, "{}", self.total_line())
    }
}

/// `Widget - 2 x $5 = $10`
pub fn item_line(item: &LineItem) -> String {
    format!(
        "{} - {} x ${} = ${}",
        item.name,
        format_number(item.quantity),
        format_number(item.amount),
        format_number(item.line_total())
    )
}

/// 最短表記で数値を出力（`2`, `2.5`）
pub fn format_number(value: f64) -> String {
    // -0 は 0 として表示
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
