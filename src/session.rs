//! 対話式請求書入力モジュール
//!
//! プロンプト層はユーザー入力を `SessionCommand` に変換するだけで、
//! 状態の変更はすべて `apply` 経由でフォームに渡す。

use crate::config::Config;
use crate::error::Result;
use chrono::{Days, Local, NaiveDate};
use dialoguer::{Confirm, Input, Select};
use invoice_form_common::form::parse_number;
use invoice_form_common::{
    format_number, item_line, DraftField, Error, FormState, InvoiceForm, ItemField,
};

/// フォームに適用する操作
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    SetField(DraftField, String),
    SetItem {
        index: usize,
        name: String,
        quantity: String,
        amount: String,
    },
    AddItem,
    RemoveItem(usize),
    Submit,
    Edit,
    Remove,
}

/// 操作をフォームに適用
///
/// 明細の一括更新は数値を先に検査し、途中で失敗して半端に更新されないようにする。
pub fn apply(form: &mut InvoiceForm, command: SessionCommand) -> invoice_form_common::Result<()> {
    match command {
        SessionCommand::SetField(field, value) => form.update_field(field, &value),
        SessionCommand::SetItem { index, name, quantity, amount } => {
            parse_number(&quantity)?;
            parse_number(&amount)?;
            form.update_item(index, ItemField::Name, &name)?;
            form.update_item(index, ItemField::Quantity, &quantity)?;
            form.update_item(index, ItemField::Amount, &amount)
        }
        SessionCommand::AddItem => form.add_item(),
        SessionCommand::RemoveItem(index) => form.remove_item(index),
        SessionCommand::Submit => form.submit().map(|_| ()),
        SessionCommand::Edit => form.edit(),
        SessionCommand::Remove => form.remove(),
    }
}

/// 編集中ドラフトの表示
pub fn render_draft(form: &InvoiceForm) -> String {
    let draft = form.draft();
    let mut lines = vec![
        format!("Invoice Number: {}", or_dash(&draft.invoice_number)),
        format!("Client: {}", or_dash(&draft.client)),
        format!(
            "Due Date: {}",
            draft
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string())
        ),
        format!("Items ({}):", draft.items.len()),
    ];
    for (i, item) in draft.items.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, item_line(item)));
    }
    lines.push(format!("Total: ${}", format_number(form.total())));
    lines.join("\n")
}

/// 操作失敗時のメッセージ
pub fn describe_error(error: &Error) -> Vec<String> {
    match error {
        Error::Validation(violations) => violations.iter().map(|v| format!("✗ {}", v)).collect(),
        other => vec![format!("✗ {}", other)],
    }
}

/// 期日の初期値（今日 + N日）
pub fn default_due_date(today: NaiveDate, days: Option<u32>) -> Option<NaiveDate> {
    days.and_then(|d| today.checked_add_days(Days::new(u64::from(d))))
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

const EDITING_ACTIONS: &[&str] = &[
    "Set invoice number",
    "Set client",
    "Set due date",
    "Add item",
    "Edit item",
    "Remove item",
    "Submit",
    "Quit",
];

const SUBMITTED_ACTIONS: &[&str] = &["Edit", "Remove", "Quit"];

/// 対話式で請求書を入力
pub fn run_interactive(mut form: InvoiceForm, config: &Config) -> Result<InvoiceForm> {
    let due_days = config.due_days()?;

    loop {
        let command = match form.state() {
            FormState::Editing => {
                println!("\n{}\n", render_draft(&form));
                match prompt_editing(&form, due_days)? {
                    Some(command) => command,
                    None => break,
                }
            }
            FormState::Submitted => {
                if let Some(summary) = form.summary() {
                    println!("\n📄 Submitted Invoice\n---\n{}\n---", summary);
                }
                match prompt_submitted(config)? {
                    Some(command) => command,
                    None => break,
                }
            }
        };

        match apply(&mut form, command) {
            Ok(()) => tracing::debug!(state = ?form.state(), "command applied"),
            Err(e) => {
                for line in describe_error(&e) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(form)
}

fn prompt_editing(form: &InvoiceForm, due_days: Option<u32>) -> Result<Option<SessionCommand>> {
    let choice = Select::new()
        .with_prompt("Action")
        .items(EDITING_ACTIONS)
        .default(0)
        .interact()?;

    let draft = form.draft();
    let command = match choice {
        0 => SessionCommand::SetField(
            DraftField::InvoiceNumber,
            prompt_text("Invoice number", &draft.invoice_number)?,
        ),
        1 => SessionCommand::SetField(DraftField::Client, prompt_text("Client", &draft.client)?),
        2 => {
            let current = draft
                .due_date
                .or_else(|| default_due_date(Local::now().date_naive(), due_days))
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            SessionCommand::SetField(DraftField::DueDate, prompt_text("Due date (YYYY-MM-DD)", &current)?)
        }
        3 => SessionCommand::AddItem,
        4 => match prompt_item_index(form, "Edit which item")? {
            Some(index) => {
                let item = &draft.items[index];
                SessionCommand::SetItem {
                    index,
                    name: prompt_text("Name", &item.name)?,
                    quantity: prompt_text("Quantity", &format_number(item.quantity))?,
                    amount: prompt_text("Amount", &format_number(item.amount))?,
                }
            }
            None => return prompt_editing(form, due_days),
        },
        5 => match prompt_item_index(form, "Remove which item")? {
            Some(index) => SessionCommand::RemoveItem(index),
            None => return prompt_editing(form, due_days),
        },
        6 => SessionCommand::Submit,
        _ => return Ok(None),
    };

    Ok(Some(command))
}

fn prompt_submitted(config: &Config) -> Result<Option<SessionCommand>> {
    let choice = Select::new()
        .with_prompt("Action")
        .items(SUBMITTED_ACTIONS)
        .default(0)
        .interact()?;

    match choice {
        0 => Ok(Some(SessionCommand::Edit)),
        1 => {
            if config.confirm_remove {
                let confirmed = Confirm::new()
                    .with_prompt("Discard the submitted invoice?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    return prompt_submitted(config);
                }
            }
            Ok(Some(SessionCommand::Remove))
        }
        _ => Ok(None),
    }
}

fn prompt_item_index(form: &InvoiceForm, prompt: &str) -> Result<Option<usize>> {
    let items = &form.draft().items;
    if items.is_empty() {
        println!("明細がありません");
        return Ok(None);
    }

    let labels: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item_line(item)))
        .collect();

    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
