//! フォーム状態遷移の統合テスト
//!
//! 入力 → 送信 → 再編集/破棄 の一連の流れを検証

use invoice_form::session::{apply, SessionCommand};
use invoice_form_common::{DraftField, Error, FormState, InvoiceForm, LineItem};

fn example_form() -> InvoiceForm {
    let mut form = InvoiceForm::new();
    let commands = vec![
        SessionCommand::SetField(DraftField::InvoiceNumber, "INV-1".to_string()),
        SessionCommand::SetField(DraftField::Client, "Acme".to_string()),
        SessionCommand::SetField(DraftField::DueDate, "2024-01-01".to_string()),
        SessionCommand::AddItem,
        SessionCommand::SetItem {
            index: 0,
            name: "Widget".to_string(),
            quantity: "2".to_string(),
            amount: "5".to_string(),
        },
    ];
    for command in commands {
        apply(&mut form, command).expect("入力に失敗");
    }
    form
}

/// 例: 合計・サマリ・再編集
#[test]
fn test_example_invoice_round() {
    let mut form = example_form();
    assert_eq!(form.total(), 10.0);

    apply(&mut form, SessionCommand::Submit).expect("送信に失敗");
    let summary = form.summary().expect("サマリがない");
    assert_eq!(summary.item_lines(), vec!["Widget - 2 x $5 = $10".to_string()]);
    assert_eq!(summary.total_line(), "Total Amount: $10");

    let submitted = form.draft().clone();
    apply(&mut form, SessionCommand::Edit).expect("再編集に失敗");
    assert_eq!(form.state(), FormState::Editing);
    assert!(form.summary().is_none());
    assert_eq!(form.draft(), &submitted);
}

/// 明細数 = 追加数 - 削除数（負にならない）
#[test]
fn test_item_count_tracks_add_and_remove() {
    let mut form = InvoiceForm::new();
    let mut expected: usize = 0;

    let ops = [true, true, false, true, false, false, false, true, true, false];
    for add in ops {
        if add {
            apply(&mut form, SessionCommand::AddItem).unwrap();
            expected += 1;
        } else {
            apply(&mut form, SessionCommand::RemoveItem(0)).unwrap();
            expected = expected.saturating_sub(1);
        }
        assert_eq!(form.draft().items.len(), expected);
    }
}

/// 合計は数量×単価の総和
#[test]
fn test_total_is_sum_of_line_totals() {
    let mut form = InvoiceForm::new();
    let items = [("a", "1", "2.5"), ("b", "4", "0.25"), ("c", "3", "0")];
    for (i, (name, quantity, amount)) in items.iter().enumerate() {
        apply(&mut form, SessionCommand::AddItem).unwrap();
        apply(
            &mut form,
            SessionCommand::SetItem {
                index: i,
                name: name.to_string(),
                quantity: quantity.to_string(),
                amount: amount.to_string(),
            },
        )
        .unwrap();
    }

    let expected: f64 = form.draft().items.iter().map(LineItem::line_total).sum();
    assert_eq!(form.total(), expected);
    assert_eq!(form.total(), 3.5);
}

/// 必須項目が空なら送信されない
#[test]
fn test_submit_with_each_required_field_empty() {
    for field in [DraftField::InvoiceNumber, DraftField::Client, DraftField::DueDate] {
        let mut form = example_form();
        apply(&mut form, SessionCommand::SetField(field, String::new())).unwrap();

        let result = apply(&mut form, SessionCommand::Submit);
        assert!(matches!(result, Err(Error::Validation(_))), "{:?} が空でも送信された", field);
        assert_eq!(form.state(), FormState::Editing);
    }
}

/// 送信中は入力がロックされる
#[test]
fn test_inputs_locked_after_submit() {
    let mut form = example_form();
    apply(&mut form, SessionCommand::Submit).unwrap();
    assert!(form.is_locked());

    let result = apply(&mut form, SessionCommand::SetField(DraftField::Client, "Other".into()));
    assert!(matches!(result, Err(Error::Locked)));
    assert_eq!(form.summary().unwrap().client, "Acme");
}

/// 破棄後はロック解除、ドラフトは送信時のまま
#[test]
fn test_remove_unlocks_with_submitted_values() {
    let mut form = example_form();
    let before = form.draft().clone();
    apply(&mut form, SessionCommand::Submit).unwrap();

    apply(&mut form, SessionCommand::Remove).unwrap();
    assert!(!form.is_locked());
    assert!(form.summary().is_none());
    assert_eq!(form.draft(), &before);

    apply(&mut form, SessionCommand::SetField(DraftField::Client, "Other".into())).unwrap();
    assert_eq!(form.draft().client, "Other");
}
