//! 明細行コンポーネント

use leptos::prelude::*;
use invoice_form_common::form::parse_number;
use invoice_form_common::{format_number, InvoiceForm, ItemField, LineItem};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use crate::console;

#[component]
pub fn LineItems(
    form: RwSignal<InvoiceForm>,
    locked: Signal<bool>,
) -> impl IntoView {
    let item_count = move || form.with(|f| f.draft().items.len());

    let on_add = move |_| {
        form.update(|f| {
            if let Err(e) = f.add_item() {
                console::warn(&e.to_string());
            }
        });
    };

    view! {
        <div class="line-items">
            <h3>"Items"</h3>
            // 明細は位置でのみ識別する
            <For
                each=move || 0..item_count()
                key=|index| *index
                children=move |index| view! { <LineItemRow form=form locked=locked index=index /> }
            />
            <button
                type="button"
                class="btn btn-secondary"
                disabled=move || locked.get()
                on:click=on_add
            >
                "Add Item"
            </button>
        </div>
    }
}

#[component]
fn LineItemRow(
    form: RwSignal<InvoiceForm>,
    locked: Signal<bool>,
    index: usize,
) -> impl IntoView {
    let item = move || form.with(|f| f.draft().items.get(index).cloned().unwrap_or_default());

    let set_item = move |field: ItemField, value: String| {
        form.update(|f| {
            if let Err(e) = f.update_item(index, field, &value) {
                console::warn(&e.to_string());
            }
        });
    };

    let on_remove = move |_| {
        form.update(|f| {
            if let Err(e) = f.remove_item(index) {
                console::warn(&e.to_string());
            }
        });
    };

    view! {
        <div class="line-item">
            <input
                type="text"
                placeholder="Item name"
                required=true
                disabled=move || locked.get()
                prop:value=move || item().name
                on:input=move |ev| set_item(ItemField::Name, event_target_value(&ev))
            />
            <NumberInput form=form locked=locked index=index field=ItemField::Quantity placeholder="Quantity" min="1" />
            <NumberInput form=form locked=locked index=index field=ItemField::Amount placeholder="Amount" min="0" />
            <span class="line-total">{move || format!("${}", format_number(item().line_total()))}</span>
            <button
                type="button"
                class="btn btn-small btn-tertiary"
                disabled=move || locked.get()
                on:click=on_remove
            >
                "Remove"
            </button>
        </div>
    }
}

/// 数値入力欄
///
/// 表示は入力中の文字列を保持し、ドラフトへは解釈できた値だけを渡す。
/// ドラフト側の値が変わった時（行の削除で位置がずれた等）だけ表示を同期する。
#[component]
fn NumberInput(
    form: RwSignal<InvoiceForm>,
    locked: Signal<bool>,
    index: usize,
    field: ItemField,
    placeholder: &'static str,
    min: &'static str,
) -> impl IntoView {
    let draft_value = move || {
        form.with(|f| f.draft().items.get(index).map(|item| number_field(item, field)).unwrap_or(0.0))
    };
    let text = RwSignal::new(format_number(untrack(draft_value)));

    Effect::new(move |_| {
        let value = draft_value();
        if needs_resync(&text.get_untracked(), value) {
            text.set(format_number(value));
        }
    });

    let on_input = move |ev: web_sys::Event| {
        let bad_input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.validity().bad_input())
            .unwrap_or(false);
        let raw = event_target_value(&ev);
        if let Some(value) = committed_number(&raw, bad_input) {
            text.set(raw.clone());
            form.update(|f| {
                if let Err(e) = f.update_item(index, field, value) {
                    console::warn(&e.to_string());
                }
            });
        }
    };

    view! {
        <input
            type="number"
            placeholder=placeholder
            min=min
            step="any"
            required=true
            disabled=move || locked.get()
            prop:value=move || text.get()
            on:input=on_input
        />
    }
}

fn number_field(item: &LineItem, field: ItemField) -> f64 {
    match field {
        ItemField::Quantity => item.quantity,
        ItemField::Amount => item.amount,
        ItemField::Name => 0.0,
    }
}

/// ドラフトへ渡せる入力か
///
/// 入力途中（`2.` や `-`）はブラウザが badInput として空文字を返すので渡さない。
pub fn committed_number(raw: &str, bad_input: bool) -> Option<&str> {
    if bad_input {
        return None;
    }
    parse_number(raw).ok().map(|_| raw)
}

/// 表示中の文字列がドラフトの値と食い違っているか
pub fn needs_resync(text: &str, draft_value: f64) -> bool {
    match parse_number(text) {
        Ok(shown) => shown != draft_value,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committed_number() {
        assert_eq!(committed_number("2.5", false), Some("2.5"));
        // 入力途中はドラフトを変えない
        assert_eq!(committed_number("", true), None);
        // 本当に空にした場合は 0 として渡す
        assert_eq!(committed_number("", false), Some(""));
        assert_eq!(committed_number("abc", false), None);
    }

    #[test]
    fn test_partial_text_is_not_overwritten() {
        // "2." の表示中にドラフトが 2 のままなら書き戻さない
        assert!(!needs_resync("2.", 2.0));
        assert!(!needs_resync("2.50", 2.5));
        assert!(!needs_resync("", 0.0));
    }

    #[test]
    fn test_resync_when_draft_changes() {
        // 行削除で別の明細が同じ位置に来た場合
        assert!(needs_resync("3", 7.0));
        assert!(needs_resync("", 5.0));
    }
}
