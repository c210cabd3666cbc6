//! 請求書ヘッダー項目（請求番号・取引先・期日）

use leptos::prelude::*;
use invoice_form_common::{DraftField, InvoiceForm};
use crate::console;

#[component]
pub fn InvoiceFields(
    form: RwSignal<InvoiceForm>,
    locked: Signal<bool>,
) -> impl IntoView {
    let set_field = move |field: DraftField, value: String| {
        form.update(|f| {
            if let Err(e) = f.update_field(field, &value) {
                console::warn(&e.to_string());
            }
        });
    };

    view! {
        <div class="invoice-fields">
            <div class="form-group">
                <label for="invoice-number">"Invoice Number"</label>
                <input
                    type="text"
                    id="invoice-number"
                    required=true
                    disabled=move || locked.get()
                    prop:value=move || form.with(|f| f.draft().invoice_number.clone())
                    on:input=move |ev| set_field(DraftField::InvoiceNumber, event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="client">"Client"</label>
                <input
                    type="text"
                    id="client"
                    required=true
                    disabled=move || locked.get()
                    prop:value=move || form.with(|f| f.draft().client.clone())
                    on:input=move |ev| set_field(DraftField::Client, event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="due-date">"Due Date"</label>
                <input
                    type="date"
                    id="due-date"
                    required=true
                    disabled=move || locked.get()
                    prop:value=move || form.with(|f| due_date_value(f))
                    on:input=move |ev| set_field(DraftField::DueDate, event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// `<input type="date">` に渡す値（未設定は空文字）
pub fn due_date_value(form: &InvoiceForm) -> String {
    form.draft()
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
