//! メインアプリケーションコンポーネント

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use invoice_form_common::{Error, InvoiceForm, Violations};
use crate::components::{
    header::Header,
    invoice_fields::InvoiceFields,
    line_items::LineItems,
    summary_view::SummaryView,
};
use crate::console;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // フォーム状態（ドラフト + 送信済みスナップショット）
    let form = RwSignal::new(InvoiceForm::new());
    let (violations, set_violations) = signal(None::<Violations>);

    let locked = Signal::derive(move || form.with(|f| f.is_locked()));
    let total = Memo::new(move |_| form.with(|f| f.total()));

    // 送信ハンドラ
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| match f.submit() {
            Ok(snapshot) => {
                console::log(&format!("submitted {}", snapshot.invoice().invoice_number));
                set_violations.set(None);
            }
            Err(Error::Validation(v)) => {
                console::warn(&format!("submit blocked: {}", v));
                set_violations.set(Some(v));
            }
            Err(e) => console::warn(&e.to_string()),
        });
    };

    // 再編集ハンドラ
    let on_edit = move |_: ()| {
        form.update(|f| {
            if let Err(e) = f.edit() {
                console::warn(&e.to_string());
            }
        });
    };

    // 破棄ハンドラ
    let on_remove = move |_: ()| {
        form.update(|f| {
            if let Err(e) = f.remove() {
                console::warn(&e.to_string());
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <form class="invoice-form" on:submit=on_submit>
                <InvoiceFields form=form locked=locked />

                <LineItems form=form locked=locked />

                <p class="total">
                    {move || format!("Total: ${}", invoice_form_common::format_number(total.get()))}
                </p>

                <Show when=move || violations.get().is_some()>
                    <ul class="violations">
                        {move || {
                            let messages: Vec<String> = violations
                                .get()
                                .map(|v| v.iter().map(|violation| violation.to_string()).collect())
                                .unwrap_or_default();
                            messages
                                .into_iter()
                                .map(|message| view! { <li>{message}</li> })
                                .collect_view()
                        }}
                    </ul>
                </Show>

                <button type="submit" class="btn btn-primary" disabled=move || locked.get()>
                    "Submit"
                </button>
            </form>

            <Show when=move || locked.get()>
                <SummaryView form=form on_edit=on_edit on_remove=on_remove />
            </Show>
        </div>
    }
}
