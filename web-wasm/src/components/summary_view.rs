//! 送信済みサマリコンポーネント

use leptos::prelude::*;
use invoice_form_common::InvoiceForm;

#[component]
pub fn SummaryView<FE, FR>(
    form: RwSignal<InvoiceForm>,
    on_edit: FE,
    on_remove: FR,
) -> impl IntoView
where
    FE: Fn(()) + 'static + Clone + Send,
    FR: Fn(()) + 'static + Clone + Send,
{
    let summary = Memo::new(move |_| form.with(|f| f.summary()));

    view! {
        <section class="invoice-summary">
            <h2>"Submitted Invoice"</h2>
            {move || summary.get().map(|s| {
                let headers = s.header_lines();
                let items = s.item_lines();
                let total = s.total_line();
                view! {
                    {headers.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                    <ul>
                        {items.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ul>
                    <p class="summary-total">{total}</p>
                }
            })}
            <div class="summary-actions">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_edit = on_edit.clone();
                        move |_| on_edit(())
                    }
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-tertiary"
                    on:click={
                        let on_remove = on_remove.clone();
                        move |_| on_remove(())
                    }
                >
                    "Remove"
                </button>
            </div>
        </section>
    }
}
