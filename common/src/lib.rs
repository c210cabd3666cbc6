//! Invoice Form Common Library
//!
//! CLIとWeb(WASM)で共有される請求書フォームの型と状態機械

pub mod types;
pub mod form;
pub mod validation;
pub mod summary;
pub mod error;

pub use types::{DraftField, InvoiceDraft, ItemField, LineItem, SubmittedInvoice};
pub use form::{FormState, InvoiceForm};
pub use validation::{validate, FieldPath, Violation, ViolationKind, Violations};
pub use summary::{format_number, item_line, Summary};
pub use error::{Error, Result};
