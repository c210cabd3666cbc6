pub mod header;
pub mod invoice_fields;
pub mod line_items;
pub mod summary_view;
