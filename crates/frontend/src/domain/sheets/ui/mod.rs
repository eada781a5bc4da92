mod page;
mod record_form_modal;
mod table;
mod tabs;

pub use page::SheetConsolePage;
