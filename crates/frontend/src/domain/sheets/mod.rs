pub mod api;
pub mod record_form;
pub mod state;
pub mod table_model;
pub mod ui;
pub mod workspace;

pub use workspace::SheetWorkspace;
