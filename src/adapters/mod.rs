pub mod form_adapter;
pub mod item_handler;
