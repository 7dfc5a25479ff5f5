pub mod badge;
pub mod list_filter;
pub mod scope;
