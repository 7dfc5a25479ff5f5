//! Page management module
//!
//! Содержит:
//! - `registry` - маппинг AppPage → View (единственный источник правды)
//! - `page_labels` - заголовки и описания страниц, разбор ключей подменю

pub mod page_labels;
pub mod registry;

pub use page_labels::AppPage;
pub use registry::render_page;
