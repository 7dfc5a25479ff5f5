pub mod catalog;
pub mod reports;
pub mod settings;

pub use reports::ReportsPage;
pub use settings::SettingsPage;
