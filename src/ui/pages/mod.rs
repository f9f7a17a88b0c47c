pub mod products;
pub mod settings;

pub use products::ProductsPage;
pub use settings::SettingsPage;
