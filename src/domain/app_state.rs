use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::{
    error::ProductError,
    platform::Platform,
    product::{compute_record, validate_name, ProductRecord},
    product_list::ProductList,
};

/// State owned by one window. Nothing here is shared between sessions and
/// the product list is dropped when the window closes.
#[derive(Clone, Debug)]
pub struct AppState {
    pub session_id: Uuid,
    pub products: ProductList,
    pub preferences: Preferences,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            products: ProductList::new(),
            preferences: Preferences::default(),
        }
    }
}

impl AppState {
    pub fn apply_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Validates the name, derives the figures and appends the record.
    /// On a validation error nothing is changed.
    pub fn add_product(
        &mut self,
        name: &str,
        cost_price: u32,
        selling_price: u32,
        platform: Platform,
    ) -> Result<ProductRecord, ProductError> {
        let name = validate_name(name)?;
        let record = compute_record(name, cost_price, selling_price, platform);
        info!(
            session = %self.session_id,
            name = record.name(),
            platform = platform.key(),
            fee = record.fee(),
            profit = record.profit(),
            "added product"
        );
        self.products.add(record.clone());
        Ok(record)
    }

    pub fn remove_product(&mut self, index: usize) -> Result<ProductRecord, ProductError> {
        let removed = self.products.remove_at(index)?;
        info!(
            session = %self.session_id,
            index,
            name = removed.name(),
            "removed product"
        );
        Ok(removed)
    }

    pub fn clear_products(&mut self) -> usize {
        let count = self.products.len();
        self.products.clear();
        debug!(session = %self.session_id, count, "cleared product list");
        count
    }
}

/// User-tunable form defaults and export location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub default_cost_price: u32,
    pub default_selling_price: u32,
    pub price_step: u32,
    pub default_platform: Platform,
    pub export_dir: Option<PathBuf>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_cost_price: 1000,
            default_selling_price: 2000,
            price_step: 100,
            default_platform: Platform::Rakuten,
            export_dir: None,
        }
    }
}

impl Preferences {
    /// Configured export directory, else the user's downloads, else cwd.
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
