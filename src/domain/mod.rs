//! Fee/profit calculation and the session product list live here.

pub mod app_state;
pub mod error;
pub mod evaluation;
pub mod platform;
pub mod product;
pub mod product_list;

#[allow(unused_imports)]
pub use app_state::{AppState, Preferences};
#[allow(unused_imports)]
pub use error::{ExportError, ProductError};
#[allow(unused_imports)]
pub use evaluation::{MarginStatus, ProfitBalance};
#[allow(unused_imports)]
pub use platform::Platform;
#[allow(unused_imports)]
pub use product::{compute_record, parse_price, validate_name, ProductRecord};
#[allow(unused_imports)]
pub use product_list::{ListSummary, ProductList, CSV_HEADER};
