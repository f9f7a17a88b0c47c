pub mod kpi_card;
pub mod margin_banner;
pub mod product_card;
pub mod toast;
