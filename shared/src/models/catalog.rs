//! Catalog summaries shown on the dashboard

use serde::{Deserialize, Serialize};

/// Product (commodity) summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(default, alias = "commodityName")]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Bookable service summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}
