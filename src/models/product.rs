use serde::{Deserialize, Serialize};

/// A catalog entry. The wire form uses the same camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub manufacturer: String,
    pub sku: String,
    pub upc: String,
    // Kept as text so "497.40" comes back as "497.40".
    pub price_per_unit: String,
    pub quantity_on_hand: u64,
    pub product_name: String,
}
