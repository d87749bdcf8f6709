// src/seed.rs
//! Startup product set: embedded by default, or read from `CATALOG_SEED_PATH`.

use std::path::Path;

use crate::error::StartupError;
use crate::models::product::Product;

const DEFAULT_SEED: &str = r#"[
  {
    "productId": 1,
    "manufacturer": "Johns-Jenkins",
    "sku": "p5z343vdS",
    "upc": "939581000000",
    "pricePerUnit": "497.45",
    "quantityOnHand": 9703,
    "productName": "sticky note"
  },
  {
    "productId": 2,
    "manufacturer": "Hessel, Schimmel and Feeney",
    "sku": "i7v300kmx",
    "upc": "740979000000",
    "pricePerUnit": "282.29",
    "quantityOnHand": 9217,
    "productName": "leg warmers"
  },
  {
    "productId": 3,
    "manufacturer": "Swaniawski, Bartoletti and Bruen",
    "sku": "q0L657ys7",
    "upc": "111730000000",
    "pricePerUnit": "436.26",
    "quantityOnHand": 5905,
    "productName": "lamp shade"
  }
]"#;

pub fn default_seed() -> Result<Vec<Product>, StartupError> {
    parse(DEFAULT_SEED)
}

pub async fn load(path: Option<&Path>) -> Result<Vec<Product>, StartupError> {
    let Some(path) = path else {
        return default_seed();
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StartupError::Seed(format!("cannot read {}: {e}", path.display())))?;
    parse(&raw)
}

fn parse(raw: &str) -> Result<Vec<Product>, StartupError> {
    let products: Vec<Product> = serde_json::from_str(raw)
        .map_err(|e| StartupError::Seed(format!("invalid seed data: {e}")))?;

    // The store hands out max + 1, so the top id must stay free.
    if products.iter().any(|p| p.product_id == i64::MAX) {
        return Err(StartupError::Seed(format!("productId {} leaves no room for new products", i64::MAX)));
    }
    Ok(products)
}
