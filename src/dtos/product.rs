// src/dtos/product.rs
use serde::Deserialize;
use crate::models::product::Product;

/// Body of `POST /products`. A `productId` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub manufacturer: String,
    pub sku: String,
    pub upc: String,
    pub price_per_unit: String,
    pub quantity_on_hand: u64,
    pub product_name: String,
}

impl CreateProductRequest {
    pub fn with_id(self, product_id: i64) -> Product {
        Product {
            product_id,
            manufacturer: self.manufacturer,
            sku: self.sku,
            upc: self.upc,
            price_per_unit: self.price_per_unit,
            quantity_on_hand: self.quantity_on_hand,
            product_name: self.product_name,
        }
    }
}

// Body of `PUT /products/{id}`: the full record, identifier included.
pub type ReplaceProductRequest = Product;
