// src/store.rs
//! In-memory product store.
//!
//! Products live in a `Vec` behind an `RwLock`. Listing order is insertion
//! order. Readers share the lock; `create` and `replace` take it exclusively,
//! so assigning the next identifier and appending happen as one step.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::dtos::product::CreateProductRequest;
use crate::models::product::Product;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("product {0} not found")]
    NotFound(i64),
    #[error("product id {body} in body does not match id {path} in path")]
    IdMismatch { path: i64, body: i64 },
    #[error("no product id left above {0}")]
    IdsExhausted(i64),
}

#[derive(Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    /// Builds a store holding `seed` in the given order. Duplicate ids in the
    /// seed are not checked.
    pub fn new(seed: Vec<Product>) -> Self {
        Self { inner: Arc::new(RwLock::new(seed)) }
    }

    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Stores `candidate` under the next identifier: one past the current
    /// maximum, never below 0, and 0 when the store is empty.
    ///
    /// This is max-plus-one over the live records, not a counter. Should
    /// deletion ever exist, an id freed at the top would be handed out again.
    /// Fails only once `i64::MAX` is taken.
    pub async fn create(&self, candidate: CreateProductRequest) -> Result<Product, StoreError> {
        let mut products = self.inner.write().await;
        let product = candidate.with_id(next_id(&products)?);
        products.push(product.clone());
        debug!(product_id = product.product_id, "product created");
        Ok(product)
    }

    pub async fn get(&self, id: i64) -> Result<Product, StoreError> {
        let products = self.inner.read().await;
        products
            .iter()
            .find(|p| p.product_id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrites the product stored under `id` with `replacement`, keeping
    /// its position. Nothing is changed unless `replacement` carries `id`.
    pub async fn replace(&self, id: i64, replacement: Product) -> Result<Product, StoreError> {
        let mut products = self.inner.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.product_id == id)
            .ok_or(StoreError::NotFound(id))?;

        if replacement.product_id != id {
            return Err(StoreError::IdMismatch { path: id, body: replacement.product_id });
        }

        *slot = replacement;
        debug!(product_id = id, "product replaced");
        Ok(slot.clone())
    }
}

fn next_id(products: &[Product]) -> Result<i64, StoreError> {
    match products.iter().map(|p| p.product_id).max() {
        None => Ok(0),
        Some(max) => max
            .checked_add(1)
            .map(|next| next.max(0))
            .ok_or(StoreError::IdsExhausted(max)),
    }
}
