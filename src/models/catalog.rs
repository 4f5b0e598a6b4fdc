use std::collections::HashSet;

use thiserror::Error;
use validator::Validate;

use crate::models::product::{Price, Product, ProductId};

lazy_static::lazy_static! {
    static ref DEFAULT_PRODUCTS: Vec<Product> = vec![
        Product::new(1, "Laptop", Price::from_cents(99_999)),
        Product::new(2, "Mouse", Price::from_cents(2_599)),
        Product::new(3, "Teclado", Price::from_cents(7_999)),
        Product::new(4, "Monitor", Price::from_cents(29_999)),
        Product::new(5, "Auriculares", Price::from_cents(14_999)),
    ];
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog has no products")]
    Empty,

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),

    #[error("Invalid product {id}: {source}")]
    InvalidProduct {
        id: ProductId,
        #[source]
        source: validator::ValidationErrors,
    },
}

/// Fixed set of purchasable products, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product
                .validate()
                .map_err(|source| CatalogError::InvalidProduct {
                    id: product.id,
                    source,
                })?;

            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products })
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products priced at or below `max`, in catalog order.
    pub fn products_up_to(&self, max: Price) -> Vec<&Product> {
        self.products.iter().filter(|product| product.price <= max).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: DEFAULT_PRODUCTS.clone(),
        }
    }
}
