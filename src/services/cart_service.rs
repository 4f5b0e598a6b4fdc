use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{
    cart::{Cart, CartLine, CartState},
    catalog::Catalog,
    product::{Price, ProductId},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartServiceError {
    #[error("Product {0} is not in the catalog")]
    ProductNotFound(ProductId),

    #[error("Invalid cart operation '{0}': expected add:<id> or remove:<id>")]
    InvalidOperation(String),
}

/// A single user action against the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add(ProductId),
    Remove(ProductId),
}

impl FromStr for CartOperation {
    type Err = CartServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CartServiceError::InvalidOperation(s.to_string());
        let (action, id) = s.trim().split_once(':').ok_or_else(invalid)?;
        let id: ProductId = id.parse().map_err(|_| invalid())?;

        match action.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(CartOperation::Add(id)),
            "remove" | "rm" => Ok(CartOperation::Remove(id)),
            _ => Err(invalid()),
        }
    }
}

/// Everything the cart view needs to render after a mutation.
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    pub total_price: Price,
    pub state: CartState,
}

/// Owns one session's cart and the catalog it is filled from.
pub struct CartService {
    session_id: Uuid,
    catalog: Catalog,
    cart: Cart,
}

impl CartService {
    pub fn new(catalog: Catalog) -> Self {
        let session_id = Uuid::new_v4();
        info!(
            "Cart session {} started with {} products available",
            session_id,
            catalog.len()
        );
        Self {
            session_id,
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of a catalog product. Returns the line's new quantity.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<u32, CartServiceError> {
        let product = self.catalog.find(product_id).ok_or_else(|| {
            warn!("Product {} requested but not in catalog", product_id);
            CartServiceError::ProductNotFound(product_id)
        })?;

        let previous = self.cart.state();
        self.cart = self.cart.add_product(product);
        let quantity = self.quantity_of(product_id);

        info!("Added {} to cart (quantity {})", product.name, quantity);
        self.log_transition(previous);
        Ok(quantity)
    }

    /// Takes one unit out of the cart. Returns what is left of that line,
    /// zero when the line is gone or never existed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> u32 {
        if !self.cart.contains(product_id) {
            debug!("Remove of product {} ignored: not in cart", product_id);
            return 0;
        }

        let previous = self.cart.state();
        self.cart = self.cart.remove_product(product_id);
        let quantity = self.quantity_of(product_id);

        info!("Removed one unit of product {} (left {})", product_id, quantity);
        self.log_transition(previous);
        quantity
    }

    pub fn apply(&mut self, operation: CartOperation) -> Result<u32, CartServiceError> {
        match operation {
            CartOperation::Add(id) => self.add_to_cart(id),
            CartOperation::Remove(id) => Ok(self.remove_from_cart(id)),
        }
    }

    pub fn clear(&mut self) {
        info!("Cart session {} cleared", self.session_id);
        self.cart = Cart::new();
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.cart.lines().to_vec(),
            total_items: self.cart.total_items(),
            total_price: self.cart.total_price(),
            state: self.cart.state(),
        }
    }

    fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.cart
            .line(product_id)
            .map(CartLine::quantity)
            .unwrap_or(0)
    }

    fn log_transition(&self, previous: CartState) {
        let current = self.cart.state();
        if previous != current {
            info!("Cart went from {} to {}", previous, current);
        }
        debug!(
            "Cart totals: {} items, {}",
            self.cart.total_items(),
            self.cart.total_price()
        );
    }
}
