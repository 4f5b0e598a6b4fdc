use serde::Serialize;

use crate::models::product::{Price, Product, ProductId};

/// One product in the cart together with how many units were added.
///
/// A line never holds zero units: taking away the last one removes the
/// line from the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Price {
        self.product.price
    }

    pub fn subtotal(&self) -> Price {
        self.product.price * self.quantity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CartState {
    Empty,
    Populated,
}

impl std::fmt::Display for CartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartState::Empty => write!(f, "empty"),
            CartState::Populated => write!(f, "populated"),
        }
    }
}

/// Ordered cart lines keyed by product id.
///
/// `Cart` is a value: `add_product` and `remove_product` leave `self`
/// untouched and hand back the next cart. Lines stay in the order their
/// product was first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, merging into an existing line when the
    /// product is already in the cart.
    pub fn add_product(&self, product: &Product) -> Cart {
        let mut lines = self.lines.clone();

        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => lines.push(CartLine::new(product.clone())),
        }

        Cart { lines }
    }

    /// Takes one unit of `product_id` out of the cart. Unknown ids are a
    /// no-op.
    pub fn remove_product(&self, product_id: ProductId) -> Cart {
        let mut lines = self.lines.clone();

        if let Some(index) = lines.iter().position(|line| line.product.id == product_id) {
            if lines[index].quantity > 1 {
                lines[index].quantity -= 1;
            } else {
                lines.remove(index);
            }
        }

        Cart { lines }
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.line(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.lines.is_empty() {
            CartState::Empty
        } else {
            CartState::Populated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse() -> Product {
        Product::new(2, "Mouse", Price::from_cents(2599))
    }

    fn keyboard() -> Product {
        Product::new(3, "Teclado", Price::from_cents(7999))
    }

    fn laptop() -> Product {
        Product::new(1, "Laptop", Price::from_cents(99999))
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_adding_to_empty_cart_gives_one_item() {
        for product in [mouse(), keyboard(), laptop()] {
            let cart = Cart::new().add_product(&product);
            assert_eq!(cart.total_items(), 1);
            assert_eq!(cart.state(), CartState::Populated);
        }
    }

    #[test]
    fn test_adding_same_product_twice_merges_into_one_line() {
        let cart = Cart::new().add_product(&mouse()).add_product(&mouse());

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity(), 2);
        assert_eq!(cart.total_price().to_string(), "51.98");
    }

    #[test]
    fn test_new_products_are_appended_in_first_seen_order() {
        let cart = Cart::new()
            .add_product(&keyboard())
            .add_product(&mouse())
            .add_product(&keyboard())
            .add_product(&laptop());

        let ids: Vec<u32> = cart.lines().iter().map(|line| line.product_id().0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(cart.line(ProductId(3)).unwrap().quantity(), 2);
    }

    #[test]
    fn test_add_does_not_touch_the_original_cart() {
        let before = Cart::new().add_product(&mouse());
        let after = before.add_product(&mouse());

        assert_eq!(before.total_items(), 1);
        assert_eq!(after.total_items(), 2);
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let empty = Cart::new();
        assert_eq!(empty.remove_product(ProductId(2)), empty);

        let cart = Cart::new().add_product(&mouse()).add_product(&keyboard());
        assert_eq!(cart.remove_product(ProductId(99)), cart);
    }

    #[test]
    fn test_remove_decrements_one_unit_and_keeps_position() {
        let cart = Cart::new()
            .add_product(&mouse())
            .add_product(&mouse())
            .add_product(&keyboard());

        let cart = cart.remove_product(ProductId(2));

        assert_eq!(cart.lines()[0].product_id(), ProductId(2));
        assert_eq!(cart.lines()[0].quantity(), 1);
        assert_eq!(cart.lines()[1].product_id(), ProductId(3));
    }

    #[test]
    fn test_removing_last_unit_deletes_the_line() {
        let cart = Cart::new().add_product(&mouse()).add_product(&keyboard());
        let cart = cart.remove_product(ProductId(2));

        assert!(!cart.contains(ProductId(2)));
        assert_eq!(cart.lines().len(), 1);
        assert!(cart.lines().iter().all(|line| line.quantity() >= 1));
    }

    #[test]
    fn test_repeated_removes_drain_then_stay_no_op() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart = cart.add_product(&mouse());
        }
        cart = cart.add_product(&keyboard());

        for _ in 0..3 {
            cart = cart.remove_product(ProductId(2));
        }
        assert!(!cart.contains(ProductId(2)));

        let drained = cart.clone();
        for _ in 0..5 {
            cart = cart.remove_product(ProductId(2));
        }
        assert_eq!(cart, drained);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_add_then_remove_returns_to_empty() {
        let cart = Cart::new().add_product(&mouse()).remove_product(ProductId(2));
        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_total_price_is_sum_of_subtotals() {
        let cart = Cart::new()
            .add_product(&laptop())
            .add_product(&mouse())
            .add_product(&mouse())
            .add_product(&keyboard());

        let expected: u64 = cart
            .lines()
            .iter()
            .map(|line| line.unit_price().cents() * u64::from(line.quantity()))
            .sum();
        assert_eq!(cart.total_price().cents(), expected);
        assert_eq!(cart.total_price().to_string(), "1131.96");
    }

    #[test]
    fn test_mixed_cart_scenario() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart = cart.add_product(&mouse());
        }
        assert_eq!(cart.total_items(), 3);
        let line = cart.line(ProductId(2)).unwrap();
        assert_eq!((line.unit_price().to_string(), line.quantity()), ("25.99".to_string(), 3));

        cart = cart.remove_product(ProductId(2));
        assert_eq!(cart.line(ProductId(2)).unwrap().quantity(), 2);

        cart = cart.add_product(&keyboard());
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().to_string(), "131.97");
    }

    #[test]
    fn test_two_different_products_total() {
        let cart = Cart::new().add_product(&mouse()).add_product(&keyboard());
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().to_string(), "105.98");
    }
}
