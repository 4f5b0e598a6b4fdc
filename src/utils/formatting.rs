use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::models::{
    cart::{CartLine, CartState},
    multiplication::MultiplicationTable,
    product::{Price, Product},
    random_number::Band,
};
use crate::services::CartSummary;

#[derive(Tabled)]
struct CatalogTableRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Unit × Qty")]
    unit: String,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

pub fn format_money(price: Price, symbol: &str) -> String {
    format!("{}{}", symbol, price)
}

/// `$25.99 × 3`
pub fn format_line_price(line: &CartLine, symbol: &str) -> String {
    format!("{} × {}", format_money(line.unit_price(), symbol), line.quantity())
}

pub fn format_item_count(count: u64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

pub fn format_catalog_table<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    symbol: &str,
) -> String {
    let rows: Vec<CatalogTableRow> = products
        .into_iter()
        .map(|product| CatalogTableRow {
            id: product.id.0,
            name: product.name.clone(),
            price: format_money(product.price, symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left())
        .modify(Columns::last(), Alignment::right());

    table.to_string()
}

pub fn format_cart_table(lines: &[CartLine], symbol: &str) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = lines
        .iter()
        .map(|line| CartTableRow {
            id: line.product_id().0,
            name: line.product().name.clone(),
            unit: format_line_price(line, symbol),
            subtotal: format_money(line.subtotal(), symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left())
        .modify(Columns::last(), Alignment::right());

    table.to_string()
}

pub fn format_cart_summary(summary: &CartSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        style("My Cart").bold().cyan(),
        style(format!("({})", format_item_count(summary.total_items))).dim()
    ));

    match summary.state {
        CartState::Empty => {
            output.push_str(&format!("{}\n", style("The cart is empty").yellow()));
            output.push_str(&format!(
                "{}\n",
                style("Add some products to get started").dim()
            ));
        }
        CartState::Populated => {
            output.push_str(&format_cart_table(&summary.lines, symbol));
            output.push('\n');
            output.push_str(&format!(
                "{}: {}\n",
                style("Total").bold(),
                style(format_money(summary.total_price, symbol)).green().bold()
            ));
        }
    }

    output
}

pub fn format_multiplication_table(table: &MultiplicationTable) -> String {
    let mut output = format!("{}\n", style(table.title()).bold().cyan());
    for line in table.lines() {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

pub fn format_band(band: Band) -> String {
    let text = format!("{} {}", band.emoji(), band.message());
    match band {
        Band::Low => style(text).red().to_string(),
        Band::Middle => style(text).yellow().to_string(),
        Band::High => style(text).blue().to_string(),
        Band::VeryHigh => style(text).green().to_string(),
    }
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{cart::Cart, catalog::Catalog};

    #[test]
    fn test_line_price_format() {
        let mouse = Product::new(2, "Mouse", Price::from_cents(2599));
        let cart = Cart::new()
            .add_product(&mouse)
            .add_product(&mouse)
            .add_product(&mouse);

        assert_eq!(format_line_price(&cart.lines()[0], "$"), "$25.99 × 3");
        assert_eq!(format_money(cart.total_price(), "$"), "$77.97");
    }

    #[test]
    fn test_item_count_pluralization() {
        assert_eq!(format_item_count(0), "0 items");
        assert_eq!(format_item_count(1), "1 item");
        assert_eq!(format_item_count(2), "2 items");
    }

    #[test]
    fn test_catalog_table_lists_every_product() {
        let table = format_catalog_table(Catalog::default().products(), "$");
        for name in ["Laptop", "Mouse", "Teclado", "Monitor", "Auriculares"] {
            assert!(table.contains(name), "missing {}", name);
        }
        assert!(table.contains("$999.99"));
    }

    #[test]
    fn test_catalog_table_with_price_ceiling() {
        let catalog = Catalog::default();
        let table = format_catalog_table(catalog.products_up_to(Price::from_cents(10_000)), "$");
        assert!(table.contains("Mouse") && table.contains("Teclado"));
        assert!(!table.contains("Laptop"));
    }

    #[test]
    fn test_empty_cart_table_is_blank() {
        assert!(format_cart_table(&[], "$").is_empty());
    }

    #[test]
    fn test_multiplication_table_output() {
        let table = MultiplicationTable::new(5);
        let output = format_multiplication_table(&table);
        assert!(output.contains("5 × 10 = 50"));
        assert!(output.contains("Table of 5"));
    }
}
