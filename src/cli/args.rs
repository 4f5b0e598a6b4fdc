use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::product::Price;
use crate::services::CartOperation;

#[derive(Parser)]
#[command(name = "shop")]
#[command(about = "A small storefront with a shopping cart and a few companion widgets")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON catalog file to use instead of the built-in products
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the products available for purchase
    Catalog {
        /// Only show products costing at most this much, e.g. 100 or 79.99
        #[arg(long)]
        max_price: Option<Price>,
    },
    /// Fill a shopping cart, interactively or from a list of operations
    Cart {
        /// Comma separated operations applied in order, e.g. add:2,add:2,remove:2
        #[arg(long, value_delimiter = ',')]
        ops: Vec<CartOperation>,
        /// Print the final cart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rate our service from 1 to 5 stars
    Survey {
        /// Submit this rating directly
        #[arg(short, long)]
        rating: Option<u8>,
    },
    /// Register with a name and an email
    Register {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Draw lucky numbers between 1 and 100
    Random {
        /// How many numbers to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
    /// Print the multiplication table of a number
    Table {
        /// Number to build the table for
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::ProductId;

    #[test]
    fn test_parse_cart_ops_in_order() {
        let args = Args::try_parse_from(["shop", "cart", "--ops", "add:2,add:3,remove:2"]).unwrap();
        match args.command {
            Commands::Cart { ops, json } => {
                assert_eq!(
                    ops,
                    vec![
                        CartOperation::Add(ProductId(2)),
                        CartOperation::Add(ProductId(3)),
                        CartOperation::Remove(ProductId(2)),
                    ]
                );
                assert!(!json);
            }
            _ => panic!("expected cart command"),
        }
    }

    #[test]
    fn test_rejects_malformed_cart_op() {
        assert!(Args::try_parse_from(["shop", "cart", "--ops", "buy:2"]).is_err());
    }

    #[test]
    fn test_parse_catalog_max_price() {
        let args = Args::try_parse_from(["shop", "catalog", "--max-price", "100.50"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::Catalog { max_price: Some(price) } if price == Price::from_cents(10_050)
        ));

        let args = Args::try_parse_from(["shop", "catalog"]).unwrap();
        assert!(matches!(args.command, Commands::Catalog { max_price: None }));

        assert!(Args::try_parse_from(["shop", "catalog", "--max-price", "abc"]).is_err());
        assert!(Args::try_parse_from(["shop", "catalog", "--max-price", "1.999"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args =
            Args::try_parse_from(["shop", "--verbose", "table", "7", "--catalog", "c.json"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.catalog, Some(PathBuf::from("c.json")));
        assert!(matches!(args.command, Commands::Table { ref number } if number == "7"));
    }
}
