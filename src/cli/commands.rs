use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::{error, info, warn};

use crate::{
    cli::args::*,
    models::{
        catalog::Catalog,
        product::Price,
        multiplication::MultiplicationTable,
        random_number::Band,
        registration::RegistrationForm,
        survey::{Rating, Survey},
    },
    repositories::{CatalogRepository, JsonCatalogRepository, StaticCatalogRepository},
    services::{CartOperation, CartService, CartServiceError, RandomNumberService},
    utils::{
        formatting::{
            format_band, format_cart_summary, format_catalog_table, format_date, format_money,
            format_multiplication_table,
        },
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static DICE: Emoji<'_, '_> = Emoji("🎰 ", "");

pub struct CliApp {
    config: Config,
    catalog: Catalog,
}

impl CliApp {
    pub async fn new(config: Config) -> Result<Self> {
        let repository: Box<dyn CatalogRepository> = match &config.catalog_path {
            Some(path) => Box::new(JsonCatalogRepository::new(path)),
            None => Box::new(StaticCatalogRepository),
        };

        let catalog = repository
            .load()
            .await
            .context("Failed to load product catalog")?;

        Ok(Self { config, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Catalog { max_price } => self.handle_catalog(max_price),
            Commands::Cart { ops, json } => self.handle_cart(ops, json),
            Commands::Survey { rating } => self.handle_survey(rating),
            Commands::Register { name, email } => self.handle_register(name, email),
            Commands::Random { count } => self.handle_random(count).await,
            Commands::Table { number } => self.handle_table(&number),
        }
    }

    fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    fn handle_catalog(&self, max_price: Option<Price>) -> Result<()> {
        let products = match max_price {
            Some(max) => self.catalog.products_up_to(max),
            None => self.catalog.products().iter().collect(),
        };

        println!("{} {}", CART, style("Products").bold().cyan());
        if products.is_empty() {
            if let Some(max) = max_price {
                println!(
                    "{} No products at or below {}",
                    WARNING,
                    format_money(max, self.symbol())
                );
            }
            return Ok(());
        }

        let shown = products.len();
        println!("{}", format_catalog_table(products, self.symbol()));
        println!("{} of {} available", shown, self.catalog.len());
        Ok(())
    }

    // Cart Commands
    fn handle_cart(&self, ops: Vec<CartOperation>, json: bool) -> Result<()> {
        let mut service = CartService::new(self.catalog.clone());

        if ops.is_empty() {
            self.run_cart_session(&mut service)?;
        } else {
            for op in ops {
                match service.apply(op) {
                    Ok(_) => {}
                    Err(CartServiceError::ProductNotFound(id)) => {
                        println!("{} No product with id {}", CROSS, style(id).red());
                    }
                    Err(e) => {
                        println!("{} {}", CROSS, style(&e).red());
                        error!("Cart operation failed: {}", e);
                    }
                }
            }
        }

        let summary = service.summary();
        if json {
            let rendered = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize cart")?;
            println!("{}", rendered);
        } else {
            print!("{}", format_cart_summary(&summary, self.symbol()));
        }

        info!(
            "Cart session {} finished with {} items",
            service.session_id(),
            summary.total_items
        );
        Ok(())
    }

    fn run_cart_session(&self, service: &mut CartService) -> Result<()> {
        let theme = ColorfulTheme::default();
        let actions = ["Add a product", "Remove one unit", "Empty the cart", "Done"];

        loop {
            print!("{}", format_cart_summary(&service.summary(), self.symbol()));

            let action = Select::with_theme(&theme)
                .with_prompt("What next?")
                .items(&actions)
                .default(0)
                .interact()?;

            match action {
                0 => {
                    let labels: Vec<String> = self
                        .catalog
                        .products()
                        .iter()
                        .map(|p| format!("{} ({}{})", p.name, self.symbol(), p.price))
                        .collect();
                    let choice = Select::with_theme(&theme)
                        .with_prompt("Add to cart")
                        .items(&labels)
                        .default(0)
                        .interact()?;
                    let id = self.catalog.products()[choice].id;
                    service.add_to_cart(id)?;
                }
                1 => {
                    if service.cart().is_empty() {
                        println!("{} Nothing to remove", WARNING);
                        continue;
                    }
                    let lines = service.cart().lines().to_vec();
                    let labels: Vec<String> = lines
                        .iter()
                        .map(|line| format!("{} × {}", line.product().name, line.quantity()))
                        .collect();
                    let choice = Select::with_theme(&theme)
                        .with_prompt("Remove one unit of")
                        .items(&labels)
                        .default(0)
                        .interact()?;
                    service.remove_from_cart(lines[choice].product_id());
                }
                2 => service.clear(),
                _ => break,
            }
        }

        Ok(())
    }

    // Survey Commands
    fn handle_survey(&self, rating: Option<u8>) -> Result<()> {
        let mut survey = Survey::new();

        if let Some(value) = rating {
            let rating = Rating::try_from(value)?;
            survey.select(rating);
            return self.submit_survey(&mut survey);
        }

        let theme = ColorfulTheme::default();
        loop {
            println!(
                "{} {}",
                ROCKET,
                style("How satisfied are you with our service?").bold().cyan()
            );

            let options: Vec<Rating> = Rating::all().collect();
            let labels: Vec<String> = options
                .iter()
                .map(|r| format!("{} {} - {}", r.emoji(), r, r.label()))
                .collect();
            let choice = Select::with_theme(&theme)
                .with_prompt("Your rating")
                .items(&labels)
                .interact()?;
            survey.select(options[choice]);

            self.submit_survey(&mut survey)?;

            let again = Confirm::with_theme(&theme)
                .with_prompt("Take another survey?")
                .default(false)
                .interact()?;
            if !again {
                break;
            }
            survey.reset();
        }

        Ok(())
    }

    fn submit_survey(&self, survey: &mut Survey) -> Result<()> {
        match survey.submit() {
            Ok(receipt) => {
                println!("{} {}", CHECKMARK, style("Thanks for your feedback!").bold().green());
                println!("{} You rated us {}", receipt.rating.emoji(), receipt.rating);
                println!("{}", receipt.rating.stars());
                println!("Submitted: {}", style(format_date(&receipt.submitted_at)).dim());
                info!("Survey submitted with rating {}", receipt.rating.value());
            }
            Err(e) => {
                println!("{} {}", WARNING, style(&e).yellow());
                warn!("Survey not submitted: {}", e);
            }
        }
        Ok(())
    }

    // Registration Commands
    fn handle_register(&self, name: Option<String>, email: Option<String>) -> Result<()> {
        let mut form = RegistrationForm::new();
        let interactive = name.is_none() || email.is_none();

        if let Some(name) = name {
            form.set_name(name);
        }
        if let Some(email) = email {
            form.set_email(email);
        }

        if interactive {
            let theme = ColorfulTheme::default();
            while !form.is_valid() {
                let name: String = Input::with_theme(&theme)
                    .with_prompt("Full name")
                    .with_initial_text(form.name.clone())
                    .allow_empty(true)
                    .interact_text()?;
                let email: String = Input::with_theme(&theme)
                    .with_prompt("Email")
                    .with_initial_text(form.email.clone())
                    .allow_empty(true)
                    .interact_text()?;
                form.set_name(name);
                form.set_email(email);

                if !form.is_valid() {
                    println!("{} Fill in both fields", WARNING);
                }
            }
        }

        match form.submit() {
            Ok(receipt) => {
                println!("{} {}", CHECKMARK, style("Registration complete!").bold().green());
                println!("Name: {}", style(&receipt.name).green());
                println!("Email: {}", style(&receipt.email).green());
                println!("A confirmation email will follow shortly.");
                info!("Registered {}", receipt.email);
            }
            Err(e) => {
                println!("{} {}", CROSS, style(&e).red());
                warn!("Registration rejected: {}", e);
            }
        }

        Ok(())
    }

    // Generator Commands
    async fn handle_random(&self, count: u32) -> Result<()> {
        let mut service = RandomNumberService::new(self.config.random_delay);

        for _ in 0..count {
            println!("{} {}", DICE, style("Generating...").dim());
            let number = service.generate().await;
            println!(
                "Your number is: {}  {}",
                style(number).bold().magenta(),
                format_band(Band::of(number))
            );
        }

        Ok(())
    }

    fn handle_table(&self, input: &str) -> Result<()> {
        match MultiplicationTable::from_input(input) {
            Ok(table) => print!("{}", format_multiplication_table(&table)),
            Err(e) => {
                println!("{} {}", WARNING, style(&e).yellow());
                warn!("No table generated: {}", e);
            }
        }
        Ok(())
    }
}
