use clap::Parser;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::PathBuf;
use stockroom::api::{ConfigAction, InventoryApi, ProductUpdate, StockroomPaths};
use stockroom::commands;
use stockroom::config::StockroomConfig;
use stockroom::error::{InventoryError, Result};
use stockroom::model::Product;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_full_products, print_messages, print_products, print_stats, Style};

const HOME_ENV: &str = "STOCKROOM_HOME";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "stockroom=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

struct AppContext {
    paths: StockroomPaths,
    config: StockroomConfig,
}

impl AppContext {
    fn style(&self) -> Style<'_> {
        Style {
            currency: &self.config.currency,
            low_stock_threshold: self.config.low_stock_threshold,
        }
    }

    fn open_api(&self) -> Result<InventoryApi> {
        InventoryApi::open(self.paths.clone())
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            price,
            quantity,
            description,
        }) => {
            let product =
                Product::new(name, category, price, quantity).with_description(description);
            handle_add(&ctx, product)
        }
        Some(Commands::Show { ids }) => handle_show(&ctx, ids),
        Some(Commands::Update {
            id,
            name,
            category,
            price,
            quantity,
            description,
        }) => {
            let update = ProductUpdate {
                id,
                name,
                category,
                price,
                quantity,
                description,
            };
            handle_update(&ctx, update)
        }
        Some(Commands::Delete { ids }) => handle_delete(&ctx, ids),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Category { name }) => handle_category(&ctx, name),
        Some(Commands::LowStock { threshold }) => handle_low_stock(&ctx, threshold),
        Some(Commands::Stats { json }) => handle_stats(&ctx, json),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Import { path }) => handle_import(&ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                InventoryError::Config(format!(
                    "Could not determine a data directory; set {}",
                    HOME_ENV
                ))
            })?,
    };

    let config = StockroomConfig::load(&home)?;
    let data_file = match &cli.file {
        Some(file) => file.clone(),
        None => config.data_path(&home),
    };

    Ok(AppContext {
        paths: StockroomPaths { home, data_file },
        config,
    })
}

fn handle_add(ctx: &AppContext, product: Product) -> Result<()> {
    let mut api = ctx.open_api()?;
    let result = api.add_product(product)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: Vec<u32>) -> Result<()> {
    let api = ctx.open_api()?;
    let result = api.view_products(&ids)?;
    print_full_products(&result.listed_products, &ctx.style());
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &AppContext, update: ProductUpdate) -> Result<()> {
    let mut api = ctx.open_api()?;
    let result = api.update_product(&update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, ids: Vec<u32>) -> Result<()> {
    let mut api = ctx.open_api()?;
    let result = api.delete_products(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let api = ctx.open_api()?;
    let result = api.list_products()?;
    if json {
        return print_json(&result.listed_products);
    }
    print_products(&result.listed_products, &ctx.style());
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let api = ctx.open_api()?;
    let result = api.search_by_name(&term)?;
    print_listing(ctx, &result);
    Ok(())
}

fn handle_category(ctx: &AppContext, name: String) -> Result<()> {
    let api = ctx.open_api()?;
    let result = api.search_by_category(&name)?;
    print_listing(ctx, &result);
    Ok(())
}

fn handle_low_stock(ctx: &AppContext, threshold: Option<u32>) -> Result<()> {
    let api = ctx.open_api()?;
    let threshold = threshold.unwrap_or(ctx.config.low_stock_threshold);
    let result = api.low_stock(threshold)?;
    let style = Style {
        currency: &ctx.config.currency,
        low_stock_threshold: threshold,
    };
    if !result.listed_products.is_empty() {
        print_products(&result.listed_products, &style);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext, json: bool) -> Result<()> {
    let api = ctx.open_api()?;
    let result = api.stats()?;
    let stats = result.stats.unwrap_or_default();
    if json {
        return print_json(&stats);
    }
    print_stats(&stats, &ctx.style());
    Ok(())
}

fn handle_export(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let api = ctx.open_api()?;
    let result = api.export(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let mut api = ctx.open_api()?;
    let result = api.import(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    // Does not open the inventory file.
    let result = commands::config::run(&ctx.paths, action)?;
    if let Some(config) = &result.config {
        for key in stockroom::config::KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_listing(ctx: &AppContext, result: &commands::CmdResult) {
    if !result.listed_products.is_empty() {
        print_products(&result.listed_products, &ctx.style());
    }
    print_messages(&result.messages);
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
