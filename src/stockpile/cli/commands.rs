use super::logging;
use super::render::{
    print_config, print_groups, print_messages, print_products, print_summary,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use stockpile::api::{open_file_store, CmdResult, ConfigAction, StockApi, StockPaths};
use stockpile::error::{Result, StockError};
use stockpile::model::NewProduct;
use stockpile::store::StorageBackend;
use std::path::PathBuf;

const HOME_ENV: &str = "STOCKPILE_HOME";

struct AppContext {
    api: StockApi<Box<dyn StorageBackend>>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;
    print_messages(&ctx.api.load_messages());

    match cli.command {
        Some(Commands::Add {
            id,
            name,
            quantity,
            price,
        }) => handle_add(&mut ctx, NewProduct::new(id, name, quantity, price)),
        Some(Commands::Remove { id }) => handle_mutation(ctx.api.remove_product(&id)),
        Some(Commands::SetQuantity { id, quantity }) => {
            handle_mutation(ctx.api.set_quantity(&id, quantity))
        }
        Some(Commands::SetPrice { id, price }) => handle_mutation(ctx.api.set_price(&id, price)),
        Some(Commands::Rename { id, name }) => handle_mutation(ctx.api.rename_product(&id, &name)),
        Some(Commands::Update {
            id,
            quantity,
            price,
        }) => handle_mutation(ctx.api.update_product(&id, quantity, price)),
        Some(Commands::Search { term }) => handle_search(&ctx, &term),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Summary) => handle_summary(&ctx),
        Some(Commands::Groups) => handle_groups(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home(cli.home.clone())?;
    let api = open_file_store(StockPaths::new(home));
    Ok(AppContext { api })
}

fn resolve_home(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = flag {
        return Ok(home);
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stockpile", "stockpile")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockError::Config("could not determine a data directory".to_string()))
}

fn handle_add(ctx: &mut AppContext, new: NewProduct) -> Result<()> {
    let result = ctx.api.add_product(new)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mutation(result: Result<CmdResult>) -> Result<()> {
    let result = result?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_products(term)?;
    if !result.listed_products.is_empty() {
        print_products(&result.listed_products);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print_products(&result.listed_products);
    if let Some(summary) = &result.summary {
        if summary.count > 0 {
            println!();
            print_summary(summary);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_summary(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.summary()?;
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    Ok(())
}

fn handle_groups(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.name_groups()?;
    print_groups(&result.groups);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => match key.as_str() {
            "format" => ConfigAction::SetFormat(value.parse().map_err(StockError::Config)?),
            "data-file" => ConfigAction::SetDataFile(value),
            other => {
                return Err(StockError::Config(format!("Unknown config key: {}", other)));
            }
        },
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config, &ctx.api.paths().home);
    }
    print_messages(&result.messages);
    Ok(())
}
