//! `shelf` command-line front end

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use shelf_core::{settle_transitions, CatalogController, Effect, InitialPage, ShelfConfig, UiEvent};
use shelf_storage::FileStore;
use shelf_view::SortKey;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DATA_DIR: &str = ".shelf";

fn cli() -> Command {
    Command::new("shelf")
        .version(shelf_core::VERSION)
        .about("Product catalog with filtering, validated additions and local persistence")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the persisted catalog"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("seed")
                .about("Derive the catalog from listing markup unless one is stored")
                .arg(
                    Arg::new("markup")
                        .long("markup")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("HTML file with product-item elements"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Print products that pass the filter")
                .arg(Arg::new("search").long("search").help("Name keyword"))
                .arg(Arg::new("min").long("min").help("Minimum price"))
                .arg(Arg::new("max").long("max").help("Maximum price"))
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .default_value("none")
                        .value_parser(SortKey::ALL.map(|key| key.as_str()))
                        .help("Sort order"),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Validate and add a product")
                .arg(Arg::new("name").long("name").help("Product name"))
                .arg(Arg::new("price").long("price").help("Price, > 0"))
                .arg(Arg::new("desc").long("desc").help("Description"))
                .arg(Arg::new("img").long("img").help("Absolute image URL")),
        )
        .subcommand(Command::new("render").about("Print the listing as HTML"))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(matches: &ArgMatches) -> Result<ShelfConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ShelfConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ShelfConfig::default(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config.data_dir = Some(dir.clone());
    }
    if config.data_dir.is_none() {
        config.data_dir = Some(PathBuf::from(DEFAULT_DATA_DIR));
    }
    tracing::debug!(
        data_dir = ?config.data_dir,
        storage_key = %config.storage_key,
        "configuration loaded"
    );
    Ok(config)
}

fn open(config: ShelfConfig, markup: &str) -> Result<CatalogController<FileStore>> {
    CatalogController::open_in_data_dir(config, InitialPage::new(markup), Instant::now())
        .context("opening catalog")
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map_or("", String::as_str)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));
    let config = load_config(&matches)?;

    match matches.subcommand() {
        Some(("seed", args)) => {
            let path = args
                .get_one::<PathBuf>("markup")
                .context("--markup is required")?;
            let markup = std::fs::read_to_string(path)
                .with_context(|| format!("reading markup from {}", path.display()))?;
            let controller = open(config, &markup)?;
            println!(
                "catalog ready: {} products ({:?})",
                controller.catalog().len(),
                controller.origin()
            );
        }
        Some(("list", args)) => {
            let mut controller = open(config, "")?;
            let controls = controller.controls_mut();
            controls.keyword = arg(args, "search").to_string();
            controls.price_min = arg(args, "min").to_string();
            controls.price_max = arg(args, "max").to_string();
            controls.sort = arg(args, "sort").to_string();
            controller.apply_filter(Instant::now());
            settle_transitions(&mut controller).await;

            let formatter = controller.formatter();
            for product in controller.list().visible_products() {
                println!("{}\t{}", product.name, formatter.format(product.price));
            }
        }
        Some(("add", args)) => {
            let mut controller = open(config, "")?;
            controller.toggle_form();
            let fields = &mut controller.form_mut().fields;
            fields.name = arg(args, "name").to_string();
            fields.price = arg(args, "price").to_string();
            fields.description = arg(args, "desc").to_string();
            fields.image_url = arg(args, "img").to_string();

            match controller.handle(UiEvent::Submit, Instant::now()) {
                Effect::Added(_) => {
                    let product = &controller.catalog().as_slice()[0];
                    println!(
                        "added {} ({})",
                        product.name,
                        controller.formatter().format(product.price)
                    );
                }
                Effect::Rejected(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
                other => anyhow::bail!("unexpected submit effect: {other:?}"),
            }
        }
        Some(("render", _)) => {
            let controller = open(config, "")?;
            println!("{}", controller.render_html());
        }
        _ => unreachable!("subcommand_required"),
    }

    Ok(())
}
