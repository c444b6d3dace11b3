mod commands;
mod terminal;

use commands::{CommandLine, Commands, cart, catalog, shop};
use storefront_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging();
    print::banner(cfg.quiet);

    match commands.command {
        Commands::Products => catalog::products(&cfg),
        Commands::Add { name, price } => cart::add(&name, price, &cfg),
        Commands::Qty { name, delta } => cart::change_quantity(&name, delta, &cfg),
        Commands::Remove { name } => cart::remove(&name, &cfg),
        Commands::Clear => cart::clear(&cfg),
        Commands::Cart => cart::show(&cfg),
        Commands::Badge => cart::badge(&cfg),
        Commands::Search { query } => catalog::search(&query, &cfg),
        Commands::Shop => shop::shop(&cfg).await,
    }
}
