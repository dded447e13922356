use anyhow::Context;
use clap::Parser;
use german_vocab::{cli, config, error, fetch, prompt, session, workbook};
use cli::{Cli, Commands};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let config = Config::load().context("failed to load config")?;
    let workbook_path = cli.workbook.clone().unwrap_or_else(|| config.workbook_path.clone());

    match cli.command.unwrap_or(Commands::Add) {
        Commands::Add => {
            println!("📚 german-vocab - {}\n", workbook_path.display());

            let fetcher = fetch::HttpFetcher::new(config.timeout_seconds)?;
            let mut prompter = prompt::DialoguerPrompter;
            let mut session = session::Session::open(&config, &workbook_path, &fetcher, &mut prompter)
                .with_context(|| format!("failed to open {}", workbook_path.display()))?;
            session.run()?;

            println!("\n✔ Saved: {}", workbook_path.display());
        }

        Commands::List { sheet } => {
            let book = workbook::load(&workbook_path)
                .with_context(|| format!("failed to open {}", workbook_path.display()))?;

            match sheet {
                Some(name) => {
                    let collection = book
                        .get(&name)
                        .ok_or_else(|| error::VocabError::CollectionNotFound(name.clone()))?;
                    println!("{} ({} rows)", collection.name, collection.len());
                    println!("  {}", collection.header.join(" | "));
                    for row in collection.rows() {
                        println!("  {}", row.cells().join(" | "));
                    }
                }
                None => {
                    for collection in book.collections() {
                        println!("  {:<12} {:>5}", collection.name, collection.len());
                    }
                }
            }
        }

        Commands::Config { set_workbook, show } => {
            let mut config = config;

            if let Some(path) = set_workbook {
                config.set_workbook_path(path)?;
                println!("✔ Workbook path updated");
            }

            if show {
                println!("Config: {}", Config::config_path()?.display());
                println!("  workbook:     {}", config.workbook_path.display());
                println!("  dictionary:   {}", config.dictionary_url);
                println!("  conjugation:  {}", config.conjugation_url);
                println!("  timeout:      {}s", config.timeout_seconds);
                println!("  page size:    {}", config.page_size);
            }
        }
    }

    Ok(())
}
