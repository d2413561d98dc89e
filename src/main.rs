use clap::Parser;
use salescope::cli::commands::{Cli, Commands, MonthArgs, QueryArgs};
use salescope::config::Config;
use salescope::domain::values::month::Month;
use salescope::domain::values::query::TransactionQuery;
use salescope::infrastructure::seed::file::FileSeedSource;
use salescope::infrastructure::seed::http::HttpSeedSource;
use salescope::{api, logging, Salescope};
use serde::Serialize;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };

    let app = match Salescope::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing Salescope: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(app, &config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    app: Salescope,
    config: &Config,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or(config.bind_address);
            api::serve(Arc::new(app), bind).await?;
        }
        Commands::Init { url, file } => {
            let report = match file {
                Some(path) => app.import_seed(&FileSeedSource::new(path)).await?,
                None => match url {
                    Some(url) => app.import_seed(&HttpSeedSource::new(url)?).await?,
                    None => app.initialize().await?,
                },
            };
            print_json(&report)?;
        }
        Commands::Transactions(args) => {
            print_json(&app.list_transactions(&to_query(args)?).await?)?;
        }
        Commands::Stats(args) => {
            print_json(&app.statistics(&month_query(args)?).await?)?;
        }
        Commands::BarChart(args) => {
            print_json(&app.histogram(&month_query(args)?).await?)?;
        }
        Commands::PieChart(args) => {
            print_json(&app.category_counts(&month_query(args)?).await?)?;
        }
        Commands::Combined(args) => {
            print_json(&app.combined_view(&to_query(args)?).await?)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_month(s: &str) -> Result<i64, Box<dyn std::error::Error>> {
    Ok(i64::from(s.parse::<Month>()?.number()))
}

fn month_query(args: MonthArgs) -> Result<TransactionQuery, Box<dyn std::error::Error>> {
    Ok(TransactionQuery::for_month(parse_month(&args.month)?))
}

fn to_query(args: QueryArgs) -> Result<TransactionQuery, Box<dyn std::error::Error>> {
    Ok(TransactionQuery {
        month: args.month.as_deref().map(parse_month).transpose()?,
        search: args.search,
        page: args.page,
        per_page: args.per_page,
    })
}
