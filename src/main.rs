use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::process::ExitCode;

use crossrate::convert::convert;
use crossrate::{api, config};

#[derive(Parser)]
#[command(name = "crossrate", version, about = "Convert amounts between currencies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an amount from one currency to another
    Convert {
        from_currency: String,
        to_currency: String,
        amount: String,
    },
    /// Print every rate known for a base currency
    List {
        #[arg(default_value = config::BASE_CURRENCY)]
        base_currency: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> crossrate::Result<()> {
    match cli.command {
        Command::Convert {
            from_currency,
            to_currency,
            amount,
        } => {
            let rates = api::fetch_rates(config::BASE_CURRENCY).await?;
            let conversion = convert(&rates, &from_currency, &to_currency, &amount)?;
            println!("{conversion}");
        }
        Command::List { base_currency } => {
            let base = base_currency.to_ascii_lowercase();
            let rates = api::fetch_rates(&base).await?;

            let mut entries: Vec<_> = rates.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            println!("Exchange rates for {}:", base.to_uppercase());
            for (code, rate) in entries {
                println!("{code}: {rate}");
            }
        }
    }
    Ok(())
}
