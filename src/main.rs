mod cli;
mod formatting;
mod settings;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use aisweb_lib::{logging, AisScraper, Config, Icao, WebDriverConnector};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let args = cli::parse();

    let config = match settings::resolve_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(err.exit_code());
        }
    };

    let icao = match resolve_icao(args.icao.as_deref()) {
        Ok(icao) => icao,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(err) = logging::init(&config.log_dir, args.verbose) {
        eprintln!("error: {}", err);
        return ExitCode::from(err.exit_code());
    }

    println!("{}", formatting::banner());

    match scrape(icao, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn scrape(icao: Icao, config: &Config) -> aisweb_lib::Result<()> {
    info!(icao = %icao, base_url = %config.base_url, "starting scrape run");
    let mut scraper = AisScraper::connect(icao.clone(), config, &WebDriverConnector).await?;

    let info = scraper.fetch_aerodrome_info().await?;
    if info.is_empty() {
        println!("Aerodrome not found.");
        scraper.end().await?;
        return Ok(());
    }

    let charts = scraper.fetch_chart_listing().await?;
    println!("{}", formatting::render_report(&icao, &info, &charts));

    scraper.end().await?;
    info!("scrape run finished");
    Ok(())
}

/// Take the ICAO from the command line, or prompt for it on stdin.
fn resolve_icao(arg: Option<&str>) -> aisweb_lib::Result<Icao> {
    match arg {
        Some(value) => value.parse(),
        None => {
            print!("Enter ICAO code: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line.parse()
        }
    }
}
