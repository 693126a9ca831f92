use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aisweb")]
#[command(
    version,
    about = "AISWEB scraper - METAR/TAF, sun times and chart listings for an ICAO code",
    long_about = "AISWEB scraper\n\nDrives a remote browser session against the AISWEB site and prints, for one\nairport ICAO code: sunrise/sunset times, the current METAR and TAF, and the\nlist of published aeronautical charts.\n\nThe remote browser is a Selenium-compatible endpoint (default http://chrome:4444/wd/hub)."
)]
pub struct Cli {
    /// ICAO code of the aerodrome; prompted on stdin when omitted
    pub icao: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for URLs/timeouts/delay; CLI flags override config"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "URL", help = "Root URL of the AISWEB site")]
    pub base_url: Option<String>,

    #[arg(long, value_name = "URL", help = "Remote WebDriver endpoint")]
    pub webdriver_url: Option<String>,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Pause after every successful element access"
    )]
    pub action_delay: Option<u64>,

    #[arg(long, value_name = "PATH", help = "Directory for the per-run log file")]
    pub log_dir: Option<PathBuf>,

    #[arg(long, help = "Enable verbose (debug-level) logging")]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
