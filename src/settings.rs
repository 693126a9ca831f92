use std::time::Duration;

use aisweb_lib::{Config, Result};

use crate::cli::Cli;

/// Merge the optional config file with CLI overrides; flags win over the
/// file, the file wins over built-in defaults.
pub fn resolve_config(args: &Cli) -> Result<Config> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(webdriver_url) = &args.webdriver_url {
        config.webdriver_url = webdriver_url.clone();
    }
    if let Some(seconds) = args.action_delay {
        config.action_delay = Duration::from_secs(seconds);
    }
    if let Some(log_dir) = &args.log_dir {
        config.log_dir = log_dir.clone();
    }

    config.validate()?;
    Ok(config)
}
