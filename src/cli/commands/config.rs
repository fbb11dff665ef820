use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning("No config file found; defaults are in effect. Run `spotbook init`.");
            }
        }

        if *check {
            if !path.exists() {
                warning("No config file found; defaults are in effect.");
                return Ok(());
            }
            let content = fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Config>(&content) {
                Ok(cfg) => {
                    success("Configuration OK");
                    info(format!("Workbook: {}", cfg.workbook));
                    info(format!("Cache TTL: {}s", cfg.cache_ttl_secs));
                }
                Err(e) => return Err(AppError::Config(e.to_string())),
            }
        }
    }
    Ok(())
}
