use crate::cli::commands::{require_admin, require_session, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = &cli.command {
        let session = require_session(cli)?;
        require_admin(&session)?;

        let store = store_for(cli, cfg);
        BackupLogic::backup(store.path(), file, *compress)?;
    }
    Ok(())
}
