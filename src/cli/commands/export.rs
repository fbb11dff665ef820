use crate::cli::commands::{require_admin, require_session, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let session = require_session(cli)?;
        require_admin(&session)?;

        let store = store_for(cli, cfg);
        ExportLogic::export(&store, format, file, *force)?;
    }
    Ok(())
}
