use crate::cli::commands::{require_admin, require_session, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::admin;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Reassign { from, to, name } = &cli.command {
        let session = require_session(cli)?;
        require_admin(&session)?;

        admin::validate_reassign_inputs(from, to, name)?;

        let store = store_for(cli, cfg);
        let (mut assignments, users) = store.load_tables()?;

        let count = admin::reassign_all(&mut assignments, from, to, name);
        if count == 0 {
            warning(format!("User '{}' has no assigned spots.", from));
            return Ok(());
        }

        store.save(&assignments, &users)?;
        success(format!("Reassigned {} spot(s) to '{}'.", count, to));
    }
    Ok(())
}
