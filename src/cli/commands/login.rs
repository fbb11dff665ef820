use crate::cli::commands::{session_path, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::authenticate;
use crate::errors::AppResult;
use crate::models::session::SessionState;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { user, password } = &cli.command {
        let store = store_for(cli, cfg);
        let (assignments, users) = store.load_tables()?;

        let identity = authenticate(&users, &assignments, user, password)?;

        let state = SessionState::from_identity(&identity);
        state.save(&session_path(cli))?;

        success(format!("Welcome, {}!", identity.display()));
        if identity.role.is_admin() {
            info("Admin commands are available: replace, reassign, export, backup.");
        }
    }
    Ok(())
}
