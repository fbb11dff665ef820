use crate::cli::commands::session_path;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::session::SessionState;
use crate::store::cache;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, _cfg: &Config) -> AppResult<()> {
    SessionState::clear(&session_path(cli))?;
    cache::invalidate();
    success("Session closed.");
    Ok(())
}
