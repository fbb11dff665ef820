pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod reassign;
pub mod replace;
pub mod transitions;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionState;
use crate::store::workbook::WorkbookStore;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Store bound to the configured workbook, honoring the global `--book`
/// override.
pub(crate) fn store_for(cli: &Cli, cfg: &Config) -> WorkbookStore {
    let path = cli.book.clone().unwrap_or_else(|| cfg.workbook.clone());
    WorkbookStore::new(expand_tilde(&path), cfg.cache_ttl_secs)
}

pub(crate) fn session_path(cli: &Cli) -> PathBuf {
    match &cli.session {
        Some(s) => expand_tilde(s),
        None => Config::session_file(),
    }
}

pub(crate) fn require_session(cli: &Cli) -> AppResult<SessionState> {
    SessionState::load(&session_path(cli))?.ok_or(AppError::NotLoggedIn)
}

pub(crate) fn require_admin(session: &SessionState) -> AppResult<()> {
    if session.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
