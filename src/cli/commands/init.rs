use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::workbook::WorkbookStore;
use crate::ui::messages::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty workbook with both worksheets, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let book_path = Config::init_all(cli.book.clone(), cli.test)?;

    if book_path.exists() {
        println!("✅ Workbook:    {:?} (already exists)", book_path);
    } else {
        let store = WorkbookStore::new(&book_path, 0);
        store.save(&[], &[])?;
        println!("✅ Workbook:    {:?}", book_path);
        info("Add user rows to the 'Credenciales' worksheet to enable logins.");
    }

    Ok(())
}
