use crate::cli::commands::{require_admin, require_session, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::admin;
use crate::errors::{AppError, AppResult};
use crate::export::AssignmentExport;
use crate::store::schema::ASSIGNMENT_COLUMNS;
use crate::ui::messages::{error, success, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Replace { file, yes } = &cli.command {
        let session = require_session(cli)?;
        require_admin(&session)?;

        warning("This action replaces ALL rows of the 'Cocheras' worksheet.");

        let path = expand_tilde(file);
        let store = store_for(cli, cfg);
        let (_, users) = store.load_tables()?;

        let new_rows = match admin::load_replacement(&path) {
            Err(AppError::SchemaMismatch { expected, found }) => {
                error("The file's columns do not match the assignments table.");
                println!("{}", admin::mismatch_report(&expected, &found));
                return Err(AppError::SchemaMismatch { expected, found });
            }
            other => other?,
        };

        success("The file has the correct column layout.");
        print_preview(&new_rows);

        if !*yes && !confirm_replace()? {
            println!("❌ Replacement cancelled by user.");
            return Ok(());
        }

        store.save(&new_rows, &users)?;
        success(format!(
            "Assignments table replaced ({} rows).",
            new_rows.len()
        ));
    }
    Ok(())
}

/// First rows of the incoming table, the same glance the admin gets
/// before committing.
fn print_preview(rows: &[crate::models::assignment::Assignment]) {
    let mut table = Table::new(ASSIGNMENT_COLUMNS.to_vec());
    for row in rows.iter().take(5) {
        let e: AssignmentExport = row.into();
        table.add_row(vec![
            e.date,
            e.spot_number,
            e.spot_letter,
            e.owner_email,
            e.owner_name,
            e.state,
            e.reassigned_to,
            e.usage_day,
        ]);
    }
    println!("{}", table.render());
    if rows.len() > 5 {
        println!("… and {} more row(s)", rows.len() - 5);
    }
}

fn confirm_replace() -> AppResult<bool> {
    use std::io::{Write, stdin, stdout};

    println!("Replace the whole table? [y/N]: ");
    let mut answer = String::new();
    print!("> ");
    stdout().flush().ok();

    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}
