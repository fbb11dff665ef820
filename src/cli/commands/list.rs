use crate::cli::commands::{require_session, session_path, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::views;
use crate::core::windows::DateWindows;
use crate::errors::AppResult;
use crate::models::assignment::Assignment;
use crate::ui::messages::{info, section, warning};
use crate::utils::date::{fmt_opt_date, today};
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all, collapse } = &cli.command {
        let mut session = require_session(cli)?;

        // The expand toggle is sticky: flipping it persists to the
        // session file until the opposite flag is passed.
        if *all && !session.show_all {
            session.show_all = true;
            session.save(&session_path(cli))?;
        } else if *collapse && session.show_all {
            session.show_all = false;
            session.save(&session_path(cli))?;
        }

        let store = store_for(cli, cfg);
        let (assignments, _users) = store.load_tables()?;
        let windows = DateWindows::for_today(today());

        section("My assigned spots");
        let mine = views::my_assignments(&assignments, &session.email, session.show_all, &windows);
        if mine.is_empty() {
            warning("No spots assigned for the next two weeks. Use `list --all` to look further ahead.");
        } else {
            println!("{}", owned_table(&mine, cfg).render());
        }

        let hidden = views::hidden_future_count(&assignments, &session.email, &windows);
        if session.show_all {
            info("Showing all future assignments. Run `spotbook list --collapse` for the two-week view.");
        } else if hidden > 0 {
            info(format!(
                "{} future assignment(s) beyond the next two weeks. Run `spotbook list --all` to include them.",
                hidden
            ));
        }

        section("Available spots");
        let available = views::available_spots(&assignments, &windows);
        if available.is_empty() {
            info("No released spots for the current or next week.");
        } else {
            println!("{}", available_table(&available, cfg).render());
        }

        section("My reservations");
        let reserved = views::my_reservations(&assignments, &session.email, &windows);
        if reserved.is_empty() {
            info("You have no reservations for future dates.");
        } else {
            println!("{}", reserved_table(&reserved, cfg).render());
        }
    }
    Ok(())
}

fn owned_table(rows: &[Assignment], cfg: &Config) -> Table {
    let mut table = Table::new(vec!["Date", "Day", "Spot", "State", "Taken by"]);
    for row in rows {
        table.add_row(vec![
            fmt_opt_date(&row.date, &cfg.date_format),
            row.usage_day.clone(),
            row.spot_label(),
            row.state.to_sheet_str().to_string(),
            row.reassigned_to.clone(),
        ]);
    }
    table
}

fn available_table(rows: &[Assignment], cfg: &Config) -> Table {
    let mut table = Table::new(vec!["Date", "Day", "Spot", "Assigned to"]);
    for row in rows {
        table.add_row(vec![
            fmt_opt_date(&row.date, &cfg.date_format),
            row.usage_day.clone(),
            row.spot_label(),
            row.owner_display().to_string(),
        ]);
    }
    table
}

fn reserved_table(rows: &[Assignment], cfg: &Config) -> Table {
    let mut table = Table::new(vec!["Date", "Day", "Spot", "Assigned to", "State"]);
    for row in rows {
        table.add_row(vec![
            fmt_opt_date(&row.date, &cfg.date_format),
            row.usage_day.clone(),
            row.spot_label(),
            row.owner_display().to_string(),
            row.state.to_sheet_str().to_string(),
        ]);
    }
    table
}
