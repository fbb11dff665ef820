#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use spotbook::models::assignment::Assignment;
use spotbook::models::credential::Credential;
use spotbook::models::spot_state::SpotState;
use spotbook::store::workbook::WorkbookStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn spb() -> Command {
    cargo_bin_cmd!("spotbook")
}

/// Create a unique temp file path and remove any leftover from a previous run
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_spotbook.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn temp_book(name: &str) -> String {
    temp_file(name, "xlsx")
}

pub fn temp_session(name: &str) -> String {
    temp_file(name, "session.yaml")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn row(
    date_str: Option<&str>,
    number: &str,
    letter: &str,
    email: &str,
    name: &str,
    state: SpotState,
    reassigned_to: &str,
) -> Assignment {
    Assignment {
        date: date_str.map(date),
        spot_number: number.to_string(),
        spot_letter: letter.to_string(),
        owner_email: email.to_string(),
        owner_name: name.to_string(),
        state,
        reassigned_to: reassigned_to.to_string(),
        usage_day: String::new(),
    }
}

pub fn user(email: &str, secret: &str, role: &str) -> Credential {
    Credential {
        email: email.to_string(),
        secret: secret.to_string(),
        role: role.to_string(),
    }
}

pub fn default_users() -> Vec<Credential> {
    vec![
        user("ana@office.example", "anapass", "comun"),
        user("leo@office.example", "leopass", "comun"),
        user("root@office.example", "rootpass", "admin"),
    ]
}

/// Write a workbook with the given tables through the library store
pub fn seed_workbook(path: &str, assignments: &[Assignment], users: &[Credential]) {
    let store = WorkbookStore::new(path, 0);
    store.save(assignments, users).expect("seed workbook");
}

/// Log a user in against the given workbook/session pair via the CLI
pub fn login(book: &str, session: &str, email: &str, password: &str) {
    spb()
        .args([
            "--book", book, "--session", session, "login", "--user", email, "--password", password,
        ])
        .assert()
        .success();
}
