use chrono::Duration;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{default_users, login, row, seed_workbook, spb, temp_book, temp_file, temp_session};
use spotbook::models::spot_state::SpotState;
use spotbook::store::workbook::WorkbookStore;

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn iso(d: chrono::NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn disp(d: chrono::NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

#[test]
fn init_creates_an_empty_workbook_with_both_sheets() {
    let book = temp_book("init");

    spb()
        .args(["--book", &book, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Workbook"));

    let store = WorkbookStore::new(book, 0);
    assert!(store.load_assignments().expect("assignments sheet").is_empty());
    assert!(store.load_users().expect("users sheet").is_empty());
}

#[test]
fn login_greets_with_the_resolved_display_name() {
    let book = temp_book("login_ok");
    let session = temp_session("login_ok");
    seed_workbook(
        &book,
        &[row(
            Some(&iso(today() + Duration::days(2))),
            "12",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Pending,
            "",
        )],
        &default_users(),
    );

    spb()
        .args([
            "--book",
            &book,
            "--session",
            &session,
            "login",
            "--user",
            "ANA@OFFICE.EXAMPLE",
            "--password",
            "anapass",
        ])
        .assert()
        .success()
        .stdout(contains("Welcome, Ana Paz!"));
}

#[test]
fn failed_logins_share_one_generic_message() {
    let book = temp_book("login_fail");
    let session = temp_session("login_fail");
    seed_workbook(&book, &[], &default_users());

    spb()
        .args([
            "--book",
            &book,
            "--session",
            &session,
            "login",
            "--user",
            "ana@office.example",
            "--password",
            "wrong",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid user or password"));

    spb()
        .args([
            "--book",
            &book,
            "--session",
            &session,
            "login",
            "--user",
            "ghost@office.example",
            "--password",
            "anapass",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid user or password"));
}

#[test]
fn user_commands_require_a_session() {
    let book = temp_book("no_session");
    let session = temp_session("no_session");
    seed_workbook(&book, &[], &default_users());

    for args in [
        vec!["list"],
        vec!["confirm", "2030-01-07", "12A"],
        vec!["reserve", "2030-01-07", "12A"],
    ] {
        spb()
            .args(["--book", &book, "--session", &session])
            .args(args)
            .assert()
            .failure()
            .stderr(contains("Not logged in"));
    }
}

#[test]
fn confirm_flow_updates_the_workbook() {
    let book = temp_book("confirm_flow");
    let session = temp_session("confirm_flow");
    let d = today() + Duration::days(2);
    seed_workbook(
        &book,
        &[row(
            Some(&iso(d)),
            "12",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Pending,
            "",
        )],
        &default_users(),
    );
    login(&book, &session, "ana@office.example", "anapass");

    spb()
        .args(["--book", &book, "--session", &session, "confirm", &iso(d), "12A"])
        .assert()
        .success()
        .stdout(contains("Confirmada"));

    let store = WorkbookStore::new(book, 0);
    let rows = store.load_assignments().expect("load");
    assert_eq!(rows[0].state, SpotState::Confirmed);
}

#[test]
fn release_then_reserve_by_another_user() {
    let book = temp_book("reserve_flow");
    let session_ana = temp_session("reserve_flow_ana");
    let session_leo = temp_session("reserve_flow_leo");
    let d = today() + Duration::days(3);
    seed_workbook(
        &book,
        &[row(
            Some(&iso(d)),
            "12",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Pending,
            "",
        )],
        &default_users(),
    );

    login(&book, &session_ana, "ana@office.example", "anapass");
    spb()
        .args(["--book", &book, "--session", &session_ana, "release", &iso(d), "12A"])
        .assert()
        .success()
        .stdout(contains("Liberado"));

    login(&book, &session_leo, "leo@office.example", "leopass");
    spb()
        .args(["--book", &book, "--session", &session_leo, "reserve", &iso(d), "12A"])
        .assert()
        .success()
        .stdout(contains("Reasignada"));

    let store = WorkbookStore::new(book, 0);
    let rows = store.load_assignments().expect("load");
    assert_eq!(rows[0].state, SpotState::Reassigned);
    assert_eq!(rows[0].reassigned_to, "leo@office.example");
    assert_eq!(rows[0].owner_email, "ana@office.example");
}

#[test]
fn reserving_your_own_released_spot_is_rejected() {
    let book = temp_book("reserve_own");
    let session = temp_session("reserve_own");
    let d = today() + Duration::days(3);
    seed_workbook(
        &book,
        &[row(
            Some(&iso(d)),
            "12",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Released,
            "",
        )],
        &default_users(),
    );
    login(&book, &session, "ana@office.example", "anapass");

    spb()
        .args(["--book", &book, "--session", &session, "reserve", &iso(d), "12A"])
        .assert()
        .failure()
        .stderr(contains("Action not allowed"));
}

#[test]
fn far_future_assignments_only_release_in_advance() {
    let book = temp_book("far_future");
    let session = temp_session("far_future");
    let d = today() + Duration::days(30);
    seed_workbook(
        &book,
        &[row(
            Some(&iso(d)),
            "12",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Pending,
            "",
        )],
        &default_users(),
    );
    login(&book, &session, "ana@office.example", "anapass");

    spb()
        .args(["--book", &book, "--session", &session, "confirm", &iso(d), "12A"])
        .assert()
        .failure()
        .stderr(contains("Action not allowed"));

    spb()
        .args(["--book", &book, "--session", &session, "release", &iso(d), "12A"])
        .assert()
        .success()
        .stdout(contains("Liberado"));
}

#[test]
fn past_rows_are_hidden_and_not_actionable() {
    let book = temp_book("past_rows");
    let session = temp_session("past_rows");
    let d = today() - Duration::days(3);
    seed_workbook(
        &book,
        &[row(
            Some(&iso(d)),
            "12",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Pending,
            "",
        )],
        &default_users(),
    );
    login(&book, &session, "ana@office.example", "anapass");

    spb()
        .args(["--book", &book, "--session", &session, "list"])
        .assert()
        .success()
        .stdout(contains(disp(d)).not());

    spb()
        .args(["--book", &book, "--session", &session, "confirm", &iso(d), "12A"])
        .assert()
        .failure()
        .stderr(contains("already passed"));
}

#[test]
fn list_expand_toggle_is_sticky_until_collapsed() {
    let book = temp_book("sticky_toggle");
    let session = temp_session("sticky_toggle");
    let near = today() + Duration::days(2);
    let far = today() + Duration::days(30);
    seed_workbook(
        &book,
        &[
            row(
                Some(&iso(near)),
                "1",
                "A",
                "ana@office.example",
                "Ana Paz",
                SpotState::Pending,
                "",
            ),
            row(
                Some(&iso(far)),
                "2",
                "A",
                "ana@office.example",
                "Ana Paz",
                SpotState::Pending,
                "",
            ),
        ],
        &default_users(),
    );
    login(&book, &session, "ana@office.example", "anapass");

    // Default view stops at the end of next week
    spb()
        .args(["--book", &book, "--session", &session, "list"])
        .assert()
        .success()
        .stdout(contains(disp(near)))
        .stdout(contains(disp(far)).not())
        .stdout(contains("beyond the next two weeks"));

    // --all expands and stays expanded on the next plain list
    spb()
        .args(["--book", &book, "--session", &session, "list", "--all"])
        .assert()
        .success()
        .stdout(contains(disp(far)));

    spb()
        .args(["--book", &book, "--session", &session, "list"])
        .assert()
        .success()
        .stdout(contains(disp(far)));

    // --collapse goes back to the two-week view
    spb()
        .args(["--book", &book, "--session", &session, "list", "--collapse"])
        .assert()
        .success()
        .stdout(contains(disp(far)).not());
}

#[test]
fn released_spots_show_for_other_users_within_the_horizon() {
    let book = temp_book("available_list");
    let session = temp_session("available_list");
    let near = today() + Duration::days(2);
    let far = today() + Duration::days(30);
    seed_workbook(
        &book,
        &[
            row(
                Some(&iso(near)),
                "5",
                "C",
                "ana@office.example",
                "Ana Paz",
                SpotState::Released,
                "",
            ),
            row(
                Some(&iso(far)),
                "6",
                "C",
                "ana@office.example",
                "Ana Paz",
                SpotState::Released,
                "",
            ),
        ],
        &default_users(),
    );
    login(&book, &session, "leo@office.example", "leopass");

    spb()
        .args(["--book", &book, "--session", &session, "list"])
        .assert()
        .success()
        .stdout(contains("Available spots"))
        .stdout(contains("5C"))
        .stdout(contains("6C").not());
}

#[test]
fn replace_rejects_mismatched_columns_and_leaves_the_store_untouched() {
    let book = temp_book("replace_reject");
    let session = temp_session("replace_reject");
    seed_workbook(
        &book,
        &[row(
            Some(&iso(today() + Duration::days(2))),
            "1",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Pending,
            "",
        )],
        &default_users(),
    );
    let before = fs::read(&book).expect("read workbook");

    // Candidate with a renamed column
    let candidate = temp_book("replace_reject_upload");
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let ws = workbook.add_worksheet();
    for (c, header) in ["Date", "Numero cochera", "Letra cochera"].iter().enumerate() {
        ws.write(0, c as u16, *header).expect("write header");
    }
    workbook.save(&candidate).expect("save candidate");

    login(&book, &session, "root@office.example", "rootpass");
    spb()
        .args([
            "--book", &book, "--session", &session, "replace", "--file", &candidate, "--yes",
        ])
        .assert()
        .failure()
        .stdout(contains("\"expected\""))
        .stderr(contains("Column mismatch"));

    let after = fs::read(&book).expect("read workbook again");
    assert_eq!(before, after);
}

#[test]
fn replace_swaps_the_whole_assignments_table() {
    let book = temp_book("replace_ok");
    let session = temp_session("replace_ok");
    seed_workbook(
        &book,
        &[row(
            Some(&iso(today() + Duration::days(2))),
            "1",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Pending,
            "",
        )],
        &default_users(),
    );

    let candidate = temp_book("replace_ok_upload");
    seed_workbook(
        &candidate,
        &[
            row(
                Some(&iso(today() + Duration::days(4))),
                "9",
                "B",
                "mia@office.example",
                "Mia Sol",
                SpotState::Pending,
                "",
            ),
            row(
                Some(&iso(today() + Duration::days(5))),
                "9",
                "B",
                "mia@office.example",
                "Mia Sol",
                SpotState::Released,
                "",
            ),
        ],
        &default_users(),
    );

    login(&book, &session, "root@office.example", "rootpass");
    spb()
        .args([
            "--book", &book, "--session", &session, "replace", "--file", &candidate, "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("replaced (2 rows)"));

    let store = WorkbookStore::new(book, 0);
    let rows = store.load_assignments().expect("load");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.owner_email == "mia@office.example"));
}

#[test]
fn reassign_reports_the_count_and_handles_zero_rows() {
    let book = temp_book("reassign_cli");
    let session = temp_session("reassign_cli");
    let d = today() + Duration::days(2);
    seed_workbook(
        &book,
        &[
            row(
                Some(&iso(d)),
                "1",
                "A",
                "ana@office.example",
                "Ana Paz",
                SpotState::Pending,
                "",
            ),
            row(
                Some(&iso(d + Duration::days(1))),
                "2",
                "A",
                "ana@office.example",
                "Ana Paz",
                SpotState::Confirmed,
                "",
            ),
        ],
        &default_users(),
    );
    login(&book, &session, "root@office.example", "rootpass");

    spb()
        .args([
            "--book",
            &book,
            "--session",
            &session,
            "reassign",
            "--from",
            "ana@office.example",
            "--to",
            "leo@office.example",
            "--name",
            "Leo Paz",
        ])
        .assert()
        .success()
        .stdout(contains("Reassigned 2 spot(s)"));

    // Nothing left to move: warn, succeed, change nothing
    spb()
        .args([
            "--book",
            &book,
            "--session",
            &session,
            "reassign",
            "--from",
            "ana@office.example",
            "--to",
            "leo@office.example",
            "--name",
            "Leo Paz",
        ])
        .assert()
        .success()
        .stdout(contains("has no assigned spots"));

    let store = WorkbookStore::new(book, 0);
    let rows = store.load_assignments().expect("load");
    assert!(rows.iter().all(|r| r.owner_email == "leo@office.example"));
    assert!(rows.iter().all(|r| r.owner_name == "Leo Paz"));
}

#[test]
fn admin_commands_are_gated_by_role() {
    let book = temp_book("admin_gate");
    let session = temp_session("admin_gate");
    seed_workbook(&book, &[], &default_users());
    login(&book, &session, "ana@office.example", "anapass");

    spb()
        .args([
            "--book",
            &book,
            "--session",
            &session,
            "reassign",
            "--from",
            "a@x",
            "--to",
            "b@x",
            "--name",
            "B",
        ])
        .assert()
        .failure()
        .stderr(contains("requires an admin account"));
}

#[test]
fn export_cli_writes_the_table() {
    let book = temp_book("export_cli");
    let session = temp_session("export_cli");
    let out = temp_file("export_cli_out", "csv");
    seed_workbook(
        &book,
        &[row(
            Some(&iso(today() + Duration::days(2))),
            "1",
            "A",
            "ana@office.example",
            "Ana Paz",
            SpotState::Pending,
            "",
        )],
        &default_users(),
    );
    login(&book, &session, "root@office.example", "rootpass");

    spb()
        .args([
            "--book", &book, "--session", &session, "export", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("Fecha"));
    assert!(content.contains("ana@office.example"));
}

#[test]
fn backup_cli_copies_the_workbook() {
    let book = temp_book("backup_cli");
    let session = temp_session("backup_cli");
    let dest = temp_file("backup_cli_out", "xlsx");
    seed_workbook(&book, &[], &default_users());
    login(&book, &session, "root@office.example", "rootpass");

    spb()
        .args(["--book", &book, "--session", &session, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert_eq!(
        fs::read(&book).expect("workbook"),
        fs::read(&dest).expect("backup")
    );
}

#[test]
fn logout_closes_the_session() {
    let book = temp_book("logout");
    let session = temp_session("logout");
    seed_workbook(&book, &[], &default_users());
    login(&book, &session, "ana@office.example", "anapass");

    spb()
        .args(["--book", &book, "--session", &session, "logout"])
        .assert()
        .success()
        .stdout(contains("Session closed"));

    spb()
        .args(["--book", &book, "--session", &session, "list"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}
