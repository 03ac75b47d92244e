use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{crm, init_db, init_db_with_data, setup_test_db};

#[test]
fn test_init_seeds_contacts_and_deals() {
    let db_path = setup_test_db("cli_init_seed");

    crm()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("4 contacts, 3 deals"));

    crm()
        .args(["--db", &db_path, "contact", "list"])
        .assert()
        .success()
        .stdout(contains("John Smith"))
        .stdout(contains("Emily Davis"))
        .stdout(contains("Contacts (4)"));
}

#[test]
fn test_contact_add_list_and_search() {
    let db_path = setup_test_db("cli_contact_add");
    init_db_with_data(&db_path);

    crm()
        .args(["--db", &db_path, "contact", "list"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("Contacts (5)"));

    crm()
        .args(["--db", &db_path, "contact", "list", "--search", "ENGINE"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("John Smith").not());
}

#[test]
fn test_contact_add_rejects_bad_email() {
    let db_path = setup_test_db("cli_contact_bad_email");
    init_db(&db_path);

    crm()
        .args([
            "--db",
            &db_path,
            "contact",
            "add",
            "--first-name",
            "Bad",
            "--last-name",
            "Address",
            "--email",
            "bad@address",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid email"));

    crm()
        .args(["--db", &db_path, "contact", "list"])
        .assert()
        .success()
        .stdout(contains("Contacts (4)"));
}

#[test]
fn test_contact_show_lists_its_deals() {
    let db_path = setup_test_db("cli_contact_show");
    init_db(&db_path);

    crm()
        .args(["--db", &db_path, "contact", "show", "1"])
        .assert()
        .success()
        .stdout(contains("john.smith@techcorp.com"))
        .stdout(contains("Enterprise License Deal"))
        .stdout(contains("$50,000"));
}

#[test]
fn test_contact_edit_and_delete() {
    let db_path = setup_test_db("cli_contact_edit_del");
    init_db(&db_path);

    crm()
        .args([
            "--db", &db_path, "contact", "edit", "3", "--status", "customer", "--phone",
            "+1 555-0199",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    crm()
        .args(["--db", &db_path, "contact", "show", "3"])
        .assert()
        .success()
        .stdout(contains("+1 555-0199"))
        .stdout(contains("customer"))
        .stdout(contains("Just now"));

    crm()
        .args(["--db", &db_path, "contact", "del", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    crm()
        .args(["--db", &db_path, "contact", "show", "3"])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}

#[test]
fn test_edit_missing_contact_fails() {
    let db_path = setup_test_db("cli_contact_edit_missing");
    init_db(&db_path);

    crm()
        .args(["--db", &db_path, "contact", "edit", "999", "--first-name", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("contact '999'"));
}

#[test]
fn test_deal_list_by_stage_and_board() {
    let db_path = setup_test_db("cli_deal_board");
    init_db_with_data(&db_path);

    crm()
        .args(["--db", &db_path, "deal", "list", "--stage", "negotiation"])
        .assert()
        .success()
        .stdout(contains("Annual Subscription"))
        .stdout(contains("Difference Engine Retrofit"))
        .stdout(contains("Consulting Services").not());

    crm()
        .args(["--db", &db_path, "deal", "list", "--board"])
        .assert()
        .success()
        .stdout(contains("Prospecting"))
        .stdout(contains("Closed Lost"))
        .stdout(contains("(empty)"))
        .stdout(contains("$54,000"));
}

#[test]
fn test_deal_edit_moves_stage_without_activity() {
    let db_path = setup_test_db("cli_deal_edit");
    init_db(&db_path);

    crm()
        .args(["--db", &db_path, "deal", "edit", "d3", "--stage", "closed-won"])
        .assert()
        .success()
        .stdout(contains("Closed Won"));

    crm()
        .args(["--db", &db_path, "deal", "show", "d3"])
        .assert()
        .success()
        .stdout(contains("Closed Won"))
        .stdout(contains("Michael Chen"));

    crm()
        .args(["--db", &db_path, "activity", "list"])
        .assert()
        .success()
        .stdout(contains("Consulting Services").not());
}

#[test]
fn test_deal_add_rejects_bad_date_and_probability() {
    let db_path = setup_test_db("cli_deal_invalid");
    init_db(&db_path);

    crm()
        .args([
            "--db", &db_path, "deal", "add", "--name", "Broken", "--value", "10", "--company",
            "Acme", "--close", "2026-13-01",
        ])
        .assert()
        .failure()
        .stderr(contains("expected close"));

    crm()
        .args([
            "--db",
            &db_path,
            "deal",
            "add",
            "--name",
            "Broken",
            "--value",
            "10",
            "--company",
            "Acme",
            "--close",
            "2026-12-01",
            "--probability",
            "101",
        ])
        .assert()
        .failure()
        .stderr(contains("probability"));
}

#[test]
fn test_activity_feed_records_creations() {
    let db_path = setup_test_db("cli_activity_feed");
    init_db_with_data(&db_path);

    crm()
        .args(["--db", &db_path, "activity", "list"])
        .assert()
        .success()
        .stdout(contains("New contact added: Ada Lovelace"))
        .stdout(contains("New deal created: Difference Engine Retrofit"))
        .stdout(contains("Follow-up call completed"));

    crm()
        .args([
            "--db",
            &db_path,
            "activity",
            "add",
            "--type",
            "email_sent",
            "--text",
            "Proposal sent to Ada",
        ])
        .assert()
        .success();

    crm()
        .args(["--db", &db_path, "activity", "list"])
        .assert()
        .success()
        .stdout(contains("Proposal sent to Ada"));
}

#[test]
fn test_stats_and_insights() {
    let db_path = setup_test_db("cli_stats");
    init_db_with_data(&db_path);

    crm()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Active deals"))
        .stdout(contains("$129,000"));

    crm()
        .args(["--db", &db_path, "stats", "--insights"])
        .assert()
        .success()
        .stdout(contains("Win rate"))
        .stdout(contains("$32,250"));
}

#[test]
fn test_settings_currency_changes_money_format() {
    let db_path = setup_test_db("cli_settings_currency");
    init_db(&db_path);

    crm()
        .args([
            "--db",
            &db_path,
            "settings",
            "set",
            "--currency",
            "eur",
            "--company-name",
            "Acme CRM",
        ])
        .assert()
        .success()
        .stdout(contains("Acme CRM"))
        .stdout(contains("EUR"));

    crm()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("€87,000"));
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("cli_log_db_info");
    init_db_with_data(&db_path);

    crm()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("contact_add"))
        .stdout(contains("deal_add"))
        .stdout(contains("migration_applied"));

    crm()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("mini-crm-contacts"))
        .stdout(contains("mini-crm-settings"))
        .stdout(contains("Integrity check passed"));
}
