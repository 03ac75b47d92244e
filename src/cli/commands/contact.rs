use super::ask_confirmation;
use crate::cli::parser::{ContactAction, ContactEditFields, ContactFields};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Contact, ContactUpdate, NewContact};
use crate::store::RecordStore;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::Table;
use crate::utils::colors::{GREY, RESET, color_for_optional_field, color_for_stage, color_for_status, paint};
use crate::utils::money;

pub fn handle(action: &ContactAction, store: &mut RecordStore, cfg: &Config) -> AppResult<()> {
    match action {
        ContactAction::List { search } => list(store, search.as_deref()),
        ContactAction::Show { id } => show(store, id),
        ContactAction::Add(fields) => add(store, fields),
        ContactAction::Edit { id, fields } => edit(store, id, fields),
        ContactAction::Del { id, yes } => del(store, cfg, id, *yes),
    }
}

fn list(store: &RecordStore, search: Option<&str>) -> AppResult<()> {
    let contacts = match search {
        Some(q) => store.search_contacts(q),
        None => store.list_contacts(),
    };

    if contacts.is_empty() {
        warning("No contacts found.");
        return Ok(());
    }

    header(format!("Contacts ({})", contacts.len()));

    let mut table = Table::new(&["ID", "Name", "Email", "Company", "Status", "Updated"]);
    for c in &contacts {
        table.add_row(vec![
            c.id.clone(),
            c.full_name(),
            c.email.clone(),
            optional(c.company.as_deref()),
            paint(color_for_status(c.status), c.status.as_str()),
            c.last_updated.clone(),
        ]);
    }
    print!("{}", table.render('-'));
    Ok(())
}

fn optional(value: Option<&str>) -> String {
    paint(color_for_optional_field(value), value.unwrap_or("--"))
}

fn show(store: &RecordStore, id: &str) -> AppResult<()> {
    let contact = store
        .get_contact(id)
        .ok_or_else(|| AppError::NotFound(format!("contact '{id}'")))?;

    print_contact(&contact);

    let deals = store.deals_for_contact(id);
    if deals.is_empty() {
        println!("{GREY}No deals for this contact.{RESET}");
        return Ok(());
    }

    let currency = store.settings().currency;
    println!();
    let mut table = Table::new(&["ID", "Deal", "Stage", "Value"]);
    for d in &deals {
        table.add_row(vec![
            d.id.clone(),
            d.name.clone(),
            paint(color_for_stage(d.stage), d.stage.label()),
            money(d.value, currency),
        ]);
    }
    print!("{}", table.render('-'));
    Ok(())
}

fn print_contact(c: &Contact) {
    header(c.full_name());
    println!("{:<10} {}", "ID", c.id);
    println!("{:<10} {}", "Email", c.email);
    println!("{:<10} {}", "Phone", optional(c.phone.as_deref()));
    println!("{:<10} {}", "Company", optional(c.company.as_deref()));
    println!(
        "{:<10} {}",
        "Status",
        paint(color_for_status(c.status), c.status.as_str())
    );
    println!("{:<10} {}", "Avatar", optional(c.avatar.as_deref()));
    println!("{:<10} {}", "Created", c.created_at);
    println!("{:<10} {}", "Updated", c.last_updated);
}

fn add(store: &mut RecordStore, f: &ContactFields) -> AppResult<()> {
    let contact = store.create_contact(NewContact {
        first_name: f.first_name.clone(),
        last_name: f.last_name.clone(),
        email: f.email.clone(),
        phone: f.phone.clone(),
        company: f.company.clone(),
        status: f.status,
        avatar: f.avatar.clone(),
    })?;

    success(format!(
        "Contact {} created with id {}.",
        contact.full_name(),
        contact.id
    ));
    Ok(())
}

fn edit(store: &mut RecordStore, id: &str, f: &ContactEditFields) -> AppResult<()> {
    let changes = ContactUpdate {
        first_name: f.first_name.clone(),
        last_name: f.last_name.clone(),
        email: f.email.clone(),
        phone: f.phone.clone().map(Some),
        company: f.company.clone().map(Some),
        status: f.status,
        avatar: f.avatar.clone().map(Some),
    };

    if changes.is_empty() {
        warning("Nothing to change: pass at least one field.");
        return Ok(());
    }

    match store.update_contact(id, changes)? {
        Some(c) => {
            success(format!("Contact {} ({}) updated.", c.full_name(), c.id));
            Ok(())
        }
        None => Err(AppError::NotFound(format!("contact '{id}'"))),
    }
}

fn del(store: &mut RecordStore, cfg: &Config, id: &str, yes: bool) -> AppResult<()> {
    let contact = store
        .get_contact(id)
        .ok_or_else(|| AppError::NotFound(format!("contact '{id}'")))?;

    if cfg.confirm_deletes
        && !yes
        && !ask_confirmation(&format!(
            "Delete contact {} ({})? This action is irreversible.",
            contact.full_name(),
            contact.id
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    if !store.delete_contact(id) {
        return Err(AppError::NotFound(format!("contact '{id}'")));
    }

    success(format!("Contact {} has been deleted.", contact.full_name()));
    Ok(())
}
