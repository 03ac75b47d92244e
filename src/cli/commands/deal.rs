use super::ask_confirmation;
use crate::cli::parser::{DealAction, DealEditFields, DealFields};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Currency, Deal, DealStage, DealUpdate, NewDeal, validate};
use crate::store::RecordStore;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::Table;
use crate::utils::colors::{GREY, RESET, color_for_stage, paint};
use crate::utils::formatting::truncate;
use crate::utils::money;

pub fn handle(action: &DealAction, store: &mut RecordStore, cfg: &Config) -> AppResult<()> {
    match action {
        DealAction::List {
            stage,
            contact,
            board,
        } => {
            if *board {
                print_board(store);
                Ok(())
            } else {
                list(store, *stage, contact.as_deref())
            }
        }
        DealAction::Show { id } => show(store, id),
        DealAction::Add(fields) => add(store, fields),
        DealAction::Edit { id, fields } => edit(store, id, fields),
        DealAction::Del { id, yes } => del(store, cfg, id, *yes),
    }
}

fn list(store: &RecordStore, stage: Option<DealStage>, contact: Option<&str>) -> AppResult<()> {
    let deals: Vec<Deal> = match (contact, stage) {
        (Some(cid), _) => store
            .deals_for_contact(cid)
            .into_iter()
            .filter(|d| stage.is_none_or(|s| d.stage == s))
            .collect(),
        (None, Some(s)) => store.deals_in_stage(s),
        (None, None) => store.list_deals(),
    };

    if deals.is_empty() {
        warning("No deals found.");
        return Ok(());
    }

    let currency = store.settings().currency;
    header(format!("Deals ({})", deals.len()));

    let mut table = Table::new(&[
        "ID", "Name", "Company", "Stage", "Value", "Prob.", "Close", "Contact",
    ]);
    for d in &deals {
        table.add_row(deal_row(d, currency));
    }
    print!("{}", table.render('-'));
    Ok(())
}

fn deal_row(d: &Deal, currency: Currency) -> Vec<String> {
    vec![
        d.id.clone(),
        d.name.clone(),
        d.company.clone(),
        paint(color_for_stage(d.stage), d.stage.label()),
        money(d.value, currency),
        format!("{}%", d.probability),
        d.expected_close.to_string(),
        if d.contact_id.is_empty() {
            paint(GREY, "--")
        } else {
            d.contact_id.clone()
        },
    ]
}

/// One block per pipeline stage, with its deal count and total value.
fn print_board(store: &RecordStore) {
    let currency = store.settings().currency;

    for column in store.deals_by_stage() {
        let color = color_for_stage(column.stage);
        println!(
            "{}{}{} ({}) {}",
            color,
            column.stage.label(),
            RESET,
            column.deals.len(),
            money(column.total_value(), currency)
        );

        if column.deals.is_empty() {
            println!("  {GREY}(empty){RESET}");
        }
        for d in &column.deals {
            println!(
                "  {:<6} {:<32} {:>12} {:>4}%",
                d.id,
                truncate(&d.name, 32),
                money(d.value, currency),
                d.probability
            );
        }
        println!();
    }
}

fn show(store: &RecordStore, id: &str) -> AppResult<()> {
    let d = store
        .get_deal(id)
        .ok_or_else(|| AppError::NotFound(format!("deal '{id}'")))?;
    let currency = store.settings().currency;

    header(&d.name);
    println!("{:<12} {}", "ID", d.id);
    println!("{:<12} {}", "Company", d.company);
    println!(
        "{:<12} {}",
        "Stage",
        paint(color_for_stage(d.stage), d.stage.label())
    );
    println!("{:<12} {}", "Value", money(d.value, currency));
    println!("{:<12} {}%", "Probability", d.probability);
    println!("{:<12} {}", "Close", d.expected_close);
    println!("{:<12} {}", "Created", d.created_at);

    match store.get_contact(&d.contact_id) {
        Some(c) => println!("{:<12} {} ({})", "Contact", c.full_name(), c.id),
        None if d.contact_id.is_empty() => println!("{:<12} {GREY}--{RESET}", "Contact"),
        None => println!(
            "{:<12} {} {GREY}(unknown contact){RESET}",
            "Contact", d.contact_id
        ),
    }
    Ok(())
}

fn add(store: &mut RecordStore, f: &DealFields) -> AppResult<()> {
    let expected_close = validate::parse_date("expected close", &f.expected_close)?;

    let deal = store.create_deal(NewDeal {
        name: f.name.clone(),
        value: f.value,
        stage: f.stage,
        contact_id: f.contact_id.clone(),
        company: f.company.clone(),
        expected_close,
        probability: f.probability,
    })?;

    success(format!("Deal '{}' created with id {}.", deal.name, deal.id));
    Ok(())
}

fn edit(store: &mut RecordStore, id: &str, f: &DealEditFields) -> AppResult<()> {
    let expected_close = f
        .expected_close
        .as_deref()
        .map(|v| validate::parse_date("expected close", v))
        .transpose()?;

    let changes = DealUpdate {
        name: f.name.clone(),
        value: f.value,
        stage: f.stage,
        contact_id: f.contact_id.clone(),
        company: f.company.clone(),
        expected_close,
        probability: f.probability,
    };

    if changes.is_empty() {
        warning("Nothing to change: pass at least one field.");
        return Ok(());
    }

    match store.update_deal(id, changes)? {
        Some(d) => {
            success(format!(
                "Deal '{}' ({}) updated, stage: {}.",
                d.name,
                d.id,
                d.stage.label()
            ));
            Ok(())
        }
        None => Err(AppError::NotFound(format!("deal '{id}'"))),
    }
}

fn del(store: &mut RecordStore, cfg: &Config, id: &str, yes: bool) -> AppResult<()> {
    let deal = store
        .get_deal(id)
        .ok_or_else(|| AppError::NotFound(format!("deal '{id}'")))?;

    if cfg.confirm_deletes
        && !yes
        && !ask_confirmation(&format!(
            "Delete deal '{}' ({})? This action is irreversible.",
            deal.name, deal.id
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    if !store.delete_deal(id) {
        return Err(AppError::NotFound(format!("deal '{id}'")));
    }

    success(format!("Deal '{}' has been deleted.", deal.name));
    Ok(())
}
