use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::money;

pub fn handle(insights: bool, store: &RecordStore) -> AppResult<()> {
    let currency = store.settings().currency;

    if insights {
        let i = store.insights();
        header("Insights");
        println!("{CYAN}{:<22}{RESET} {}", "Total contacts", i.total_contacts);
        println!("{CYAN}{:<22}{RESET} {}", "Companies", i.total_companies);
        println!("{CYAN}{:<22}{RESET} {}", "Total deals", i.total_deals);
        println!(
            "{CYAN}{:<22}{RESET} {}",
            "Pipeline value",
            money(i.total_pipeline, currency)
        );
        println!(
            "{CYAN}{:<22}{RESET} {}",
            "Average deal size",
            money(i.average_deal_size, currency)
        );
        println!("{CYAN}{:<22}{RESET} {GREEN}{}%{RESET}", "Win rate", i.win_rate);
        println!(
            "{CYAN}{:<22}{RESET} {}",
            "Active opportunities", i.active_opportunities
        );
        return Ok(());
    }

    let s = store.stats();
    header("Dashboard");
    println!("{CYAN}{:<16}{RESET} {}", "Contacts", s.total_contacts);
    println!("{CYAN}{:<16}{RESET} {}", "Active deals", s.active_deals);
    println!(
        "{CYAN}{:<16}{RESET} {}",
        "Pipeline value",
        money(s.pipeline_value, currency)
    );
    println!("{CYAN}{:<16}{RESET} {GREEN}{}{RESET}", "Won deals", s.won_deals);
    Ok(())
}
