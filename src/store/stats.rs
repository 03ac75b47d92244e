use super::RecordStore;
use crate::models::{Contact, Deal, DealStage, Insights, Stats};
use std::collections::HashSet;

pub fn compute_stats(contacts: &[Contact], deals: &[Deal]) -> Stats {
    Stats {
        total_contacts: contacts.len(),
        active_deals: deals.iter().filter(|d| !d.stage.is_closed()).count(),
        pipeline_value: deals.iter().map(|d| d.value).sum(),
        won_deals: deals
            .iter()
            .filter(|d| d.stage == DealStage::ClosedWon)
            .count(),
    }
}

pub fn compute_insights(contacts: &[Contact], deals: &[Deal]) -> Insights {
    let stats = compute_stats(contacts, deals);

    let companies: HashSet<&str> = contacts
        .iter()
        .filter_map(|c| c.company.as_deref())
        .filter(|c| !c.trim().is_empty())
        .collect();

    let (average_deal_size, win_rate) = if deals.is_empty() {
        (0.0, 0)
    } else {
        let n = deals.len() as f64;
        let rate = (stats.won_deals as f64 / n * 100.0).round() as u32;
        (stats.pipeline_value / n, rate)
    };

    Insights {
        total_contacts: stats.total_contacts,
        total_companies: companies.len(),
        total_deals: deals.len(),
        total_pipeline: stats.pipeline_value,
        average_deal_size,
        win_rate,
        active_opportunities: stats.active_deals,
    }
}

impl RecordStore {
    pub fn stats(&self) -> Stats {
        compute_stats(&self.list_contacts(), &self.list_deals())
    }

    pub fn insights(&self) -> Insights {
        compute_insights(&self.list_contacts(), &self.list_deals())
    }
}
