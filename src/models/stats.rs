use super::deal::{Deal, DealStage};
use serde::Serialize;

/// Dashboard figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_contacts: usize,
    pub active_deals: usize,
    pub pipeline_value: f64,
    pub won_deals: usize,
}

/// Figures shown on the reports page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub total_contacts: usize,
    pub total_companies: usize,
    pub total_deals: usize,
    pub total_pipeline: f64,
    pub average_deal_size: f64,
    /// Whole percent of deals in `closed-won`.
    pub win_rate: u32,
    pub active_opportunities: usize,
}

/// One column of the pipeline board.
#[derive(Debug, Clone, PartialEq)]
pub struct StageColumn {
    pub stage: DealStage,
    pub deals: Vec<Deal>,
}

impl StageColumn {
    pub fn total_value(&self) -> f64 {
        self.deals.iter().map(|d| d.value).sum()
    }
}
