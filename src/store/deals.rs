use super::{DEALS_KEY, RecordStore, today};
use crate::errors::AppResult;
use crate::models::activity::kind;
use crate::models::{Deal, DealStage, DealUpdate, NewDeal, StageColumn, seed};

impl RecordStore {
    pub fn list_deals(&self) -> Vec<Deal> {
        self.load(DEALS_KEY, seed::deals)
    }

    pub fn get_deal(&self, id: &str) -> Option<Deal> {
        self.list_deals().into_iter().find(|d| d.id == id)
    }

    /// Deals pointing at `contact_id`. The reference is not checked.
    pub fn deals_for_contact(&self, contact_id: &str) -> Vec<Deal> {
        self.list_deals()
            .into_iter()
            .filter(|d| d.contact_id == contact_id)
            .collect()
    }

    pub fn deals_in_stage(&self, stage: DealStage) -> Vec<Deal> {
        self.list_deals()
            .into_iter()
            .filter(|d| d.stage == stage)
            .collect()
    }

    /// The pipeline board: every stage in order, with its deals.
    pub fn deals_by_stage(&self) -> Vec<StageColumn> {
        let deals = self.list_deals();
        DealStage::PIPELINE
            .iter()
            .map(|&stage| StageColumn {
                stage,
                deals: deals.iter().filter(|d| d.stage == stage).cloned().collect(),
            })
            .collect()
    }

    pub fn create_deal(&mut self, fields: NewDeal) -> AppResult<Deal> {
        fields.validate()?;

        let loaded = self.load_for_update(DEALS_KEY, seed::deals);
        let mut deals = loaded.value;
        let id = self
            .ids
            .next_unused("d", |id| deals.iter().any(|d| d.id == id));
        let deal = fields.into_deal(id, today());

        deals.insert(0, deal.clone());
        if self.save_loaded(DEALS_KEY, &deals, loaded.writable) {
            self.note(
                "deal_add",
                &deal.id,
                &format!("Created deal {}", deal.name),
            );
            self.record_activity(
                kind::DEAL_CREATED,
                format!("New deal created: {}", deal.name),
            );
        }

        Ok(deal)
    }

    /// Merge `changes` into the deal with `id`. No activity is recorded.
    pub fn update_deal(&mut self, id: &str, changes: DealUpdate) -> AppResult<Option<Deal>> {
        changes.validate()?;

        let loaded = self.load_for_update(DEALS_KEY, seed::deals);
        let mut deals = loaded.value;
        let Some(deal) = deals.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };

        changes.apply(deal);
        let updated = deal.clone();

        if self.save_loaded(DEALS_KEY, &deals, loaded.writable) {
            self.note(
                "deal_edit",
                id,
                &format!("Updated deal {} ({})", updated.name, updated.stage.as_str()),
            );
        }

        Ok(Some(updated))
    }

    pub fn delete_deal(&mut self, id: &str) -> bool {
        let loaded = self.load_for_update(DEALS_KEY, seed::deals);
        let before = loaded.value.len();
        let remaining: Vec<Deal> = loaded.value.into_iter().filter(|d| d.id != id).collect();

        if remaining.len() == before {
            return false;
        }

        if self.save_loaded(DEALS_KEY, &remaining, loaded.writable) {
            self.note("deal_del", id, "Deleted deal");
        }
        true
    }
}
