use super::validate;
use crate::errors::AppResult;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Pipeline phase of a deal. Any stage may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DealStage {
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStage {
    /// Board order, left to right.
    pub const PIPELINE: [DealStage; 6] = [
        DealStage::Prospecting,
        DealStage::Qualification,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::Prospecting => "prospecting",
            DealStage::Qualification => "qualification",
            DealStage::Proposal => "proposal",
            DealStage::Negotiation => "negotiation",
            DealStage::ClosedWon => "closed-won",
            DealStage::ClosedLost => "closed-lost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DealStage::Prospecting => "Prospecting",
            DealStage::Qualification => "Qualification",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiation => "Negotiation",
            DealStage::ClosedWon => "Closed Won",
            DealStage::ClosedLost => "Closed Lost",
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub stage: DealStage,
    pub contact_id: String,
    pub company: String,
    pub expected_close: NaiveDate,
    pub probability: u8,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDeal {
    pub name: String,
    pub value: f64,
    pub stage: DealStage,
    pub contact_id: String,
    pub company: String,
    pub expected_close: NaiveDate,
    pub probability: u8,
}

impl NewDeal {
    pub fn validate(&self) -> AppResult<()> {
        validate::required("name", &self.name)?;
        validate::deal_value(self.value)?;
        validate::required("company", &self.company)?;
        validate::probability(self.probability)?;
        Ok(())
    }

    pub(crate) fn into_deal(self, id: String, created_at: NaiveDate) -> Deal {
        Deal {
            id,
            name: self.name.trim().to_string(),
            value: self.value,
            stage: self.stage,
            contact_id: self.contact_id.trim().to_string(),
            company: self.company.trim().to_string(),
            expected_close: self.expected_close,
            probability: self.probability,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealUpdate {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub stage: Option<DealStage>,
    pub contact_id: Option<String>,
    pub company: Option<String>,
    pub expected_close: Option<NaiveDate>,
    pub probability: Option<u8>,
}

impl DealUpdate {
    pub fn is_empty(&self) -> bool {
        *self == DealUpdate::default()
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(v) = &self.name {
            validate::required("name", v)?;
        }
        if let Some(v) = self.value {
            validate::deal_value(v)?;
        }
        if let Some(v) = &self.company {
            validate::required("company", v)?;
        }
        if let Some(v) = self.probability {
            validate::probability(v)?;
        }
        Ok(())
    }

    /// Shallow merge; deals carry no last-updated marker.
    pub(crate) fn apply(self, deal: &mut Deal) {
        if let Some(v) = self.name {
            deal.name = v.trim().to_string();
        }
        if let Some(v) = self.value {
            deal.value = v;
        }
        if let Some(v) = self.stage {
            deal.stage = v;
        }
        if let Some(v) = self.contact_id {
            deal.contact_id = v.trim().to_string();
        }
        if let Some(v) = self.company {
            deal.company = v.trim().to_string();
        }
        if let Some(v) = self.expected_close {
            deal.expected_close = v;
        }
        if let Some(v) = self.probability {
            deal.probability = v;
        }
    }
}
