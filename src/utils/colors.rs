//! ANSI color helper utilities for terminal output.
use crate::models::{ContactStatus, DealStage};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Returns GREY for empty optional fields, RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}

pub fn color_for_status(status: ContactStatus) -> &'static str {
    match status {
        ContactStatus::Lead => CYAN,
        ContactStatus::Prospect => YELLOW,
        ContactStatus::Customer => GREEN,
        ContactStatus::Churned => GREY,
    }
}

pub fn color_for_stage(stage: DealStage) -> &'static str {
    match stage {
        DealStage::Prospecting => GREY,
        DealStage::Qualification => BLUE,
        DealStage::Proposal => YELLOW,
        DealStage::Negotiation => MAGENTA,
        DealStage::ClosedWon => GREEN,
        DealStage::ClosedLost => RED,
    }
}

/// Wrap `value` in `color` and reset.
pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
