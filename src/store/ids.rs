//! Record identifiers.
//!
//! Values start from the wall clock in milliseconds but never repeat or go
//! backwards within one store: a burst of calls in the same millisecond
//! just keeps counting up.

use chrono::Utc;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last + 1);
        self.last = id;
        id
    }

    /// Next `"{prefix}{n}"` for which `taken` is false.
    pub fn next_unused<F>(&mut self, prefix: &str, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let id = format!("{prefix}{}", self.next());
            if !taken(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase_under_burst() {
        let mut ids = IdGenerator::new();
        let mut prev = ids.next();
        for _ in 0..10_000 {
            let n = ids.next();
            assert!(n > prev);
            prev = n;
        }
    }

    #[test]
    fn next_unused_skips_taken_ids() {
        let mut ids = IdGenerator::new();
        let first = ids.next_unused("d", |_| false);
        let n: u64 = first.trim_start_matches('d').parse().unwrap();
        let blocked = format!("d{}", n + 1);

        let second = ids.next_unused("d", |id| id == blocked);
        assert_ne!(second, blocked);
        assert!(second.starts_with('d'));
    }
}
