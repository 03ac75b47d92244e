//! Configuration file checks: report missing or unknown keys and fill the
//! missing ones with their defaults.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

pub const KNOWN_KEYS: [&str; 3] = ["database", "confirm_deletes", "log_level"];

#[derive(Debug, Default, PartialEq)]
pub struct ConfigReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Compare the keys in `path` with the ones this version understands.
pub fn check(path: &Path) -> AppResult<ConfigReport> {
    let map = read_mapping(path)?;

    let present: Vec<String> = map
        .keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect();

    Ok(ConfigReport {
        missing: KNOWN_KEYS
            .iter()
            .filter(|k| !present.iter().any(|p| p == *k))
            .map(|k| k.to_string())
            .collect(),
        unknown: present
            .into_iter()
            .filter(|p| !KNOWN_KEYS.contains(&p.as_str()))
            .collect(),
    })
}

/// Rewrite `path` with every known key present. Unknown keys are kept.
/// Returns the keys that were added.
pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
    let report = check(path)?;
    if report.missing.is_empty() {
        return Ok(Vec::new());
    }

    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::load_from(path)?)? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("unexpected config shape".into())),
    };

    for key in &report.missing {
        let k = Value::String(key.clone());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    Ok(report.missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str, body: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("{name}_minicrm.conf"));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn check_reports_missing_and_unknown() {
        let path = temp_conf("check", "database: /tmp/a.sqlite\ncolour: blue\n");
        let report = check(&path).unwrap();
        assert_eq!(report.missing, vec!["confirm_deletes", "log_level"]);
        assert_eq!(report.unknown, vec!["colour"]);
    }

    #[test]
    fn migrate_fills_defaults_and_keeps_values() {
        let path = temp_conf("migrate", "database: /tmp/b.sqlite\n");
        let added = migrate(&path).unwrap();
        assert_eq!(added.len(), 2);

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/b.sqlite");
        assert!(check(&path).unwrap().is_clean());
    }
}
