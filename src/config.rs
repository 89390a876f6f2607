use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File,
          io::Read,
          path::Path,
};

/// How distinct points that share an x-coordinate are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateCheck {
    /// No pre-validation; the zero denominator surfaces as a fault.
    Arithmetic,
    /// Scan for shared x-coordinates before doing any arithmetic.
    Reject,
}

/// How each `numerator / denominator` term is collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Division {
    /// Sum exact rationals, require an integer only for the final sum.
    Rational,
    /// Integer-divide every term, faulting on a remainder.
    PerTerm,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub duplicate_x: DuplicateCheck,
    pub division: Division,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            duplicate_x: DuplicateCheck::Arithmetic,
            division: Division::Rational,
        }
    }
}

pub fn get_config<P: AsRef<Path>>(filename: P) -> Result<Settings> {
    let path = filename.as_ref();
    let io_err = |source| Error::Io { path: path.to_path_buf(), source };
    let mut file = File::open(path).map_err(io_err)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(io_err)?;
    toml::from_str(&contents).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_from_toml() {
        let s: Settings = toml::from_str(
            "duplicate-x = \"reject\"\ndivision = \"per-term\"\n"
        ).unwrap();
        assert_eq!(s.duplicate_x, DuplicateCheck::Reject);
        assert_eq!(s.division, Division::PerTerm);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let s: Settings = toml::from_str("division = \"per-term\"\n").unwrap();
        assert_eq!(s.duplicate_x, DuplicateCheck::Arithmetic);
        let s: Settings = toml::from_str("").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn default_settings_round_trip_through_toml() {
        let text = toml::to_string(&Settings::default()).unwrap();
        let s: Settings = toml::from_str(&text).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn get_config_reports_path() {
        let mut path = std::env::temp_dir();
        path.push(format!("sf-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "division = \"floor\"\n").unwrap();
        match get_config(&path) {
            Err(Error::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result {:?}", other),
        }
        std::fs::remove_file(&path).unwrap();

        match get_config(&path) {
            Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
