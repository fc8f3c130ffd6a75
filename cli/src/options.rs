use anyhow::Result;
use serde::{Deserialize, Serialize};

use geom::UnitFmt;

/// Settings shared by the subcommands, optionally loaded from a JSON file like
/// `{"units": {"metric": false}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// How to print distances
    #[serde(default)]
    pub units: UnitFmt,
}

impl Options {
    /// Without a path, uses the defaults.
    pub fn load(path: Option<String>) -> Result<Options> {
        match path {
            Some(path) => {
                let opts = abstutil::read_json(&path)?;
                info!("Loaded options from {}", path);
                Ok(opts)
            }
            None => Ok(Options::default()),
        }
    }
}
