use std::path::{Path, PathBuf};

use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;

use crate::error::Result;
use crate::planner::{DEFAULT_MEALS_PER_DAY, DEFAULT_TARGET_CALORIES};

/// Prefix for environment overrides, e.g. `WELLNOOSH_TARGET_CALORIES`.
pub const ENV_PREFIX: &str = "WELLNOOSH";

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_NAME: &str = "wellnoosh";

pub const DEFAULT_GROCERY_FILE: &str = "grocery_list.json";

/// Planner settings before CLI overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub user_id: String,
    pub target_calories: i32,
    pub meals_per_day: i32,
    pub include_snacks: bool,
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    pub seed: Option<u64>,

    /// Meal-template catalog; the embedded one when unset.
    #[serde(default)]
    pub meal_catalog: Option<PathBuf>,

    /// Store directory and price table; the embedded one when unset.
    #[serde(default)]
    pub shopping_catalog: Option<PathBuf>,

    pub grocery_file: PathBuf,
}

impl Settings {
    /// Layer defaults, the settings file and `WELLNOOSH_*` variables.
    ///
    /// An explicit `path` must exist; the default `wellnoosh.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        let file = match path {
            Some(p) => ConfigFile::from(p).required(true),
            None => ConfigFile::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = Config::builder()
            .set_default("user_id", "local")?
            .set_default("target_calories", DEFAULT_TARGET_CALORIES as i64)?
            .set_default("meals_per_day", DEFAULT_MEALS_PER_DAY as i64)?
            .set_default("include_snacks", true)?
            .set_default("dietary_restrictions", Vec::<String>::new())?
            .set_default("grocery_file", DEFAULT_GROCERY_FILE)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("dietary_restrictions"),
            )
            .build()?;

        Ok(builder.try_deserialize::<Settings>()?)
    }
}
