use serde::{Deserialize, Serialize};

pub const DEFAULT_PERSON_DATA_SOURCE: &str = "SANCTIONS";
pub const DEFAULT_ORGANIZATION_DATA_SOURCE: &str = "CORP_FILINGS";

pub const PERSON_SOURCE_ENV: &str = "FTM_SENZING_PERSON_SOURCE";
pub const ORGANIZATION_SOURCE_ENV: &str = "FTM_SENZING_ORG_SOURCE";

/// Data source identifiers stamped on mapped records.
///
/// Each value is used both as the `DATA_SOURCE` of records of that kind and as
/// the domain of relationship pointers and anchors that refer to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    #[serde(default = "default_person_data_source")]
    pub person_data_source: String,
    #[serde(default = "default_organization_data_source")]
    pub organization_data_source: String,
}

fn default_person_data_source() -> String {
    DEFAULT_PERSON_DATA_SOURCE.to_string()
}

fn default_organization_data_source() -> String {
    DEFAULT_ORGANIZATION_DATA_SOURCE.to_string()
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            person_data_source: default_person_data_source(),
            organization_data_source: default_organization_data_source(),
        }
    }
}

impl MapperConfig {
    /// Defaults overridden by `FTM_SENZING_PERSON_SOURCE` / `FTM_SENZING_ORG_SOURCE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads a JSON config file; missing fields take their defaults.
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        if !path.exists() {
            return Err(crate::Error::InputNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|e| crate::Error::io(path, e))?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            person_data_source: lookup(PERSON_SOURCE_ENV)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.person_data_source),
            organization_data_source: lookup(ORGANIZATION_SOURCE_ENV)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.organization_data_source),
        }
    }

    #[must_use]
    pub fn with_person_data_source(mut self, source: impl Into<String>) -> Self {
        self.person_data_source = source.into();
        self
    }

    #[must_use]
    pub fn with_organization_data_source(mut self, source: impl Into<String>) -> Self {
        self.organization_data_source = source.into();
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.person_data_source.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "person data source must not be empty".into(),
            ));
        }
        if self.organization_data_source.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "organization data source must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Options for reading `FollowTheMoney` JSONL input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Stop once this many entity (`Person`/`Company`) records are loaded.
    /// Relationship records do not count towards the limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_limit: Option<usize>,
}

impl LoadOptions {
    /// A limit of zero means no limit.
    #[must_use]
    pub fn with_sample_limit(mut self, limit: Option<usize>) -> Self {
        self.sample_limit = limit.filter(|n| *n > 0);
        self
    }
}
