//! Senzing JSON output records.
//!
//! Each [`Feature`] variant serializes to a flat object whose keys appear in
//! declaration order, so identical input always produces identical bytes.

use serde::Serialize;

use crate::index::Sanction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordType {
    Person,
    Organization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NameType {
    Primary,
    Former,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationRole {
    OwnerOf,
    DirectorOf,
    PrincipalOf,
    PresidentOf,
}

impl RelationRole {
    /// Maps a directorship `role` property. Unknown or missing roles collapse
    /// to [`RelationRole::DirectorOf`].
    pub fn from_director_role(role: Option<&str>) -> Self {
        match role {
            Some("Principal") => Self::PrincipalOf,
            Some("President") => Self::PresidentOf,
            _ => Self::DirectorOf,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OwnerOf => "OWNER_OF",
            Self::DirectorOf => "DIRECTOR_OF",
            Self::PrincipalOf => "PRINCIPAL_OF",
            Self::PresidentOf => "PRESIDENT_OF",
        }
    }
}

impl std::fmt::Display for RelationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Feature {
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    RecordType { record_type: RecordType },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    PersonName {
        #[serde(skip_serializing_if = "Option::is_none")]
        name_first: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name_last: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name_middle: Option<String>,
    },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    FullName { name_full: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    OrganizationName { name_type: NameType, name_org: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    DateOfBirth { date_of_birth: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    Address { addr_full: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    TypedAddress { addr_type: AddressType, addr_full: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    Email { email_address: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    Phone { phone_number: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    Gender { gender: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    Nationality { nationality: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    Ssn { ssn_number: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    DriversLicense {
        drivers_license_number: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        drivers_license_state: Option<String>,
    },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    RegistrationCountry { registration_country: String },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    RelPointer {
        rel_pointer_domain: String,
        rel_pointer_key: String,
        rel_pointer_role: RelationRole,
    },

    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    RelAnchor {
        rel_anchor_domain: String,
        rel_anchor_key: String,
    },
}

impl Feature {
    pub fn pointer(domain: &str, key: &str, role: RelationRole) -> Self {
        Self::RelPointer {
            rel_pointer_domain: domain.to_string(),
            rel_pointer_key: key.to_string(),
            rel_pointer_role: role,
        }
    }

    pub fn anchor(domain: &str, key: &str) -> Self {
        Self::RelAnchor {
            rel_anchor_domain: domain.to_string(),
            rel_anchor_key: key.to_string(),
        }
    }

    pub const fn is_anchor(&self) -> bool {
        matches!(self, Self::RelAnchor { .. })
    }

    pub const fn is_name(&self) -> bool {
        matches!(
            self,
            Self::PersonName { .. } | Self::FullName { .. } | Self::OrganizationName { .. }
        )
    }
}

/// One flattened Senzing record. Sanction metadata, when present, is written
/// as top-level fields after `FEATURES`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SenzingRecord {
    pub data_source: String,
    pub record_id: String,
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub sanction: Option<Sanction>,
}

impl SenzingRecord {
    pub fn anchor(&self) -> Option<&Feature> {
        self.features.iter().find(|f| f.is_anchor())
    }
}
