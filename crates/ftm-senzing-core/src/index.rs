//! Lookup tables built from relationship records.
//!
//! Each index is keyed by the entity ID a relationship points at and keeps
//! the per-key insertion order of its source records. Indexes are built once
//! before any entity is mapped and are never mutated afterwards.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::FtmRecord;

/// Sanction metadata attached to a listed entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Sanction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Sanction {
    fn from_record(record: &FtmRecord) -> Self {
        let field = |key| record.present(key).map(String::from);
        Self {
            program: field("program"),
            authority: field("authority"),
            reason: field("reason"),
            listing_date: field("listingDate"),
            status: field("status"),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.program.is_none()
            && self.authority.is_none()
            && self.reason.is_none()
            && self.listing_date.is_none()
            && self.status.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SanctionIndex {
    by_entity: HashMap<String, Sanction>,
}

impl SanctionIndex {
    /// Later sanctions for the same entity replace earlier ones.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a FtmRecord>) -> Self {
        let mut by_entity = HashMap::new();
        for record in records {
            let Some(entity_id) = record.present("entity") else {
                tracing::debug!("Dropping sanction {} without entity", record.id);
                continue;
            };
            by_entity.insert(entity_id.to_string(), Sanction::from_record(record));
        }
        Self { by_entity }
    }

    pub fn get(&self, entity_id: &str) -> Option<&Sanction> {
        self.by_entity.get(entity_id)
    }

    pub fn len(&self) -> usize {
        self.by_entity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_entity.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifier {
    pub id_type: Option<String>,
    pub number: Option<String>,
    pub country: Option<String>,
}

impl Identifier {
    fn from_record(record: &FtmRecord) -> Self {
        Self {
            id_type: record.present("type").map(String::from),
            number: record.present("number").map(String::from),
            country: record.present("country").map(String::from),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    by_holder: HashMap<String, Vec<Identifier>>,
}

impl IdentifierIndex {
    pub fn build<'a>(records: impl IntoIterator<Item = &'a FtmRecord>) -> Self {
        let mut by_holder: HashMap<String, Vec<Identifier>> = HashMap::new();
        for record in records {
            let Some(holder_id) = record.present("holder") else {
                tracing::debug!("Dropping identifier {} without holder", record.id);
                continue;
            };
            by_holder
                .entry(holder_id.to_string())
                .or_default()
                .push(Identifier::from_record(record));
        }
        Self { by_holder }
    }

    pub fn get(&self, holder_id: &str) -> &[Identifier] {
        self.by_holder.get(holder_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_holder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_holder.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OwnershipIndex {
    by_owner: HashMap<String, Vec<String>>,
}

impl OwnershipIndex {
    pub fn build<'a>(records: impl IntoIterator<Item = &'a FtmRecord>) -> Self {
        let mut by_owner: HashMap<String, Vec<String>> = HashMap::new();
        for record in records {
            if let (Some(owner_id), Some(asset_id)) =
                (record.present("owner"), record.present("asset"))
            {
                by_owner
                    .entry(owner_id.to_string())
                    .or_default()
                    .push(asset_id.to_string());
            } else {
                tracing::debug!("Dropping ownership {} without owner or asset", record.id);
            }
        }
        Self { by_owner }
    }

    /// Asset IDs owned by `owner_id`, in input order.
    pub fn get(&self, owner_id: &str) -> &[String] {
        self.by_owner.get(owner_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_owner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_owner.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directorship {
    pub organization_id: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DirectorshipIndex {
    by_director: HashMap<String, Vec<Directorship>>,
}

impl DirectorshipIndex {
    pub fn build<'a>(records: impl IntoIterator<Item = &'a FtmRecord>) -> Self {
        let mut by_director: HashMap<String, Vec<Directorship>> = HashMap::new();
        for record in records {
            if let (Some(director_id), Some(organization_id)) =
                (record.present("director"), record.present("organization"))
            {
                by_director
                    .entry(director_id.to_string())
                    .or_default()
                    .push(Directorship {
                        organization_id: organization_id.to_string(),
                        role: record.single("role").map(String::from),
                    });
            } else {
                tracing::debug!(
                    "Dropping directorship {} without director or organization",
                    record.id
                );
            }
        }
        Self { by_director }
    }

    pub fn get(&self, director_id: &str) -> &[Directorship] {
        self.by_director.get(director_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_director.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_director.is_empty()
    }
}

/// The four relationship indexes consulted while mapping entities.
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndexes {
    pub sanctions: SanctionIndex,
    pub identifiers: IdentifierIndex,
    pub ownership: OwnershipIndex,
    pub directorships: DirectorshipIndex,
}
