use serde::Serialize;

use super::{map_company, map_person};
use crate::config::MapperConfig;
use crate::feature::SenzingRecord;
use crate::index::{
    DirectorshipIndex, IdentifierIndex, OwnershipIndex, RelationshipIndexes, SanctionIndex,
};
use crate::partition::{Partition, SchemaType};
use crate::record::FtmRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingStats {
    pub persons: usize,
    pub organizations: usize,
    pub sanctioned_entities: usize,
    pub identifier_holders: usize,
    pub owners: usize,
    pub directors: usize,
    /// Records whose tag is not one of the known schemas.
    pub ignored_records: usize,
}

impl MappingStats {
    pub const fn total_records(&self) -> usize {
        self.persons + self.organizations
    }
}

#[derive(Debug, Clone)]
pub struct MappingOutput {
    pub records: Vec<SenzingRecord>,
    pub stats: MappingStats,
}

/// Builds every relationship index up front, then maps all persons followed
/// by all companies, each in input order.
pub fn map_records(records: &[FtmRecord], config: &MapperConfig) -> MappingOutput {
    let partition = Partition::build(records);

    let indexes = RelationshipIndexes {
        sanctions: SanctionIndex::build(partition.get(SchemaType::Sanction).iter().copied()),
        identifiers: IdentifierIndex::build(partition.identifiers().iter().copied()),
        ownership: OwnershipIndex::build(partition.get(SchemaType::Ownership).iter().copied()),
        directorships: DirectorshipIndex::build(
            partition.get(SchemaType::Directorship).iter().copied(),
        ),
    };

    let mut ignored_records = 0;
    for (tag, count) in partition.unknown_tags() {
        tracing::debug!("Ignoring {} records with schema {}", count, tag);
        ignored_records += count;
    }

    let persons = partition.get(SchemaType::Person);
    let companies = partition.get(SchemaType::Company);

    let mut output = Vec::with_capacity(persons.len() + companies.len());
    output.extend(persons.iter().map(|r| map_person(r, &indexes, config)));
    output.extend(
        companies
            .iter()
            .map(|r| map_company(r, &indexes.ownership, config)),
    );

    let stats = MappingStats {
        persons: persons.len(),
        organizations: companies.len(),
        sanctioned_entities: indexes.sanctions.len(),
        identifier_holders: indexes.identifiers.len(),
        owners: indexes.ownership.len(),
        directors: indexes.directorships.len(),
        ignored_records,
    };

    tracing::info!(
        "Mapped {} persons and {} organizations",
        stats.persons,
        stats.organizations
    );

    MappingOutput {
        records: output,
        stats,
    }
}

pub fn map_ftm_to_senzing(records: &[FtmRecord], config: &MapperConfig) -> Vec<SenzingRecord> {
    map_records(records, config).records
}
