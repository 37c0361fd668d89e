use std::collections::HashMap;

use crate::record::FtmRecord;

/// `FollowTheMoney` schema tags the pipeline knows how to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Person,
    Company,
    Sanction,
    Ownership,
    Directorship,
}

impl SchemaType {
    pub const ALL: [Self; 5] = [
        Self::Person,
        Self::Company,
        Self::Sanction,
        Self::Ownership,
        Self::Directorship,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Company => "Company",
            Self::Sanction => "Sanction",
            Self::Ownership => "Ownership",
            Self::Directorship => "Directorship",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }

    /// Entities produce output records; everything else is a relationship.
    pub const fn is_entity(&self) -> bool {
        matches!(self, Self::Person | Self::Company)
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records grouped by their declared `schema` tag, in input order.
///
/// Unknown tags get buckets of their own. Untagged records land in no bucket
/// but are still visible to the identifier heuristic.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    buckets: HashMap<&'a str, Vec<&'a FtmRecord>>,
    identifiers: Vec<&'a FtmRecord>,
}

impl<'a> Partition<'a> {
    pub fn build(records: &'a [FtmRecord]) -> Self {
        let mut buckets: HashMap<&str, Vec<&FtmRecord>> = HashMap::new();
        for record in records {
            if let Some(tag) = record.schema() {
                buckets.entry(tag).or_default().push(record);
            }
        }

        Self {
            buckets,
            identifiers: find_identifier_records(records),
        }
    }

    pub fn get(&self, schema: SchemaType) -> &[&'a FtmRecord] {
        self.get_tag(schema.as_str())
    }

    pub fn get_tag(&self, tag: &str) -> &[&'a FtmRecord] {
        self.buckets.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Records detected as identifiers regardless of their tag.
    pub fn identifiers(&self) -> &[&'a FtmRecord] {
        &self.identifiers
    }

    /// Tags present in the input that the pipeline does not consume.
    pub fn unknown_tags(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.buckets
            .iter()
            .filter(|(tag, _)| SchemaType::parse(tag).is_none())
            .map(|(tag, records)| (*tag, records.len()))
    }
}

/// Records whose properties carry `holder`, `number` and `type` at once.
///
/// Identifier exports are not reliably tagged, so these are found by shape.
/// Any other record that happens to use all three property names matches too.
pub fn find_identifier_records(records: &[FtmRecord]) -> Vec<&FtmRecord> {
    records
        .iter()
        .filter(|r| r.has_property("holder") && r.has_property("number") && r.has_property("type"))
        .collect()
}
