#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::implicit_hasher)]

pub mod config;
pub mod error;
pub mod feature;
pub mod index;
pub mod io;
pub mod mapping;
pub mod partition;
pub mod property;
pub mod record;

pub use config::{LoadOptions, MapperConfig};
pub use error::{Error, Result};
pub use feature::{AddressType, Feature, NameType, RecordType, RelationRole, SenzingRecord};
pub use index::{
    Directorship, DirectorshipIndex, Identifier, IdentifierIndex, OwnershipIndex,
    RelationshipIndexes, Sanction, SanctionIndex,
};
pub use io::{load_records, write_jsonl, write_records, LoadOutput, LoadStats};
pub use mapping::{
    map_company, map_ftm_to_senzing, map_person, map_records, MappingOutput, MappingStats,
};
pub use partition::{find_identifier_records, Partition, SchemaType};
pub use property::{extract_multiple, extract_present, extract_single, Properties, PropertyValue};
pub use record::FtmRecord;
