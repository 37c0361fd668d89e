mod organization;
mod person;
mod pipeline;

pub use organization::map_company;
pub use person::map_person;
pub use pipeline::{map_ftm_to_senzing, map_records, MappingOutput, MappingStats};

use crate::config::MapperConfig;
use crate::feature::{Feature, RelationRole};
use crate::index::OwnershipIndex;

/// `OWNER_OF` pointers for everything `owner_id` owns. Assets are always
/// addressed in the organization data source.
fn ownership_pointers(
    features: &mut Vec<Feature>,
    ownership: &OwnershipIndex,
    owner_id: &str,
    config: &MapperConfig,
) {
    features.extend(ownership.get(owner_id).iter().map(|asset_id| {
        Feature::pointer(
            &config.organization_data_source,
            asset_id,
            RelationRole::OwnerOf,
        )
    }));
}
