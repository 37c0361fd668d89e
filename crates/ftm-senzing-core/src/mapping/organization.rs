use crate::config::MapperConfig;
use crate::feature::{AddressType, Feature, NameType, RecordType, SenzingRecord};
use crate::index::OwnershipIndex;
use crate::record::FtmRecord;

/// Maps a `Company` record. Organizations never carry sanction metadata.
pub fn map_company(
    record: &FtmRecord,
    ownership: &OwnershipIndex,
    config: &MapperConfig,
) -> SenzingRecord {
    let id = record.id.as_str();
    let mut features = vec![Feature::RecordType {
        record_type: RecordType::Organization,
    }];

    if let Some(name) = record.present("name") {
        features.push(Feature::OrganizationName {
            name_type: NameType::Primary,
            name_org: name.trim().to_string(),
        });
    }

    features.extend(
        record
            .multiple("previousName")
            .into_iter()
            .map(|name| Feature::OrganizationName {
                name_type: NameType::Former,
                name_org: name.trim().to_string(),
            }),
    );

    features.extend(
        record
            .multiple("address")
            .into_iter()
            .map(|addr| Feature::TypedAddress {
                addr_type: AddressType::Business,
                addr_full: addr.to_string(),
            }),
    );

    if let Some(jurisdiction) = record.present("jurisdiction") {
        features.push(Feature::RegistrationCountry {
            registration_country: jurisdiction.to_string(),
        });
    }

    super::ownership_pointers(&mut features, ownership, id, config);

    features.push(Feature::anchor(&config.organization_data_source, id));

    SenzingRecord {
        data_source: config.organization_data_source.clone(),
        record_id: record.id.clone(),
        features,
        sanction: None,
    }
}
