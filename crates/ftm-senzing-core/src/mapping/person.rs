use crate::config::MapperConfig;
use crate::feature::{Feature, RecordType, RelationRole, SenzingRecord};
use crate::index::{Identifier, RelationshipIndexes};
use crate::record::FtmRecord;

const SSN: &str = "SSN";
const DRIVERS_LICENSE: &str = "DRIVERS_LICENSE";

/// Maps a `Person` record, pulling identifiers, ownership, directorships and
/// sanction metadata from the relationship indexes.
pub fn map_person(
    record: &FtmRecord,
    indexes: &RelationshipIndexes,
    config: &MapperConfig,
) -> SenzingRecord {
    let id = record.id.as_str();
    let mut features = vec![Feature::RecordType {
        record_type: RecordType::Person,
    }];

    if let Some(name) = name_feature(record) {
        features.push(name);
    }

    if let Some(dob) = record.present("birthDate") {
        features.push(Feature::DateOfBirth {
            date_of_birth: dob.to_string(),
        });
    }

    features.extend(record.multiple("address").into_iter().map(|addr| Feature::Address {
        addr_full: addr.to_string(),
    }));

    features.extend(record.multiple("email").into_iter().map(|email| Feature::Email {
        email_address: email.to_lowercase(),
    }));

    features.extend(record.multiple("phone").into_iter().map(|phone| Feature::Phone {
        phone_number: phone.to_string(),
    }));

    if let Some(gender) = record.present("gender") {
        features.push(Feature::Gender {
            gender: gender.to_string(),
        });
    }

    features.extend(
        record
            .multiple("nationality")
            .into_iter()
            .map(|nationality| Feature::Nationality {
                nationality: nationality.to_string(),
            }),
    );

    features.extend(indexes.identifiers.get(id).iter().filter_map(identifier_feature));

    super::ownership_pointers(&mut features, &indexes.ownership, id, config);

    features.extend(indexes.directorships.get(id).iter().map(|directorship| {
        Feature::pointer(
            &config.organization_data_source,
            &directorship.organization_id,
            RelationRole::from_director_role(directorship.role.as_deref()),
        )
    }));

    features.push(Feature::anchor(&config.person_data_source, id));

    SenzingRecord {
        data_source: config.person_data_source.clone(),
        record_id: record.id.clone(),
        features,
        sanction: indexes.sanctions.get(id).cloned(),
    }
}

/// Parsed name parts win; the full `name` is only used when neither a first
/// nor a last name is present.
fn name_feature(record: &FtmRecord) -> Option<Feature> {
    let first = record.present("firstName");
    let last = record.present("lastName");

    if first.is_none() && last.is_none() {
        return record.present("name").map(|full| Feature::FullName {
            name_full: full.trim().to_string(),
        });
    }

    let trimmed = |part: &str| part.trim().to_string();
    Some(Feature::PersonName {
        name_first: first.map(trimmed),
        name_last: last.map(trimmed),
        name_middle: record.present("middleName").map(trimmed),
    })
}

fn identifier_feature(identifier: &Identifier) -> Option<Feature> {
    let number = identifier.number.clone()?;
    match identifier.id_type.as_deref() {
        Some(SSN) => Some(Feature::Ssn { ssn_number: number }),
        Some(DRIVERS_LICENSE) => Some(Feature::DriversLicense {
            drivers_license_number: number,
            drivers_license_state: identifier.country.clone(),
        }),
        _ => None,
    }
}
