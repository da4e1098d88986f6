//! Conversions between persisted records and their external shapes.
//!
//! All three functions are pure and total. Attributes move as one value, so
//! each field always lands in its own counterpart.

use super::{CatalogAttributes, CatalogEntity, CatalogItem, CatalogRecord};

/// Build an unsaved entity from an input payload.
pub fn to_entity(input: CatalogAttributes) -> CatalogEntity {
    CatalogEntity {
        id: None,
        attributes: input,
    }
}

/// Project a persisted record onto its output shape.
pub fn to_output(record: &CatalogRecord) -> CatalogItem {
    CatalogItem {
        id: record.id,
        attributes: record.attributes.clone(),
    }
}

/// Apply an update payload to an existing record.
///
/// Full replace: every attribute takes the input's value, including `None`
/// for fields the caller left out. Only the identifier is kept.
pub fn merge(existing: CatalogRecord, input: CatalogAttributes) -> CatalogEntity {
    CatalogEntity {
        id: Some(existing.id),
        attributes: input,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn sample() -> CatalogAttributes {
        CatalogAttributes {
            item_type: Some("remote".into()),
            brand: Some("Acme".into()),
            name: Some("X".into()),
            price: Some(Decimal::from(10)),
            smart_tv: Some(true),
            wifi: Some(false),
            original_stock: Some(5),
            sold: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn to_entity_leaves_id_unset() {
        let entity = to_entity(sample());
        assert_eq!(entity.id, None);
        assert_eq!(entity.attributes, sample());
    }

    #[test]
    fn output_projects_every_attribute() {
        let record = CatalogRecord {
            id: 9,
            attributes: sample(),
        };
        let item = to_output(&record);
        assert_eq!(item.id, 9);
        assert_eq!(item.attributes, record.attributes);
    }

    #[test]
    fn output_smart_tv_is_not_taken_from_wifi() {
        let record = CatalogRecord {
            id: 1,
            attributes: sample(),
        };
        let item = to_output(&record);
        assert_eq!(item.attributes.smart_tv, Some(true));
        assert_eq!(item.attributes.wifi, Some(false));
    }

    #[test]
    fn merge_keeps_id_and_replaces_everything_else() {
        let existing = CatalogRecord {
            id: 4,
            attributes: sample(),
        };
        let input = CatalogAttributes {
            name: Some("Y".into()),
            price: Some(Decimal::from(20)),
            ..Default::default()
        };
        let merged = merge(existing, input.clone());
        assert_eq!(merged.id, Some(4));
        assert_eq!(merged.attributes, input);
        assert_eq!(merged.attributes.brand, None);
    }

    #[test]
    fn payload_numbers_survive_entity_and_output_unchanged() {
        let payload = r#"{"price":1234567890123456.78,"available_size":9007199254740993}"#;
        let input: CatalogAttributes = serde_json::from_str(payload).unwrap();

        let entity = to_entity(input);
        let record = CatalogRecord {
            id: 3,
            attributes: entity.attributes,
        };
        let output = serde_json::to_value(to_output(&record)).unwrap();

        assert_eq!(output["id"], 3);
        assert_eq!(output["price"].to_string(), "1234567890123456.78");
        assert_eq!(output["available_size"].to_string(), "9007199254740993");
    }
}
