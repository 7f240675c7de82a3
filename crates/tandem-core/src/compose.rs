//! Composite response assembly
//!
//! Composers are pure field selections. They take records by value, and
//! successful records are the only way to obtain those values, so a
//! composite can never be built from a failed call.

use crate::models::{BicycleRecord, BoatRecord, BrandRecord, CompositeRecord};

/// Combine a bicycle record with its brand record (parallel fan-out).
///
/// `id` and `color` come from the bicycle, the brand's `name` is renamed
/// to `brand`.
pub fn bicycle_with_brand(bicycle: BicycleRecord, brand: BrandRecord) -> CompositeRecord {
    CompositeRecord {
        id: bicycle.id,
        color: bicycle.color,
        brand: brand.name,
    }
}

/// Combine a boat record with the brand record resolved from its chaining
/// key (sequential fetch).
///
/// The boat's own `brand` field was consumed as the second call's id; the
/// composite carries the resolved brand `name` instead.
pub fn boat_with_brand(boat: BoatRecord, brand: BrandRecord) -> CompositeRecord {
    CompositeRecord {
        id: boat.id,
        color: boat.color,
        brand: brand.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bicycle_composite_selects_declared_fields() {
        let composite = bicycle_with_brand(
            BicycleRecord {
                id: "7".into(),
                color: "red".into(),
            },
            BrandRecord { name: "Acme".into() },
        );

        assert_eq!(
            composite,
            CompositeRecord {
                id: "7".into(),
                color: "red".into(),
                brand: "Acme".into(),
            }
        );
    }

    #[test]
    fn boat_composite_replaces_chaining_key_with_brand_name() {
        let composite = boat_with_brand(
            BoatRecord {
                id: "3".into(),
                color: "blue".into(),
                brand: "42".into(),
            },
            BrandRecord {
                name: "SuperMarine".into(),
            },
        );

        assert_eq!(composite.brand, "SuperMarine");
        assert_eq!(composite.id, "3");
        assert_eq!(composite.color, "blue");
    }

    #[test]
    fn composite_serializes_exactly_three_fields() {
        let composite = CompositeRecord {
            id: "7".into(),
            color: "red".into(),
            brand: "Acme".into(),
        };

        let value = serde_json::to_value(&composite).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["id"], "7");
        assert_eq!(object["color"], "red");
        assert_eq!(object["brand"], "Acme");
    }
}
