//! Client records and the per-field weight table
//!
//! Records are a closed set of named, optional fields addressed through
//! the [`Field`] enum, so weight tables and export field lists are
//! statically checked mappings instead of free-form string keys.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default weight applied to the `name` field.
pub const DEFAULT_NAME_WEIGHT: f64 = 1.0;
/// Default weight applied to the `email` field.
pub const DEFAULT_EMAIL_WEIGHT: f64 = 0.8;
/// Default weight applied to the `phone` field.
pub const DEFAULT_PHONE_WEIGHT: f64 = 0.7;
/// Default weight applied to the `services` list field.
pub const DEFAULT_SERVICES_WEIGHT: f64 = 0.7;
/// Default weight applied to the `notes` field.
pub const DEFAULT_NOTES_WEIGHT: f64 = 0.6;
/// Default weight applied to the `tags` list field.
pub const DEFAULT_TAGS_WEIGHT: f64 = 0.6;
/// Default weight applied to the `address` field.
pub const DEFAULT_ADDRESS_WEIGHT: f64 = 0.5;

/// Fields of a client record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Notes,
    Address,
    Services,
    Tags,
    TotalSpent,
    LastVisit,
}

impl Field {
    /// Text-bearing fields eligible for query matching.
    pub const SEARCHABLE: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Notes,
        Field::Address,
        Field::Services,
        Field::Tags,
    ];

    /// Every field, in export order.
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Notes,
        Field::Address,
        Field::Services,
        Field::Tags,
        Field::TotalSpent,
        Field::LastVisit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Notes => "notes",
            Field::Address => "address",
            Field::Services => "services",
            Field::Tags => "tags",
            Field::TotalSpent => "total_spent",
            Field::LastVisit => "last_visit",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "notes" => Ok(Field::Notes),
            "address" => Ok(Field::Address),
            "services" => Ok(Field::Services),
            "tags" => Ok(Field::Tags),
            "total_spent" => Ok(Field::TotalSpent),
            "last_visit" => Ok(Field::LastVisit),
            other => Err(AppError::UnknownField(other.to_string())),
        }
    }
}

/// One client row in a roster. Every field is optional; absent fields
/// contribute nothing to scoring or export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<String>,
}

impl ClientRecord {
    /// Field text for matching; list fields are space-joined.
    pub fn field_text(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::Notes => self.notes.clone(),
            Field::Address => self.address.clone(),
            Field::Services => self.services.as_ref().map(|items| items.join(" ")),
            Field::Tags => self.tags.as_ref().map(|items| items.join(" ")),
            Field::TotalSpent => self.total_spent.map(|amount| amount.to_string()),
            Field::LastVisit => self.last_visit.clone(),
        }
    }

    /// Individual values of a field; list fields flatten to one value per
    /// item rather than joining. Used by suggestion generation.
    pub fn field_values(&self, field: Field) -> Vec<String> {
        match field {
            Field::Services => self.services.clone().unwrap_or_default(),
            Field::Tags => self.tags.clone().unwrap_or_default(),
            other => self.field_text(other).into_iter().collect(),
        }
    }
}

/// Per-field score multipliers. Fields absent from the table are ignored
/// for scoring. The default table covers every searchable field; builder
/// overrides replace or remove individual entries.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWeights {
    weights: BTreeMap<Field, f64>,
}

impl Default for FieldWeights {
    fn default() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert(Field::Name, DEFAULT_NAME_WEIGHT);
        weights.insert(Field::Email, DEFAULT_EMAIL_WEIGHT);
        weights.insert(Field::Phone, DEFAULT_PHONE_WEIGHT);
        weights.insert(Field::Notes, DEFAULT_NOTES_WEIGHT);
        weights.insert(Field::Address, DEFAULT_ADDRESS_WEIGHT);
        weights.insert(Field::Services, DEFAULT_SERVICES_WEIGHT);
        weights.insert(Field::Tags, DEFAULT_TAGS_WEIGHT);
        FieldWeights { weights }
    }
}

impl FieldWeights {
    /// A table with no entries; combine with `with_weight` to score only
    /// chosen fields.
    pub fn empty() -> Self {
        FieldWeights {
            weights: BTreeMap::new(),
        }
    }

    /// Set (or override) one field's weight.
    pub fn with_weight(mut self, field: Field, weight: f64) -> Self {
        self.weights.insert(field, weight);
        self
    }

    /// Drop a field from the table so it no longer contributes.
    pub fn without_field(mut self, field: Field) -> Self {
        self.weights.remove(&field);
        self
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.weights.get(&field).copied()
    }

    /// Entries in deterministic (field-order) sequence.
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        self.weights.iter().map(|(field, weight)| (*field, *weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ClientRecord {
        ClientRecord {
            name: Some("Marcus Johnson".to_string()),
            email: Some("marcus@example.com".to_string()),
            services: Some(vec!["Fade".to_string(), "Beard Trim".to_string()]),
            ..ClientRecord::default()
        }
    }

    #[test]
    fn test_field_text_joins_lists() {
        let record = sample_record();
        assert_eq!(
            record.field_text(Field::Services),
            Some("Fade Beard Trim".to_string())
        );
    }

    #[test]
    fn test_field_text_absent() {
        let record = sample_record();
        assert_eq!(record.field_text(Field::Notes), None);
        assert_eq!(record.field_text(Field::TotalSpent), None);
    }

    #[test]
    fn test_field_values_flatten_lists() {
        let record = sample_record();
        assert_eq!(
            record.field_values(Field::Services),
            vec!["Fade".to_string(), "Beard Trim".to_string()]
        );
        assert_eq!(
            record.field_values(Field::Name),
            vec!["Marcus Johnson".to_string()]
        );
        assert!(record.field_values(Field::Tags).is_empty());
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("name".parse::<Field>().unwrap(), Field::Name);
        assert_eq!("total_spent".parse::<Field>().unwrap(), Field::TotalSpent);
        assert!("shoe_size".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_round_trips_as_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_default_weights() {
        let weights = FieldWeights::default();
        assert_eq!(weights.get(Field::Name), Some(DEFAULT_NAME_WEIGHT));
        assert_eq!(weights.get(Field::Address), Some(DEFAULT_ADDRESS_WEIGHT));
        // Non-text fields carry no default weight
        assert_eq!(weights.get(Field::TotalSpent), None);
    }

    #[test]
    fn test_weight_override() {
        let weights = FieldWeights::default().with_weight(Field::Email, 2.0);
        assert_eq!(weights.get(Field::Email), Some(2.0));
        // Other defaults survive the override
        assert_eq!(weights.get(Field::Name), Some(DEFAULT_NAME_WEIGHT));
    }

    #[test]
    fn test_weight_removal() {
        let weights = FieldWeights::default().without_field(Field::Notes);
        assert_eq!(weights.get(Field::Notes), None);
    }

    #[test]
    fn test_record_deserializes_partial_json() {
        let record: ClientRecord =
            serde_json::from_str(r#"{"name": "Dana", "tags": ["vip"]}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("Dana"));
        assert_eq!(record.tags, Some(vec!["vip".to_string()]));
        assert_eq!(record.email, None);
    }
}
