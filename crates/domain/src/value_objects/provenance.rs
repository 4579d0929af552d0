//! Generation provenance
//!
//! Every generated record carries the draws that produced it. The moment any
//! generated field is set by hand, the record becomes `Custom` and the field
//! is listed as overridden; its stored rolls are dropped so no value is ever
//! attributed to a roll that no longer explains it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::dice::RollRecord;

/// Flat provenance flag, as exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    Procedural,
    Custom,
}

impl std::fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMethod::Procedural => write!(f, "procedural"),
            GenerationMethod::Custom => write!(f, "custom"),
        }
    }
}

/// A roll attributed to the field it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRoll {
    pub field: String,
    pub roll: RollRecord,
}

/// Where a record's values came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Provenance {
    /// Every value traces back to `rolls`
    Procedural { rolls: Vec<FieldRoll> },
    /// At least one field was set by hand
    #[serde(rename_all = "camelCase")]
    Custom {
        rolls: Vec<FieldRoll>,
        overridden_fields: BTreeSet<String>,
    },
}

impl Default for Provenance {
    fn default() -> Self {
        Self::procedural()
    }
}

impl Provenance {
    pub fn procedural() -> Self {
        Provenance::Procedural { rolls: Vec::new() }
    }

    pub fn generation_method(&self) -> GenerationMethod {
        match self {
            Provenance::Procedural { .. } => GenerationMethod::Procedural,
            Provenance::Custom { .. } => GenerationMethod::Custom,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Provenance::Custom { .. })
    }

    /// All recorded draws, in the order they were made.
    pub fn rolls(&self) -> &[FieldRoll] {
        match self {
            Provenance::Procedural { rolls } | Provenance::Custom { rolls, .. } => rolls,
        }
    }

    /// The first draw recorded for `field`.
    pub fn roll_for(&self, field: &str) -> Option<&RollRecord> {
        self.rolls()
            .iter()
            .find(|r| r.field == field)
            .map(|r| &r.roll)
    }

    pub fn overridden_fields(&self) -> Option<&BTreeSet<String>> {
        match self {
            Provenance::Procedural { .. } => None,
            Provenance::Custom {
                overridden_fields, ..
            } => Some(overridden_fields),
        }
    }

    pub fn is_overridden(&self, field: &str) -> bool {
        self.overridden_fields()
            .is_some_and(|fields| fields.contains(field))
    }

    /// Append a draw for `field`.
    pub fn record(&mut self, field: impl Into<String>, roll: impl Into<RollRecord>) {
        let entry = FieldRoll {
            field: field.into(),
            roll: roll.into(),
        };
        match self {
            Provenance::Procedural { rolls } | Provenance::Custom { rolls, .. } => {
                rolls.push(entry)
            }
        }
    }

    /// Builder form of [`Provenance::record`].
    pub fn with_roll(mut self, field: impl Into<String>, roll: impl Into<RollRecord>) -> Self {
        self.record(field, roll);
        self
    }

    /// Mark `field` as set by hand: drop its rolls and flip to `Custom`.
    pub fn override_field(&mut self, field: &str) {
        let current = std::mem::take(self);
        let (mut rolls, mut overridden_fields) = match current {
            Provenance::Procedural { rolls } => (rolls, BTreeSet::new()),
            Provenance::Custom {
                rolls,
                overridden_fields,
            } => (rolls, overridden_fields),
        };
        rolls.retain(|r| r.field != field);
        overridden_fields.insert(field.to_string());
        *self = Provenance::Custom {
            rolls,
            overridden_fields,
        };
    }

    /// Replace every roll recorded for `field` with fresh ones.
    ///
    /// Used by partial re-rolls. A re-rolled field is procedural again, but the
    /// record as a whole is now `Custom`: it no longer matches a single
    /// generator call.
    pub fn replace_rolls(&mut self, field: &str, fresh: Vec<RollRecord>) {
        self.override_field(field);
        if let Provenance::Custom {
            rolls,
            overridden_fields,
        } = self
        {
            overridden_fields.remove(field);
            rolls.extend(fresh.into_iter().map(|roll| FieldRoll {
                field: field.to_string(),
                roll,
            }));
        }
    }
}
