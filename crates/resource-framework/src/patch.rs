//! # Partial Updates
//!
//! Edit DTOs describe *changes*, not replacement state. Each editable field is a [`Patch`]:
//! `Keep` leaves the stored value alone and `Set` overwrites it. A field whose stored type is
//! itself optional is declared as `Patch<Option<T>>`, so "not supplied" (`Keep`) and
//! "explicitly cleared" (`Set(None)`) stay distinct.
//!
//! ## Wire format
//!
//! | JSON | `Patch<T>` | `Patch<Option<T>>` with [`clearable`] |
//! |------|------------|----------------------------------------|
//! | field absent | `Keep` | `Keep` |
//! | `null` | `Keep` | `Set(None)` |
//! | value | `Set(v)` | `Set(Some(v))` |
//!
//! Fields must carry `#[serde(default, skip_serializing_if = "Patch::is_keep")]` so that
//! `Keep` never reaches the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single field of an edit DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value unchanged.
    Keep,
    /// Overwrite the stored value.
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Self::Keep => Patch::Keep,
            Self::Set(value) => Patch::Set(value),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Keep => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Writes the value into `target` when set. Returns whether anything changed hands.
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            Self::Keep => false,
            Self::Set(value) => {
                *target = value;
                true
            }
        }
    }
}

impl<T: Clone> Patch<T> {
    /// Like [`Patch::apply_to`] but leaves the patch usable.
    pub fn apply_cloned(&self, target: &mut T) -> bool {
        self.clone().apply_to(target)
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `None` maps to `Keep`, matching the "null means don't touch" convention.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Keep, Self::Set)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Keep => serializer.serialize_none(),
            Self::Set(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Deserializer for clearable fields: an explicit `null` becomes `Set(None)`.
pub fn clearable<'de, D, T>(deserializer: D) -> Result<Patch<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Patch::Set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Edit {
        #[serde(default, skip_serializing_if = "Patch::is_keep")]
        name: Patch<String>,
        #[serde(
            default,
            skip_serializing_if = "Patch::is_keep",
            deserialize_with = "clearable"
        )]
        expires: Patch<Option<u32>>,
    }

    #[test]
    fn absent_fields_are_kept() {
        let edit: Edit = serde_json::from_str("{}").unwrap();
        assert_eq!(edit.name, Patch::Keep);
        assert_eq!(edit.expires, Patch::Keep);
    }

    #[test]
    fn null_keeps_plain_fields_but_clears_clearable_ones() {
        let edit: Edit = serde_json::from_str(r#"{"name":null,"expires":null}"#).unwrap();
        assert_eq!(edit.name, Patch::Keep);
        assert_eq!(edit.expires, Patch::Set(None));
    }

    #[test]
    fn keep_is_not_serialized() {
        let edit = Edit {
            name: Patch::Set("alice".into()),
            expires: Patch::Keep,
        };
        assert_eq!(serde_json::to_string(&edit).unwrap(), r#"{"name":"alice"}"#);

        let cleared = Edit {
            name: Patch::Keep,
            expires: Patch::Set(None),
        };
        assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"expires":null}"#);
    }

    #[test]
    fn apply_overwrites_only_when_set() {
        let mut stored = String::from("before");
        assert!(!Patch::<String>::Keep.apply_to(&mut stored));
        assert_eq!(stored, "before");
        assert!(Patch::Set("after".to_string()).apply_to(&mut stored));
        assert_eq!(stored, "after");

        let mut expiry = Some(10);
        Patch::Set(None).apply_to(&mut expiry);
        assert_eq!(expiry, None);
    }
}
