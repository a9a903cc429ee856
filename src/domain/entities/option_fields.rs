use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::{Validate, ValidateLength, ValidationErrors};

/// Represents optional field semantics in PATCH/UPDATE requests.
///
/// - `Unchanged` → field not touched
/// - `SetToNull` → explicitly null
/// - `SetToValue` → set to provided value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

/// JSON mapping: an absent key never reaches this impl (the containing
/// struct's `#[serde(default)]` yields `Unchanged`), `null` becomes
/// `SetToNull`, any other value becomes `SetToValue`.
impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => OptionField::SetToNull,
            Some(value) => OptionField::SetToValue(value),
        })
    }
}

/// Mirror of the `Deserialize` mapping, needed so `validator` can embed the
/// field value in validation-error params: `SetToValue` serializes the inner
/// value, `SetToNull` and `Unchanged` serialize as `null`.
impl<T> Serialize for OptionField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionField::SetToValue(value) => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>,
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }

    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

impl<T: Validate> Validate for OptionField<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            OptionField::SetToValue(value) => value.validate(),
            _ => Ok(()),
        }
    }
}

// ---------------------- Accessors ----------------------

impl<T> OptionField<T> {
    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// If `SetToValue`, returns a reference to the inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Borrowed nested option:
    /// - `None` → unchanged
    /// - `Some(None)` → set null
    /// - `Some(Some(&T))` → set to value
    pub fn as_ref_option(&self) -> Option<Option<&T>> {
        match self {
            Self::Unchanged => None,
            Self::SetToNull => Some(None),
            Self::SetToValue(value) => Some(Some(value)),
        }
    }
}

impl<T> From<Option<Option<T>>> for OptionField<T> {
    fn from(opt: Option<Option<T>>) -> Self {
        match opt {
            None => OptionField::Unchanged,
            Some(None) => OptionField::SetToNull,
            Some(Some(v)) => OptionField::SetToValue(v),
        }
    }
}
