//! Present/absent wrapper for partially supplied request fields.

use serde::{Deserialize, Deserializer};

/// A request field that was either supplied by the client or left out.
///
/// Unlike `Option<T>`, an absent field never deserializes from JSON `null`:
/// `null` is handed to `T`'s deserializer, so a non-nullable `T` rejects it.
/// Struct fields of this type need `#[serde(default)]` so omitted keys become
/// [`Field::Missing`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Missing,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Missing => Field::Missing,
            Field::Present(v) => Field::Present(v),
        }
    }

    /// Write the supplied value into `target`; a missing field leaves it untouched.
    pub fn apply_to(self, target: &mut T) {
        if let Field::Present(v) = self {
            *target = v;
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Field::Present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default)]
        name: Field<String>,
    }

    #[test]
    fn omitted_key_is_missing() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.name, Field::Missing);
    }

    #[test]
    fn supplied_key_is_present() {
        let probe: Probe = serde_json::from_str(r#"{"name": "Pen"}"#).unwrap();
        assert_eq!(probe.name, Field::Present("Pen".to_string()));
    }

    #[test]
    fn explicit_null_is_rejected_for_non_nullable_values() {
        let err = serde_json::from_str::<Probe>(r#"{"name": null}"#).err();
        assert!(err.is_some());
    }

    #[test]
    fn apply_to_only_writes_present_values() {
        let mut target = "old".to_string();
        Field::Missing.apply_to(&mut target);
        assert_eq!(target, "old");
        Field::Present("new".to_string()).apply_to(&mut target);
        assert_eq!(target, "new");
    }
}
