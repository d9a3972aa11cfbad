//! Partial-update fields for nullable columns
//!
//! A nullable column in a PATCH body has three states: absent (keep the
//! stored value), `null` (clear it) and a value (set it). Commands declare
//! such fields as [`Nullable<T>`]:
//!
//! ```rust,ignore
//! #[serde(default, with = "::serde_with::rust::double_option")]
//! pub note: Nullable<String>,
//! ```
//!
//! and write them with `note = CASE WHEN $n THEN $n+1 ELSE note END`,
//! binding [`is_present`] and [`value`].

/// `None` when absent, `Some(None)` when explicitly `null`
pub type Nullable<T> = Option<Option<T>>;

/// Whether the client sent the field at all, `null` included
pub fn is_present<T>(field: &Nullable<T>) -> bool {
    field.is_some()
}

/// The value to store when the field is present
pub fn value<T: Clone>(field: &Nullable<T>) -> Option<T> {
    field.clone().flatten()
}

/// Text to validate. `null` and absent both skip validation.
pub fn text(field: &Nullable<String>) -> Option<&str> {
    field.as_ref().and_then(|inner| inner.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Patch {
        #[serde(default, with = "::serde_with::rust::double_option")]
        note: Nullable<String>,
    }

    fn patch(json: serde_json::Value) -> Patch {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_three_states() {
        let absent = patch(serde_json::json!({}));
        assert!(!is_present(&absent.note));
        assert_eq!(value(&absent.note), None);

        let cleared = patch(serde_json::json!({ "note": null }));
        assert!(is_present(&cleared.note));
        assert_eq!(value(&cleared.note), None);
        assert_eq!(text(&cleared.note), None);

        let set = patch(serde_json::json!({ "note": "Morning ration" }));
        assert!(is_present(&set.note));
        assert_eq!(value(&set.note).as_deref(), Some("Morning ration"));
        assert_eq!(text(&set.note), Some("Morning ration"));
    }
}
