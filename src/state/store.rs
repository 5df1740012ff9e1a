//! Persistence of layer transforms.
//!
//! Each layer keeps one JSON entry `{x, y, scale}` under its own key. Reading
//! never fails from the caller's point of view: a missing or unreadable entry
//! comes back as an explicit [`LoadOutcome`] that resolves to defaults.

use serde::Deserialize;
use serde::de::Error as _;

use crate::model::Transform;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("read failed: {0}")]
    Read(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("malformed transform entry: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result of reading a layer's entry.
#[derive(Debug)]
pub enum LoadOutcome {
    Stored(Transform),
    Missing,
    /// The entry existed but could not be used; defaults apply.
    Recovered(StoreError),
}

impl LoadOutcome {
    pub fn into_transform(self) -> Transform {
        match self {
            LoadOutcome::Stored(t) => t,
            LoadOutcome::Missing | LoadOutcome::Recovered(_) => Transform::default(),
        }
    }
}

// Fields are individually optional; `null` counts as absent. Only a JSON
// object is accepted: serde would otherwise read `[x, y, scale]` positionally.
#[derive(Deserialize)]
struct StoredTransform {
    x: Option<f64>,
    y: Option<f64>,
    scale: Option<f64>,
}

pub fn decode(raw: &str) -> Result<Transform, StoreError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(StoreError::Malformed(serde_json::Error::custom(
            "expected an {x, y, scale} object",
        )));
    }
    let stored: StoredTransform = serde_json::from_value(value)?;
    let base = Transform::default();
    Ok(Transform {
        offset_x: stored.x.unwrap_or(base.offset_x),
        offset_y: stored.y.unwrap_or(base.offset_y),
        scale: stored.scale.unwrap_or(base.scale),
    })
}

pub trait TransformStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError>;

    fn load_transform(&self, key: &str) -> LoadOutcome {
        match self.read(key) {
            Ok(None) => LoadOutcome::Missing,
            Ok(Some(raw)) => match decode(&raw) {
                Ok(t) => LoadOutcome::Stored(t),
                Err(err) => LoadOutcome::Recovered(err),
            },
            Err(err) => LoadOutcome::Recovered(err),
        }
    }

    fn save_transform(&self, key: &str, transform: &Transform) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string(transform).map_err(|e| StoreError::Write(e.to_string()))?;
        self.write(key, &payload)
    }
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl TransformStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, payload)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::MemoryStore;

    #[test]
    fn test_round_trip_through_store() {
        let store = MemoryStore::default();
        let t = Transform {
            offset_x: 10.0,
            offset_y: -5.0,
            scale: 1.5,
        };
        store.save_transform("clockTransform", &t).unwrap();
        match store.load_transform("clockTransform") {
            LoadOutcome::Stored(loaded) => assert_eq!(loaded, t),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_missing_entry_yields_defaults() {
        let store = MemoryStore::default();
        let outcome = store.load_transform("bgTransform");
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert_eq!(outcome.into_transform(), Transform::default());
    }

    #[test]
    fn test_missing_fields_default_individually() {
        let t = decode(r#"{"x": 12}"#).unwrap();
        assert_eq!(
            t,
            Transform {
                offset_x: 12.0,
                offset_y: 0.0,
                scale: 1.0
            }
        );
        let t = decode(r#"{"x": null, "y": 3, "scale": 2.5}"#).unwrap();
        assert_eq!(
            t,
            Transform {
                offset_x: 0.0,
                offset_y: 3.0,
                scale: 2.5
            }
        );
    }

    #[test]
    fn test_non_numeric_scale_recovers_to_defaults() {
        let store = MemoryStore::default();
        store.insert_raw("clockTransform", r#"{"x":1,"y":2,"scale":"big"}"#);
        let outcome = store.load_transform("clockTransform");
        assert!(matches!(
            outcome,
            LoadOutcome::Recovered(StoreError::Malformed(_))
        ));
        assert_eq!(outcome.into_transform(), Transform::default());
    }

    #[test]
    fn test_unparsable_payload_recovers_to_defaults() {
        for raw in ["not json", "null", "42", "[40,-7,3]", r#"{"x": 1"#, ""] {
            let store = MemoryStore::default();
            store.insert_raw("bgTransform", raw);
            assert_eq!(
                store.load_transform("bgTransform").into_transform(),
                Transform::default(),
                "payload {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_array_payload_is_not_read_positionally() {
        assert!(matches!(
            decode("[40,-7,3]"),
            Err(StoreError::Malformed(_))
        ));
        let store = MemoryStore::default();
        store.insert_raw("clockTransform", "[40,-7,3]");
        let outcome = store.load_transform("clockTransform");
        assert!(matches!(outcome, LoadOutcome::Recovered(_)));
        assert_eq!(outcome.into_transform(), Transform::default());
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::default();
        let t = Transform {
            offset_x: 1.0,
            offset_y: 1.0,
            scale: 2.0,
        };
        store.save_transform("clockTransform", &t).unwrap();
        assert!(matches!(
            store.load_transform("bgTransform"),
            LoadOutcome::Missing
        ));
        assert_eq!(store.len(), 1);
    }
}
