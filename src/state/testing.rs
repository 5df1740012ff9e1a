// Test doubles for the storage and rendering seams.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::{ContactId, Transform};
use crate::state::store::{StoreError, TransformStore};
use crate::state::transform::LayerSurface;

/// In-memory store; clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn insert_raw(&self, key: &str, payload: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl TransformStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.insert_raw(key, payload);
        Ok(())
    }
}

/// Records everything the controller pushes to its layer.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub applied: Rc<RefCell<Vec<Transform>>>,
    pub captured: Rc<RefCell<Vec<ContactId>>>,
    pub released: Rc<RefCell<Vec<ContactId>>>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<Transform> {
        self.applied.borrow().last().copied()
    }

    pub fn apply_count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl LayerSurface for RecordingSurface {
    fn apply(&self, transform: &Transform) {
        self.applied.borrow_mut().push(*transform);
    }

    fn capture(&self, id: ContactId) {
        self.captured.borrow_mut().push(id);
    }

    fn release(&self, id: ContactId) {
        self.released.borrow_mut().push(id);
    }
}
