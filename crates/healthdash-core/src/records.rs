//! Health-record collections kept alongside treatments.
//!
//! Shared-access people and family history are opaque to the core; they are
//! stored and listed, never interpreted. Cholesterol readings feed the chart
//! renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::storage::{get_or, put, Collection, KvStore};

/// Someone granted access to this health record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedPerson {
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub contact: String,
    /// Fields this core does not know about, kept as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SharedPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relationship: String::new(),
            contact: String::new(),
            extra: BTreeMap::new(),
        }
    }
}

/// One cholesterol measurement. `date` is a display label, not parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CholesterolSample {
    pub date: String,
    pub value: f64,
}

pub struct HealthRecords<S: KvStore> {
    store: S,
    shared_people: Vec<SharedPerson>,
    cholesterol: Vec<CholesterolSample>,
    family_history: Vec<String>,
}

impl<S: KvStore> HealthRecords<S> {
    /// Hydrate all three collections; each falls back to empty independently.
    pub fn open(store: S) -> Self {
        let shared_people = get_or(&store, Collection::SharedPeople.key(), Vec::new());
        let cholesterol = get_or(&store, Collection::Cholesterol.key(), Vec::new());
        let family_history = get_or(&store, Collection::FamilyHistory.key(), Vec::new());
        Self {
            store,
            shared_people,
            cholesterol,
            family_history,
        }
    }

    pub fn shared_people(&self) -> &[SharedPerson] {
        &self.shared_people
    }

    pub fn cholesterol(&self) -> &[CholesterolSample] {
        &self.cholesterol
    }

    pub fn family_history(&self) -> &[String] {
        &self.family_history
    }

    /// # Errors
    /// Returns an error if the collection cannot be persisted.
    pub fn add_shared_person(&mut self, person: SharedPerson) -> Result<()> {
        let next = appended(&self.shared_people, person);
        put(&mut self.store, Collection::SharedPeople.key(), &next)?;
        self.shared_people = next;
        Ok(())
    }

    /// # Errors
    /// Returns an error if the collection cannot be persisted.
    pub fn add_cholesterol(&mut self, sample: CholesterolSample) -> Result<()> {
        let next = appended(&self.cholesterol, sample);
        put(&mut self.store, Collection::Cholesterol.key(), &next)?;
        self.cholesterol = next;
        Ok(())
    }

    /// Append a family-history entry. Blank text is ignored.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be persisted.
    pub fn add_family_history(&mut self, entry: impl Into<String>) -> Result<()> {
        let entry = entry.into();
        if entry.trim().is_empty() {
            return Ok(());
        }
        let next = appended(&self.family_history, entry);
        put(&mut self.store, Collection::FamilyHistory.key(), &next)?;
        self.family_history = next;
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}
