// src/application/editor.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugField};
use std::collections::BTreeMap;
use std::fmt;

/// Whether an admin form submission creates a new record or edits an existing one.
///
/// `Original` carries whatever the editor must remember about the stored record; for
/// categories this is the slug assigned before editing started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode<Id, Original = ()> {
    Creating,
    Editing { id: Id, original: Original },
}

impl<Id> EditorMode<Id> {
    pub fn editing(id: Id) -> Self {
        Self::Editing { id, original: () }
    }
}

impl<Id> EditorMode<Id, Slug> {
    /// Slug input for this mode: derived from the title while creating, pinned to the
    /// stored slug while editing.
    pub fn slug_field(&self) -> SlugField {
        match self {
            Self::Creating => SlugField::creating(),
            Self::Editing { original, .. } => SlugField::editing(original),
        }
    }
}

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Record the failure of `result` against `field`, yielding the value on success.
    pub fn check<T>(&mut self, field: &str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Validation(msg)) => {
                self.add(field, msg);
                None
            }
            Err(other) => {
                self.add(field, other.to_string());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    pub fn finish(self) -> ApplicationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::InvalidFields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Answer to a destructive request that needs explicit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}
