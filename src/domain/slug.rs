// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Derive a URL-safe slug from a human readable title.
///
/// The input is lowercased, every maximal run of characters outside `[a-z0-9]` collapses
/// into a single `-`, and a leading or trailing hyphen is dropped. Any input is accepted;
/// titles without a single ASCII alphanumeric produce an empty slug.
pub fn normalize_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Accepts only values that are already normalized: non-empty, `[a-z0-9-]`, with no
    /// leading, trailing or doubled hyphen.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if normalize_slug(&value) != value {
            return Err(DomainError::validation(
                "slug may only contain lowercase letters, digits and single inner hyphens",
            ));
        }
        Ok(Self(value))
    }

    pub fn from_title(title: &str) -> DomainResult<Self> {
        Self::new(normalize_slug(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// The slug input bound to a title input on an editor form.
///
/// While creating a record every title change re-derives the slug. While editing an
/// existing record the slug stays at its stored value until it is edited by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugField {
    value: String,
    follows_title: bool,
}

impl SlugField {
    pub fn creating() -> Self {
        Self {
            value: String::new(),
            follows_title: true,
        }
    }

    pub fn editing(original: &Slug) -> Self {
        Self {
            value: original.as_str().to_owned(),
            follows_title: false,
        }
    }

    pub fn title_changed(&mut self, title: &str) {
        if self.follows_title {
            self.value = normalize_slug(title);
        }
    }

    pub fn edit(&mut self, manual: impl Into<String>) {
        self.value = manual.into();
    }

    pub fn follows_title(&self) -> bool {
        self.follows_title
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_slug(self) -> DomainResult<Slug> {
        Slug::new(self.value)
    }
}
