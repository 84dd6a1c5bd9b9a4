use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub i64);

impl ReviewId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("review id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ReviewId> for i64 {
    fn from(value: ReviewId) -> Self {
        value.0
    }
}

/// Star rating between one and five inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(stars: i32) -> DomainResult<Self> {
        match u8::try_from(stars) {
            Ok(value) if (1..=Self::MAX).contains(&value) => Ok(Self(value)),
            _ => Err(DomainError::Validation(
                "rating must be between 1 and 5".into(),
            )),
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerName(String);

impl ReviewerName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("name is required".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercased first character, used as the avatar letter on review cards.
    pub fn initial(&self) -> String {
        self.0
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewComment(String);

impl ReviewComment {
    const MAX_CHARS: usize = 2000;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("comment is required".into()));
        }
        if value.chars().count() > Self::MAX_CHARS {
            return Err(DomainError::Validation(
                "comment must be at most 2000 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(-3).is_err());
        assert_eq!(Rating::new(5).unwrap().stars(), 5);
    }

    #[test]
    fn reviewer_initial_is_uppercased() {
        assert_eq!(ReviewerName::new("  priya ").unwrap().initial(), "P");
    }
}
