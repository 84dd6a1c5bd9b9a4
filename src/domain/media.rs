// src/domain/media.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Publicly addressable image location attached to a category or product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("image url cannot be empty"));
        }
        if !(value.starts_with("https://") || value.starts_with("http://")) {
            return Err(DomainError::validation(
                "image url must be an absolute http(s) url",
            ));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("image url cannot contain whitespace"));
        }
        Ok(Self(value))
    }

    /// Form inputs send an empty string for "no image"; treat blanks as absent.
    pub fn optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::new(raw).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageContentType {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageContentType {
    pub fn from_mime(mime: &str) -> DomainResult<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/png" => Ok(Self::Png),
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            "image/webp" => Ok(Self::Webp),
            "image/gif" => Ok(Self::Gif),
            other => Err(DomainError::Validation(format!(
                "unsupported image type: {other}"
            ))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_url_is_none() {
        assert!(ImageUrl::optional(Some("   ".into())).unwrap().is_none());
        assert!(ImageUrl::optional(None).unwrap().is_none());
    }

    #[test]
    fn relative_url_is_rejected() {
        assert!(ImageUrl::new("/media/a.png").is_err());
        assert!(ImageUrl::new("https://cdn.example.com/a.png").is_ok());
    }

    #[test]
    fn mime_parameters_are_ignored() {
        assert_eq!(
            ImageContentType::from_mime("image/JPEG; charset=binary").unwrap(),
            ImageContentType::Jpeg
        );
        assert!(ImageContentType::from_mime("application/pdf").is_err());
    }
}
