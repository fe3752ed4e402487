//! Input validation
//!
//! Pure pre-flight checks that reject malformed input before it reaches
//! the network. Each rule produces a field-tagged error; input types
//! collect every violated rule into an ordered [`ValidationErrors`] list
//! rather than stopping at the first failure.

use std::fmt;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field path, e.g. `slug` or `sites[1].slug`
    pub field: String,
    /// Human-readable rule description
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error for the given field
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// An ordered collection of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single error
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Append the error from a failed check, if any
    pub fn record(&mut self, check: Result<(), ValidationError>) {
        if let Err(e) = check {
            self.0.push(e);
        }
    }

    /// Append every error from a nested input, prefixing each field path
    ///
    /// Used by bulk inputs to attribute failures to a batch element,
    /// e.g. `sites[1].slug`.
    pub fn extend_prefixed(&mut self, prefix: &str, errors: ValidationErrors) {
        for e in errors.0 {
            self.0.push(ValidationError {
                field: format!("{}.{}", prefix, e.field),
                message: e.message,
            });
        }
    }

    /// Whether any errors were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The recorded errors, in the order they were found
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Convert into a `Result`, failing if any error was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", msgs.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

/// Trait for input types that can be validated before a request is built
pub trait Validate {
    /// Check the input, returning every violated rule
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Check that a required string field is non-empty
pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    Ok(())
}

/// Check that a slug is non-empty and URL-safe
///
/// Valid slugs match `^[A-Za-z0-9_-]+$`.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::new("slug", "cannot be empty"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::new(
            "slug",
            "must contain only alphanumeric characters, hyphens, and underscores",
        ));
    }
    Ok(())
}

/// Check that a latitude is within [-90, 90]
pub fn validate_latitude(latitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::new(
            "latitude",
            "must be between -90 and 90",
        ));
    }
    Ok(())
}

/// Check that a longitude is within [-180, 180]
pub fn validate_longitude(longitude: f64) -> Result<(), ValidationError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::new(
            "longitude",
            "must be between -180 and 180",
        ));
    }
    Ok(())
}
