//! Todo title validation

use super::ValidationError;

/// Validated todo title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Create a new todo title.
    ///
    /// # Rules
    /// - Not empty or whitespace-only
    ///
    /// The title is stored exactly as given.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::TodoTitle;
    ///
    /// assert!(TodoTitle::new("Buy milk").is_ok());
    /// assert!(TodoTitle::new("").is_err());
    /// assert!(TodoTitle::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_titles() {
        assert!(TodoTitle::new("Buy milk").is_ok());
        assert!(TodoTitle::new("a").is_ok());
        assert!(TodoTitle::new("  padded  ").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            TodoTitle::new("").unwrap_err(),
            ValidationError::Empty { field: "title" }
        );
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(matches!(
            TodoTitle::new(" \t\n ").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let title = TodoTitle::new("  Buy milk ").unwrap();
        assert_eq!(title.as_str(), "  Buy milk ");
        assert_eq!(title.into_string(), "  Buy milk ");
    }
}
