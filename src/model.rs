use std::fmt;

use crate::error::FridgecipeError;

/// Number of servings each generated recipe should be scaled to.
///
/// Bounded to 1-6 inclusive, matching the range the recipe prompt
/// is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Servings(u32);

impl Servings {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 6;

    pub fn new(count: u32) -> Result<Self, FridgecipeError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Servings(count))
        } else {
            Err(FridgecipeError::InvalidServings(count))
        }
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

impl Default for Servings {
    fn default() -> Self {
        Servings(2)
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of scanning a fridge photo.
///
/// `ingredients` preserves first-appearance order and never contains
/// empty strings. `recipes` is opaque Markdown from the text model,
/// or a user-facing notice when generation was skipped or failed.
#[derive(Debug, Clone, Default)]
pub struct FridgeReport {
    pub ingredients: Vec<String>,
    pub recipes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servings_bounds() {
        assert!(Servings::new(0).is_err());
        assert!(Servings::new(1).is_ok());
        assert!(Servings::new(6).is_ok());
        assert!(Servings::new(7).is_err());
    }

    #[test]
    fn test_servings_default() {
        assert_eq!(Servings::default().count(), 2);
    }

    #[test]
    fn test_servings_display() {
        let servings = Servings::new(4).unwrap();
        assert_eq!(servings.to_string(), "4");
    }
}
