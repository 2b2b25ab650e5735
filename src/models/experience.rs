//! Experience level model.
//!
//! The experience level of the employees in a role or using an interface.
//! Each engine keys its own lookup table on this enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How experienced the employees being modelled are.
///
/// # Example
///
/// ```
/// use productivity_impact::models::ExperienceLevel;
///
/// assert_eq!(ExperienceLevel::Seasoned.to_string(), "Seasoned");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to the role or interface.
    Beginner,
    /// Comfortable with the role or interface.
    #[default]
    Seasoned,
    /// Highly proficient.
    Expert,
}

impl ExperienceLevel {
    /// All levels, least experienced first.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Seasoned,
        ExperienceLevel::Expert,
    ];

    /// Returns the display label used in exports.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Seasoned => "Seasoned",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
