//! Operator configuration for the merge handler

use crate::bump::BumpCategory;
use crate::error::Error;
use crate::types::MergeMethod;

/// Version bump ceiling eligible for automatic merging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePreset {
    /// Allow only patch bumps
    DependabotPatch,
    /// Allow patch and minor bumps
    DependabotMinor,
    /// Allow every bump, including major
    DependabotMajor,
    /// Alias for the major ceiling
    DependabotAll,
}

impl MergePreset {
    /// Largest bump category the preset permits
    pub const fn max_category(self) -> BumpCategory {
        match self {
            Self::DependabotPatch => BumpCategory::Patch,
            Self::DependabotMinor => BumpCategory::Minor,
            Self::DependabotMajor | Self::DependabotAll => BumpCategory::Major,
        }
    }
}

impl std::fmt::Display for MergePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DependabotPatch => write!(f, "DEPENDABOT_PATCH"),
            Self::DependabotMinor => write!(f, "DEPENDABOT_MINOR"),
            Self::DependabotMajor => write!(f, "DEPENDABOT_MAJOR"),
            Self::DependabotAll => write!(f, "DEPENDABOT_ALL"),
        }
    }
}

impl std::str::FromStr for MergePreset {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "DEPENDABOT_PATCH" => Ok(Self::DependabotPatch),
            "DEPENDABOT_MINOR" => Ok(Self::DependabotMinor),
            "DEPENDABOT_MAJOR" => Ok(Self::DependabotMajor),
            "DEPENDABOT_ALL" => Ok(Self::DependabotAll),
            _ => Err(Error::Config(format!("unknown preset: {value}"))),
        }
    }
}

/// Operator-supplied settings, read once at startup and injected by value
///
/// The handler and the eligibility evaluation never mutate this.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Login whose pull requests are eligible for automatic merging
    pub login: String,
    /// Merge method used for the merge mutation
    pub merge_method: MergeMethod,
    /// Version bump ceiling
    pub preset: MergePreset,
    /// Total merge attempts for the transient conflict, including the first
    pub max_attempts: u32,
}
