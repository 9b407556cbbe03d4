//! Version bump classification from pull request titles
//!
//! Dependency update titles mention the old and new version, e.g.
//! "bump @types/jest from 26.0.12 to 26.1.0". The first differing component
//! of the two versions determines how impactful the update is.

use std::sync::LazyLock;

use regex::Regex;

static VERSION_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("version pattern is valid"));

/// Impact class of a dependency version change
///
/// Ordered by impact: `Patch < Minor < Major`. A ceiling of category C
/// permits every bump whose category is at most C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpCategory {
    /// Only the patch component changed (or nothing changed)
    Patch,
    /// The minor component changed
    Minor,
    /// The major component changed
    Major,
}

impl std::fmt::Display for BumpCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patch => write!(f, "PATCH"),
            Self::Minor => write!(f, "MINOR"),
            Self::Major => write!(f, "MAJOR"),
        }
    }
}

/// Classify the version bump encoded in a pull request title
///
/// Matching is tolerant: the first two `major.minor.patch` triples found
/// anywhere in the title are taken as the old and new version. Returns
/// `None` when fewer than two versions can be extracted, which callers must
/// treat as "cannot classify, disallow merge".
pub fn classify_bump(title: &str) -> Option<BumpCategory> {
    let mut versions = VERSION_TRIPLE.captures_iter(title).filter_map(|caps| {
        let major: u64 = caps.get(1)?.as_str().parse().ok()?;
        let minor: u64 = caps.get(2)?.as_str().parse().ok()?;
        let patch: u64 = caps.get(3)?.as_str().parse().ok()?;
        Some((major, minor, patch))
    });

    let from = versions.next()?;
    let to = versions.next()?;

    Some(if from.0 != to.0 {
        BumpCategory::Major
    } else if from.1 != to.1 {
        BumpCategory::Minor
    } else {
        BumpCategory::Patch
    })
}

/// Whether the title's bump is classifiable and within the `max` ceiling
pub fn within_category(title: &str, max: BumpCategory) -> bool {
    classify_bump(title).is_some_and(|category| category <= max)
}
