use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;
use serde_with::{DeserializeFromStr, SerializeDisplay};

pub type VersionPart = u64;

/// The most numeric components a strict version may have (`MAJOR.MINOR.PATCH`).
const MAX_COMPONENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Version cannot be empty")]
    Empty,
    #[error("Version {version} has an empty component")]
    EmptyComponent { version: String },
    #[error("Invalid component `{component}` in version {version}")]
    InvalidComponent { version: String, component: String },
    #[error("Component `{component}` in version {version} is too large")]
    ComponentOverflow { version: String, component: String },
    #[error("Version {version} has more than 3 components")]
    TooManyComponents { version: String },
    #[error("Invalid pre-release `{prerelease}` in version {version}")]
    InvalidPrerelease { version: String, prerelease: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum PrereleaseTag {
    Alpha,
    Beta,
}

impl PrereleaseTag {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a' => Some(Self::Alpha),
            'b' => Some(Self::Beta),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrereleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrereleaseTag::Alpha => "a".fmt(f),
            PrereleaseTag::Beta => "b".fmt(f),
        }
    }
}

/// A pre-release suffix such as `a1` or `b12`. Orders by tag first, then number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Prerelease {
    pub tag: PrereleaseTag,
    pub number: VersionPart,
}

impl std::fmt::Display for Prerelease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tag, self.number)
    }
}

/// A strict dotted-numeric version: one to three numbers, optionally followed
/// by an `aN` or `bN` pre-release. Missing components count as zero, so `1`,
/// `1.0` and `1.0.0` are the same version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct Version {
    pub major: VersionPart,
    pub minor: VersionPart,
    pub patch: VersionPart,
    pub prerelease: Option<Prerelease>,
}

impl Version {
    pub fn new(version: impl AsRef<str>) -> Result<Self, VersionError> {
        let version = version.as_ref();
        if version.is_empty() {
            return Err(VersionError::Empty);
        }

        let components = version.split('.').collect::<Vec<_>>();
        if components.len() > MAX_COMPONENTS {
            return Err(VersionError::TooManyComponents {
                version: version.into(),
            });
        }

        // Only the last component may carry a pre-release suffix.
        let (last, init) = components.split_last().ok_or(VersionError::Empty)?;

        let mut numbers = init
            .iter()
            .map(|component| Self::parse_number(version, component))
            .collect::<Result<Vec<_>, _>>()?;

        let (number, prerelease) = Self::parse_last(version, last)?;
        numbers.push(number);
        numbers.resize(MAX_COMPONENTS, 0);

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            prerelease,
        })
    }

    fn parse_number(version: &str, component: &str) -> Result<VersionPart, VersionError> {
        if component.is_empty() {
            return Err(VersionError::EmptyComponent {
                version: version.into(),
            });
        }
        if !component.chars().all(|c| c.is_ascii_digit()) {
            return Err(VersionError::InvalidComponent {
                version: version.into(),
                component: component.into(),
            });
        }
        // All digits, so the only way to fail is overflow.
        component
            .parse::<VersionPart>()
            .map_err(|_| VersionError::ComponentOverflow {
                version: version.into(),
                component: component.into(),
            })
    }

    fn parse_last(
        version: &str,
        component: &str,
    ) -> Result<(VersionPart, Option<Prerelease>), VersionError> {
        let split = component
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(component.len());
        let (digits, suffix) = component.split_at(split);

        if digits.is_empty() && !suffix.is_empty() {
            return Err(VersionError::InvalidComponent {
                version: version.into(),
                component: component.into(),
            });
        }
        let number = Self::parse_number(version, digits)?;

        let mut chars = suffix.chars();
        let Some(first) = chars.next() else {
            return Ok((number, None));
        };
        let Some(tag) = PrereleaseTag::from_char(first) else {
            return Err(VersionError::InvalidComponent {
                version: version.into(),
                component: component.into(),
            });
        };

        let pre_number = chars.as_str();
        if pre_number.is_empty() || !pre_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(VersionError::InvalidPrerelease {
                version: version.into(),
                prerelease: suffix.into(),
            });
        }
        let pre_number = Self::parse_number(version, pre_number)?;

        Ok((
            number,
            Some(Prerelease {
                tag,
                number: pre_number,
            }),
        ))
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// The same version with any pre-release suffix dropped.
    pub fn release(&self) -> Self {
        Self {
            prerelease: None,
            ..*self
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        if self.major != other.major {
            self.major.cmp(&other.major)
        } else if self.minor != other.minor {
            self.minor.cmp(&other.minor)
        } else if self.patch != other.patch {
            self.patch.cmp(&other.patch)
        } else {
            match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_prerelease)) => Ordering::Greater,
                (Some(_prerelease), None) => Ordering::Less,
                (prerelease, other_prerelease) => prerelease.cmp(other_prerelease),
            }
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Canonical form: a zero patch is omitted, so `1.0.0` displays as `1.0`.
impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch != 0 {
            write!(f, ".{}", self.patch)?;
        }
        if let Some(prerelease) = &self.prerelease {
            write!(f, "{prerelease}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::new(s)
    }
}

/// Is `candidate` strictly greater than `reference`?
///
/// The reference is parsed first, so when both are malformed the error names
/// the reference.
pub fn compare(reference: &str, candidate: &str) -> Result<bool, VersionError> {
    let reference = Version::new(reference)?;
    let candidate = Version::new(candidate)?;
    Ok(candidate > reference)
}
