//! Dot-path feature keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors from feature key construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// The input was empty or all whitespace.
    #[error("empty feature key")]
    Empty,
    /// A segment was empty (leading, trailing, or doubled dot).
    #[error("empty segment in feature key: {0:?}")]
    EmptySegment(String),
    /// A segment passed to a builder contained the separator.
    #[error("segment contains a dot: {0:?}")]
    DottedSegment(String),
}

/// A dot-separated feature path, e.g. `"sales.filters.today"`.
///
/// Segments are opaque identifiers; the dot is reserved as the separator.
/// Keys form an implicit hierarchy by prefix, but the override store treats
/// every key as independent — only the report inbox's year/month tree
/// cascades, and it does so through its own explicit structure.
///
/// The store and gate accept plain `&str` ids, so keys generated at runtime
/// (per-month inbox rows, for instance) never have to round-trip through
/// the fallible constructors here. `FeatureKey` is the typo-resistant way
/// to build ids that are known at compile time or composed from parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureKey(String);

impl FeatureKey {
    /// Parse a dot-path, rejecting empty input and empty segments.
    pub fn parse(input: &str) -> Result<Self, KeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(KeyError::Empty);
        }
        if input.split('.').any(str::is_empty) {
            return Err(KeyError::EmptySegment(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    /// Build a key from individual segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, KeyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        for segment in segments {
            let segment = segment.as_ref().trim();
            if segment.is_empty() {
                return Err(KeyError::EmptySegment(path));
            }
            if segment.contains('.') {
                return Err(KeyError::DottedSegment(segment.to_string()));
            }
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(segment);
        }
        if path.is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(path))
    }

    /// Append a segment, e.g. for keys composed at runtime.
    pub fn child(&self, segment: impl AsRef<str>) -> Result<Self, KeyError> {
        let segment = segment.as_ref().trim();
        if segment.is_empty() {
            return Err(KeyError::EmptySegment(self.0.clone()));
        }
        if segment.contains('.') {
            return Err(KeyError::DottedSegment(segment.to_string()));
        }
        Ok(Self(format!("{}.{}", self.0, segment)))
    }

    /// The full dot-path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, e.g. `["sales", "filters", "today"]`.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('.').collect()
    }

    /// Last segment.
    pub fn leaf(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Parent path, e.g. `"sales.filters"` for `"sales.filters.today"`.
    pub fn parent(&self) -> Option<&str> {
        self.0.rfind('.').map(|i| &self.0[..i])
    }
}

impl AsRef<str> for FeatureKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<FeatureKey> for String {
    fn from(key: FeatureKey) -> Self {
        key.0
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_and_nested() {
        assert_eq!(FeatureKey::parse("dashboard").unwrap().as_str(), "dashboard");
        let key = FeatureKey::parse("sales.filters.today").unwrap();
        assert_eq!(key.segments(), vec!["sales", "filters", "today"]);
        assert_eq!(key.leaf(), "today");
        assert_eq!(key.parent(), Some("sales.filters"));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(FeatureKey::parse("  settings  ").unwrap().as_str(), "settings");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(FeatureKey::parse(""), Err(KeyError::Empty));
        assert_eq!(FeatureKey::parse("   "), Err(KeyError::Empty));
    }

    #[test]
    fn parse_rejects_empty_segments() {
        for input in [".sales", "sales.", "sales..filters"] {
            assert!(matches!(
                FeatureKey::parse(input),
                Err(KeyError::EmptySegment(_))
            ));
        }
    }

    #[test]
    fn from_segments_builds_path() {
        let key = FeatureKey::from_segments(["reports", "2025", "6"]).unwrap();
        assert_eq!(key.as_str(), "reports.2025.6");
    }

    #[test]
    fn from_segments_rejects_dotted_segment() {
        assert_eq!(
            FeatureKey::from_segments(["reports", "2025.6"]),
            Err(KeyError::DottedSegment("2025.6".to_string()))
        );
    }

    #[test]
    fn child_appends_segment() {
        let base = FeatureKey::parse("reports").unwrap();
        let key = base.child("2025").unwrap().child("6").unwrap();
        assert_eq!(key.as_str(), "reports.2025.6");
        assert!(base.child("20.25").is_err());
        assert!(base.child(" ").is_err());
    }

    #[test]
    fn root_key_has_no_parent() {
        let key = FeatureKey::parse("dashboard").unwrap();
        assert_eq!(key.parent(), None);
        assert_eq!(key.leaf(), "dashboard");
    }

    #[test]
    fn serde_is_transparent() {
        let key = FeatureKey::parse("support.tickets").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"support.tickets\"");
        let back: FeatureKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
