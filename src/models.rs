//! Core data models produced by outline extraction.
//!
//! An [`Outline`] maps heading text to a [`Section`] holding the heading's
//! [`HeadingLevel`] and the serialized markup fragments that follow it.
//! Outlines are built by [`crate::extract`] and are read-only afterwards.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::error::{OutlineError, Result};

/// Heading level in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(OutlineError::InvalidLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The element tag for this level (`"h1"`..`"h6"`).
    pub fn tag(self) -> &'static str {
        match self.0 {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A heading's level and the fragments found between it and the next heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    level: HeadingLevel,
    content: Vec<String>,
}

impl Section {
    pub(crate) fn new(level: HeadingLevel, content: Vec<String>) -> Self {
        Self { level, content }
    }

    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    /// Outer markup of each sibling block, in source order.
    pub fn content(&self) -> &[String] {
        &self.content
    }
}

/// Insertion-ordered mapping from heading text to [`Section`].
///
/// A repeated heading text replaces the earlier value but keeps the
/// position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    sections: IndexMap<String, Section>,
}

impl Outline {
    pub(crate) fn insert(&mut self, heading: String, section: Section) {
        self.sections.insert(heading, section);
    }

    pub fn get(&self, heading: &str) -> Option<&Section> {
        self.sections.get(heading)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert!(HeadingLevel::new(0).is_err());
        assert!(HeadingLevel::new(7).is_err());
        for l in 1..=6 {
            assert_eq!(HeadingLevel::new(l).unwrap().get(), l);
        }
    }

    #[test]
    fn test_level_tag_and_display() {
        let level = HeadingLevel::new(3).unwrap();
        assert_eq!(level.tag(), "h3");
        assert_eq!(level.to_string(), "h3");
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let h1 = HeadingLevel::new(1).unwrap();
        let h2 = HeadingLevel::new(2).unwrap();
        let mut outline = Outline::default();
        outline.insert("A".into(), Section::new(h1, vec!["<p>x</p>".into()]));
        outline.insert("B".into(), Section::new(h2, vec![]));
        outline.insert("A".into(), Section::new(h2, vec!["<p>y</p>".into()]));

        assert_eq!(outline.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        let a = outline.get("A").unwrap();
        assert_eq!(a.level(), h2);
        assert_eq!(a.content(), ["<p>y</p>"]);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut outline = Outline::default();
        outline.insert(
            "Intro".into(),
            Section::new(HeadingLevel::new(2).unwrap(), vec!["<p>hi</p>".into()]),
        );
        let json = serde_json::to_string(&outline).unwrap();
        assert_eq!(json, r#"{"Intro":{"level":2,"content":["<p>hi</p>"]}}"#);
    }
}
