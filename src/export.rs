//! JSON export of outlines.
//!
//! A single outline is written as `{ "<heading>": { "level", "content" } }`.
//! A batch is an object keyed by relative file path, each value an outline.
//! The level is written as a number (`2`) or a tag (`"h2"`) depending on
//! [`LevelFormat`].

use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;

use crate::config::LevelFormat;
use crate::error::Result;
use crate::models::{HeadingLevel, Outline};

#[derive(Serialize)]
#[serde(untagged)]
enum ExportLevel {
    Number(u8),
    Tag(&'static str),
}

#[derive(Serialize)]
struct ExportSection<'a> {
    level: ExportLevel,
    content: &'a [String],
}

type ExportOutline<'a> = IndexMap<&'a str, ExportSection<'a>>;

fn export_level(level: HeadingLevel, format: LevelFormat) -> ExportLevel {
    match format {
        LevelFormat::Number => ExportLevel::Number(level.get()),
        LevelFormat::Tag => ExportLevel::Tag(level.tag()),
    }
}

fn export_outline(outline: &Outline, format: LevelFormat) -> ExportOutline<'_> {
    outline
        .iter()
        .map(|(heading, section)| {
            (
                heading,
                ExportSection {
                    level: export_level(section.level(), format),
                    content: section.content(),
                },
            )
        })
        .collect()
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn outline_to_json(outline: &Outline, format: LevelFormat, pretty: bool) -> Result<String> {
    to_json(&export_outline(outline, format), pretty)
}

/// Serialize `(relative path, outline)` pairs, preserving their order.
pub fn batch_to_json(
    outlines: &[(String, Outline)],
    format: LevelFormat,
    pretty: bool,
) -> Result<String> {
    let batch: IndexMap<&str, ExportOutline<'_>> = outlines
        .iter()
        .map(|(path, outline)| (path.as_str(), export_outline(outline, format)))
        .collect();
    to_json(&batch, pretty)
}

/// Write JSON to `output`, or to stdout when `output` is `None`.
pub fn write_output(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
            log::info!("wrote {} bytes to {}", json.len(), path.display());
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_outline;

    #[test]
    fn test_number_levels() {
        let outline = extract_outline("# A\ntext1\n## B\ntext2").unwrap();
        let json = outline_to_json(&outline, LevelFormat::Number, false).unwrap();
        assert_eq!(
            json,
            r#"{"A":{"level":1,"content":["<p>text1</p>"]},"B":{"level":2,"content":["<p>text2</p>"]}}"#
        );
    }

    #[test]
    fn test_tag_levels() {
        let outline = extract_outline("### C\n").unwrap();
        let json = outline_to_json(&outline, LevelFormat::Tag, false).unwrap();
        assert_eq!(json, r#"{"C":{"level":"h3","content":[]}}"#);
    }

    #[test]
    fn test_empty_outline() {
        let json = outline_to_json(&Outline::default(), LevelFormat::Number, true).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_batch_keeps_order() {
        let outlines = vec![
            ("z.md".to_string(), extract_outline("# Z").unwrap()),
            ("a.md".to_string(), extract_outline("# A").unwrap()),
        ];
        let json = batch_to_json(&outlines, LevelFormat::Number, false).unwrap();
        assert_eq!(
            json,
            r#"{"z.md":{"Z":{"level":1,"content":[]}},"a.md":{"A":{"level":1,"content":[]}}}"#
        );
    }

    #[test]
    fn test_write_to_file_creates_parent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out/nested/outline.json");
        write_output("{}", Some(path.as_path())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
