//! `mdo render` and `mdo outline` commands.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::config::{Config, LevelFormat};
use crate::export;
use crate::extract::Extractor;
use crate::render::CommonMarkRenderer;

/// Output options resolved from config and command-line overrides.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub pretty: bool,
    pub level_format: LevelFormat,
}

impl OutputOptions {
    pub fn resolve(config: &Config, compact: bool, level_format: Option<LevelFormat>) -> Self {
        Self {
            pretty: config.output.pretty && !compact,
            level_format: level_format.unwrap_or(config.output.level_format),
        }
    }
}

pub fn extractor(config: &Config) -> Extractor<CommonMarkRenderer> {
    Extractor::new(CommonMarkRenderer::new(&config.render))
}

/// Read markdown from a file, or from stdin when `input` is `-`.
pub fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read markdown from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read markdown file: {}", input.display()))
    }
}

/// Print the rendered HTML for `input`.
pub fn run_render(config: &Config, input: &Path) -> Result<()> {
    let markdown = read_input(input)?;
    let html = extractor(config).render(&markdown)?;
    print!("{}", html);
    Ok(())
}

/// Extract the outline of `input` and write it as JSON.
pub fn run_outline(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    options: OutputOptions,
) -> Result<()> {
    let markdown = read_input(input)?;
    let outline = extractor(config)
        .extract(&markdown)
        .with_context(|| format!("Failed to extract outline from {}", input.display()))?;

    let json = export::outline_to_json(&outline, options.level_format, options.pretty)?;
    export::write_output(&json, output)?;

    if let Some(path) = output {
        eprintln!("Wrote {} headings to {}", outline.len(), path.display());
    }
    Ok(())
}
