//! Markdown → HTML rendering.
//!
//! The extractor never interprets markdown itself; it asks a [`Renderer`]
//! for markup and walks the resulting element tree. [`CommonMarkRenderer`]
//! is the built-in implementation, backed by `pulldown-cmark`.

use pulldown_cmark::{html, Options, Parser};

use crate::config::RenderConfig;
use crate::error::Result;

/// Converts markdown source into HTML markup.
///
/// Headings must come out as `h1`..`h6` elements and block content as
/// sibling elements at the same level. Failures are returned as
/// [`OutlineError::Render`](crate::error::OutlineError::Render) and are
/// passed through to the caller untouched.
pub trait Renderer {
    fn render(&self, markdown: &str) -> Result<String>;
}

impl<F> Renderer for F
where
    F: Fn(&str) -> Result<String>,
{
    fn render(&self, markdown: &str) -> Result<String> {
        self(markdown)
    }
}

/// CommonMark renderer with configurable extensions.
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl CommonMarkRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, config.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
        options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
        options.set(Options::ENABLE_TASKLISTS, config.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, config.smart_punctuation);
        Self { options }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl Renderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}
