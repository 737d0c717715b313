//! Outline extraction from rendered markup.
//!
//! Every `h1`..`h6` element becomes an outline key. Its section collects the
//! outer HTML of each following sibling element until the next heading of
//! any level, or the end of the parent. Grouping is flat: an `h3` run is
//! closed by the next `h1` just as by the next `h3`.
//!
//! Markup before the first heading belongs to no section and is dropped.
//! When two headings share the same text the later section wins.

use scraper::{ElementRef, Html};

use crate::error::Result;
use crate::models::{HeadingLevel, Outline, Section};
use crate::render::{CommonMarkRenderer, Renderer};

/// Heading level for an element tag, or `None` if the tag is not `h1`..`h6`.
pub fn heading_level(tag: &str) -> Option<HeadingLevel> {
    let level = match tag {
        "h1" => 1,
        "h2" => 2,
        "h3" => 3,
        "h4" => 4,
        "h5" => 5,
        "h6" => 6,
        _ => return None,
    };
    HeadingLevel::new(level).ok()
}

fn element_level(el: &ElementRef<'_>) -> Option<HeadingLevel> {
    heading_level(el.value().name())
}

/// Build an outline from HTML markup.
pub fn extract_outline_from_html(markup: &str) -> Outline {
    let document = Html::parse_fragment(markup);
    let mut outline = Outline::default();

    let headings = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter_map(|el| element_level(&el).map(|level| (el, level)));

    for (heading, level) in headings {
        let text: String = heading.text().collect();
        let content: Vec<String> = heading
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .take_while(|sibling| element_level(sibling).is_none())
            .map(|sibling| sibling.html())
            .collect();

        log::trace!("{} {:?}: {} fragment(s)", level, text, content.len());
        outline.insert(text, Section::new(level, content));
    }

    log::debug!("extracted {} outline entries", outline.len());
    outline
}

/// Renders markdown with a [`Renderer`] and extracts its outline.
#[derive(Debug, Clone, Default)]
pub struct Extractor<R = CommonMarkRenderer> {
    renderer: R,
}

impl<R: Renderer> Extractor<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, markdown: &str) -> Result<String> {
        self.renderer.render(markdown)
    }

    pub fn extract(&self, markdown: &str) -> Result<Outline> {
        let markup = self.render(markdown)?;
        Ok(extract_outline_from_html(&markup))
    }
}

/// Extract an outline from markdown using the default CommonMark renderer.
pub fn extract_outline(markdown: &str) -> Result<Outline> {
    Extractor::new(CommonMarkRenderer::default()).extract(markdown)
}
