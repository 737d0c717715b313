//! # md-outline
//!
//! Extract a heading → content outline from markdown documents.
//!
//! Markdown is rendered to HTML, every `h1`..`h6` element becomes a key, and
//! the sibling elements that follow it (up to the next heading of any level)
//! are collected as serialized fragments.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌────────────┐   ┌──────────┐
//! │ Markdown │──▶│  Renderer  │──▶│  Extractor │──▶│  Export  │
//! │ file/dir │   │ CommonMark │   │ h1..h6 run │   │   JSON   │
//! └──────────┘   └────────────┘   └────────────┘   └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use md_outline::extract::extract_outline;
//!
//! let outline = extract_outline("# A\ntext1\n## B\ntext2").unwrap();
//! assert_eq!(outline.keys().collect::<Vec<_>>(), vec!["A", "B"]);
//! assert_eq!(outline.get("B").unwrap().content(), ["<p>text2</p>"]);
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`extract`] | Outline extraction |
//! | [`render`] | Renderer trait and CommonMark renderer |
//! | [`models`] | Outline, section and level types |
//! | [`export`] | JSON serialization |
//! | [`config`] | TOML configuration parsing |
//! | [`scan`] | Directory scanning |
//! | [`batch`] | Directory-wide extraction |
//! | [`error`] | Error types |

pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod outline_cmd;
pub mod render;
pub mod scan;
