//! Portfolio generation core — turns structured resume data into a themed
//! HTML/CSS/JS bundle.
//!
//! Flow: effective category (explicit → inferred → "Professional") →
//!       theme config lookup → three independent render passes.
//!
//! The whole pipeline is a pure function: no I/O, no randomness, no shared
//! mutable state. Re-invoking with identical input yields byte-identical
//! output, which is why generated bundles are never persisted — every preview
//! and download recomputes from the current `ResumeData`.

pub mod css;
pub mod handlers;
pub mod html;
pub mod js;
pub mod profession;
pub mod theme;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

/// The three-artifact output bundle. Each artifact is independently valid;
/// the HTML references `styles.css` / `script.js` by filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPortfolio {
    pub html: String,
    pub css: String,
    pub javascript: String,
}

/// Generates a complete portfolio bundle from resume data.
pub fn generate(data: &ResumeData) -> GeneratedPortfolio {
    let category = effective_category(data);
    let config = theme::resolve_config(category);

    GeneratedPortfolio {
        html: html::render_html(data, category),
        css: css::render_css(&config),
        javascript: js::render_js(),
    }
}

/// Determines the effective profession category: an explicit non-blank
/// category from the extraction step wins; otherwise the classifier runs.
/// The classifier is itself total, so this never returns an empty string.
pub fn effective_category(data: &ResumeData) -> &str {
    match &data.profession {
        Some(profession) if !profession.category.trim().is_empty() => &profession.category,
        _ => profession::infer_profession(data),
    }
}
