//! Code export packaging — wraps a generated bundle plus scaffold files into
//! the multi-file set served by the download endpoint.
//!
//! Fixed file list: `index.html`, `styles.css`, `script.js`, `package.json`,
//! `README.md`, and optionally `portfolio-standalone.html` (everything
//! inlined into one document).

pub mod scaffold;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::generator::{self, GeneratedPortfolio};
use crate::models::resume::ResumeData;

/// One exportable file. `language` is a syntax tag for the client-side code
/// viewer, not a MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeFile {
    pub name: String,
    pub content: String,
    pub language: String,
}

/// Packages a resume into the downloadable file set. Always 5 files; 6 when
/// `include_standalone` is set.
pub fn portfolio_files(data: &ResumeData, include_standalone: bool) -> Vec<CodeFile> {
    let bundle = generator::generate(data);
    let category = generator::effective_category(data).to_string();
    let name = data.personal_info.name.clone();

    let mut files = vec![
        CodeFile {
            name: "index.html".to_string(),
            content: bundle.html.clone(),
            language: "html".to_string(),
        },
        CodeFile {
            name: "styles.css".to_string(),
            content: bundle.css.clone(),
            language: "css".to_string(),
        },
        CodeFile {
            name: "script.js".to_string(),
            content: bundle.javascript.clone(),
            language: "javascript".to_string(),
        },
        CodeFile {
            name: "package.json".to_string(),
            content: scaffold::package_json(&name),
            language: "json".to_string(),
        },
        CodeFile {
            name: "README.md".to_string(),
            content: scaffold::readme(&name, &category),
            language: "markdown".to_string(),
        },
    ];

    if include_standalone {
        files.push(CodeFile {
            name: "portfolio-standalone.html".to_string(),
            content: assemble_standalone(data, &bundle),
            language: "html".to_string(),
        });
    }

    files
}

/// Renders the single-file document used by both the in-browser preview and
/// the standalone export: CSS inlined in `<style>`, JS inlined in `<script>`,
/// and the generator's own document chrome stripped from the markup fragment.
pub fn standalone_document(data: &ResumeData) -> String {
    let bundle = generator::generate(data);
    assemble_standalone(data, &bundle)
}

/// Matches the document chrome the HTML renderer emits: doctype, html/head/
/// body wrappers, the title, head metadata and asset links, and any embedded
/// style/script blocks.
///
/// COUPLING: this pattern is tied to the top-level tag shape produced by
/// `generator::html::render_html`. A structural change there (e.g. attributes
/// spanning `>` or inline event handlers) must keep this pattern matching.
const DOCUMENT_CHROME_PATTERN: &str = r"(?i)<!DOCTYPE[^>]*>|</?html[^>]*>|</?head[^>]*>|</?body[^>]*>|<title[^>]*>[\s\S]*?</title>|<style[^>]*>[\s\S]*?</style>|<script[^>]*>[\s\S]*?</script>|<meta[^>]*>|<link[^>]*>";

fn assemble_standalone(data: &ResumeData, bundle: &GeneratedPortfolio) -> String {
    // The pattern is a constant; compilation cannot fail at runtime.
    let chrome = Regex::new(DOCUMENT_CHROME_PATTERN).expect("document chrome pattern is valid");
    let fragment = chrome.replace_all(&bundle.html, "");
    let fragment = fragment.trim();

    let title = format!(
        "{} - {} Portfolio",
        html_title_escape(&data.personal_info.name),
        html_title_escape(generator::effective_category(data))
    );

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  <title>{title}</title>\n  <link href=\"{fonts}\" rel=\"stylesheet\">\n  <style>\n{css}\n  </style>\n</head>\n<body>\n{fragment}\n  <script>\n{js}\n  </script>\n</body>\n</html>",
        title = title,
        fonts = crate::generator::html::FONTS_HREF,
        css = bundle.css,
        fragment = fragment,
        js = bundle.javascript,
    )
}

fn html_title_escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
