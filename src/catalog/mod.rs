//! Content catalog: static documentation topics and code templates.
//!
//! Both tables are `static` slices: built into the binary, never mutated,
//! and shared freely across requests. Lookups are linear scans; the tables
//! hold a handful of entries each.

mod docs;
pub mod templates;

use serde::Serialize;

use crate::error::{Result, TcaMcpError};

pub use templates::{Template, TemplateKind};

/// A documentation topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentationEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

/// Listing view of a [`DocumentationEntry`] without the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocSummary {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<&DocumentationEntry> for DocSummary {
    fn from(entry: &DocumentationEntry) -> Self {
        Self {
            key: entry.key,
            title: entry.title,
            description: entry.description,
        }
    }
}

/// Listing view of a [`Template`] without the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub key: TemplateKind,
    pub description: &'static str,
}

// ---------------------------------------------------------------------------
// Documentation
// ---------------------------------------------------------------------------

/// All documentation topics in declaration order.
pub fn list_docs() -> Vec<DocSummary> {
    docs::DOCS.iter().map(DocSummary::from).collect()
}

/// Exact-match lookup by key.
pub fn read_doc(key: &str) -> Result<&'static DocumentationEntry> {
    docs::DOCS
        .iter()
        .find(|d| d.key == key)
        .ok_or_else(|| TcaMcpError::doc_not_found(key))
}

/// Case-insensitive substring search over key, title and description.
///
/// An empty query matches every entry. No hits is an empty vec, not an error.
pub fn search_docs(query: &str) -> Vec<DocSummary> {
    let needle = query.to_lowercase();
    docs::DOCS
        .iter()
        .filter(|d| {
            [d.key, d.title, d.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .map(DocSummary::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

pub fn list_templates() -> Vec<TemplateSummary> {
    templates::TEMPLATES
        .iter()
        .map(|t| TemplateSummary {
            key: t.key,
            description: t.description,
        })
        .collect()
}

/// Look up a template by its wire name (`counter`, `api-call`, `list`, `timer`).
pub fn get_template(key: &str) -> Result<&'static Template> {
    let kind: TemplateKind = key.parse()?;
    templates::TEMPLATES
        .iter()
        .find(|t| t.key == kind)
        .ok_or_else(|| TcaMcpError::template_not_found(key))
}
