//! Documentation resources exposed as `tca://docs/<key>`.

use rmcp::model::{Annotated, RawResource, ReadResourceResult, Resource, ResourceContents};

use crate::catalog;
use crate::error::{Result, TcaMcpError};

pub const DOCS_URI_PREFIX: &str = "tca://docs/";
pub const DOCS_MIME_TYPE: &str = "text/markdown";

pub fn doc_uri(key: &str) -> String {
    format!("{DOCS_URI_PREFIX}{key}")
}

/// Extract the doc key from a `tca://docs/<key>` URI.
pub fn parse_doc_uri(uri: &str) -> Result<&str> {
    uri.strip_prefix(DOCS_URI_PREFIX)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| TcaMcpError::resource_not_found(uri))
}

/// One resource per documentation topic, in catalog order.
pub fn list_resources() -> Vec<Resource> {
    catalog::list_docs()
        .into_iter()
        .map(|doc| {
            Annotated::new(
                RawResource {
                    uri: doc_uri(doc.key),
                    name: doc.title.into(),
                    title: None,
                    description: Some(doc.description.into()),
                    mime_type: Some(DOCS_MIME_TYPE.into()),
                    size: None,
                    icons: None,
                    meta: None,
                },
                None,
            )
        })
        .collect()
}

pub fn read_resource(uri: &str) -> Result<ReadResourceResult> {
    let key = parse_doc_uri(uri)?;
    let entry = catalog::read_doc(key).map_err(|_| TcaMcpError::resource_not_found(uri))?;
    let mut contents = ResourceContents::text(entry.content, uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(DOCS_MIME_TYPE.into());
    }
    Ok(ReadResourceResult {
        contents: vec![contents],
    })
}
