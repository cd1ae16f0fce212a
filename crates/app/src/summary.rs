//! Human readable collection summary.

use std::fmt::Write;

use courier_domain::{Collection, ItemNode, RequestItem};

/// Renders the collection as an indented tree.
#[must_use]
pub fn render(collection: &Collection) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} requests, {} folders)",
        collection.info.name,
        collection.request_count(),
        collection.folder_count()
    );
    if let Some(description) = &collection.info.description {
        let _ = writeln!(out, "  {description}");
    }
    render_items(&collection.item, 1, &mut out);
    out
}

fn render_items(items: &[ItemNode], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            ItemNode::Folder(folder) => {
                let _ = writeln!(out, "{indent}{}/", folder.name);
                render_items(&folder.item, depth + 1, out);
            }
            ItemNode::Request(request) => {
                let _ = writeln!(out, "{indent}{}", request_line(request));
            }
        }
    }
}

fn request_line(item: &RequestItem) -> String {
    let request = &item.request;
    let mut line = format!("{} {} {}", item.name, request.method, request.url);
    if !request.headers.is_empty() {
        let _ = write!(line, " [{} headers]", request.headers.len());
    }
    if !request.body.is_empty() {
        let _ = write!(line, " [{} body]", request.body.mode());
    }
    line
}
