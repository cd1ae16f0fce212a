//! Collection item types

use serde::Serialize;
use url::Url;

use crate::request::Request;

/// Collection metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Information {
    /// Collection name
    pub name: String,
    /// Schema the document was written against
    pub schema: Url,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Information {
    /// Creates metadata without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: Url) -> Self {
        Self {
            name: name.into(),
            schema,
            description: None,
        }
    }
}

/// A named request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestItem {
    /// Item name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The request
    pub request: Request,
}

impl RequestItem {
    /// Creates a request item.
    #[must_use]
    pub fn new(name: impl Into<String>, request: Request) -> Self {
        Self {
            name: name.into(),
            description: None,
            request,
        }
    }
}

/// A named, ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    /// Folder name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Items in this folder, in document order
    pub item: Vec<ItemNode>,
}

impl Folder {
    /// Creates a folder holding the given items.
    #[must_use]
    pub fn new(name: impl Into<String>, item: Vec<ItemNode>) -> Self {
        Self {
            name: name.into(),
            description: None,
            item,
        }
    }
}

/// An item in a collection (either a folder or a request).
///
/// Serializes in the document shape: a request item carries `request`,
/// a folder carries `item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ItemNode {
    /// A single request
    Request(RequestItem),
    /// A folder containing other items
    Folder(Folder),
}

impl ItemNode {
    /// Returns the name of this item.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Request(r) => &r.name,
            Self::Folder(f) => &f.name,
        }
    }

    /// Returns the request item, if this is one.
    #[must_use]
    pub const fn as_request(&self) -> Option<&RequestItem> {
        match self {
            Self::Request(r) => Some(r),
            Self::Folder(_) => None,
        }
    }

    /// Returns the folder, if this is one.
    #[must_use]
    pub const fn as_folder(&self) -> Option<&Folder> {
        match self {
            Self::Folder(f) => Some(f),
            Self::Request(_) => None,
        }
    }
}

impl From<RequestItem> for ItemNode {
    fn from(item: RequestItem) -> Self {
        Self::Request(item)
    }
}

impl From<Folder> for ItemNode {
    fn from(folder: Folder) -> Self {
        Self::Folder(folder)
    }
}

/// A loaded collection of requests organized in folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    /// Collection metadata
    pub info: Information,
    /// Top-level items, in document order
    pub item: Vec<ItemNode>,
}

impl Collection {
    /// Creates a collection.
    #[must_use]
    pub const fn new(info: Information, item: Vec<ItemNode>) -> Self {
        Self { info, item }
    }

    /// Returns the total number of requests in the collection (recursive).
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.nodes()
            .filter(|item| matches!(item, ItemNode::Request(_)))
            .count()
    }

    /// Returns the total number of folders in the collection (recursive).
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.nodes()
            .filter(|item| matches!(item, ItemNode::Folder(_)))
            .count()
    }

    /// Returns every request depth-first in document order, with its
    /// `/`-separated folder path.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, &RequestItem)> {
        let mut out = Vec::new();
        // Explicit stack so arbitrarily deep folders cannot exhaust the call stack.
        let mut pending: Vec<(String, &ItemNode)> = self
            .item
            .iter()
            .rev()
            .map(|item| (item.name().to_string(), item))
            .collect();

        while let Some((path, item)) = pending.pop() {
            match item {
                ItemNode::Request(r) => out.push((path, r)),
                ItemNode::Folder(f) => pending.extend(
                    f.item
                        .iter()
                        .rev()
                        .map(|child| (format!("{path}/{}", child.name()), child)),
                ),
            }
        }
        out
    }

    /// Iterates over every item node, folders included, without recursion.
    fn nodes(&self) -> impl Iterator<Item = &ItemNode> {
        let mut pending: Vec<&ItemNode> = self.item.iter().collect();
        std::iter::from_fn(move || {
            let item = pending.pop()?;
            if let ItemNode::Folder(f) = item {
                pending.extend(f.item.iter());
            }
            Some(item)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::request::RequestUrl;
    use pretty_assertions::assert_eq;

    fn request(name: &str) -> ItemNode {
        RequestItem::new(name, Request::new(RequestUrl::parse("http://h").unwrap())).into()
    }

    fn sample() -> Collection {
        let schema =
            Url::parse("https://schema.getpostman.com/json/collection/v2.0.0/collection.json")
                .unwrap();
        Collection::new(
            Information::new("book", schema),
            vec![
                request("Request 1"),
                Folder::new(
                    "Users",
                    vec![
                        request("Get Users"),
                        Folder::new("Admin", vec![request("Create Admin")]).into(),
                    ],
                )
                .into(),
            ],
        )
    }

    #[test]
    fn test_counts() {
        let collection = sample();
        assert_eq!(collection.request_count(), 3);
        assert_eq!(collection.folder_count(), 2);
    }

    #[test]
    fn test_requests_in_document_order() {
        let collection = sample();
        let paths: Vec<String> = collection.requests().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            vec!["Request 1", "Users/Get Users", "Users/Admin/Create Admin"]
        );
    }

    #[test]
    fn test_item_accessors() {
        let collection = sample();
        assert!(collection.item[0].as_request().is_some());
        assert!(collection.item[0].as_folder().is_none());
        let folder = collection.item[1].as_folder().unwrap();
        assert_eq!(folder.name, "Users");
        assert_eq!(collection.item[1].name(), "Users");
    }

    #[test]
    fn test_serializes_in_document_shape() {
        let folder: ItemNode = Folder::new("Folder", vec![request("x")]).into();
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(json["name"], "Folder");
        assert_eq!(json["item"][0]["name"], "x");
        assert_eq!(json["item"][0]["request"]["url"], "http://h");
        assert_eq!(json["item"][0]["request"]["method"], "GET");
    }
}
