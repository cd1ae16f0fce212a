//! Integration tests for loading Postman collections from disk.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use courier_application::{LoadCollectionInput, LoadError, LoaderConfig};
use courier_domain::{
    Body, BodyMode, Collection, FormParameter, HttpMethod, ItemNode, Request, RequestItem,
    RequestUrl,
};
use courier_infrastructure::{CollectionLoader, InMemoryLocator, file_loader, memory_loader};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn loader() -> CollectionLoader {
    file_loader(fixtures())
}

fn load(resource: &str) -> Collection {
    loader()
        .execute(LoadCollectionInput::new(resource))
        .expect("Failed to load collection")
}

fn only_request(collection: &Collection) -> &RequestItem {
    assert_eq!(collection.item.len(), 1);
    collection.item[0]
        .as_request()
        .expect("expected a request item")
}

#[test]
fn test_read_info_field() {
    let collection = load("/simple-request.json");

    assert_eq!(collection.info.name, "book");
    assert_eq!(
        collection.info.schema.as_str(),
        "https://schema.getpostman.com/json/collection/v2.0.0/collection.json"
    );
    assert_eq!(collection.info.description, None);
}

#[test]
fn test_read_simple_request() {
    let collection = load("/simple-request.json");
    let item = only_request(&collection);

    assert_eq!(item.name, "This is one request");
    assert_eq!(item.request.method, HttpMethod::Get);
    assert_eq!(item.request.url.as_str(), "http://localhost:8080");
}

#[test]
fn test_read_complex_get_request() {
    let collection = load("/complex-get-request.json");
    let item = only_request(&collection);

    assert_eq!(item.request.url.as_str(), "http://192.168.99.100:8080/?a=a");
    assert_eq!(item.request.method, HttpMethod::Get);
    assert!(item.request.headers.is_empty());
    assert_eq!(item.request.body, Body::None);
}

#[test]
fn test_read_complex_get_request_with_headers() {
    let collection = load("/complex-get-request-with-headers.json");
    let item = only_request(&collection);

    let expected_headers: BTreeMap<String, String> = [
        ("Content-Type", "application/json"),
        ("Authorization", "Basic YWE6YmI="),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(item.request.headers, expected_headers);
    assert_eq!(
        item.request.url.as_url().as_str(),
        "http://192.168.99.100:8080/?a=a"
    );
}

#[test]
fn test_read_post_with_raw_body() {
    let collection = load("/complex-post-request-with-body.json");
    let item = only_request(&collection);

    assert_eq!(item.request.method, HttpMethod::Post);
    assert_eq!(item.request.body.mode(), BodyMode::Raw);
    assert_eq!(
        item.request.body.raw_text(),
        Some("{    \"name\": \"test\"  }")
    );
    assert!(item.request.body.formdata().is_empty());
    assert!(item.request.body.urlencoded().is_empty());
}

#[test]
fn test_read_post_with_form_data() {
    let collection = load("/complex-post-request-with-body-form-data.json");
    let item = only_request(&collection);

    assert_eq!(item.request.body.mode(), BodyMode::Formdata);
    assert_eq!(
        item.request.body.formdata(),
        &[
            FormParameter::new("username", "aaa").with_type("text"),
            FormParameter::new("password", "bbb")
                .with_type("text")
                .disabled(),
        ]
    );
}

#[test]
fn test_read_structured_url() {
    let collection = load("/complex-url-get-request.json");
    let url = &only_request(&collection).request.url;

    assert_eq!(url.scheme(), "http");
    assert_eq!(url.host(), Some("192.168.99.100"));
    assert_eq!(url.path(), "/path/path2");
    assert_eq!(url.query(), Some("a=b"));
}

#[test]
fn test_replace_variables() {
    let collection = loader()
        .execute(
            LoadCollectionInput::new("/complex-get-request-variables.json")
                .with_variable("token", "XXX"),
        )
        .unwrap();
    let request = &only_request(&collection).request;

    assert_eq!(request.url.host(), Some("localhost"));
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.header("Authorization"), Some("Basic XXX"));
    assert_eq!(
        collection.info.description.as_deref(),
        Some("Requests against localhost")
    );
}

#[test]
fn test_caller_variables_override_collection_variables() {
    let collection = loader()
        .execute(
            LoadCollectionInput::new("/complex-get-request-variables.json")
                .with_variable("host", "127.0.0.1"),
        )
        .unwrap();
    let request = &only_request(&collection).request;

    assert_eq!(request.url.as_str(), "http://127.0.0.1:8080/");
    assert_eq!(request.header("Authorization"), Some("Basic {{token}}"));
}

#[test]
fn test_load_folders() {
    let collection = load("/folder-simple-request.json");

    assert_eq!(collection.item.len(), 1);
    let ItemNode::Folder(folder) = &collection.item[0] else {
        panic!("expected a folder");
    };
    assert_eq!(folder.name, "Folder");
    assert_eq!(folder.item.len(), 1);
    assert_eq!(
        folder.item[0],
        ItemNode::Request(RequestItem::new(
            "This is one request",
            Request::new(RequestUrl::parse("http://localhost:8080").unwrap()),
        ))
    );
    assert_eq!(collection.request_count(), 1);
    assert_eq!(collection.folder_count(), 1);
}

#[test]
fn test_missing_resource() {
    let err = loader()
        .execute(LoadCollectionInput::new("/does-not-exist.json"))
        .unwrap_err();
    assert!(matches!(err, LoadError::ResourceNotFound(ref r) if r == "/does-not-exist.json"));
}

#[test]
fn test_missing_discriminator() {
    let err = loader()
        .execute(LoadCollectionInput::new("/missing-discriminator.json"))
        .unwrap_err();
    match err {
        LoadError::MalformedDocument { path, .. } => assert_eq!(path, "Folder/Nothing here"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_document_on_disk_with_size_limit() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    std::fs::copy(
        fixtures().join("simple-request.json"),
        temp_dir.path().join("copy.json"),
    )
    .unwrap();

    let loader = file_loader(temp_dir.path());
    assert_eq!(
        loader
            .execute(LoadCollectionInput::new("copy.json"))
            .unwrap()
            .request_count(),
        1
    );

    let limited = file_loader(temp_dir.path())
        .with_config(LoaderConfig::default().with_max_document_size(16));
    let err = limited
        .execute(LoadCollectionInput::new("copy.json"))
        .unwrap_err();
    assert!(matches!(err, LoadError::DocumentTooLarge { max: 16, .. }));
}

#[test]
fn test_malformed_json() {
    let loader = memory_loader(InMemoryLocator::new().with_document("broken", "{\"info\": [}"));
    let err = loader
        .execute(LoadCollectionInput::new("broken"))
        .unwrap_err();
    assert!(matches!(err, LoadError::MalformedDocument { .. }));
}

#[test]
fn test_nested_folders_keep_document_order() {
    let document = r#"{
        "info": {"name": "nested", "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"},
        "item": [
            {"name": "b", "request": "http://h/b"},
            {"name": "A", "item": [
                {"name": "z", "request": "http://h/z"},
                {"name": "B", "item": [{"name": "y", "request": {"url": "http://h/y", "method": "DELETE"}}]},
                {"name": "x", "request": "http://h/x"}
            ]},
            {"name": "a", "request": "http://h/a"}
        ]
    }"#;
    let loader = memory_loader(InMemoryLocator::new().with_document("nested", document));
    let collection = loader.execute(LoadCollectionInput::new("nested")).unwrap();

    let order: Vec<(String, HttpMethod)> = collection
        .requests()
        .into_iter()
        .map(|(path, item)| (path, item.request.method))
        .collect();
    assert_eq!(
        order,
        vec![
            ("b".to_string(), HttpMethod::Get),
            ("A/z".to_string(), HttpMethod::Get),
            ("A/B/y".to_string(), HttpMethod::Delete),
            ("A/x".to_string(), HttpMethod::Get),
            ("a".to_string(), HttpMethod::Get),
        ]
    );
}

#[test]
fn test_deeply_nested_folders() {
    const DEPTH: usize = 250;

    let mut item = r#"{"name": "leaf", "request": "http://localhost/{{id}}"}"#.to_string();
    for level in (0..DEPTH).rev() {
        item = format!(r#"{{"name": "f{level}", "item": [{item}]}}"#);
    }
    let document = format!(
        r#"{{"info": {{"name": "deep", "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"}}, "item": [{item}]}}"#
    );

    let loader = memory_loader(InMemoryLocator::new().with_document("deep", document));
    let collection = loader
        .execute(LoadCollectionInput::new("deep").with_variable("id", "7"))
        .unwrap();

    assert_eq!(collection.folder_count(), DEPTH);
    let requests = collection.requests();
    assert_eq!(requests.len(), 1);
    let (path, leaf) = &requests[0];
    assert_eq!(path.matches('/').count(), DEPTH);
    assert!(path.starts_with("f0/f1/"));
    assert!(path.ends_with("/f249/leaf"));
    assert_eq!(leaf.request.url.as_str(), "http://localhost/7");
}
