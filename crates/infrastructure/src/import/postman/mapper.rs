//! Postman to Courier Mapping Logic
//!
//! Converts the Postman wire types into the domain model in one top-down pass,
//! substituting `{{variables}}` in every string field as it goes. URL strings
//! are substituted before they are parsed.

use std::collections::{BTreeMap, BTreeSet};

use courier_application::variable_resolver::VariableResolver;
use courier_application::{DecodedCollection, LoadError, LoadResult};
use courier_domain::{
    Body, BodyMode, Collection, DomainError, Folder, FormParameter, HttpMethod, Information,
    ItemNode, QueryParam, Request, RequestItem, RequestUrl, StructuredUrl,
};
use serde_json::Value;
use url::Url;

use super::types::{
    PostmanBody, PostmanCollection, PostmanDescription, PostmanFileSrc, PostmanFormParam,
    PostmanHeaders, PostmanItem, PostmanRequest, PostmanSegment,
    PostmanSegments, PostmanUrl, PostmanUrlStructured,
};

/// Free stack below which deeper folders get a fresh stack segment.
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each stack segment allocated for deep folders.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Maps a parsed Postman document into a [`Collection`].
pub struct CollectionMapper<'r> {
    resolver: &'r VariableResolver,
    unresolved: BTreeSet<String>,
}

impl<'r> CollectionMapper<'r> {
    /// Creates a mapper substituting with `resolver`.
    #[must_use]
    pub const fn new(resolver: &'r VariableResolver) -> Self {
        Self {
            resolver,
            unresolved: BTreeSet::new(),
        }
    }

    /// Maps the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MalformedDocument`] for items that are neither a
    /// request nor a folder, unknown methods or body modes and requests without
    /// a URL, and [`LoadError::InvalidUrl`] for URLs that do not parse.
    pub fn map_collection(mut self, document: PostmanCollection) -> LoadResult<DecodedCollection> {
        let schema = document
            .info
            .schema
            .ok_or_else(|| LoadError::malformed("info.schema", "missing field `schema`"))?;
        let schema = self.subst(&schema);
        let schema = Url::parse(&schema)
            .map_err(|e| LoadError::invalid_url("info.schema", schema.clone(), e.to_string()))?;

        let info = Information {
            name: self.subst(&document.info.name),
            schema,
            description: self.description(document.info.description),
        };

        let item = self.map_items(document.item, "")?;

        Ok(DecodedCollection {
            collection: Collection::new(info, item),
            unresolved: self.unresolved.into_iter().collect(),
        })
    }

    fn map_items(&mut self, items: Vec<PostmanItem>, parent: &str) -> LoadResult<Vec<ItemNode>> {
        items
            .into_iter()
            .map(|item| self.map_item(item, parent))
            .collect()
    }

    fn map_item(&mut self, item: PostmanItem, parent: &str) -> LoadResult<ItemNode> {
        // Folders nest without limit; keep the recursion off the end of the stack.
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
            self.map_item_inner(item, parent)
        })
    }

    fn map_item_inner(&mut self, item: PostmanItem, parent: &str) -> LoadResult<ItemNode> {
        let path = if parent.is_empty() {
            item.name.clone()
        } else {
            format!("{parent}/{}", item.name)
        };
        let name = self.subst(&item.name);
        let description = self.description(item.description);

        match (item.item, item.request) {
            (Some(children), request) => {
                if request.is_some() {
                    tracing::debug!(item = %path, "item has both `item` and `request`; treating it as a folder");
                }
                Ok(ItemNode::Folder(Folder {
                    name,
                    description,
                    item: self.map_items(children, &path)?,
                }))
            }
            (None, Some(request)) => Ok(ItemNode::Request(RequestItem {
                name,
                description,
                request: self.map_request(request, &path)?,
            })),
            (None, None) => Err(LoadError::malformed(
                path,
                "item has neither `request` nor `item`",
            )),
        }
    }

    fn map_request(&mut self, request: Value, path: &str) -> LoadResult<Request> {
        let request: PostmanRequest = match request {
            Value::String(url) => {
                return Ok(Request::new(self.map_url(PostmanUrl::Simple(url), path)?));
            }
            Value::Object(_) => serde_json::from_value(request)
                .map_err(|e| LoadError::malformed(format!("{path} > request"), e.to_string()))?,
            other => {
                return Err(LoadError::malformed(
                    format!("{path} > request"),
                    format!("expected a URL string or a request object, found {other}"),
                ));
            }
        };
        let PostmanRequest {
            method,
            url,
            header,
            headers,
            body,
        } = request;

        let method = match method.map(|m| self.subst(&m)) {
            Some(m) if !m.trim().is_empty() => m.parse::<HttpMethod>().map_err(|_| {
                LoadError::malformed(
                    format!("{path} > request.method"),
                    format!("unsupported HTTP method `{m}`"),
                )
            })?,
            _ => HttpMethod::default(),
        };

        let url = url.ok_or_else(|| {
            LoadError::malformed(format!("{path} > request.url"), "request has no url")
        })?;

        Ok(Request {
            method,
            url: self.map_url(url, path)?,
            headers: self.map_headers([headers, header], path),
            body: self.map_body(body, path)?,
        })
    }

    fn map_url(&mut self, url: PostmanUrl, path: &str) -> LoadResult<RequestUrl> {
        let (text, result) = match url {
            PostmanUrl::Simple(raw) => {
                let text = self.subst(&raw);
                let result = RequestUrl::parse(text.clone());
                (text, result)
            }
            PostmanUrl::Structured(structured) => {
                let structured = self.map_structured_url(structured);
                let text = structured
                    .render()
                    .or_else(|| structured.raw.clone())
                    .unwrap_or_default();
                (text, RequestUrl::from_structured(structured))
            }
        };

        result.map_err(|e| {
            let message = match e {
                DomainError::InvalidUrl(message) => message,
                other => other.to_string(),
            };
            LoadError::invalid_url(format!("{path} > request.url"), text, message)
        })
    }

    fn map_structured_url(&mut self, url: PostmanUrlStructured) -> StructuredUrl {
        let host = match url.host {
            Some(PostmanSegments::Joined(host)) if !host.is_empty() => vec![self.subst(&host)],
            Some(PostmanSegments::Parts(parts)) => self.segments(parts),
            _ => Vec::new(),
        };
        let path = match url.path {
            Some(PostmanSegments::Joined(path)) => {
                let path = path.trim_start_matches('/');
                if path.is_empty() {
                    Vec::new()
                } else {
                    vec![self.subst(path)]
                }
            }
            Some(PostmanSegments::Parts(parts)) => self.segments(parts),
            None => Vec::new(),
        };
        let query = url
            .query
            .into_iter()
            .map(|q| QueryParam {
                key: self.subst(q.key.as_deref().unwrap_or_default()),
                value: q.value.map(|v| self.subst(&v)),
                disabled: q.disabled,
            })
            .collect();

        StructuredUrl {
            protocol: url.protocol.map(|p| self.subst(&p)),
            host,
            port: url.port.map(|p| self.subst(&p)),
            path,
            query,
            hash: url.hash.map(|h| self.subst(&h)),
            raw: url.raw.map(|r| self.subst(&r)),
        }
    }

    fn segments(&mut self, parts: Vec<PostmanSegment>) -> Vec<String> {
        parts
            .into_iter()
            .map(|part| self.subst(&part.into_text()))
            .collect()
    }

    /// Merges header sources in order; a later source wins on duplicate keys.
    fn map_headers<I>(&mut self, sources: I, path: &str) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = Option<PostmanHeaders>>,
    {
        let mut mapped = BTreeMap::new();
        for headers in sources.into_iter().flatten() {
            match headers {
                PostmanHeaders::List(list) => {
                    for header in list {
                        if header.disabled {
                            tracing::debug!(item = %path, header = %header.key, "skipping disabled header");
                            continue;
                        }
                        let value = header.value.unwrap_or_default();
                        mapped.insert(self.subst(&header.key), self.subst(&value));
                    }
                }
                PostmanHeaders::Map(map) => {
                    for (key, value) in map {
                        mapped.insert(self.subst(&key), self.subst(&value));
                    }
                }
                PostmanHeaders::Block(block) => {
                    for line in block.lines().map(str::trim) {
                        // `//` marks a disabled line in header blocks.
                        if line.is_empty() || line.starts_with("//") {
                            continue;
                        }
                        let (key, value) = line.split_once(':').unwrap_or((line, ""));
                        mapped.insert(self.subst(key.trim()), self.subst(value.trim()));
                    }
                }
            }
        }
        mapped
    }

    fn map_body(&mut self, body: Option<PostmanBody>, path: &str) -> LoadResult<Body> {
        let Some(body) = body else {
            return Ok(Body::None);
        };

        let mode = body
            .mode
            .as_deref()
            .map(str::parse::<BodyMode>)
            .transpose()
            .map_err(|e| {
                LoadError::malformed(format!("{path} > request.body.mode"), e.to_string())
            })?;

        if let Some(mode) = mode {
            let dropped: Vec<&str> = [
                (BodyMode::Raw, body.raw.is_some()),
                (BodyMode::Formdata, body.formdata.is_some()),
                (BodyMode::Urlencoded, body.urlencoded.is_some()),
            ]
            .into_iter()
            .filter(|(m, present)| *present && *m != mode)
            .map(|(m, _)| m.as_str())
            .collect();
            if !dropped.is_empty() {
                tracing::debug!(item = %path, %mode, ?dropped, "ignoring body payloads that do not match the mode");
            }
        }

        let raw = body.raw.map(|raw| self.subst(&raw));
        let formdata = body.formdata.map(|params| self.form_params(params));
        let urlencoded = body.urlencoded.map(|params| self.form_params(params));

        Ok(Body::from_parts(mode, raw, formdata, urlencoded))
    }

    fn form_params(&mut self, params: Vec<PostmanFormParam>) -> Vec<FormParameter> {
        params
            .into_iter()
            .map(|p| {
                let value = p
                    .value
                    .or_else(|| p.src.map(PostmanFileSrc::into_joined))
                    .unwrap_or_default();
                FormParameter {
                    key: self.subst(&p.key),
                    value: self.subst(&value),
                    param_type: p.param_type,
                    disabled: p.disabled,
                }
            })
            .collect()
    }

    fn description(&mut self, description: Option<PostmanDescription>) -> Option<String> {
        description
            .and_then(PostmanDescription::into_content)
            .map(|d| self.subst(&d))
    }

    fn subst(&mut self, input: &str) -> String {
        let result = self.resolver.resolve(input);
        self.unresolved.extend(result.unresolved);
        result.resolved
    }
}
