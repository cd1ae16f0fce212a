//! Variable parser for {{variable}} syntax
//!
//! Parses strings to extract variable references with their positions.

use std::ops::Range;

/// Represents a parsed variable reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name (without {{ }}).
    pub name: String,

    /// Byte range in the original string where this reference appears.
    pub span: Range<usize>,
}

impl VariableReference {
    /// Creates a new variable reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Parses a string and extracts all variable references.
///
/// A reference is `{{` followed by one or more characters other than `{` and
/// `}`, followed by `}}`. The name is taken verbatim, whitespace included.
///
/// # Examples
///
/// ```
/// use courier_application::variable_resolver::parser::parse_variables;
///
/// let refs = parse_variables("Hello {{name}}, your token is {{token}}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "name");
/// assert_eq!(refs[1].name, "token");
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    // Braces are ASCII, so byte offsets found here are always char boundaries.
    let bytes = input.as_bytes();
    let mut references = Vec::new();
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] != b'{' || bytes[i + 1] != b'{' {
            i += 1;
            continue;
        }

        let name_start = i + 2;
        let mut end = name_start;
        while end < bytes.len() && bytes[end] != b'{' && bytes[end] != b'}' {
            end += 1;
        }

        let closed = end + 1 < bytes.len() && bytes[end] == b'}' && bytes[end + 1] == b'}';
        if closed && end > name_start {
            references.push(VariableReference::new(&input[name_start..end], i..end + 2));
            i = end + 2;
        } else {
            // Retry from the next brace so `{{{name}}` still finds `{{name}}`.
            i += 1;
        }
    }

    references
}

/// Returns true if the input string contains any variable references.
#[must_use]
pub fn has_variables(input: &str) -> bool {
    input.contains("{{") && !parse_variables(input).is_empty()
}

/// Extracts just the variable names from the input without full parsing info.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_variables(input)
        .into_iter()
        .map(|r| r.name)
        .collect()
}
