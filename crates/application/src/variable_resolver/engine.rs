//! Variable substitution engine
//!
//! Replaces `{{variable}}` references with values from a variable map.

use std::collections::HashMap;

use super::parser::parse_variables;

/// Result of variable resolution for a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The string with every known variable substituted.
    pub resolved: String,

    /// Names of variables that were substituted, in order of appearance.
    pub resolved_variables: Vec<String>,

    /// Names of variables left in place because they have no value.
    pub unresolved: Vec<String>,

    /// Whether all variables were successfully resolved.
    pub is_complete: bool,
}

impl ResolutionResult {
    /// Creates a result for input with no variables.
    #[must_use]
    pub fn no_variables(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            resolved_variables: Vec::new(),
            unresolved: Vec::new(),
            is_complete: true,
        }
    }

    /// Returns the count of resolved variables.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved_variables.len()
    }

    /// Returns the count of unresolved variables.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

/// The variable substitution engine.
///
/// Substitution is a single pass: inserted values are never rescanned, so a
/// value containing `{{other}}` ends up in the output literally.
#[derive(Debug, Clone, Default)]
pub struct VariableResolver {
    variables: HashMap<String, String>,
}

impl VariableResolver {
    /// Creates a resolver over the given name/value pairs.
    #[must_use]
    pub fn new<I, K, V>(variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            variables: variables
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates a resolver with no variables.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a resolver that falls back to `defaults` for names this one
    /// does not define.
    #[must_use]
    pub fn with_defaults<I, K, V>(&self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut variables: HashMap<String, String> = defaults
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        variables.extend(
            self.variables
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Self { variables }
    }

    /// Returns the value of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Resolves all variables in the input string.
    #[must_use]
    pub fn resolve(&self, input: &str) -> ResolutionResult {
        resolve_with(input, |name| self.get(name))
    }

    /// Resolves all variables and returns only the resulting string.
    #[must_use]
    pub fn substitute(&self, input: &str) -> String {
        self.resolve(input).resolved
    }

    /// Checks which variables in the input would be unresolved.
    #[must_use]
    pub fn find_unresolved(&self, input: &str) -> Vec<String> {
        parse_variables(input)
            .into_iter()
            .filter(|r| !self.variables.contains_key(&r.name))
            .map(|r| r.name)
            .collect()
    }
}

impl From<HashMap<String, String>> for VariableResolver {
    fn from(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }
}

/// Replaces every `{{name}}` in `text` with `variables[name]`.
///
/// Unknown names are left in place verbatim.
#[must_use]
pub fn substitute<S: std::hash::BuildHasher>(
    text: &str,
    variables: &HashMap<String, String, S>,
) -> String {
    resolve_with(text, |name| variables.get(name).map(String::as_str)).resolved
}

fn resolve_with<'v>(input: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> ResolutionResult {
    let references = parse_variables(input);

    if references.is_empty() {
        return ResolutionResult::no_variables(input);
    }

    let mut resolved_vars = Vec::new();
    let mut unresolved = Vec::new();
    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;

    for var_ref in references {
        // Append text before this variable
        result.push_str(&input[last_end..var_ref.span.start]);

        if let Some(value) = lookup(&var_ref.name) {
            result.push_str(value);
            resolved_vars.push(var_ref.name);
        } else {
            // Keep the original {{variable}} for unresolved
            result.push_str(&input[var_ref.span.clone()]);
            unresolved.push(var_ref.name);
        }

        last_end = var_ref.span.end;
    }

    result.push_str(&input[last_end..]);

    let is_complete = unresolved.is_empty();
    ResolutionResult {
        resolved: result,
        resolved_variables: resolved_vars,
        unresolved,
        is_complete,
    }
}
