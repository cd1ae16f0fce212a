//! Variable resolution module
//!
//! Provides parsing and substitution of `{{variable}}` placeholders in strings.
//!
//! # Usage
//!
//! ```
//! use courier_application::variable_resolver::VariableResolver;
//!
//! let resolver = VariableResolver::new([("host", "localhost")]);
//!
//! let result = resolver.resolve("http://{{host}}/api/{{version}}");
//! assert_eq!(result.resolved, "http://localhost/api/{{version}}");
//! assert_eq!(result.unresolved, vec!["version".to_string()]);
//! ```

pub mod engine;
pub mod parser;

pub use engine::{ResolutionResult, VariableResolver, substitute};
pub use parser::{VariableReference, extract_variable_names, has_variables, parse_variables};
