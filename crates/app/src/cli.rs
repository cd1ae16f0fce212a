//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Courier - load a Postman collection and print its requests
#[derive(Parser, Debug)]
#[command(name = "courier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Collection resource, relative to the root directory
    pub resource: String,

    /// Directory resources are resolved against
    #[arg(long, env = "COURIER_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Variable substituted into `{{name}}` placeholders (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_variable)]
    pub variables: Vec<(String, String)>,

    /// Largest document accepted, in bytes
    #[arg(long, env = "COURIER_MAX_DOCUMENT_SIZE", value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Print the loaded collection as JSON
    #[arg(long)]
    pub json: bool,

    /// Log loader diagnostics
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Parse a `KEY=VALUE` variable assignment
pub fn parse_variable(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("variable name is empty in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_variable() {
        assert_eq!(
            parse_variable("host=localhost").unwrap(),
            ("host".to_string(), "localhost".to_string())
        );
        assert_eq!(
            parse_variable("query=a=b").unwrap(),
            ("query".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_variable("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_variable("novalue").is_err());
        assert!(parse_variable("=x").is_err());
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "courier",
            "book.json",
            "--root",
            "/tmp/collections",
            "--var",
            "host=localhost",
            "--var",
            "token=XXX",
            "--max-size",
            "1024",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.resource, "book.json");
        assert_eq!(cli.root, PathBuf::from("/tmp/collections"));
        assert_eq!(
            cli.variables,
            vec![
                ("host".to_string(), "localhost".to_string()),
                ("token".to_string(), "XXX".to_string()),
            ]
        );
        assert_eq!(cli.max_size, Some(1024));
        assert!(cli.json);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_cli_requires_resource() {
        assert!(Cli::try_parse_from(["courier"]).is_err());
        assert!(Cli::try_parse_from(["courier", "x.json", "--var", "broken"]).is_err());
    }

    #[test]
    fn test_verbose_log_level() {
        let cli = Cli::try_parse_from(["courier", "x.json", "-v"]).unwrap();
        assert_eq!(cli.log_level(), "debug");
    }
}
