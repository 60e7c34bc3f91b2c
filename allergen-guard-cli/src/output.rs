//! Output rendering

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Render a serializable value to stdout in the requested format.
pub fn render<T: Serialize>(format: OutputFormat, value: &T) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_formats_render() {
        let value = serde_json::json!({"labels": ["Food"]});
        render(OutputFormat::Json, &value).expect("json");
        render(OutputFormat::Yaml, &value).expect("yaml");
    }
}
