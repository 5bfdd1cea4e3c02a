//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = template();

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("Configuration template written to {}", path.display());
                println!();
                println!("Next steps:");
                println!("1. Point jar_path at your Osalau.jar");
                println!("2. Relay some text through it:");
                println!("   osalau segment -c {} < laused.txt", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }
}

/// Default configuration template content
fn template() -> &'static str {
    r#"# osalau configuration

[segmenter]
# Java executable used to launch the segmenter
java_path = "java"

# Path to the Osalausestaja jar
# jar_path = "/opt/osalau/Osalau.jar"

# Let the segmenter guess clause boundaries when commas are missing.
# May introduce additional errors.
ignore_missing_commas = false

# Raw command override, split on whitespace. When set, java_path and
# jar_path are ignored.
# command = "java -jar /opt/osalau/Osalau.jar -pyvabamorf"

[output]
# Rewrite clause markers into clause ids and types
annotate = false
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_as_config() {
        let config: CliConfig = toml::from_str(template()).unwrap();
        assert_eq!(config.segmenter.java_path, "java");
        assert!(config.segmenter.jar_path.is_none());
        assert!(!config.output.annotate);
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("osalau.toml");

        let args = GenerateConfigArgs {
            output: Some(output_path.clone()),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[segmenter]"));
        assert!(content.contains("ignore_missing_commas = false"));
    }
}
