//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Relay lines of text through the clause segmenter
    Segment(segment::SegmentArgs),

    /// Generate a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let segment_cmd = Commands::Segment(segment::SegmentArgs {
            input: vec!["laused.txt".to_string()],
            output: None,
            jar: Some(PathBuf::from("Osalau.jar")),
            java: None,
            segmenter_cmd: None,
            ignore_missing_commas: false,
            annotate: false,
            config: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{segment_cmd:?}");
        assert!(debug_str.contains("Segment"));
        assert!(debug_str.contains("laused.txt"));

        let generate_cmd = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: Some(PathBuf::from("osalau.toml")),
        });
        let debug_str = format!("{generate_cmd:?}");
        assert!(debug_str.contains("GenerateConfig"));
        assert!(debug_str.contains("osalau.toml"));
    }
}
