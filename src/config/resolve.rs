//! Resolve CLI flags and file config into a merge job

use super::MergeConfig;
use crate::domain::{MergeJob, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_DIR};
use std::path::PathBuf;

/// Values given on the command line; `None` means the flag was absent.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Build the job for this run: CLI > config file > defaults.
pub fn resolve_job(cli: CliOverrides, config: MergeConfig) -> MergeJob {
    let source_directory = cli
        .source_dir
        .or(config.source_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
    let output_path =
        cli.output.or(config.output).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

    MergeJob { source_directory, output_path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let job = resolve_job(CliOverrides::default(), MergeConfig::default());
        assert_eq!(job, MergeJob::default());
    }

    #[test]
    fn test_config_fills_unset_cli_values() {
        let cli = CliOverrides { source_dir: None, output: Some(PathBuf::from("cli.swift")) };
        let config = MergeConfig {
            source_dir: Some(PathBuf::from("App")),
            output: Some(PathBuf::from("config.swift")),
        };

        let job = resolve_job(cli, config);
        assert_eq!(job.source_directory, PathBuf::from("App"));
        assert_eq!(job.output_path, PathBuf::from("cli.swift"));
    }
}
