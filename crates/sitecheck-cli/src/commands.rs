use colored::Colorize;
use serde::Serialize;

use sitecheck_tree::{verify_trees, DirSource, VerifyConfig, VerifyReport, VerifyResult};

use crate::cli::*;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome {
    Ok {
        html_files: usize,
        other_files: usize,
    },
    Failed {
        kind: &'static str,
        message: String,
    },
}

fn outcome(result: &VerifyResult<VerifyReport>) -> Outcome {
    match result {
        Ok(report) => Outcome::Ok {
            html_files: report.html_files,
            other_files: report.other_files,
        },
        Err(err) => Outcome::Failed {
            kind: err.kind(),
            message: err.to_string(),
        },
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let result = verify(&config);

    match cli.format {
        OutputFormat::Text => {
            let report = result?;
            println!(
                "{} {} files match ({} html, {} other)",
                "✓".green().bold(),
                report.total().to_string().bold(),
                report.html_files,
                report.other_files,
            );
            Ok(())
        }
        OutputFormat::Json => {
            let body = outcome(&result);
            println!("{}", serde_json::to_string(&body)?);
            if result.is_err() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Defaults, then the config file, then command-line roots.
fn resolve_config(cli: &Cli) -> VerifyResult<VerifyConfig> {
    let mut config = match &cli.config {
        Some(path) => VerifyConfig::load(path)?,
        None => VerifyConfig::default(),
    };
    if let Some(expected) = &cli.expected {
        config.expected_root = expected.clone();
    }
    if let Some(actual) = &cli.actual {
        config.actual_root = actual.clone();
    }
    Ok(config)
}

fn verify(config: &VerifyConfig) -> VerifyResult<VerifyReport> {
    tracing::debug!(
        expected = %config.expected_root.display(),
        actual = %config.actual_root.display(),
        "verifying build output"
    );
    let expected = DirSource::new(&config.expected_root);
    let actual = DirSource::new(&config.actual_root);
    verify_trees(&expected, &actual, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use sitecheck_tree::VerifyError;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sitecheck.toml");
        fs::write(
            &config_path,
            "expected_root = \"from-file\"\nactual_root = \"also-from-file\"\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "sitecheck",
            "--config",
            config_path.to_str().unwrap(),
            "--actual",
            "from-flag",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.expected_root, PathBuf::from("from-file"));
        assert_eq!(config.actual_root, PathBuf::from("from-flag"));
    }

    #[test]
    fn no_flags_uses_defaults() {
        let cli = Cli::try_parse_from(["sitecheck"]).unwrap();
        assert_eq!(resolve_config(&cli).unwrap(), VerifyConfig::default());
    }

    #[test]
    fn verify_directories() {
        let expected = tempfile::tempdir().unwrap();
        let actual = tempfile::tempdir().unwrap();
        fs::write(expected.path().join("index.html"), r#"<a href="a/b.html">b</a>"#).unwrap();
        fs::write(actual.path().join("index.html"), r#"<a href="a\b.html">b</a>"#).unwrap();

        let config = VerifyConfig {
            expected_root: expected.path().to_path_buf(),
            actual_root: actual.path().to_path_buf(),
            ..VerifyConfig::default()
        };
        let report = verify(&config).unwrap();
        assert_eq!(report.html_files, 1);
    }

    #[test]
    fn outcome_json_shape() {
        let ok = outcome(&Ok(VerifyReport { html_files: 2, other_files: 3 }));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"status": "ok", "html_files": 2, "other_files": 3})
        );

        let failed = outcome(&Err(VerifyError::TreeSizeMismatch { expected: 2, actual: 1 }));
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({
                "status": "failed",
                "kind": "tree_size_mismatch",
                "message": "unequal number of files: expected 2, actual 1",
            })
        );
    }
}
