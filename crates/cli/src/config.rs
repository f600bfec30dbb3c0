//! Resolves compiler settings from a settings file, the environment and
//! command-line flags, in increasing order of precedence.

use crate::error::CliError;
use filter_planner::CompilerSettings;
use tracing::info;

pub const MAX_DEPTH_ENV: &str = "FILTERC_MAX_DEPTH";

pub fn load_settings(
    config: Option<&str>,
    max_depth: Option<usize>,
) -> Result<CompilerSettings, CliError> {
    let mut settings = match config {
        Some(path) => read_settings_file(path)?,
        None => CompilerSettings::default(),
    };

    if let Some(depth) = env_max_depth(std::env::var(MAX_DEPTH_ENV).ok())? {
        settings.max_depth = Some(depth);
    }

    if let Some(depth) = max_depth {
        settings.max_depth = Some(depth);
    }

    Ok(settings)
}

fn read_settings_file(path: &str) -> Result<CompilerSettings, CliError> {
    info!("Loading compiler settings from {path}");
    let source = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| CliError::ConfigParse {
        path: path.to_string(),
        source,
    })
}

fn env_max_depth(raw: Option<String>) -> Result<Option<usize>, CliError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CliError::InvalidEnv {
                name: MAX_DEPTH_ENV.to_string(),
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_env_max_depth() {
        assert_eq!(env_max_depth(None).unwrap(), None);
        assert_eq!(env_max_depth(Some(" 16 ".into())).unwrap(), Some(16));
        assert!(matches!(
            env_max_depth(Some("deep".into())),
            Err(CliError::InvalidEnv { .. })
        ));
    }

    #[test]
    fn test_settings_file_and_flag_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"max_depth": 8, "warn_on_param_collision": false}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let from_file = read_settings_file(path).unwrap();
        assert_eq!(from_file.max_depth, Some(8));
        assert!(!from_file.warn_on_param_collision);

        let overridden = load_settings(Some(path), Some(2)).unwrap();
        assert_eq!(overridden.max_depth, Some(2));
        assert!(!overridden.warn_on_param_collision);
    }

    #[test]
    fn test_malformed_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "max_depth = 3").unwrap();

        let err = read_settings_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
    }
}
