use crate::error::CliError;
use std::io::Read;

/// Input name that selects standard input instead of a file.
pub const STDIN: &str = "-";

pub fn read_input(input: &str) -> Result<String, CliError> {
    read_source(input, std::io::stdin().lock())
}

/// Reads `input` as a file path, or drains `stdin` when it is `-`.
fn read_source<R: Read>(input: &str, mut stdin: R) -> Result<String, CliError> {
    if input == STDIN {
        let mut source = String::new();
        stdin.read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOCUMENT: &str = r#"{"predicate": {"path": "title", "operator": "ISNULL"}}"#;

    #[test]
    fn test_dash_reads_stdin() {
        let source = read_source("-", DOCUMENT.as_bytes()).unwrap();
        assert_eq!(source, DOCUMENT);
    }

    #[test]
    fn test_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{DOCUMENT}").unwrap();

        let path = file.path().to_str().unwrap();
        let source = read_source(path, "ignored".as_bytes()).unwrap();
        assert_eq!(source, DOCUMENT);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_source(path.to_str().unwrap(), "".as_bytes()).unwrap_err();
        assert!(matches!(err, CliError::InputRead(_)));
        assert!(err.to_string().starts_with("Failed to read input"));
    }
}
