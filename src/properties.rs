use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read the value of the `version=` line, if any.
///
/// The value is the text between the first and second `=`, trimmed. An
/// empty value counts as missing. A missing file also yields `None`; the
/// hard failure for that case happens later, when the file is rewritten.
pub fn read_version(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for line in content.lines() {
        if line.starts_with("version=") {
            let value = line.split('=').nth(1).map(str::trim).unwrap_or("");
            if value.is_empty() {
                return Ok(None);
            }
            return Ok(Some(value.to_string()));
        }
    }

    Ok(None)
}

/// Rewrite the properties file with a new version.
///
/// Every line starting with `version=` is replaced; all other lines pass
/// through byte-for-byte, including their line terminators.
pub fn write_version(path: &Path, new_version: &str) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut output = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        if line.starts_with("version=") {
            output.push_str("version=");
            output.push_str(new_version);
            output.push('\n');
        } else {
            output.push_str(line);
        }
    }

    fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// All `key=value` pairs in file order, for display.
pub fn read_all(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            pairs.push((key.trim().to_string(), value.trim().to_string()));
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_props(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("library.properties");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_version_returns_value() {
        let dir = TempDir::new().unwrap();
        let path = write_props(&dir, "name=Blink\nversion=1.1.5\nauthor=Someone\n");
        assert_eq!(read_version(&path).unwrap(), Some("1.1.5".to_string()));
    }

    #[test]
    fn test_read_version_stops_at_second_equals() {
        let dir = TempDir::new().unwrap();
        let path = write_props(&dir, "version=1.0.0=stray\n");
        assert_eq!(read_version(&path).unwrap(), Some("1.0.0".to_string()));
    }

    #[test]
    fn test_read_version_empty_value_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_props(&dir, "version=\nname=Blink\n");
        assert_eq!(read_version(&path).unwrap(), None);
    }

    #[test]
    fn test_read_version_missing_line_and_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = write_props(&dir, "name=Blink\n");
        assert_eq!(read_version(&path).unwrap(), None);
        assert_eq!(
            read_version(&dir.path().join("nope.properties")).unwrap(),
            None
        );
    }

    #[test]
    fn test_write_version_replaces_only_version_line() {
        let dir = TempDir::new().unwrap();
        let path = write_props(
            &dir,
            "name=Blink\nversion=1.1.5\nauthor=Someone <someone@example.com>\nsentence=Blinks.\n",
        );

        write_version(&path, "1.1.6").unwrap();

        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(
            after,
            "name=Blink\nversion=1.1.6\nauthor=Someone <someone@example.com>\nsentence=Blinks.\n"
        );
    }

    #[test]
    fn test_write_version_appends_newline_to_final_line() {
        let dir = TempDir::new().unwrap();
        let path = write_props(&dir, "name=Blink\nversion=1.0.0");

        write_version(&path, "2.0.0").unwrap();

        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(after, "name=Blink\nversion=2.0.0\n");
    }

    #[test]
    fn test_write_version_preserves_untouched_bytes() {
        let dir = TempDir::new().unwrap();
        // Odd spacing and a blank line must survive the rewrite untouched.
        let original = "name = Blink\n\nversion=0.9.0\nparagraph=Line with = sign.\n";
        let path = write_props(&dir, original);

        write_version(&path, "0.9.1").unwrap();

        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(
            after,
            "name = Blink\n\nversion=0.9.1\nparagraph=Line with = sign.\n"
        );
    }

    #[test]
    fn test_write_version_without_version_line_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_props(&dir, "name=Blink\nauthor=Someone\n");

        write_version(&path, "1.0.0").unwrap();

        // The line is replaced, never inserted.
        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(after, "name=Blink\nauthor=Someone\n");
    }

    #[test]
    fn test_write_version_errors_when_file_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("library.properties");
        assert!(write_version(&missing, "1.0.0").is_err());
    }

    #[test]
    fn test_read_all_keeps_order_and_full_values() {
        let dir = TempDir::new().unwrap();
        let path = write_props(
            &dir,
            "name=Blink\nversion=1.0.0\nsentence=Does a=b things.\n\nbad line\n",
        );

        let pairs = read_all(&path).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), "Blink".to_string()),
                ("version".to_string(), "1.0.0".to_string()),
                ("sentence".to_string(), "Does a=b things.".to_string()),
            ]
        );
    }
}
