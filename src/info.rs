use anyhow::Result;
use colored::*;
use serde_json::json;

use crate::config::ReleaseConfig;
use crate::{archive, properties, ui};

fn read_properties(config: &ReleaseConfig) -> Result<Vec<(String, String)>> {
    if config.properties_path.exists() {
        properties::read_all(&config.properties_path)
    } else {
        Ok(Vec::new())
    }
}

fn info_payload(
    config: &ReleaseConfig,
    pairs: &[(String, String)],
    existing_archive: Option<&str>,
) -> serde_json::Value {
    let properties: serde_json::Map<String, serde_json::Value> = pairs
        .iter()
        .map(|(key, value)| (key.clone(), json!(value)))
        .collect();

    json!({
        "library": config.library_name,
        "header": config.header_path.display().to_string(),
        "properties": properties,
        "keywords_file": config.keywords_path.exists(),
        "archive": existing_archive,
    })
}

/// Print library metadata and the state of the release files.
pub fn print_info(config: &ReleaseConfig, json_output: bool) -> Result<()> {
    let pairs = read_properties(config)?;
    let existing_archive = archive::find_existing_archive(config);

    if json_output {
        let payload = info_payload(config, &pairs, existing_archive.as_deref());
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", config.library_name.bold().cyan());

    if pairs.is_empty() {
        println!("{} No library.properties found", "!".yellow());
    } else {
        let mut table = ui::Table::new(&["Property", "Value"]);
        for (key, value) in &pairs {
            table.add_row(vec![key.clone(), value.clone()]);
        }
        table.print();
    }

    println!("\n{}", "Release files:".bold());
    println!(
        "  {} Header: {}",
        status(config.header_path.exists()),
        config.header_path.display()
    );
    println!(
        "  {} keywords.txt: {}",
        status(config.keywords_path.exists()),
        if config.keywords_path.exists() {
            "present"
        } else {
            "missing"
        }
    );
    match &existing_archive {
        Some(name) => println!("  {} Archive: {}", "✓".green(), name),
        None => println!("  {} Archive: none", "x".red()),
    }

    Ok(())
}

fn status(ok: bool) -> ColoredString {
    if ok { "✓".green() } else { "x".red() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> ReleaseConfig {
        ReleaseConfig {
            root: root.to_path_buf(),
            library_name: "LedPanel".to_string(),
            properties_path: root.join("library.properties"),
            keywords_path: root.join("keywords.txt"),
            header_path: root.join("LedPanel.h"),
            exclude_file: root.join(".gitignore"),
            doc_program: "python".to_string(),
            doc_args: vec!["generate_docs.py".to_string()],
            never_archive: Vec::new(),
        }
    }

    #[test]
    fn test_payload_carries_properties_and_status() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path());
        fs::write(dir.path().join("keywords.txt"), "").unwrap();

        let pairs = vec![
            ("name".to_string(), "LedPanel".to_string()),
            ("version".to_string(), "1.0.0".to_string()),
        ];
        let payload = info_payload(&config, &pairs, Some("LedPanel_V1_0_0.zip"));

        assert_eq!(payload["library"], "LedPanel");
        assert_eq!(payload["properties"]["version"], "1.0.0");
        assert_eq!(payload["keywords_file"], true);
        assert_eq!(payload["archive"], "LedPanel_V1_0_0.zip");
    }

    #[test]
    fn test_payload_without_artifacts() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path());

        let payload = info_payload(&config, &[], None);
        assert_eq!(payload["keywords_file"], false);
        assert!(payload["archive"].is_null());
    }

    #[test]
    fn test_print_info_handles_missing_properties_file() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path());
        assert!(print_info(&config, false).is_ok());
        assert!(print_info(&config, true).is_ok());
    }
}
