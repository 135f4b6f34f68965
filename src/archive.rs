//! Versioned release archives.
//!
//! Builds `<Name>_V<major>_<minor>_<patch>.zip` from the project tree,
//! honoring the `.gitignore` glob patterns and skipping anything that
//! never belongs in a distribution (other zips, the tool itself).
//!
//! ## Behavior
//!
//! - One previously built archive is removed before writing the new one
//! - Directory structure inside the archive mirrors the project
//! - The finished archive is hashed so releases can be verified

use anyhow::{Context, Result};
use colored::*;
use glob::Pattern;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;
use walkdir::WalkDir;
use zip::write::FileOptions;

use crate::config::ReleaseConfig;

/// Archive file name for a library at a version. Dots become underscores,
/// so `LedPanel` at `1.2.3` packs into `LedPanel_V1_2_3.zip`.
pub fn archive_file_name(library_name: &str, version: &str) -> String {
    format!("{}_V{}.zip", library_name, version.replace('.', "_"))
}

// Anchored at the start only, so stray suffixes after ".zip" still match.
fn versioned_archive_pattern(library_name: &str) -> Regex {
    let pattern = format!(r"^{}_V\d+_\d+_\d+\.zip", regex::escape(library_name));
    Regex::new(&pattern).unwrap()
}

/// First file in the project root whose name looks like a versioned
/// archive of this library.
pub fn find_existing_archive(config: &ReleaseConfig) -> Option<String> {
    let pattern = versioned_archive_pattern(&config.library_name);
    let entries = fs::read_dir(&config.root).ok()?;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if pattern.is_match(&name) {
            return Some(name);
        }
    }
    None
}

/// Remove one previously built archive, if any is lying around.
/// Further stale archives survive until the next run.
fn remove_stale_archive(config: &ReleaseConfig) -> Result<()> {
    if let Some(name) = find_existing_archive(config) {
        fs::remove_file(config.root.join(&name))
            .with_context(|| format!("Failed to remove old archive {}", name))?;
        println!("{} Removed old archive: {}", "🗑️".red(), name);
    }
    Ok(())
}

/// Load glob patterns from the exclusion file.
///
/// Each line is cut at the first `#`; whatever remains after trimming
/// becomes a pattern. Unparsable globs are skipped with a warning.
fn load_ignore_patterns(config: &ReleaseConfig) -> Result<Vec<Pattern>> {
    if !config.exclude_file.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&config.exclude_file)
        .with_context(|| format!("Failed to read {}", config.exclude_file.display()))?;

    let mut patterns = Vec::new();
    for line in content.lines() {
        let text = line.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        match Pattern::new(text) {
            Ok(pattern) => patterns.push(pattern),
            Err(_) => println!(
                "{} Skipping unparsable ignore pattern '{}'",
                "!".yellow(),
                text
            ),
        }
    }
    Ok(patterns)
}

// Patterns match against the bare file name, not the path.
fn is_ignored(file_name: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|p| p.matches(file_name))
}

// The fresh archive, the tool's own binary, and any other zip stay out.
fn is_never_archived(config: &ReleaseConfig, file_name: &str, zip_name: &str) -> bool {
    file_name == zip_name
        || file_name.ends_with(".zip")
        || config.never_archive.iter().any(|n| n == file_name)
}

/// Build the versioned zip for `version` and return its path.
pub fn create_archive(config: &ReleaseConfig, version: &str) -> Result<PathBuf> {
    let zip_name = archive_file_name(&config.library_name, version);
    let zip_path = config.root.join(&zip_name);

    remove_stale_archive(config)?;
    let patterns = load_ignore_patterns(config)?;

    println!("{} Creating archive: {}", "💾".blue(), zip_name);

    let file = File::create(&zip_path)
        .with_context(|| format!("Failed to create {}", zip_path.display()))?;
    let mut zip = zip::ZipWriter::new(file);
    let options = FileOptions::<()>::default().compression_method(zip::CompressionMethod::Deflated);

    let mut added = 0usize;
    for entry in WalkDir::new(&config.root).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if is_ignored(&file_name, &patterns) || is_never_archived(config, &file_name, &zip_name) {
            continue;
        }

        let path = entry.path();
        let name = path
            .strip_prefix(&config.root)
            .unwrap_or(path)
            .to_string_lossy();

        #[cfg(windows)]
        let name = name.replace("\\", "/"); // Zip standard uses forward slashes

        zip.start_file(name, options)?;
        let mut f = File::open(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        io::copy(&mut f, &mut zip)?;
        added += 1;
    }

    zip.finish()
        .with_context(|| format!("Failed to finalize {}", zip_name))?;

    let digest = file_sha256(&zip_path)?;
    println!(
        "{} Created new archive: {} ({} files)",
        "✓".green(),
        zip_name,
        added
    );
    println!("   {} sha256: {}", "→".dimmed(), digest.dimmed());

    Ok(zip_path)
}

fn file_sha256(path: &std::path::Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open {} for hashing", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
