//! Version validation and bumping for `library.properties`.

use anyhow::{Context, Result};
use colored::*;
use regex::Regex;
use semver::Version;

/// Check a release version string (`major.minor.patch`, all numeric).
pub fn is_valid_version(input: &str) -> bool {
    let pattern = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
    pattern.is_match(input)
}

/// Bump the last dotted component by one.
///
/// Every component must parse as an integer; the count of components is
/// taken as-is from the input, so a two-part `1.2` becomes `1.3`.
pub fn increment_patch(version: &str) -> Result<String> {
    let mut parts: Vec<u64> = Vec::new();
    for part in version.split('.') {
        let value: u64 = part.parse().with_context(|| {
            format!("Non-numeric component '{}' in version '{}'", part, version)
        })?;
        parts.push(value);
    }

    if let Some(last) = parts.last_mut() {
        *last = last
            .checked_add(1)
            .with_context(|| format!("Version component out of range in '{}'", version))?;
    }

    Ok(parts
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("."))
}

/// Decide the version for this run.
///
/// A well-formed `requested` string is used verbatim. Anything else falls
/// back to a patch bump of `current`; with no prior version to bump, the
/// run cannot continue.
pub fn resolve_version(requested: &str, current: Option<&str>) -> Result<String> {
    if is_valid_version(requested) {
        warn_if_not_newer(requested, current);
        return Ok(requested.to_string());
    }

    println!(
        "{} Invalid version format. Using the last version number instead.",
        "!".yellow()
    );

    match current {
        Some(previous) => {
            let next = increment_patch(previous)?;
            println!("{} Updated version to {}.", "✓".green(), next);
            Ok(next)
        }
        None => anyhow::bail!("Invalid version given and no previous version found"),
    }
}

// Releases normally move forward; a backwards jump is accepted but flagged.
fn warn_if_not_newer(requested: &str, current: Option<&str>) {
    let Some(current) = current else { return };
    if let Ok(new_ver) = Version::parse(requested)
        && let Ok(cur_ver) = Version::parse(current)
        && new_ver <= cur_ver
    {
        println!(
            "{} Version {} is not newer than the current {}.",
            "!".yellow(),
            new_ver,
            cur_ver
        );
    }
}
