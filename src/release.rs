use anyhow::Result;
use colored::*;

use crate::config::ReleaseConfig;
use crate::process::ProcessRunner;
use crate::{archive, doc, keywords, properties, version};

/// Resolve the version from operator input and rewrite
/// `library.properties`. Returns the version that was written.
pub fn apply_version(config: &ReleaseConfig, requested: &str) -> Result<String> {
    let current = properties::read_version(&config.properties_path)?;
    let resolved = version::resolve_version(requested, current.as_deref())?;

    properties::write_version(&config.properties_path, &resolved)?;
    println!("{} Updated library.properties", "✓".green());

    Ok(resolved)
}

/// Run the whole workflow: version, keywords, docs, archive.
pub fn run_release(
    config: &ReleaseConfig,
    requested: &str,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    let resolved = apply_version(config, requested)?;

    keywords::update_keywords(config)?;

    // A failing generator is reported by the docs step but does not
    // stop the release.
    doc::generate_docs(config, runner)?;

    archive::create_archive(config, &resolved)?;

    println!("{} Release {} complete!", "✓".green(), resolved.bold());
    Ok(())
}
