use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional overrides read from `arl.toml` in the project root.
#[derive(Deserialize, Debug, Default)]
pub struct ArlConfig {
    pub library: Option<LibrarySection>,
    pub docs: Option<DocsSection>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LibrarySection {
    pub name: Option<String>,
    pub header: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DocsSection {
    pub command: Option<Vec<String>>,
}

/// Everything the release steps need to know about one project.
///
/// Built once by [`ReleaseConfig::load`] and passed by reference into each
/// step; nothing below this layer touches `arl.toml` or guesses paths.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Project root. All other paths live underneath it.
    pub root: PathBuf,
    pub library_name: String,
    pub properties_path: PathBuf,
    pub keywords_path: PathBuf,
    /// Main library header, the input for keyword and doc extraction.
    pub header_path: PathBuf,
    /// Glob patterns in this file keep files out of the archive.
    pub exclude_file: PathBuf,
    pub doc_program: String,
    pub doc_args: Vec<String>,
    /// File names that never belong in an archive, e.g. the tool itself.
    pub never_archive: Vec<String>,
}

impl ReleaseConfig {
    /// Build the configuration for a project rooted at `root`.
    ///
    /// Reads optional overrides from `arl.toml`, then falls back to the
    /// Arduino library conventions: the name comes from
    /// `library.properties` or the directory, the header from a `.h` file
    /// matching the name.
    pub fn load(root: &Path) -> Result<Self> {
        let file_config = read_arl_toml(root)?;

        let properties_path = root.join("library.properties");

        let library_name = file_config
            .library
            .as_ref()
            .and_then(|l| l.name.clone())
            .or_else(|| properties_name(&properties_path))
            .unwrap_or_else(|| dir_name(root));

        let header_override = file_config.library.as_ref().and_then(|l| l.header.clone());
        let header_path = match header_override {
            Some(rel) => root.join(rel),
            None => find_header(root, &library_name)?,
        };

        let doc_command = file_config
            .docs
            .and_then(|d| d.command)
            .unwrap_or_else(|| vec!["python".to_string(), "generate_docs.py".to_string()]);
        let Some((doc_program, doc_args)) = doc_command.split_first() else {
            anyhow::bail!("[docs] command in arl.toml must not be empty");
        };

        Ok(Self {
            root: root.to_path_buf(),
            library_name,
            properties_path,
            keywords_path: root.join("keywords.txt"),
            header_path,
            exclude_file: root.join(".gitignore"),
            doc_program: doc_program.clone(),
            doc_args: doc_args.to_vec(),
            never_archive: tool_file_names(),
        })
    }

    /// Program and argument list for the documentation generator, with
    /// the header path appended as the final argument.
    pub fn doc_invocation(&self) -> (String, Vec<String>) {
        let mut args = self.doc_args.clone();
        args.push(self.header_path.to_string_lossy().into_owned());
        (self.doc_program.clone(), args)
    }
}

fn read_arl_toml(root: &Path) -> Result<ArlConfig> {
    let path = root.join("arl.toml");
    if !path.exists() {
        return Ok(ArlConfig::default());
    }
    let content =
        fs::read_to_string(&path).context("Failed to read arl.toml - check file permissions")?;
    toml::from_str(&content)
        .context("Failed to parse arl.toml - check for syntax errors (missing quotes, brackets)")
}

fn properties_name(path: &Path) -> Option<String> {
    let pairs = crate::properties::read_all(path).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value)
}

fn dir_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "library".to_string())
}

/// Find the library header.
///
/// Tries `<name>.h` in the project root, then in `src/`, then settles
/// for the first `.h` file in the root.
fn find_header(root: &Path, library_name: &str) -> Result<PathBuf> {
    let named = root.join(format!("{}.h", library_name));
    if named.exists() {
        return Ok(named);
    }

    let src_named = root.join("src").join(format!("{}.h", library_name));
    if src_named.exists() {
        return Ok(src_named);
    }

    for entry in fs::read_dir(root)
        .with_context(|| format!("Failed to read project directory {}", root.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "h") {
            return Ok(path);
        }
    }

    Err(anyhow::anyhow!(
        "No library header found. Create one or set [library] header in arl.toml."
    ))
}

fn tool_file_names() -> Vec<String> {
    let mut names = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(name) = exe.file_name()
    {
        names.push(name.to_string_lossy().into_owned());
    }
    names
}
