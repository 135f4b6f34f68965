//! Keyword extraction for Arduino IDE syntax highlighting.
//!
//! This module regenerates `keywords.txt` by scanning the library header
//! line by line. There is deliberately no real C parsing here: each line is
//! tested against three patterns in priority order (function declaration,
//! `#define` constant, `typedef`), exactly one of which may claim it.
//! Multi-line declarations are invisible to the scan.
//!
//! ## Example Output
//!
//! ```text
//! #######################################
//! # Datatypes (KEYWORD1)
//! #######################################
//!
//! LedPanel                KEYWORD1
//! ```

use anyhow::{Context, Result};
use colored::*;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Highlighting category understood by the Arduino IDE coloring map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Datatype,
    Function,
    Constant,
}

impl Category {
    /// The tag the editor expects after each keyword.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Datatype => "KEYWORD1",
            Category::Function => "KEYWORD2",
            Category::Constant => "LITERAL1",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Category::Datatype => "Datatypes (KEYWORD1)",
            Category::Function => "Methods and Functions (KEYWORD2)",
            Category::Constant => "Constants (LITERAL1)",
        }
    }
}

/// Keywords collected from one header scan, grouped by category.
///
/// Entries keep header scan order and are not de-duplicated; repeated
/// declarations yield repeated lines in the output.
#[derive(Debug, Default, Clone)]
pub struct KeywordSet {
    pub datatypes: Vec<String>,
    pub functions: Vec<String>,
    pub constants: Vec<String>,
}

const BANNER: &str = "#######################################";

// Column where the category tag starts; short names are padded up to it.
const TAG_COLUMN: usize = 24;

/// Scan a header file into a [`KeywordSet`].
pub fn scan_header(path: &Path, library_name: &str) -> Result<KeywordSet> {
    let header = fs::read_to_string(path)
        .with_context(|| format!("Failed to read header {}", path.display()))?;
    Ok(scan_text(&header, library_name))
}

/// Scan header text into a [`KeywordSet`].
///
/// The library's own name is always seeded as the first datatype so the
/// class gets highlighted even though its declaration line (`class X {`)
/// matches none of the patterns.
pub fn scan_text(header: &str, library_name: &str) -> KeywordSet {
    let function_re = Regex::new(r"^\s*\w+\s+\w+\s*\([^)]*\)\s*;").unwrap();
    let constant_re = Regex::new(r"^\s*#define\s+\w+\s+\S+").unwrap();
    let typedef_re = Regex::new(r"^\s*typedef\s+.*\s*;").unwrap();

    let mut set = KeywordSet::default();
    set.datatypes.push(library_name.to_string());

    for line in header.lines() {
        if function_re.is_match(line) {
            // Second whitespace token, with everything from the first '(' on
            // stripped: "void writeHex(int8_t v);" -> "writeHex".
            if let Some(name) = second_token(line).and_then(|t| t.split('(').next()) {
                set.functions.push(name.to_string());
            }
        } else if constant_re.is_match(line) {
            if let Some(name) = second_token(line) {
                set.constants.push(name.to_string());
            }
        } else if typedef_re.is_match(line) {
            if let Some(name) = second_token(line) {
                set.datatypes.push(name.to_string());
            }
        }
    }

    set
}

fn second_token(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)
}

/// Render a keyword set into the full `keywords.txt` contents.
pub fn render(set: &KeywordSet, library_name: &str) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("# Syntax Coloring Map For {} #\n", library_name));
    out.push_str(BANNER);
    out.push_str("\n\n");

    render_section(&mut out, Category::Datatype, &set.datatypes);
    out.push('\n');
    render_section(&mut out, Category::Function, &set.functions);
    out.push('\n');
    render_section(&mut out, Category::Constant, &set.constants);

    out
}

fn render_section(out: &mut String, category: Category, names: &[String]) {
    out.push_str(BANNER);
    out.push('\n');
    out.push_str("# ");
    out.push_str(category.heading());
    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\n\n");

    for name in names {
        out.push_str(&format!("{:<width$}{}\n", name, category.tag(), width = TAG_COLUMN));
    }
}

/// Scan the configured header and overwrite the keywords file.
pub fn update_keywords(config: &crate::config::ReleaseConfig) -> Result<KeywordSet> {
    let set = scan_header(&config.header_path, &config.library_name)?;
    let rendered = render(&set, &config.library_name);

    fs::write(&config.keywords_path, rendered)
        .with_context(|| format!("Failed to write {}", config.keywords_path.display()))?;

    println!(
        "{} Updated keywords.txt ({} datatypes, {} functions, {} constants)",
        "✓".green(),
        set.datatypes.len(),
        set.functions.len(),
        set.constants.len()
    );
    Ok(set)
}
