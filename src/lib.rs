//! # ardrel - Arduino Library Release Automation
//!
//! ardrel (invoked as `arl`) turns the chore of cutting a library release
//! into one command: bump the version, regenerate `keywords.txt`, run the
//! documentation generator, and pack a versioned ZIP.
//!
//! ## Features
//!
//! - **Version Bumping**: Validates `X.Y.Z` input or auto-increments the patch
//! - **Keyword Extraction**: Scrapes the library header for IDE highlighting
//! - **Doc Hook**: Runs any configured generator over the header
//! - **Clean Archives**: `.gitignore`-aware ZIP with a SHA-256 digest
//!
//! ## Quick Start
//!
//! ```bash
//! # From the library root
//! arl release 1.2.0
//!
//! # Or just bump the patch number
//! arl release not-sure
//! ```
//!
//! ## Module Organization
//!
//! - [`release`] - The four-step workflow driver
//! - [`config`] - Project configuration (`arl.toml` + conventions)
//! - [`keywords`] - `keywords.txt` extraction and rendering
//! - [`archive`] - Versioned ZIP packaging

/// Versioned ZIP packaging of the project tree.
pub mod archive;

/// Project configuration (`arl.toml` + library conventions).
pub mod config;

/// Documentation generator invocation.
pub mod doc;

/// Library metadata and release status reporting.
pub mod info;

/// `keywords.txt` extraction and rendering.
pub mod keywords;

/// Subprocess seam for external tools.
pub mod process;

/// `library.properties` reading and rewriting.
pub mod properties;

/// The four-step release workflow.
pub mod release;

/// Terminal UI utilities (tables, colors).
pub mod ui;

/// Version validation and bumping.
pub mod version;
