//! # arl CLI Entry Point
//!
//! This is the main executable for the `arl` command-line tool.
//! It parses CLI arguments using clap and routes commands to the appropriate handlers.
//!
//! ## Command Structure
//!
//! - **Release**: `release` runs the whole workflow
//! - **Steps**: `version`, `keywords`, `docs`, `package` run one stage each
//! - **Inspect**: `info` shows library metadata and release file status

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use inquire::Text;

use ardrel::archive;
use ardrel::config::ReleaseConfig;
use ardrel::doc;
use ardrel::info;
use ardrel::keywords;
use ardrel::process::SystemRunner;
use ardrel::properties;
use ardrel::release;
use ardrel::ui;
use ardrel::version;

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
    fn SetConsoleCP(wCodePageID: u32) -> i32;
}

#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
        SetConsoleCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

#[derive(Parser)]
#[command(name = "arl")]
#[command(about = "Release automation for Arduino libraries", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full release workflow: version, keywords, docs, archive
    Release {
        /// New version number (prompted interactively when omitted)
        // Named to avoid colliding with the `--version` flag that
        // `propagate_version` adds under the arg id `version`.
        #[arg(value_name = "VERSION")]
        new_version: Option<String>,
    },
    /// Set or bump the version in library.properties
    Version {
        /// New version number (prompted interactively when omitted)
        #[arg(value_name = "VERSION")]
        new_version: Option<String>,
    },
    /// Regenerate keywords.txt from the library header
    Keywords,
    /// Run the documentation generator
    Docs,
    /// Build the versioned distribution archive
    Package,
    /// Show library metadata and release file status
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completion {
        /// Target shell (bash, zsh, fish, powershell, elvish)
        shell: Shell,
    },
}

fn main() -> Result<()> {
    enable_windows_utf8_console();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Release { new_version }) => {
            let config = load_config()?;
            let requested = requested_version(&config, new_version)?;
            release::run_release(&config, &requested, &SystemRunner)
        }

        Some(Commands::Version { new_version }) => {
            let config = load_config()?;
            let requested = requested_version(&config, new_version)?;
            release::apply_version(&config, &requested)?;
            Ok(())
        }

        Some(Commands::Keywords) => {
            let config = load_config()?;
            keywords::update_keywords(&config)?;
            Ok(())
        }

        Some(Commands::Docs) => {
            let config = load_config()?;
            doc::generate_docs(&config, &SystemRunner)?;
            Ok(())
        }

        Some(Commands::Package) => {
            let config = load_config()?;
            let current = properties::read_version(&config.properties_path)?
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "No version in library.properties. Run 'arl version' first."
                    )
                })?;
            archive::create_archive(&config, &current)?;
            Ok(())
        }

        Some(Commands::Info { json }) => {
            let config = load_config()?;
            info::print_info(&config, *json)
        }

        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }

        None => {
            print_splash();
            Ok(())
        }
    }
}

fn load_config() -> Result<ReleaseConfig> {
    let root = std::env::current_dir()?;
    ReleaseConfig::load(&root)
}

/// Take the version from the CLI, or ask for it. The prompt suggests the
/// current version with the patch number bumped.
fn requested_version(config: &ReleaseConfig, arg: &Option<String>) -> Result<String> {
    if let Some(requested) = arg {
        return Ok(requested.clone());
    }

    let suggestion = properties::read_version(&config.properties_path)?
        .and_then(|v| version::increment_patch(&v).ok());

    let mut prompt = Text::new("New version number?");
    if let Some(suggestion) = &suggestion {
        prompt = prompt.with_default(suggestion);
    }
    Ok(prompt.prompt()?)
}

fn print_splash() {
    println!();
    println!("   {}", " █████  ██████  ██     ".cyan());
    println!("   {}", "██   ██ ██   ██ ██     ".cyan());
    println!("   {}", "███████ ██████  ██     ".cyan());
    println!("   {}", "██   ██ ██   ██ ██     ".cyan());
    println!("   {}", "██   ██ ██   ██ ███████".cyan());
    println!();
    println!(
        "   {}",
        "Release Automation for Arduino Libraries".dimmed().italic()
    );
    println!("   {}", format!("v{}", env!("CARGO_PKG_VERSION")).green());
    println!();

    // Command Dashboard
    let mut table = ui::Table::new(&["Category", "Commands"]);

    table.add_row(vec![
        "Release".bold().green().to_string(),
        "release".cyan().to_string(),
    ]);
    table.add_row(vec![
        "Steps".bold().yellow().to_string(),
        format!(
            "{}, {}, {}, {}",
            "version".cyan(),
            "keywords".cyan(),
            "docs".cyan(),
            "package".cyan()
        ),
    ]);
    table.add_row(vec![
        "Inspect".bold().blue().to_string(),
        format!("{}, {}", "info".cyan(), "completion".cyan()),
    ]);

    table.print();
    println!();
    println!("   Run {} for detailed usage.", "arl --help".white().bold());
    println!();
}
