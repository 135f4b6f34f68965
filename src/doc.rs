use anyhow::Result;
use colored::*;

use crate::config::ReleaseConfig;
use crate::process::ProcessRunner;

fn run_generator(config: &ReleaseConfig, runner: &dyn ProcessRunner) -> Result<i32> {
    let (program, args) = config.doc_invocation();

    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner())
            .tick_chars("◜◠◝◞◡◟"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message(format!("Running {}...", program));

    let result = runner.run(&program, &args);
    pb.finish_and_clear();
    result
}

/// Invoke the documentation generator on the library header.
///
/// Returns whether the generator exited cleanly. A non-zero exit is
/// reported on the console and left to the caller; a generator that
/// cannot be spawned at all is a hard error.
pub fn generate_docs(config: &ReleaseConfig, runner: &dyn ProcessRunner) -> Result<bool> {
    println!("{} Generating documentation...", "📚".magenta());

    let code = run_generator(config, runner)?;

    if code == 0 {
        println!("{} Documentation generated.", "✓".green());
        Ok(true)
    } else {
        println!(
            "{} Documentation generator failed (exit code {}).",
            "x".red(),
            code
        );
        Ok(false)
    }
}
