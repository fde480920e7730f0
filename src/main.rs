//! bootstrapper's main application entry point.
//! Handles command-line argument parsing and hands the run to the generator.

use bootstrapper::{
    cli::{get_args, Args},
    config::Config,
    constants::ROOTS_ENV,
    error::{default_error_handler, Error, Result},
    generator::Generator,
    logger::init_logger,
    runner::SystemRunner,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads candidate roots from the environment
/// 2. Resolves the project path
/// 3. Copies the blank template and substitutes placeholders
/// 4. Runs the external pipeline
fn run(args: Args) -> Result<()> {
    let roots = std::env::var(ROOTS_ENV).ok();
    let config = Config::from_args(args, roots.as_deref())?;
    let runner = SystemRunner::new(config.step_timeout);
    let generator = Generator::new(&config, &runner);

    if config.dry_run {
        let plan = generator.plan()?;
        let rendered =
            serde_json::to_string_pretty(&plan).map_err(|e| Error::ConfigError(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    let report = generator.run()?;
    if !report.pipeline.warnings.is_empty() {
        log::warn!(
            "{} tolerated step(s) failed: {}",
            report.pipeline.warnings.len(),
            report
                .pipeline
                .warnings
                .iter()
                .map(|w| w.step.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    println!(
        "Project generation completed successfully in {}.",
        report.plan.project.target_path.display()
    );
    Ok(())
}
