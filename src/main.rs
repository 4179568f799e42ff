use anyhow::Context;
use clap::Parser;

use carousel::cli::Cli;
use carousel::logging::init_tracing;
use carousel::timer::SystemScheduler;
use carousel::ui::app::App;
use carousel::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        log = %log_path.display(),
        slides = config.slides.len(),
        interval_ms = config.carousel.interval_ms,
        "starting carousel"
    );

    let settings = config.carousel.to_settings();
    let app = App::new(config.slides, settings, SystemScheduler::new())?;
    runtime::run(app).context("terminal UI failed")?;

    tracing::info!("carousel exited");
    Ok(())
}
