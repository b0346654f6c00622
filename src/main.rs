use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wolfram::automaton::Automaton;
use wolfram::config::Args;
use wolfram::preview::Preview;
use wolfram::render;
use wolfram::term;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log level \"{directive}\""))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = args.into_config().context("Invalid arguments")?;

    info!(
        rule = %config.rule,
        width = config.width,
        height = config.height,
        file = %config.file.display(),
        "generating"
    );

    let mut automaton = Automaton::new(config.rule, config.width as usize);
    let img = render::render(&mut automaton, config.height, &config.palette);

    render::save_png(&img, &config.file)
        .with_context(|| format!("Could not write {}", config.file.display()))?;

    info!(file = %config.file.display(), "done");

    if config.preview {
        let width = config.preview_width(term::columns());

        let mut automaton = Automaton::new(config.rule, config.width as usize);
        let mut preview = Preview::new(width, config.height as usize);
        preview.draw(&mut automaton);

        term::print_preview(&mut io::stdout(), preview.render())
            .context("Failed to print preview")?;
    }

    Ok(())
}
