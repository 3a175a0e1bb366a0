use clap::Parser;
use std::time;
use svlink::{
    cli::{init_verbose, Cli, FULL_VERSION},
    commands::link,
    utils::util::{handle_error_and_exit, Result},
};

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit with 1 rather than clap's default of 2
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn runner() -> Result<()> {
    let cli = parse_cli();
    init_verbose(&cli);
    log::trace!("CLI options set: {:?}", cli);

    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), &**FULL_VERSION);

    let start_timer = time::Instant::now();
    link(cli.args)?;
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());

    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
