use clap::Parser;
use gitstate::{LOG_FILE_NAME, Res, cli, config, error::Error};
use log::LevelFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Res<()> {
    let args = cli::Args::parse();

    if args.log {
        simple_logging::log_to_file(LOG_FILE_NAME, LevelFilter::Debug)
            .map_err(Error::OpenLogFile)?;
    }

    log::debug!("Initializing config");
    let config = config::init_config(args.config.clone())?;

    print!("{}", gitstate::run(&args, &config)?);
    Ok(())
}
