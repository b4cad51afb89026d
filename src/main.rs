use range_overlap::cli::{self, CommandLine};
use range_overlap::config::{init_logging, Config};
use range_overlap::output::render;
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let commands = CommandLine::parse_args();
    let cfg = commands.apply(Config::from_env()?);
    init_logging(&cfg.log_config)?;
    //
    log::info!("#Start main()");

    let verdict = cli::run(&commands, &cfg)?;
    print!("{}", render(&verdict));

    Ok(ExitCode::from(verdict.exit_code()))
}
