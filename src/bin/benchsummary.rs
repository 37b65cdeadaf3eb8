use std::{env, io, process};

use benchsummary::{
    SummaryConfig,
    cli::{CliAction, CommandLineConfig},
    run_report,
};
use log::debug;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(CliAction::Help) => {
            println!("{}", CommandLineConfig::help());
            return;
        }
        Ok(CliAction::Summarize(cfg)) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", CommandLineConfig::help());
            process::exit(2);
        }
    };

    debug!("summarizing {}", config.input.display());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_report(&config.input, SummaryConfig::default(), &mut out) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
