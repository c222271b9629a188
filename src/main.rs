mod args;
mod tabulate;

use clap::Parser;
use log::debug;

fn main() {
    let args = args::Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("args: {:?}", args);

    if let Err(e) = tabulate::run_topsis_file(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
