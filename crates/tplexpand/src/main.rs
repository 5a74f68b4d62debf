mod cli;
mod expand;

use clap::Parser;
use cli::Cli;
use tplexpand_core::ExpandError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _cli = Cli::parse();

    if let Err(e) = expand::run() {
        match e.downcast_ref::<ExpandError>() {
            // Already in `#<line> <message>` form
            Some(err @ ExpandError::Protocol { .. }) => eprintln!("{}", err),
            _ => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}
