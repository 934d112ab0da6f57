use crate::cli::run;

pub mod cli;
mod config;
pub mod fetch;
pub mod metadata;
pub mod tag;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("fatal: {err:#}");
        std::process::exit(1);
    }
}
