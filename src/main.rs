use std::io;
use std::process::exit;

mod cli;
mod cmd;
mod error;

fn main() {
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();

    let code = cli::run(&args, &mut cmd::FlutterRunner, &mut io::stdout());
    exit(code);
}
