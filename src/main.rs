mod errors;
mod ordering;
mod permissions;
mod renderer;
mod scanner;
mod types;

use clap::Parser;
use colored::Colorize;
use errors::ListError;
use std::io;
use types::Options;

/// List the entries of the current directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Use a long listing format
    #[arg(short = 'l', long = "long")]
    long_format: bool,

    /// Sort by file size, largest first
    #[arg(short = 'S', long = "sort-size")]
    sort_by_size: bool,

    /// Reverse order while sorting
    #[arg(short = 'r', long)]
    reverse: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long)]
    recursive: bool,

    /// Do not ignore entries starting with .
    #[arg(short = 'a', long = "all")]
    show_hidden: bool,
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        Options {
            long_format: args.long_format,
            sort_by_size: args.sort_by_size,
            reverse: args.reverse,
            recursive: args.recursive,
            show_hidden: args.show_hidden,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = Options::from(&args);
    log::debug!("{options:?}");

    if let Err(e) = run(&options) {
        log::debug!("{e:?}");
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), ListError> {
    let dir = scanner::current_dir()?;

    let mut entries = scanner::collect_entries(&dir, options)?;
    ordering::order_entries(&mut entries, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer::render(&mut out, &entries, &dir, options).map_err(ListError::Output)
}
