//! The fibo CLI tool

use clap::Parser;
use env_logger::fmt::Color;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

use fibo::{parse_index, DEFAULT_INDEX};

use std::io::{self, Write};
use std::process;

#[derive(Parser)]
#[command(name = "fibo", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Zero-based index of the Fibonacci term to print
    #[arg(default_value_t = DEFAULT_INDEX)]
    #[arg(allow_negative_numbers = true)]
    #[arg(value_parser = parse_index)]
    index: u64,
}

fn main() -> Result<(), io::Error> {
    let args = Cli::parse();

    let mut builder = Builder::new();
    builder
        .filter_level(args.log_level)
        .parse_default_env()
        // stdout only carries the computed term
        .target(Target::Stderr)
        .format(|buf, record| {
            let mut style = buf.style();

            match record.level() {
                Level::Error => {
                    style.set_color(Color::Red);
                }
                Level::Warn => {
                    style.set_color(Color::Yellow);
                }
                _ => {}
            }

            writeln!(buf, "{}", style.value(record.args()))
        })
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        Ok(())
    } else {
        run(args.index)
    }
}

#[allow(clippy::print_stderr)]
fn run(index: u64) -> Result<(), io::Error> {
    match fibo::compute(index) {
        Ok(value) => {
            log::debug!("F({index}) = {value}");
            writeln!(io::stdout().lock(), "{value}")
        }
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    }
}
