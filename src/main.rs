use std::{fs, process};

use clap::Parser;
use hydra::{
    interpreter::{
        evaluator::{core::Context, function::output::describe_scopes},
        parser::program::Program,
    },
    run_program,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// hydra is a small language for drawing constructions in the hyperbolic
/// plane.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells hydra to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last statement
    /// that has one.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Only parses the script and reports every error found, without running
    /// it.
    #[arg(long)]
    check: bool,

    /// Prints the parse tree of every statement before running the script.
    /// The script does not run if any line fails to parse.
    #[arg(long)]
    tree: bool,

    /// Prints all variables after the script ran.
    #[arg(long)]
    scopes: bool,

    contents: String,
}

/// Installs a subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=hydra=debug`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let mut context = Context::new();

    if args.check || args.tree {
        let (program, errors) = Program::parse_all(&script, context.registry());

        if args.tree {
            for statement in &program.statements {
                print!("{statement}");
            }
        }
        for error in &errors {
            eprintln!("{error}");
        }
        if args.check || !errors.is_empty() {
            process::exit(i32::from(!errors.is_empty()));
        }
    }

    let result = run_program(&script, &mut context);

    if args.scopes {
        print!("{}", describe_scopes(context.scopes()));
    }

    match result {
        Ok(Some(value)) if args.pipe_mode => println!("{value}"),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
