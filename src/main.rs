use std::fs;

use clap::Parser;
use lispy::{Interpreter, ast::dump_program, compile, get_result};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// lispy is a small interactive evaluator for a Lisp-like expression
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lispy to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the value of the
    /// last line of a lispy script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the compiled node tree of every line before running it.
    #[arg(short = 't', long)]
    dump_tree: bool,

    /// Enables debug logging on standard error.
    #[arg(short, long)]
    verbose: bool,

    /// A script, or a path to one with `--file`. Starts the interactive
    /// prompt when omitted.
    contents: Option<String>,
}

/// Settings shared by the script runner and the prompt.
struct Config {
    pipe_mode: bool,
    dump_tree: bool,
    verbose:   bool,
}

impl Config {
    const fn from_args(args: &Args) -> Self {
        Self { pipe_mode: args.pipe_mode,
               dump_tree: args.dump_tree,
               verbose:   args.verbose, }
    }
}

fn init_logging(config: &Config) {
    let level = if config.verbose { "lispy=debug" } else { "lispy=warn" };
    let filter = if config.verbose {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn dump_script(script: &str) {
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        match compile(line) {
            Ok(program) => print!("{}", dump_program(&program)),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn repl(config: &Config) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut interpreter = Interpreter::new();

    println!("lispy v{}", env!("CARGO_PKG_VERSION"));

    loop {
        match editor.readline("=> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());

                if config.dump_tree {
                    dump_script(&line);
                }
                match interpreter.eval_line(&line) {
                    Ok(node) => println!("{node}"),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    debug!(depth = interpreter.environment().depth(), "session ended");
    Ok(())
}

fn main() {
    let args = Args::parse();
    let config = Config::from_args(&args);

    init_logging(&config);

    let Some(contents) = args.contents else {
        if let Err(e) = repl(&config) {
            eprintln!("Failed to run the interactive prompt: {e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    if config.dump_tree {
        dump_script(&script);
    }
    if let Err(e) = get_result(&script, config.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
