use std::{
    fs,
    io,
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use nscharp::{error::Error, interpreter::evaluator::core::Context, parse, tokenize};

/// nscharp runs `.ns` scripts: a small language with variables, `print`,
/// `input`, `if`/`else` and `while`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run.
    file: PathBuf,

    /// Print the token stream instead of running the script.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed statements instead of running the script.
    #[arg(long)]
    dump_ast: bool,

    /// Abort any `while` loop after this many iterations.
    #[arg(long, value_name = "N")]
    max_iterations: Option<u64>,

    /// Raise log verbosity; repeat for more (warn, info, debug, trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(verbosity(args.verbose))
                              .parse_default_env()
                              .init();

    let script = match fs::read_to_string(&args.file) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", args.file.display());
            return ExitCode::FAILURE;
        },
    };
    info!("loaded {} ({} bytes)", args.file.display(), script.len());

    match run(&args, &script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args, script: &str) -> Result<(), Error> {
    let tokens = tokenize(script)?;
    if args.dump_tokens {
        for token in &tokens {
            println!("{:>4}  {}", token.line, token.kind);
        }
        return Ok(());
    }

    let statements = parse(&tokens)?;
    if args.dump_ast {
        for statement in &statements {
            println!("{statement:#?}");
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let mut context = Context::new(&mut input, &mut output);
    if let Some(limit) = args.max_iterations {
        context = context.with_loop_limit(limit);
    }

    let end_line = tokens.last().map_or(1, |token| token.line);
    let result = context.run(&statements);
    // Flush what was printed before reporting a failure.
    let flushed = context.flush_output(end_line);

    result?;
    flushed?;
    Ok(())
}

const fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
