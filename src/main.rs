use std::{
    fs::read_to_string,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use scriptparse::{lexer::lexer::tokenize, parser::parser::parse, render_error};

/// Parse a script and print its syntax tree.
#[derive(ClapParser, Debug)]
#[command(name = "scriptparse", version)]
struct Args {
    /// Script to parse, or `-` to read from stdin
    file: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Only check that the script parses
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = Args::parse();

    let (file_name, source) = match read_source(&args.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source, Some(&file_name)) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(elapsed = ?start.elapsed(), "tokenized");

    if args.tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(elapsed = ?parse_start.elapsed(), "parsed");

    if !args.quiet {
        println!("{:#?}", ast);
    }

    ExitCode::SUCCESS
}

fn read_source(path: &Path) -> io::Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok((String::from("<stdin>"), source));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok((file_name, read_to_string(path)?))
}
