//! Brewin CLI

use brewin::error::report_error;
use brewin::interp::DEFAULT_MAX_CALL_DEPTH;
use brewin::{load_program, HostIo, Interpreter, InterpreterConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "brewin", version, about = "Brewin - tree-walking evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a program given as a JSON-encoded AST
    Run {
        /// Program file (JSON AST)
        file: PathBuf,
        /// Maximum number of nested function calls
        #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
        max_call_depth: usize,
        /// Log every executed statement to stderr
        #[arg(long)]
        trace: bool,
    },
    /// Decode a program and dump its AST (debug)
    Dump {
        /// Program file (JSON AST)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let (file, result) = match cli.command {
        Command::Run {
            file,
            max_call_depth,
            trace,
        } => {
            init_tracing(trace);
            let config = InterpreterConfig::default().with_max_call_depth(max_call_depth);
            let result = run_file(&file, config);
            (file, result)
        }
        Command::Dump { file } => {
            init_tracing(false);
            let result = dump_file(&file);
            (file, result)
        }
    };

    if let Err(e) = result {
        report_error(&file.display().to_string(), &e);
        std::process::exit(1);
    }
}

/// Install a stderr subscriber. `RUST_LOG` selects what is shown; `--trace`
/// turns on statement-level tracing for the interpreter.
fn init_tracing(trace: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if trace {
        EnvFilter::new("brewin=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn run_file(path: &Path, config: InterpreterConfig) -> brewin::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let program = load_program(&source)?;

    let mut interpreter = Interpreter::with_config(HostIo::console(), config);
    let value = interpreter.run(&program)?;
    tracing::debug!(%value, "main returned");
    Ok(())
}

fn dump_file(path: &Path) -> brewin::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let program = load_program(&source)?;

    println!("{}", serde_json::to_string_pretty(&program)?);
    Ok(())
}
