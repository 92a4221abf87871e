// rusim: line-by-line interpreter for a small Rust-flavored scripting language

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use rusim::interpreter::builtins::Registry;
use rusim::interpreter::engine::Evaluator;
use rusim::parser::parse::collect_signatures;
use rusim::ui::App;

/// Environment variable holding the log filter for non-TUI modes
const LOG_ENV: &str = "RUSIM_LOG";

/// rusim evaluates `let` bindings and built-in calls one line at a time and
/// shows the resulting execution trace.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to evaluate
    file: Option<PathBuf>,

    /// Evaluate CODE instead of reading a file
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    eval: Option<String>,

    /// Print the trace as text instead of starting the TUI
    #[arg(long)]
    plain: bool,

    /// Print the trace as JSON lines instead of starting the TUI
    #[arg(long, conflicts_with = "plain")]
    json: bool,

    /// List the built-in functions with their arity and exit
    #[arg(long)]
    functions: bool,

    /// List the `fn` signatures found in the script and exit
    #[arg(long)]
    signatures: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let registry = Arc::new(Registry::new());

    if args.functions {
        for name in registry.names() {
            let arity = registry.arity(name).unwrap_or_default();
            println!("{:<14} {}", name, arity);
        }
        return Ok(());
    }

    let source = match (&args.eval, &args.file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: cannot read '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("Error: No input provided");
            eprintln!();
            eprintln!("Usage: rusim <FILE> | rusim -e <CODE>");
            eprintln!();
            eprintln!("Try the bundled tour:");
            eprintln!("  rusim demos/tour.rsim");
            std::process::exit(1);
        }
    };

    if args.signatures {
        init_logging();
        for signature in collect_signatures(&source) {
            if args.json {
                println!("{}", serde_json::to_string(&signature)?);
            } else {
                let params: Vec<String> = signature
                    .params
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.param_type))
                    .collect();
                println!(
                    "{}fn {}({}) -> {}",
                    if signature.is_async { "async " } else { "" },
                    signature.name,
                    params.join(", "),
                    signature.return_type
                );
            }
        }
        return Ok(());
    }

    if args.plain || args.json {
        init_logging();

        // Plain mode shows program output as it happens; JSON keeps stdout clean
        let mut evaluator = Evaluator::with_registry(registry);
        if args.plain {
            evaluator = evaluator.echoing();
        }

        // Line by line so echoed output and records interleave in order
        let mut failed = false;
        for (index, text) in source.lines().enumerate() {
            for record in evaluator.run_line(index + 1, text) {
                if args.json {
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    println!("{}", record);
                }
                failed |= !record.success();
            }
        }

        if failed {
            std::process::exit(2);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Evaluator::with_registry(registry), source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
