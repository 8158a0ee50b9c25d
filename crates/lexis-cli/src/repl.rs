//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands::analyze::analyze_all;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lexis_analyzer::AnalysisOrchestrator;
use lexis_nlp::NlpCapability;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;
use std::sync::Arc;

/// Run the interactive REPL.
pub async fn run_repl(
    config: &mut Config,
    capability: Arc<NlpCapability>,
    formatter: &mut Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info(
            "Lexis REPL - Enter a .pdf or .docx path, 'help' for commands, 'exit' to quit"
        )
    );
    println!();

    // Initialize readline editor
    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut orchestrator = Arc::new(AnalysisOrchestrator::new(
        Arc::clone(&capability),
        config.analyzer.clone(),
    )?);

    loop {
        match editor.readline("lexis> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    println!("{}", formatter.warning("Path cannot be empty. Please try again."));
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Chapters(max_chapters)) => {
                        match max_chapters {
                            Some(n) => {
                                config.analyzer.max_chapters = n;
                                config.analyzer.chaptered = true;
                            }
                            None => config.analyzer.chaptered = false,
                        }
                        orchestrator = Arc::new(AnalysisOrchestrator::new(
                            Arc::clone(&capability),
                            config.analyzer.clone(),
                        )?);
                        println!("{}", formatter.success(&chapters_message(config)));
                    }
                    Ok(ReplCommand::Format(format)) => {
                        formatter.set_format(format);
                        println!("{}", formatter.success(&format!("Output format: {:?}", format)));
                    }
                    Ok(ReplCommand::Analyze(path)) => {
                        analyze_one(&orchestrator, path, formatter).await?;
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// Analyze one document and print its reports.
///
/// Document errors are shown and the loop goes on so the user can enter
/// another path.
async fn analyze_one(
    orchestrator: &Arc<AnalysisOrchestrator<NlpCapability>>,
    path: String,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.info("Analyzing document... Please wait."));

    let outcomes = analyze_all(Arc::clone(orchestrator), vec![path]).await?;
    for (path, outcome) in outcomes {
        match outcome {
            Ok(analysis) => println!("{}", formatter.format_analysis(&analysis)?),
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                eprintln!("{}", formatter.error(&format!("Document processing failed: {}", e)));
                eprintln!("{}", formatter.info(&format!("Please check '{}' and try again.", path)));
            }
        }
    }

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    /// `None` turns chapters off
    Chapters(Option<usize>),
    Format(OutputFormat),
    Analyze(String),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "chapters" => parse_chapters_command(&parts[1..]),
        "format" => parse_format_command(&parts[1..]),
        "analyze" => {
            let rest = line["analyze".len()..].trim();
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: analyze <path>".to_string()));
            }
            Ok(ReplCommand::Analyze(clean_path(rest)))
        }
        _ => Ok(ReplCommand::Analyze(clean_path(line))),
    }
}

fn parse_chapters_command(args: &[&str]) -> Result<ReplCommand> {
    let usage = || CliError::InvalidInput("Usage: chapters <n>|off".to_string());

    match args.first() {
        Some(&"off") => Ok(ReplCommand::Chapters(None)),
        Some(n) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Ok(ReplCommand::Chapters(Some(n))),
            _ => Err(usage()),
        },
        None => Err(usage()),
    }
}

fn parse_format_command(args: &[&str]) -> Result<ReplCommand> {
    args.first()
        .and_then(|name| OutputFormat::parse(name))
        .map(ReplCommand::Format)
        .ok_or_else(|| CliError::InvalidInput("Usage: format markdown|json|table".to_string()))
}

/// Strip surrounding whitespace and quotes, as pasted paths often carry them.
fn clean_path(raw: &str) -> String {
    raw.trim().trim_matches(|c| c == '\'' || c == '"').to_string()
}

fn chapters_message(config: &Config) -> String {
    if config.analyzer.chaptered {
        format!("Chapters: up to {}", config.analyzer.max_chapters)
    } else {
        "Chapters: off".to_string()
    }
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to initialize editor: {}", e),
    ))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let lexis_dir = home.join(".lexis");
    std::fs::create_dir_all(&lexis_dir)?;
    Ok(lexis_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <path>                     - Analyze a .pdf or .docx file");
    println!("  analyze <path>             - Same as above");
    println!("  chapters <n>|off           - Set the chapter bound or disable chapters");
    println!("  format markdown|json|table - Change the output format");
    println!("  help, ?                    - Show this help");
    println!("  exit, quit, q              - Exit REPL");
    println!();
}
