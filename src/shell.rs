//! Interactive session shell.
//!
//! The presentation layer: a small command loop over the session's file
//! list, console prompts standing in for the save dialogs, and a terminal
//! progress bar fed by the pipeline's callback. Merge errors are printed
//! and the session continues.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::Result;
use crate::merge::{MergeOutcome, MergePhase, MergePipeline, Prompter};
use crate::output::{ProgressBar, ProgressStyle};
use crate::session::{MoveDirection, Session};
use crate::utils;
use crate::validation::Validator;

const HELP: &str = "\
Commands:
  list                 Show the queued files in merge order
  add <file|glob>...   Queue files (jpg, jpeg, png, pdf)
  rm <n>...            Remove entries by number
  up <n>...            Move entries one step toward the front
  down <n>...          Move entries one step toward the back
  info                 Show a JSON report of the queue
  merge                Convert queued images and merge everything
  help                 Show this help
  quit                 Leave the session";

/// Run the interactive loop until `quit` or end of input.
pub fn run_shell(session: &mut Session) -> Result<()> {
    println!(
        "pdfstitch: {} file(s) queued. Type 'help' for commands.",
        session.files().len()
    );

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("pdfstitch> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "list" | "ls" => print_list(session),
            "add" => add_files(session, &args),
            "rm" | "remove" => mutate_by_index(session, &args, |s, idx| {
                s.files_mut().remove_at(&idx);
            }),
            "up" => mutate_by_index(session, &args, |s, idx| {
                s.files_mut().move_selection(&idx, MoveDirection::Up);
            }),
            "down" => mutate_by_index(session, &args, |s, idx| {
                s.files_mut().move_selection(&idx, MoveDirection::Down);
            }),
            "info" => print_info(session),
            "merge" => {
                // Errors are surfaced and the session keeps running, the
                // console analog of a modal error dialog.
                if let Err(err) = run_merge(session) {
                    eprintln!("Error: {err}");
                }
            }
            "help" | "?" => println!("{HELP}"),
            "quit" | "exit" | "q" => break,
            other => println!("Unknown command: {other}. Type 'help' for commands."),
        }
    }

    Ok(())
}

fn print_list(session: &Session) {
    if session.files().is_empty() {
        println!("No files queued.");
        return;
    }
    for (idx, entry) in session.files().iter().enumerate() {
        println!(
            "  {}. [{}] {}",
            idx + 1,
            match entry.kind() {
                crate::session::FileKind::Image => "img",
                crate::session::FileKind::Pdf => "pdf",
            },
            entry.path().display()
        );
    }
}

fn add_files(session: &mut Session, patterns: &[&str]) {
    if patterns.is_empty() {
        println!("Usage: add <file|glob>...");
        return;
    }

    let paths = match utils::collect_paths_for_patterns(patterns.iter().copied()) {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("Error: {err}");
            return;
        }
    };

    let mut added = 0;
    let mut skipped = 0;
    for path in paths {
        if session.files_mut().append(path) {
            added += 1;
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        println!("Queued {added} file(s), skipped {skipped} with unsupported extensions.");
    } else {
        println!("Queued {added} file(s).");
    }
}

/// Parse 1-based entry numbers and apply `op` over the 0-based indices.
fn mutate_by_index<F>(session: &mut Session, args: &[&str], op: F)
where
    F: FnOnce(&mut Session, Vec<usize>),
{
    if args.is_empty() {
        println!("Usage: <command> <n>...");
        return;
    }

    let mut indices = Vec::with_capacity(args.len());
    for arg in args {
        match arg.parse::<usize>() {
            Ok(n) if n >= 1 => indices.push(n - 1),
            _ => {
                println!("Not an entry number: {arg}");
                return;
            }
        }
    }

    op(session, indices);
    print_list(session);
}

fn print_info(session: &Session) {
    let report = Validator::new().validate_list(session.files());
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("Error: {err}"),
    }
}

fn run_merge(session: &Session) -> Result<()> {
    let pipeline = MergePipeline::with_dpi(session.config().dpi);
    let quiet = session.config().quiet;
    let mut prompter = ConsolePrompter;

    let mut bar: Option<(MergePhase, ProgressBar)> = None;
    let outcome = pipeline.merge(session.files(), &mut prompter, |phase, done, total| {
        if bar.as_ref().map(|(current, _)| *current) != Some(phase) {
            let mut next = if quiet {
                ProgressBar::disabled()
            } else {
                ProgressBar::new(total, ProgressStyle::Bar)
            };
            next.set_message(match phase {
                MergePhase::Converting => "Converting images",
                MergePhase::Appending => "Appending documents",
            });
            bar = Some((phase, next));
        }
        if let Some((_, ref mut pb)) = bar {
            pb.update(done);
            if done == total {
                pb.finish();
            }
        }
    })?;

    match outcome {
        MergeOutcome::Completed {
            output_path,
            statistics,
        } => {
            println!(
                "✓ Merged PDF saved: {} ({} file(s), {} page(s))",
                output_path.display(),
                statistics.files_merged,
                statistics.total_pages
            );
        }
        MergeOutcome::Cancelled => {
            println!("Merge cancelled; queued files unchanged.");
        }
    }

    Ok(())
}

/// Console prompts standing in for the filename and save dialogs.
struct ConsolePrompter;

impl ConsolePrompter {
    fn read_line(prompt: &str) -> Option<String> {
        print!("{prompt}");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None, // EOF cancels
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Prompter for ConsolePrompter {
    /// Empty input cancels, matching the dialog behavior where an empty
    /// filename string dismisses the merge.
    fn output_filename(&mut self) -> Option<String> {
        let line = Self::read_line("Output filename (empty to cancel): ")?;
        if line.is_empty() { None } else { Some(line) }
    }

    /// Accepts a full path, a directory (joined with the suggested name),
    /// an empty line (current directory), or `cancel`.
    fn save_location(&mut self, suggested: &str) -> Option<PathBuf> {
        let line = Self::read_line(&format!(
            "Save to [./{suggested}] (path, directory, or 'cancel'): "
        ))?;

        if line.eq_ignore_ascii_case("cancel") {
            return None;
        }
        if line.is_empty() {
            return Some(PathBuf::from(suggested));
        }

        let path = PathBuf::from(line);
        if path.is_dir() {
            Some(path.join(suggested))
        } else {
            Some(path)
        }
    }
}
