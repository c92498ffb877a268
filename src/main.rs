use anyhow::Result;
use clap::Parser;
use mit::areas::repository::{Repository, SessionOptions};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(
    name = "mit",
    version = "0.1.0",
    about = "A minimal local version-control tool",
    long_about = "mit tracks snapshots of a directory's files as immutable commits, \
    organizes them into named branches, and can reconstruct, compare, and merge \
    file states. It reads one command per line from standard input.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The path to the repository")]
    path: Option<String>,
    #[arg(
        long,
        help = "Also write checked-out files onto the working directory when switching branches"
    )]
    materialize: bool,
}

const BANNER: &str = "Enter one command per line:
  init | add <file> | commit -m <message> | log | branch <name> | checkout <name> | merge <name> | diff <id> <id> | exit";

enum SessionControl {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = match &cli.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?.to_string_lossy().to_string(),
    };

    let mut repository = Repository::new(
        &path,
        Box::new(std::io::stdout()),
        SessionOptions::new(cli.materialize),
    )?;

    writeln!(repository.writer(), "{}", BANNER)?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match dispatch(&mut repository, line.trim()) {
            Ok(SessionControl::Quit) => break,
            Ok(SessionControl::Continue) => {}
            Err(err) => writeln!(repository.writer(), "error: {err:#}")?,
        }
    }

    Ok(())
}

fn dispatch(repository: &mut Repository, line: &str) -> Result<SessionControl> {
    match line {
        "" => return Ok(SessionControl::Continue),
        "exit" => return Ok(SessionControl::Quit),
        "init" => repository.init()?,
        "log" => repository.log()?,
        _ => dispatch_with_arguments(repository, line)?,
    }

    Ok(SessionControl::Continue)
}

fn dispatch_with_arguments(repository: &mut Repository, line: &str) -> Result<()> {
    if let Some(rest) = line.strip_prefix("add ") {
        repository.add(rest.trim())?;
    } else if let Some(rest) = line.strip_prefix("commit") {
        match rest.trim_start().strip_prefix("-m") {
            Some(message) if !message.trim().is_empty() => {
                repository.commit(message.trim())?;
            }
            _ => writeln!(repository.writer(), "usage: commit -m <message>")?,
        }
    } else if let Some(rest) = line.strip_prefix("branch ") {
        repository.branch(rest.trim())?;
    } else if let Some(rest) = line.strip_prefix("checkout ") {
        repository.checkout(rest.trim())?;
    } else if let Some(rest) = line.strip_prefix("merge ") {
        repository.merge(rest.trim())?;
    } else if let Some(rest) = line.strip_prefix("diff ") {
        let ids: Vec<&str> = rest.split_whitespace().collect();
        match ids.as_slice() {
            [id_a, id_b] => repository.diff(id_a, id_b)?,
            _ => writeln!(repository.writer(), "usage: diff <id> <id>")?,
        }
    } else {
        writeln!(
            repository.writer(),
            "Unknown command, please select from the listed commands only"
        )?;
    }

    Ok(())
}
