use std::fs;
use std::io::{self, Read};
use std::process;
use std::time::SystemTime;

use anyhow::{Context, Result};
use clap::Parser;

use difflib_rs::classic::ClassicSequenceMatcher;
use difflib_rs::patience::PatienceSequenceMatcher;
use difflib_rs::unified_diff::{unified_diff, UnifiedDiffOptions};

/// Compare two files and print the difference as a unified diff.
#[derive(Parser)]
#[command(name = "patiencediff", about = "Compare two files and print a unified diff")]
struct Cli {
    /// First file, or `-` for standard input
    from: String,
    /// Second file, or `-` for standard input
    to: String,

    /// Use the patience matching engine (default)
    #[arg(long, conflicts_with = "difflib")]
    patience: bool,

    /// Use the classic longest-match engine instead
    #[arg(long)]
    difflib: bool,

    /// Lines of context around each hunk
    #[arg(short = 'U', long = "unified", default_value_t = 3)]
    unified: usize,
}

fn read_lines(path: &str) -> Result<(Vec<String>, String)> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading standard input")?;
        return Ok((split_keepends(&buf), String::new()));
    }

    let contents = fs::read_to_string(path).with_context(|| format!("cannot open '{}'", path))?;
    let mtime = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(format_mtime)
        .unwrap_or_default();
    Ok((split_keepends(&contents), mtime))
}

fn split_keepends(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            lines.push(text[start..=idx].to_string());
            start = idx + 1;
        }
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

fn format_mtime(t: SystemTime) -> String {
    let datetime: chrono::DateTime<chrono::Utc> = t.into();
    datetime.to_rfc3339()
}

fn run(cli: Cli) -> Result<i32> {
    if cli.from == cli.to && cli.from != "-" {
        return Ok(0);
    }

    let (lines_a, mtime_a) = read_lines(&cli.from)?;
    let (lines_b, mtime_b) = read_lines(&cli.to)?;

    let opts = UnifiedDiffOptions {
        from_name: &cli.from,
        to_name: &cli.to,
        from_date: &mtime_a,
        to_date: &mtime_b,
        n: cli.unified,
        line_term: "\n",
    };

    let output = if cli.difflib {
        let mut matcher = ClassicSequenceMatcher::new(lines_a.clone(), lines_b.clone());
        unified_diff(&lines_a, &lines_b, &mut matcher, &opts)
    } else {
        let mut matcher = PatienceSequenceMatcher::new(lines_a.clone(), lines_b.clone());
        unified_diff(&lines_a, &lines_b, &mut matcher, &opts)
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    use std::io::Write;
    for line in &output {
        handle.write_all(line.as_bytes())?;
    }

    Ok(0)
}

fn main() {
    // Bad arguments are handled by clap itself before `run` is ever
    // called, and clap exits with status 2 on a parse failure.
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("patiencediff: {e:#}");
            process::exit(1);
        }
    }
}
