use clap::Parser;
use std::collections::BTreeMap;
use std::process::ExitCode;

use ferret::{
    filter_by_locale, derive_locale, snippet_for, Corpus, EntryKind, FileSource, IndexSource,
    SearchEngine,
};

mod cli;
use cli::{Cli, Commands};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            index,
            locale,
            limit,
            query,
        } => run_search(&index, &locale, limit, &query),
        Commands::Inspect { index } => run_inspect(&index),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_search(
    index: &str,
    locale: &str,
    limit: usize,
    query: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = FileSource::new(index).fetch()?;
    let corpus = Corpus::from_records(records, locale);
    let engine = SearchEngine::new(corpus);

    let results = filter_by_locale(engine.search(query), locale);
    if results.is_empty() {
        println!("no results for \"{}\" in locale {}", query, locale);
        return Ok(());
    }

    let color = atty::is(atty::Stream::Stdout);
    for (rank, result) in results.iter().take(limit).enumerate() {
        let kind = result.entry.kind.as_str();
        if color {
            println!(
                "{:>2}. {}{}{} {}({} · {:.2}){}",
                rank + 1,
                BOLD,
                result.entry.title,
                RESET,
                DIM,
                kind,
                result.score,
                RESET
            );
            println!("    {}{}{}", DIM, result.entry.path, RESET);
        } else {
            println!(
                "{:>2}. {} ({} · {:.2})",
                rank + 1,
                result.entry.title,
                kind,
                result.score
            );
            println!("    {}", result.entry.path);
        }

        let runs = snippet_for(result, query);
        if !runs.is_empty() {
            let mut line = String::from("    ");
            for run in &runs {
                if run.highlighted && color {
                    line.push_str(BOLD);
                    line.push_str(&run.text);
                    line.push_str(RESET);
                } else {
                    line.push_str(&run.text);
                }
            }
            println!("{}", line);
        }
    }
    println!(
        "\n{} of {} matches shown",
        results.len().min(limit),
        results.len()
    );
    Ok(())
}

fn run_inspect(index: &str) -> Result<(), Box<dyn std::error::Error>> {
    let records = FileSource::new(index).fetch()?;
    let total = records.len();

    let mut by_locale: BTreeMap<String, usize> = BTreeMap::new();
    let mut with_body = 0usize;
    let mut tag_count = 0usize;

    let corpus = Corpus::from_records(records, "en");
    for entry in corpus.entries() {
        if entry.kind != EntryKind::Post {
            continue;
        }
        let locale = derive_locale(&entry.path).unwrap_or("?").to_string();
        *by_locale.entry(locale).or_insert(0) += 1;
        if entry.body.is_some() {
            with_body += 1;
        }
        tag_count += entry.tags.len();
    }

    println!("entries:     {}", total);
    println!("with body:   {}", with_body);
    println!("total tags:  {}", tag_count);
    println!("per locale:");
    for (locale, count) in &by_locale {
        println!("  {:<6} {}", locale, count);
    }
    Ok(())
}
