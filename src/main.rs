//! Command-line interface for tovian-gloss
//!
//! Usage:
//!   tovian [OPTIONS] <COMMAND> [TEXT]
//!   echo "tovi-nata" | tovian gloss
//!
//! The lexicon comes from `--lexicon`, then `TOVIAN_LEXICON`, then the
//! cached `dictionary.csv`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tovian_gloss::search::{combined_documents, parse_manifest, DocumentKind};
use tovian_gloss::source::{load_lexicon, resolve_source};
use tovian_gloss::{CalendarTables, Engine, FuzzySearch, LexicalEntry, SubstringSearch};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "tovian", version, about = "Gloss Tovian text and draft Tovian translations")]
struct Args {
    /// Lexicon CSV path or http(s) URL
    #[clap(short, long, global = true)]
    lexicon: Option<String>,

    /// Output as JSON
    #[clap(short, long, global = true)]
    json: bool,

    /// Log lookups and rule decisions to stderr
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split Tovian text into word tokens
    Tokenize { text: Option<String> },

    /// Gloss Tovian text token by token
    Gloss { text: Option<String> },

    /// Draft a Tovian translation of an English sentence
    Translate { text: Option<String> },

    /// Search the lexicon and guide titles
    Search {
        query: String,

        /// Guide manifest JSON to include guide pages
        #[clap(short, long)]
        manifest: Option<PathBuf>,

        /// Maximum number of results
        #[clap(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Print the numbers and calendar tables
    Tables,

    /// Show the word of the day
    Today {
        /// Date as YYYY-MM-DD (defaults to today)
        #[clap(short, long)]
        date: Option<NaiveDate>,
    },

    /// Download a lexicon CSV into the cache
    #[cfg(feature = "download")]
    Download { url: String },
}

/// Text from the argument, or all of stdin
fn input_text(text: Option<String>) -> Result<String> {
    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    if text.trim().is_empty() {
        bail!("no input text provided");
    }
    Ok(text)
}

fn load_engine(lexicon: Option<&str>) -> Result<Engine> {
    let source = resolve_source(lexicon);
    let lexicon =
        load_lexicon(&source).with_context(|| format!("failed to load lexicon from '{}'", source))?;
    Ok(Engine::new(lexicon))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_entries(title: &str, entries: &[LexicalEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("# {}", title);
    for e in entries {
        println!("{}\t{}\t{}", e.english, e.tovian, e.ipa);
    }
    println!();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match args.command {
        Command::Tokenize { text } => {
            let text = input_text(text)?;
            let tokens = tovian_gloss::tokenize_tovian(&text);
            if args.json {
                print_json(&tokens)?;
            } else {
                for token in &tokens {
                    println!("{}\t{}\t{}", token.text, token.start, token.len);
                }
            }
        }
        Command::Gloss { text } => {
            let text = input_text(text)?;
            let engine = load_engine(args.lexicon.as_deref())?;
            let rows = engine.gloss_text(&text);
            if args.json {
                print_json(&rows)?;
            } else {
                for row in &rows {
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        row.token,
                        row.segment_display(),
                        row.english_gloss,
                        row.ipa,
                        row.roots
                    );
                }
            }
        }
        Command::Translate { text } => {
            let text = input_text(text)?;
            let engine = load_engine(args.lexicon.as_deref())?;
            let translation = engine.translate(&text);
            if args.json {
                print_json(&translation)?;
            } else {
                println!("{}", translation.tovian);
                println!("{}", translation.romanization);
                println!("{}", translation.ipa);
            }
        }
        Command::Search {
            query,
            manifest,
            limit,
        } => {
            let engine = load_engine(args.lexicon.as_deref())?;
            let pages = match manifest {
                Some(path) => {
                    let json = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read manifest '{}'", path.display()))?;
                    parse_manifest(&json)?
                }
                None => Vec::new(),
            };
            let documents = combined_documents(engine.lexicon(), &pages);
            let hits = SubstringSearch::new(&documents).search(&query);
            let hits: Vec<_> = hits.into_iter().take(limit).collect();

            if args.json {
                let found: Vec<_> = hits.iter().map(|h| &documents[h.document]).collect();
                print_json(&found)?;
            } else {
                for hit in &hits {
                    let doc = &documents[hit.document];
                    match doc.kind {
                        DocumentKind::Vocab => {
                            if let Some(e) = engine.lexicon().get(doc.index) {
                                println!("vocab\t{}\t{}\t{}", e.english, e.tovian, e.ipa);
                            }
                        }
                        DocumentKind::Guide => {
                            let page = &pages[doc.index];
                            println!("guide\t{}\t{}", page.title, page.path);
                        }
                    }
                }
            }
        }
        Command::Tables => {
            let engine = load_engine(args.lexicon.as_deref())?;
            let tables: CalendarTables = engine.calendar();
            if args.json {
                print_json(&tables)?;
            } else {
                print_entries("Numbers", &tables.numbers);
                print_entries("Ordinals", &tables.ordinals);
                print_entries("Months", &tables.months);
                print_entries("Dates", &tables.dates);
            }
        }
        Command::Today { date } => {
            let engine = load_engine(args.lexicon.as_deref())?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let Some(today) = engine.word_of_the_day(date) else {
                bail!("lexicon has no entries");
            };
            if args.json {
                print_json(&today)?;
            } else {
                let e = &today.entry;
                println!("{}\t{}\t{}\t{}", date, e.english, e.tovian, e.ipa);
                if let Some(d) = &today.named_date {
                    println!("{}\t{}", d.english, d.tovian);
                }
            }
        }
        #[cfg(feature = "download")]
        Command::Download { url } => {
            let path = tovian_gloss::source::download_lexicon(&url, None)
                .with_context(|| format!("failed to download lexicon from '{}'", url))?;
            eprintln!("Saved lexicon to {}", path.display());
        }
    }

    Ok(())
}
