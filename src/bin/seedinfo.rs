//! Command-line front end: extract product records from saved pages and
//! list crawl seeds.
//!
//! Records are written as JSON Lines, one object per page, in the order the
//! pages were given. Log output goes to stderr and is controlled by
//! `RUST_LOG` (default `warn`).

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use seedinfo::{extract_bytes_with_options, url_utils, Options, SeedList};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seedinfo", version, about = "Extract product attributes from seed catalogue pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract one record per saved HTML page.
    Extract {
        /// URL the pages were fetched from; relative image links resolve against it.
        #[arg(long)]
        base_url: Option<String>,

        /// JSON options file (selectors, base_url).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write records here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Saved pages; `-` reads one page from stdin.
        #[arg(required = true)]
        pages: Vec<PathBuf>,
    },

    /// Print the crawl's seed URLs, one per line.
    Seeds {
        /// JSON seed list; defaults to the built-in list.
        #[arg(long)]
        seeds: Option<PathBuf>,
    },
}

fn main() -> seedinfo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Extract {
            base_url,
            config,
            output,
            pages,
        } => {
            let mut options = match config {
                Some(path) => Options::from_path(path)?,
                None => Options::default(),
            };
            if let Some(base_url) = base_url {
                options.base_url = Some(url_utils::parse_page_url(&base_url)?);
            }

            let sink: Box<dyn Write> = match output {
                Some(path) => Box::new(fs::File::create(path)?),
                None => Box::new(io::stdout().lock()),
            };
            extract_pages(&pages, &options, BufWriter::new(sink))
        }
        Command::Seeds { seeds } => {
            let seeds = match seeds {
                Some(path) => SeedList::from_path(path)?,
                None => SeedList::default(),
            };
            let mut out = BufWriter::new(io::stdout().lock());
            for url in seeds.urls() {
                writeln!(out, "{url}")?;
            }
            out.flush()?;
            Ok(())
        }
    }
}

fn extract_pages(pages: &[PathBuf], options: &Options, mut out: impl Write) -> seedinfo::Result<()> {
    let mut written = 0usize;

    for page in pages {
        let bytes = match read_page(page) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(page = %page.display(), error = %err, "failed to read page; skipping");
                continue;
            }
        };

        let record = extract_bytes_with_options(&bytes, options);
        if record.is_empty() {
            warn!(page = %page.display(), "no product attributes found");
        }

        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
        written += 1;
    }

    out.flush()?;
    info!(pages = pages.len(), records = written, "extraction finished");
    Ok(())
}

fn read_page(page: &Path) -> io::Result<Vec<u8>> {
    if page.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        fs::read(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedinfo::ProductRecord;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/deep_purple_onion.html");

    #[test]
    fn unreadable_page_skipped_and_rest_written_as_json_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pages = vec![dir.path().join("missing.html"), PathBuf::from(FIXTURE)];
        let options = Options::for_page("https://www.johnnyseeds.com/vegetables/onions/deep-purple-onion-seed-491.html")
            .expect("valid page url");

        let mut out = Vec::new();
        extract_pages(&pages, &options, &mut out).expect("run completes");

        let text = String::from_utf8(out).expect("utf-8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(text.ends_with('\n'));

        let record: ProductRecord = serde_json::from_str(lines[0]).expect("line is a record");
        assert_eq!(record.name.as_deref(), Some("Deep Purple Onion"));
        assert_eq!(record.days_to_maturity.as_deref(), Some("60"));
    }

    #[test]
    fn one_line_per_readable_page() {
        let pages = vec![PathBuf::from(FIXTURE), PathBuf::from(FIXTURE)];

        let mut out = Vec::new();
        extract_pages(&pages, &Options::default(), &mut out).expect("run completes");

        let text = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(text.lines().count(), 2);
        for line in text.lines() {
            let record: ProductRecord = serde_json::from_str(line).expect("line is a record");
            assert!(record.image_urls.is_empty());
        }
    }
}
