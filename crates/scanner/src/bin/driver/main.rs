use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scanner::{Scanner, ScannerOptions, Token, TokenStream};

/// Tokenize an SQL query and print one token per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query text; read from `--file` or stdin when omitted.
    query: Option<String>,

    #[arg(short, long, conflicts_with = "query")]
    file: Option<PathBuf>,

    /// JSON file with scanner options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scan on a separate thread and consume the token stream.
    #[arg(long)]
    stream: bool,

    /// Print tokens as JSON lines.
    #[arg(long)]
    json: bool,

    #[arg(long)]
    keyword_boundary: bool,

    #[arg(long)]
    bail_on_illegal: bool,

    /// Print the tokens as a flat syntax tree.
    #[arg(long, conflicts_with_all = ["stream", "json"])]
    tree: bool,

    /// Print the keyword table and exit.
    #[arg(long)]
    keywords: bool,
}

impl Cli {
    fn options(&self) -> Result<ScannerOptions, anyhow::Error> {
        let mut options = match self.config.as_ref() {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                ScannerOptions::from_json(&source)?
            }
            None => ScannerOptions::default(),
        };

        if self.keyword_boundary {
            options.keyword_boundary = true;
        }
        if self.bail_on_illegal {
            options.bail_on_illegal = true;
        }

        Ok(options)
    }

    fn source(&self) -> Result<String, anyhow::Error> {
        if let Some(query) = self.query.as_ref() {
            return Ok(query.clone());
        }

        if let Some(path) = self.file.as_ref() {
            return std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()));
        }

        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).context("reading stdin")?;
        Ok(source)
    }
}

pub fn main() -> Result<(), anyhow::Error> {
    init_tracing();
    let cli = Cli::parse();

    if cli.keywords {
        for pattern in rdb_sql::engine::keyword_patterns() {
            println!("{:<24} {:?}", pattern.pattern, pattern.kind);
        }
        return Ok(());
    }

    let options = cli.options()?;
    let source = cli.source()?;

    if cli.tree {
        let tokens = Scanner::with_options(&source, options).tokens().collect::<Vec<_>>();
        let tree = rdb_sql::engine::build_token_tree(tokens.iter().map(|t| (t.kind, t.text.as_str())));
        print!("{tree:#?}");
        return Ok(());
    }

    if cli.stream {
        for token in TokenStream::spawn(source, options) {
            print_token(&token?, cli.json)?;
        }
    } else {
        for token in Scanner::with_options(&source, options).tokens() {
            print_token(&token, cli.json)?;
        }
    }

    Ok(())
}

fn print_token(token: &Token, json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::to_string(token)?);
    } else {
        println!("[{:>6}] {:<20} {:?}", token.offset, format!("{:?}", token.kind), token.text);
    }
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (e.g. `RUST_LOG=scanner=trace`).
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
