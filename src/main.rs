//! Talk Wordcloud CLI
//!
//! Usage:
//!   talk-wordcloud [OPTIONS]
//!
//! Options:
//!   -d, --data <FILE>        Talks YAML file
//!   -s, --stopwords <FILE>   Stopwords YAML file
//!   -o, --output <FILE>      Output path for the SVG
//!   -f, --font <FILE>        Font resource for the layout engine
//!   -c, --config <FILE>      Configuration file (TOML format)
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use talk_wordcloud::{font, generate, Paths, WordCloudConfig, WordCloudError};

#[derive(Parser)]
#[command(name = "talk-wordcloud")]
#[command(about = "Generate an interactive SVG word cloud from talk data")]
struct Cli {
    /// Talks YAML file
    #[arg(short, long, default_value = "_data/talks.yml")]
    data: PathBuf,

    /// Stopwords YAML file
    #[arg(short, long, default_value = "_data/stopwords.yml")]
    stopwords: PathBuf,

    /// Output path for the SVG
    #[arg(short, long, default_value = "_includes/wordcloud.svg")]
    output: PathBuf,

    /// Font resource for the layout engine (probes common locations if omitted)
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// Configuration file for layout and palette (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of words
    #[arg(long)]
    max_words: Option<usize>,

    /// Spacing kept around each word
    #[arg(long)]
    margin: Option<f64>,

    /// Smallest font size
    #[arg(long)]
    min_font_size: Option<f64>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("Generated wordcloud at {}", output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<PathBuf, WordCloudError> {
    let mut config = match &cli.config {
        Some(path) => WordCloudConfig::from_file(path)?,
        None => WordCloudConfig::default(),
    };

    if let Some(max_words) = cli.max_words {
        config.layout.max_words = max_words;
    }
    if let Some(margin) = cli.margin {
        config.layout.margin = margin;
    }
    if let Some(size) = cli.min_font_size {
        config.layout.min_font_size = size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.layout.font_path = font::resolve_font(cli.font.or(config.layout.font_path.take()));

    let paths = Paths {
        corpus: cli.data,
        stopwords: cli.stopwords,
        output: cli.output,
    };

    let report = generate(&config, &paths)?;
    Ok(report.output)
}
