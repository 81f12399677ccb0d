//! Talk Wordcloud - themeable, clickable SVG word clouds from talk abstracts
//!
//! The pipeline loads talk records and stopwords, normalizes the text, lays
//! out the most frequent words, and post-processes the layout engine's SVG
//! into a document that can be inlined into a static page: header-free,
//! colored through CSS classes that follow the page theme, and with a click
//! hook on every word.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use talk_wordcloud::{render_document, SpiralLayout, StopwordSet, WordCloudConfig};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let rendered = render_document(
//!     "monte_carlo methods monte_carlo",
//!     &StopwordSet::new(),
//!     &WordCloudConfig::default(),
//!     &SpiralLayout::new(),
//!     &mut rng,
//! )
//! .unwrap();
//!
//! assert!(rendered.svg.contains("showWordModal('monte_carlo')"));
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod font;
pub mod layout;
pub mod normalize;
pub mod palette;
pub mod svg;
pub mod writer;

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

pub use config::WordCloudConfig;
pub use corpus::{StopwordSet, TalkRecord};
pub use error::{SanitizeWarning, WordCloudError};
pub use layout::{LayoutConfig, LayoutError, PlacedWord, SpiralLayout, WordLayoutEngine};
pub use palette::{ColorAssigner, Palette, PaletteColor};
pub use svg::SvgDocument;

/// Input and output locations for a pipeline run
#[derive(Debug, Clone)]
pub struct Paths {
    pub corpus: PathBuf,
    pub stopwords: PathBuf,
    pub output: PathBuf,
}

/// An in-memory document with the words it shows
#[derive(Debug, Clone)]
pub struct Rendered {
    pub svg: String,
    pub words: Vec<PlacedWord>,
    pub warnings: Vec<SanitizeWarning>,
}

/// Outcome of a pipeline run that wrote its document
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub words: Vec<PlacedWord>,
    pub warnings: Vec<SanitizeWarning>,
}

/// Lay out normalized text and turn the result into the final document
///
/// Runs the engine, assigns colors, sanitizes the fragment, then applies
/// the color markers, the style block, the interactivity rewrite and the
/// responsive viewport, in that order.
pub fn render_document(
    text: &str,
    stopwords: &StopwordSet,
    config: &WordCloudConfig,
    engine: &dyn WordLayoutEngine,
    rng: &mut dyn RngCore,
) -> Result<Rendered, WordCloudError> {
    let output = engine.layout(text, stopwords, &config.layout, rng)?;
    info!(words = output.words.len(), "layout complete");

    // engine colors are discarded; every word gets a fresh draw
    let assigner = ColorAssigner::new();
    let words: Vec<PlacedWord> = output
        .words
        .into_iter()
        .map(|w| w.recolor(assigner.draw(rng)))
        .collect();

    let (mut doc, warning) = svg::sanitize(&output.fragment);

    let mut colors: Vec<PaletteColor> = words.iter().filter_map(PlacedWord::color).collect();
    let text_elements = svg::count_text_elements(&doc);
    if text_elements > colors.len() {
        debug!(
            extra = text_elements - colors.len(),
            "fragment has more text elements than placed words"
        );
        colors.extend(assigner.assign(text_elements - colors.len(), rng));
    }

    svg::stamp_colors(&mut doc, &colors, &config.palette);
    svg::inject_style(&mut doc, &config.palette);
    let rewritten = svg::rewrite_interactivity(&mut doc, &config.palette, &config.click_handler);
    svg::ensure_viewbox(&mut doc, config.layout.width, config.layout.height);
    debug!(rewritten, tree = doc.is_tree(), "post-processing complete");

    Ok(Rendered {
        svg: doc.to_svg_string(),
        words,
        warnings: warning.into_iter().collect(),
    })
}

/// Run the whole pipeline with the built-in [`SpiralLayout`]
pub fn generate(config: &WordCloudConfig, paths: &Paths) -> Result<GenerateReport, WordCloudError> {
    generate_with_engine(config, paths, &SpiralLayout::new())
}

/// Run the whole pipeline with a custom layout engine
pub fn generate_with_engine(
    config: &WordCloudConfig,
    paths: &Paths,
    engine: &dyn WordLayoutEngine,
) -> Result<GenerateReport, WordCloudError> {
    let (stopwords, talks) = corpus::load(&paths.corpus, &paths.stopwords)?;
    info!(talks = talks.len(), stopwords = stopwords.len(), "loaded corpus");

    let text = normalize::normalize_corpus(&talks)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let rendered = render_document(&text, &stopwords, config, engine, &mut rng)?;

    writer::write_document(&paths.output, &rendered.svg)?;
    info!(path = %paths.output.display(), "generated wordcloud");

    Ok(GenerateReport {
        output: paths.output.clone(),
        words: rendered.words,
        warnings: rendered.warnings,
    })
}
