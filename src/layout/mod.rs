//! Word layout: selecting, sizing and placing words on the canvas
//!
//! The pipeline only depends on the [`WordLayoutEngine`] interface. Any
//! engine that places words and describes them in an SVG fragment can be
//! plugged in; [`SpiralLayout`] is the built-in one.

pub mod config;
pub mod error;
pub mod fragment;
pub mod frequency;
pub mod spiral;
pub mod types;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use spiral::SpiralLayout;
pub use types::*;

use rand::RngCore;

use crate::corpus::StopwordSet;

/// Produces placed words and an engine-native SVG fragment from text
///
/// The fragment must contain one `<text>` element per placed word, in the
/// same order as [`LayoutOutput::words`]. Colors written by the engine are
/// discarded downstream, so any fill is acceptable.
pub trait WordLayoutEngine {
    fn layout(
        &self,
        text: &str,
        stopwords: &StopwordSet,
        config: &LayoutConfig,
        rng: &mut dyn RngCore,
    ) -> Result<LayoutOutput, LayoutError>;
}
