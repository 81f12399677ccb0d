//! Fallback font discovery

use std::path::{Path, PathBuf};

/// Conventional font locations, probed in order
pub const FONT_CANDIDATES: [&str; 4] = [
    r"C:\Windows\Fonts\arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// Use the explicit font if given, otherwise the first candidate that exists
///
/// `None` lets the layout engine fall back to its own default.
pub fn resolve_font(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| probe_fonts(&FONT_CANDIDATES))
}

/// First existing path among `candidates`
pub fn probe_fonts<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref())
        .find(|p: &&Path| p.exists())
        .map(Path::to_path_buf)
}
