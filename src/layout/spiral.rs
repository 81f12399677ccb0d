//! Spiral packing word layout
//!
//! Words are taken in frequency order and each one walks an Archimedean
//! spiral outward from the canvas centre until its box fits without
//! touching an earlier word. A word that finds no room is retried at a
//! smaller size down to the configured minimum.

use std::f64::consts::TAU;

use rand::{Rng, RngCore};
use regex::Regex;
use tracing::debug;

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::fragment::FragmentBuilder;
use super::frequency::word_frequencies;
use super::types::{BoundingBox, LayoutOutput, Orientation, PlacedWord, Point};
use super::WordLayoutEngine;
use crate::corpus::StopwordSet;

/// Estimated advance of one glyph as a fraction of the font size
const GLYPH_WIDTH: f64 = 0.6;

/// Radial growth of the spiral per radian
const SPIRAL_PITCH: f64 = 1.5;

/// Approximate arc length between successive spiral samples
const SPIRAL_STEP: f64 = 4.0;

/// Built-in word layout engine
#[derive(Debug, Clone)]
pub struct SpiralLayout {
    /// Font size decrement when a word does not fit
    pub shrink_step: f64,
}

impl Default for SpiralLayout {
    fn default() -> Self {
        Self { shrink_step: 2.0 }
    }
}

impl SpiralLayout {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_position(
        &self,
        size: (f64, f64),
        canvas: &BoundingBox,
        occupied: &[BoundingBox],
        padding: f64,
        rng: &mut dyn RngCore,
    ) -> Option<BoundingBox> {
        let (bw, bh) = size;
        if bw > canvas.width || bh > canvas.height {
            return None;
        }

        let cx = canvas.x + canvas.width / 2.0;
        let cy = canvas.y + canvas.height / 2.0;
        let aspect = canvas.width / canvas.height;
        // Far enough to reach the corners of the canvas
        let r_max = (canvas.width / aspect).hypot(canvas.height) / 2.0;
        let phase = rng.gen_range(0.0..TAU);

        let mut theta: f64 = 0.0;
        loop {
            let r = SPIRAL_PITCH * theta;
            if r > r_max {
                return None;
            }
            let angle = theta + phase;
            let center = Point::new(cx + aspect * r * angle.cos(), cy + r * angle.sin());
            let candidate = BoundingBox::centered_at(center, bw, bh);

            if canvas.contains_box(&candidate) {
                let padded = candidate.inflate(padding);
                if !occupied.iter().any(|b| b.intersects(&padded)) {
                    return Some(candidate);
                }
            }

            theta += (SPIRAL_STEP / r.max(8.0)).min(0.5);
        }
    }
}

impl WordLayoutEngine for SpiralLayout {
    fn layout(
        &self,
        text: &str,
        stopwords: &StopwordSet,
        config: &LayoutConfig,
        rng: &mut dyn RngCore,
    ) -> Result<LayoutOutput, LayoutError> {
        if self.shrink_step.is_nan() || self.shrink_step <= 0.0 {
            return Err(LayoutError::invalid_settings("shrink_step must be positive"));
        }
        validate(config)?;
        let pattern = Regex::new(&config.token_pattern)
            .map_err(|e| LayoutError::invalid_pattern(&config.token_pattern, e))?;

        let mut frequencies = word_frequencies(text, stopwords, &pattern);
        frequencies.truncate(config.max_words);
        debug!(candidates = frequencies.len(), "selected words for layout");

        let canvas = BoundingBox::new(0.0, 0.0, config.width as f64, config.height as f64);
        let padding = config.margin / 2.0;
        let mut builder = FragmentBuilder::new(config.width, config.height)
            .standalone(config.standalone)
            .font_family(font_family(config));

        let f_max = frequencies.first().map_or(1, |(_, n)| *n) as f64;
        let f_min = frequencies.last().map_or(1, |(_, n)| *n) as f64;

        let mut occupied: Vec<BoundingBox> = Vec::new();
        let mut words = Vec::new();
        let mut size_cap = config.max_font_size;

        for (word, freq) in &frequencies {
            let orientation = if rng.gen::<f64>() < config.prefer_horizontal {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };

            let scale = if f_max > f_min {
                ((*freq as f64 - f_min) / (f_max - f_min)).sqrt()
            } else {
                1.0
            };
            let target = config.min_font_size + (config.max_font_size - config.min_font_size) * scale;
            let mut font_size = target.round().min(size_cap);

            let placement = loop {
                if font_size < config.min_font_size {
                    break None;
                }
                let text_width = word.chars().count() as f64 * font_size * GLYPH_WIDTH;
                let extent = match orientation {
                    Orientation::Horizontal => (text_width, font_size),
                    Orientation::Vertical => (font_size, text_width),
                };
                if let Some(bounds) = self.find_position(extent, &canvas, &occupied, padding, rng) {
                    break Some((bounds, font_size, text_width));
                }
                font_size -= self.shrink_step;
            };

            let Some((bounds, font_size, text_width)) = placement else {
                debug!(word = %word, "no room for word, skipping");
                continue;
            };

            size_cap = font_size;
            occupied.push(bounds.inflate(padding));
            let placed = PlacedWord::new(
                word.as_str(),
                font_size,
                Point::new(bounds.x, bounds.y),
                orientation,
            );
            builder.add_word(&placed, text_width);
            words.push(placed);
        }

        debug!(placed = words.len(), "layout complete");
        Ok(LayoutOutput {
            words,
            fragment: builder.build(),
        })
    }
}

fn validate(config: &LayoutConfig) -> Result<(), LayoutError> {
    if config.width == 0 || config.height == 0 {
        return Err(LayoutError::invalid_settings("canvas must have a non-zero size"));
    }
    if config.min_font_size <= 0.0 {
        return Err(LayoutError::invalid_settings("min_font_size must be positive"));
    }
    if config.max_font_size < config.min_font_size {
        return Err(LayoutError::invalid_settings(
            "max_font_size must not be below min_font_size",
        ));
    }
    Ok(())
}

/// Font family named after the font resource file
fn font_family(config: &LayoutConfig) -> Option<String> {
    config
        .font_path
        .as_ref()
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
}
