//! Segmenter capability
//!
//! The relay talks to the clause segmenter through the [`Segmenter`] trait,
//! its single injection seam. Production code uses [`PipeSegmenter`], which
//! holds a handle to the external Osalausestaja process; tests substitute a
//! fake returning deterministic strings.

pub mod pipe;

pub use pipe::{JavaCommand, PipeSegmenter};

use crate::error::Result;

/// An opaque text-analysis capability.
///
/// One call per input line. The returned string is whatever the segmenter
/// produced, unvalidated; it may include the segmenter's own trailing
/// newline, which the relay strips before emitting.
pub trait Segmenter {
    /// Analyze one line of text and return the string-encoded result.
    fn analyze(&mut self, line: &str) -> Result<String>;
}

impl<S: Segmenter + ?Sized> Segmenter for &mut S {
    fn analyze(&mut self, line: &str) -> Result<String> {
        (**self).analyze(line)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn analyze(&mut self, line: &str) -> Result<String> {
        (**self).analyze(line)
    }
}
