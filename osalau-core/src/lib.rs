//! Line relay around the Osalausestaja clause segmenter
//!
//! This crate provides the plumbing that turns the Java-based Osalausestaja
//! clause segmenter into a line-oriented Unix filter: a [`Segmenter`]
//! capability trait, a subprocess-backed implementation speaking the
//! segmenter's one-line-in, one-line-out pipe protocol, and the relay loop
//! that shuttles lines between an input stream and an output stream.
//!
//! The segmenter itself is an opaque collaborator; nothing in this crate
//! inspects or validates its analyses except the optional clause-annotation
//! rewriter in [`clause`].

#![warn(missing_docs)]

pub mod clause;
pub mod error;
pub mod relay;
pub mod segmenter;

pub use error::{OsalauError, Result};
pub use segmenter::{JavaCommand, PipeSegmenter, Segmenter};
