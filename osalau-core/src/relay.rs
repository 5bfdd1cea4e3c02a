//! Line relay between an input stream and a segmenter
//!
//! The relay is a trivial two-state loop: read one line, hand it to the
//! segmenter, flatten the answer, write it out, flush. End-of-input is the
//! normal termination condition; every other failure is fatal and
//! propagates to the caller with no per-line isolation.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::segmenter::Segmenter;

/// Shuttle lines from `input` through `segmenter` to `output`.
///
/// One output line is produced per successfully read input line, in input
/// order. Each output line is the segmenter's answer with every `\n` and
/// `\r` removed, terminated by a single newline and flushed immediately so
/// downstream consumers observe it without buffering delay.
///
/// Returns the number of lines relayed. If the segmenter or a stream fails
/// on line k, exactly k-1 output lines have been written when the error
/// propagates.
pub fn run<R, W, S>(mut input: R, mut output: W, mut segmenter: S) -> Result<u64>
where
    R: BufRead,
    W: Write,
    S: Segmenter,
{
    let mut line = String::new();
    let mut relayed = 0u64;
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        strip_terminator(&mut line);

        let analysis = segmenter.analyze(&line)?;
        let flat = flatten(&analysis);
        output.write_all(flat.as_bytes())?;
        output.write_all(b"\n")?;
        output.flush()?;
        relayed += 1;
    }
    log::debug!("relayed {relayed} lines");
    Ok(relayed)
}

/// Remove all embedded `\n` and `\r` characters.
///
/// Defensive flattening only; the analysis is not validated in any way.
pub fn flatten(analysis: &str) -> Cow<'_, str> {
    if analysis.contains(['\n', '\r']) {
        Cow::Owned(analysis.replace(['\n', '\r'], ""))
    } else {
        Cow::Borrowed(analysis)
    }
}

/// Drop the trailing `\n` or `\r\n` left in place by `read_line`.
fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
