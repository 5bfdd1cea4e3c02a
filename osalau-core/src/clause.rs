//! Clause-annotation rewriting for Osalausestaja output
//!
//! The segmenter answers with `{"words": [...]}` where individual words may
//! carry a `clauseAnnotation` array of boundary markers. This module rewrites
//! those markers into per-word clause indices and types, and groups words
//! into clauses, so consumers do not have to interpret the marker stack
//! themselves.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Boundary marker attached to a word by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseMarker {
    /// An embedded clause (kiil) opens at this word
    #[serde(rename = "KIILU_ALGUS")]
    EmbeddedStart,
    /// The current embedded clause closes after this word
    #[serde(rename = "KIILU_LOPP")]
    EmbeddedEnd,
    /// Firm boundary: the next clause at the same depth starts after this word
    #[serde(rename = "KINDEL_PIIR")]
    FirmBoundary,
}

/// Type of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseType {
    /// Top-level clause
    Regular,
    /// Parenthetical clause embedded inside another (kiil)
    Embedded,
}

/// One word of the segmenter's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedWord {
    /// Surface form of the word
    pub text: String,
    /// Morphological analyses, passed through untouched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analysis: Vec<serde_json::Value>,
    /// Clause boundary markers on this word, if any
    #[serde(
        rename = "clauseAnnotation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub clause_annotation: Option<Vec<ClauseMarker>>,
}

/// A whole analyzed sentence as returned by the segmenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    /// The words of the sentence, in order
    pub words: Vec<AnalyzedWord>,
}

/// Clause index and type assigned to one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordClause {
    /// Index of the clause this word belongs to
    pub clause_id: usize,
    /// Type of that clause
    pub clause_type: ClauseType,
}

/// A clause: its type plus the indices of its words within the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    /// Type of the clause
    pub clause_type: ClauseType,
    /// Surface forms of the clause's words, in sentence order
    pub words: Vec<String>,
}

/// Rewrite boundary markers into per-word clause assignments.
///
/// Walks the words with a stack of clause indices: `KIILU_ALGUS` pushes a
/// fresh embedded clause, `KIILU_LOPP` pops back to the enclosing one, and
/// `KINDEL_PIIR` starts the next clause at the current depth. An unbalanced
/// `KIILU_LOPP` leaves the root clause in place rather than underflowing.
pub fn annotate_clause_indices(words: &[AnalyzedWord]) -> Vec<WordClause> {
    let mut next_index = 0usize;
    let mut index_stack = vec![0usize];
    let mut type_stack = vec![ClauseType::Regular];
    let mut assignments = Vec::with_capacity(words.len());

    for word in words {
        let markers = word.clause_annotation.as_deref().unwrap_or(&[]);
        for marker in markers {
            if *marker == ClauseMarker::EmbeddedStart {
                next_index += 1;
                index_stack.push(next_index);
                type_stack.push(ClauseType::Embedded);
            }
        }
        assignments.push(WordClause {
            clause_id: *index_stack.last().unwrap_or(&0),
            clause_type: *type_stack.last().unwrap_or(&ClauseType::Regular),
        });
        for marker in markers {
            match marker {
                ClauseMarker::FirmBoundary => {
                    next_index += 1;
                    if let Some(top) = index_stack.last_mut() {
                        *top = next_index;
                    }
                }
                ClauseMarker::EmbeddedEnd => {
                    if index_stack.len() > 1 {
                        index_stack.pop();
                        type_stack.pop();
                    }
                }
                ClauseMarker::EmbeddedStart => {}
            }
        }
    }
    assignments
}

/// Group the words of a sentence into clauses, ordered by clause index.
pub fn group_clauses(sentence: &SentenceAnalysis) -> Vec<Clause> {
    let assignments = annotate_clause_indices(&sentence.words);
    let mut clauses: std::collections::BTreeMap<usize, Clause> = Default::default();
    for (word, assignment) in sentence.words.iter().zip(&assignments) {
        let clause = clauses
            .entry(assignment.clause_id)
            .or_insert_with(|| Clause {
                clause_type: assignment.clause_type,
                words: Vec::new(),
            });
        clause.words.push(word.text.clone());
    }
    clauses.into_values().collect()
}

/// Parse one analysis line and re-emit it with clause markers rewritten.
///
/// The emitted JSON is `{"clauses": [{"clause_type": ..., "words": [...]}]}`
/// on a single line. Malformed input is a fatal error in this mode; the raw
/// relay never calls this.
pub fn annotate_line(analysis: &str) -> Result<String> {
    let sentence: SentenceAnalysis = serde_json::from_str(analysis)?;
    let clauses = group_clauses(&sentence);
    let annotated = serde_json::json!({ "clauses": clauses });
    Ok(serde_json::to_string(&annotated)?)
}
