use crate::line_diff::{split_lines, LineAligner};
use crate::merge::DiffMerger;
use crate::normalize::normalize;
use jdiff_common::{DiffResult, JdiffError, Side};
use tracing::{debug, info};

/// Canonicalize both documents, align their lines, and merge the alignment.
///
/// If either side fails to parse, no diff is computed and the error names
/// the failing side. The whole computation is synchronous and side-effect
/// free; a second invocation simply starts after the first returns.
pub fn compare(left_text: &str, right_text: &str) -> Result<DiffResult, JdiffError> {
    let left = normalize(left_text).map_err(|source| JdiffError::Parse {
        side: Side::Left,
        source,
    })?;
    let right = normalize(right_text).map_err(|source| JdiffError::Parse {
        side: Side::Right,
        source,
    })?;

    let left_lines = split_lines(&left);
    let right_lines = split_lines(&right);
    info!(
        "comparing {} left lines with {} right lines",
        left_lines.len(),
        right_lines.len()
    );

    let aligned = LineAligner::align(&left_lines, &right_lines);
    let result = DiffMerger::merge(aligned);
    debug!(
        "diff has {} entries ({:?})",
        result.len(),
        result.summary()
    );
    Ok(result)
}

/// Holds the most recent comparison outcome for one caller.
///
/// Each caller owns its own session, so independent sessions and tests never
/// interfere. The stored result is replaced wholesale on success and reset
/// to the empty sentinel on any failure; a caller never observes a stale or
/// half-updated diff.
#[derive(Debug, Default)]
pub struct CompareSession {
    last_result: DiffResult,
}

impl CompareSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a comparison and store its outcome.
    pub fn compare(&mut self, left_text: &str, right_text: &str) -> Result<&DiffResult, JdiffError> {
        match compare(left_text, right_text) {
            Ok(result) => {
                self.last_result = result;
                Ok(&self.last_result)
            }
            Err(err) => {
                self.last_result = DiffResult::default();
                Err(err)
            }
        }
    }

    /// The most recently computed result, or the empty sentinel.
    pub fn last_result(&self) -> &DiffResult {
        &self.last_result
    }

    /// Discard any stored result.
    pub fn clear(&mut self) {
        self.last_result = DiffResult::default();
    }
}
