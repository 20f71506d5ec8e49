/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;

/// Outcome of advancing the rotation pointer by one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationStep {
    /// 0-based position of the line served this run
    pub line_index: usize,
    /// 1-based line number persisted for the next run, always in `[1, total_lines]`
    pub next_line_number: i64,
}

impl RotationStep {
    /// Computes the step for a stored line number over `total_lines` lines
    ///
    /// The stored number is re-normalised modulo `total_lines`, so a pointer
    /// left past the end by a shrinking file simply wraps around.
    ///
    /// # Errors
    /// * `AppError::EmptyResource` - if `total_lines` is zero
    pub fn advance(current_line_number: i64, total_lines: usize) -> Result<Self, AppError> {
        if total_lines == 0 {
            return Err(AppError::EmptyResource(
                "no lines to rotate through".to_string(),
            ));
        }
        let total = total_lines as i64;
        // (n - 1) mod total, computed without overflowing at i64::MIN
        let wrapped = current_line_number.rem_euclid(total);
        let line_index = (wrapped - 1).rem_euclid(total) as usize;
        Ok(Self {
            line_index,
            next_line_number: wrapped + 1,
        })
    }

    /// 1-based number of the line served this run
    #[must_use]
    pub fn served_line_number(&self) -> i64 {
        self.line_index as i64 + 1
    }
}

/// Splits a text resource into trimmed, non-blank lines
#[must_use]
pub fn parse_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns at most `max_chars` characters of `text`, for log lines
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
