use crate::model::records::PriceRecord;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// What a price run stored
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceIngestion {
    /// Record written to the price row
    pub record: PriceRecord,
    /// Id of the updated row, `None` when no row matched
    pub row_id: Option<i64>,
}

/// What a rotation run served and persisted
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RotationOutcome {
    /// Quote served this run
    pub quote: String,
    /// 1-based line the quote was taken from
    pub served_line_number: i64,
    /// 1-based line persisted for the next run
    pub next_line_number: i64,
    /// Number of non-blank lines in the resource
    pub total_lines: usize,
}
