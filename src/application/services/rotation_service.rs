/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::quotes::QuoteSource;
use crate::application::interfaces::store::DataStore;
use crate::application::services::types::RotationOutcome;
use crate::constants::{FIRST_LINE_NUMBER, QUOTE_PREVIEW_CHARS, ROTATION_ROW_ID};
use crate::error::AppError;
use crate::model::records::RotationState;
use crate::model::rotation::{RotationStep, parse_lines, preview};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

/// Serves the next line of the quote file and advances the stored pointer
pub struct RotationService {
    source: Arc<dyn QuoteSource>,
    store: Arc<dyn DataStore>,
}

impl RotationService {
    /// Creates a new rotation service
    pub fn new(source: Arc<dyn QuoteSource>, store: Arc<dyn DataStore>) -> Self {
        Self { source, store }
    }

    /// Picks the quote for this run and persists the pointer for the next one
    ///
    /// The state row is only written once a quote has been selected, so an
    /// empty or unreachable file leaves the stored pointer untouched.
    ///
    /// # Errors
    /// * `AppError::EmptyResource` - if the file has no non-blank line
    /// * `AppError::Store` - if the write reported no affected row
    /// * any transport error from the store or the file download
    pub async fn rotate(&self) -> Result<RotationOutcome, AppError> {
        let existing = self.store.get_rotation_state().await?;
        let current_line_number = match &existing {
            Some(state) => {
                info!("Current line number: {}", state.current_line_number);
                state.current_line_number
            }
            None => {
                info!("No existing record found, starting from line {}", FIRST_LINE_NUMBER);
                FIRST_LINE_NUMBER
            }
        };

        info!("Fetching bitthoughts from: {}", self.source.location());
        let text = self.source.fetch_text().await?;
        let lines = parse_lines(&text);
        let total_lines = lines.len();
        info!("Total lines available: {}", total_lines);

        if lines.is_empty() {
            error!("No bitthoughts found in the file");
            return Err(AppError::EmptyResource(format!(
                "no bitthoughts found in {}",
                self.source.location()
            )));
        }

        let step = RotationStep::advance(current_line_number, total_lines)?;
        let quote = lines[step.line_index].clone();
        info!(
            "Selected quote from line {}: {}...",
            step.served_line_number(),
            preview(&quote, QUOTE_PREVIEW_CHARS)
        );
        info!("Next line number will be: {}", step.next_line_number);

        let written = match existing {
            None => {
                let state = RotationState {
                    id: ROTATION_ROW_ID,
                    quote: Some(quote.clone()),
                    current_line_number: step.next_line_number,
                    last_updated: None,
                };
                self.store.insert_rotation_state(&state).await?
            }
            Some(_) => {
                let state = RotationState {
                    id: ROTATION_ROW_ID,
                    quote: Some(quote.clone()),
                    current_line_number: step.next_line_number,
                    last_updated: Some(Utc::now()),
                };
                self.store.update_rotation_state(&state).await?
            }
        };

        if written == 0 {
            error!("Failed to update database");
            return Err(AppError::Store(
                "rotation state write affected no rows".to_string(),
            ));
        }
        info!("Successfully updated daily bitthought in database");

        Ok(RotationOutcome {
            quote,
            served_line_number: step.served_line_number(),
            next_line_number: step.next_line_number,
            total_lines,
        })
    }
}
