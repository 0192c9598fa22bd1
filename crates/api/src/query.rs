//! Shared query parameter types for API handlers.

use fyyur_core::show_time::DisplayFormat;
use serde::Deserialize;

use crate::error::AppResult;

/// Optional `?time_format=full|medium` on show listings.
///
/// When present, every show entry additionally carries a human-readable
/// `start_time_display`.
#[derive(Debug, Default, Deserialize)]
pub struct TimeFormatParams {
    pub time_format: Option<String>,
}

impl TimeFormatParams {
    /// Parse the requested format, if any.
    pub fn display_format(&self) -> AppResult<Option<DisplayFormat>> {
        self.time_format
            .as_deref()
            .map(str::parse::<DisplayFormat>)
            .transpose()
            .map_err(Into::into)
    }
}
