// Chart x-axis label formatting
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    Seconds,
    #[default]
    Milliseconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("invalid time format pattern: {0:?}")]
    InvalidPattern(String),
    #[error("utc offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

/// Turns backend timestamps into display labels in a fixed UTC offset.
#[derive(Debug, Clone)]
pub struct TimeLabelFormatter {
    pattern: String,
    unit: TimestampUnit,
    offset: FixedOffset,
}

impl TimeLabelFormatter {
    pub fn new(
        pattern: impl Into<String>,
        unit: TimestampUnit,
        utc_offset_minutes: i32,
    ) -> Result<Self, TimeFormatError> {
        let pattern = pattern.into();
        // chrono panics when displaying a broken pattern, so reject it up front
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TimeFormatError::InvalidPattern(pattern));
        }
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(TimeFormatError::InvalidOffset(utc_offset_minutes))?;

        Ok(Self {
            pattern,
            unit,
            offset,
        })
    }

    /// Sub-millisecond fractions are truncated.
    pub fn format(&self, timestamp: f64) -> String {
        let millis = match self.unit {
            TimestampUnit::Seconds => timestamp * 1000.0,
            TimestampUnit::Milliseconds => timestamp,
        }
        .trunc();

        let instant = if millis.is_finite() && millis.abs() < i64::MAX as f64 {
            DateTime::from_timestamp_millis(millis as i64)
        } else {
            None
        };

        match instant {
            Some(utc) => utc
                .with_timezone(&self.offset)
                .format(&self.pattern)
                .to_string(),
            // Out of chrono's range; keep the raw value rather than dropping the point
            None => timestamp.to_string(),
        }
    }
}
