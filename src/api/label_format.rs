use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::primitives::unix_seconds_to_datetime;
use crate::error::{ChartError, ChartResult};

/// Numeric rendering of hovered and gridline values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "camelCase")]
pub enum ValueFormat {
    /// Fixed decimals, e.g. `0.35`.
    Fixed { precision: u8 },
    /// Value scaled by 100 with a `%` sign, e.g. `35.0%`.
    Percent { precision: u8 },
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::Fixed { precision: 2 }
    }
}

/// Text formatting for every label the engine emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelFormat {
    pub value: ValueFormat,
    pub prefix: String,
    pub suffix: String,
    /// chrono strftime pattern for the hovered date.
    pub date_pattern: String,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            value: ValueFormat::default(),
            prefix: String::new(),
            suffix: String::new(),
            date_pattern: "%b %d, %Y".to_owned(),
        }
    }
}

impl LabelFormat {
    pub fn validate(&self) -> ChartResult<()> {
        if self.date_pattern.is_empty() {
            return Err(ChartError::InvalidData(
                "date pattern must not be empty".to_owned(),
            ));
        }
        if StrftimeItems::new(&self.date_pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidData(format!(
                "invalid date pattern `{}`",
                self.date_pattern
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        let (scaled, precision, unit) = match self.value {
            ValueFormat::Fixed { precision } => (value, precision, ""),
            ValueFormat::Percent { precision } => (value * 100.0, precision, "%"),
        };
        let mut digits = format!("{:.*}", usize::from(precision), scaled);
        // `format!` keeps the sign of values that round to zero ("-0.00").
        if digits.starts_with('-') && digits[1..].chars().all(|ch| ch == '0' || ch == '.') {
            digits.remove(0);
        }

        let mut text =
            String::with_capacity(self.prefix.len() + digits.len() + unit.len() + self.suffix.len());
        text.push_str(&self.prefix);
        text.push_str(&digits);
        text.push_str(unit);
        text.push_str(&self.suffix);
        text
    }

    /// What a zero value displays as; samples formatting to this are
    /// deduplicated in the tooltip stack.
    #[must_use]
    pub fn zero_text(&self) -> String {
        self.format_value(0.0)
    }

    #[must_use]
    pub fn format_date(&self, timestamp: f64) -> String {
        match unix_seconds_to_datetime(timestamp) {
            Some(time) => time.format(&self.date_pattern).to_string(),
            None => format!("{timestamp}"),
        }
    }
}
