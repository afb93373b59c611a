use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::SummarizeError;

/// Lookback window for a channel summary.
///
/// Only the five wire tokens parse; anything else is rejected up front so
/// resolution never needs a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl TimeRange {
    #[must_use]
    pub fn duration(self) -> Duration {
        const HOUR: u64 = 60 * 60;
        match self {
            Self::OneHour => Duration::from_secs(HOUR),
            Self::SixHours => Duration::from_secs(6 * HOUR),
            Self::OneDay => Duration::from_secs(24 * HOUR),
            Self::SevenDays => Duration::from_secs(7 * 24 * HOUR),
            Self::ThirtyDays => Duration::from_secs(30 * 24 * HOUR),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::SixHours => "6h",
            Self::OneDay => "24h",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
        }
    }
}

impl FromStr for TimeRange {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1h" => Ok(Self::OneHour),
            "6h" => Ok(Self::SixHours),
            "24h" => Ok(Self::OneDay),
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            other => Err(SummarizeError::InvalidTimeRange(other.to_string())),
        }
    }
}

/// One stored message, projected to the fields summarization needs.
/// `create_at` is epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub create_at: i64,
}

/// Body of `POST /channels/{channel_id}/summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSummaryRequest {
    pub time_range: String,
}

impl ChannelSummaryRequest {
    /// Validate the request, yielding the parsed range.
    pub fn validate(&self) -> Result<TimeRange, SummarizeError> {
        self.time_range.parse()
    }
}

/// Result returned to the caller. `time_range` is absent for thread
/// summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub post_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}
