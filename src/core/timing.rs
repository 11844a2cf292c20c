use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_HIGH_TIME: u64 = 10;
pub const DEFAULT_LOW_TIME: u64 = 10;
pub const DEFAULT_TEST_LENGTH: u64 = 400;
pub const DEFAULT_SEGMENT_DURATION: u64 = 20;

/// Upper bound on the number of segments a timeline may span.
pub const MAX_SEGMENTS: u64 = 10_000;

/// Durations (in nanoseconds) that shape the generated testbench.
#[derive(Debug, PartialEq, Clone)]
pub struct TimingConfig {
    high_time: u64,
    low_time: u64,
    test_length: u64,
    segment_duration: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            high_time: DEFAULT_HIGH_TIME,
            low_time: DEFAULT_LOW_TIME,
            test_length: DEFAULT_TEST_LENGTH,
            segment_duration: DEFAULT_SEGMENT_DURATION,
        }
    }
}

impl TimingConfig {
    /// Creates a new timing configuration.
    ///
    /// Errors if any value is zero or if the test spans more than [MAX_SEGMENTS]
    /// segments. A segment longer than the test is accepted and leaves the
    /// timeline without any segments.
    pub fn new(
        high_time: u64,
        low_time: u64,
        test_length: u64,
        segment_duration: u64,
    ) -> Result<Self, TimingError> {
        let fields = [
            ("high time", high_time),
            ("low time", low_time),
            ("test length", test_length),
            ("segment duration", segment_duration),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| *v == 0) {
            return Err(TimingError::Zero(name.to_string()));
        }
        if test_length / segment_duration > MAX_SEGMENTS {
            return Err(TimingError::TooManySegments(
                test_length / segment_duration,
                MAX_SEGMENTS,
            ));
        }
        Ok(Self {
            high_time: high_time,
            low_time: low_time,
            test_length: test_length,
            segment_duration: segment_duration,
        })
    }

    /// Applies the populated values of `partial` over the current values and
    /// validates the result.
    pub fn apply(self, partial: &PartialTiming) -> Result<Self, TimingError> {
        Self::new(
            partial.high_time.unwrap_or(self.high_time),
            partial.low_time.unwrap_or(self.low_time),
            partial.test_length.unwrap_or(self.test_length),
            partial.segment_duration.unwrap_or(self.segment_duration),
        )
    }

    pub fn high_time(&self) -> u64 {
        self.high_time
    }

    pub fn low_time(&self) -> u64 {
        self.low_time
    }

    pub fn test_length(&self) -> u64 {
        self.test_length
    }

    pub fn segment_duration(&self) -> u64 {
        self.segment_duration
    }

    /// Number of whole segments that fit within the test length.
    ///
    /// Any remainder of the test length is dropped.
    pub fn segment_count(&self) -> usize {
        (self.test_length / self.segment_duration) as usize
    }
}

/// Timing values where each entry may be left unset.
///
/// Used for the `[timing]` table of the configuration file and for command-line
/// overrides.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialTiming {
    #[serde(rename = "high-time")]
    pub high_time: Option<u64>,
    #[serde(rename = "low-time")]
    pub low_time: Option<u64>,
    #[serde(rename = "test-length")]
    pub test_length: Option<u64>,
    #[serde(rename = "segment-duration")]
    pub segment_duration: Option<u64>,
}

impl PartialTiming {
    /// Merges any populated data from `rhs` into attributes that do not already
    /// have data defined in `self`.
    pub fn merge(&mut self, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            self.high_time = self.high_time.or(rhs.high_time);
            self.low_time = self.low_time.or(rhs.low_time);
            self.test_length = self.test_length.or(rhs.test_length);
            self.segment_duration = self.segment_duration.or(rhs.segment_duration);
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TimingError {
    #[error("{0} must be a positive number of nanoseconds")]
    Zero(String),
    #[error("test spans {0} segments but at most {1} are supported")]
    TooManySegments(u64, u64),
}
