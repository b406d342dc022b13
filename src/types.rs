use std::time::Duration;

use serde::Deserialize;

/// Canonical node identifier type used throughout the crate.
pub type NodeId = String;

/// Edge weight in seconds, as written in the graph description.
///
/// Only constructed through [`Delay::from_secs`], which rejects negative and
/// non-finite values, so converting to a [`Duration`] never panics.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct Delay(f64);

impl Delay {
    pub fn from_secs(secs: f64) -> Result<Self, String> {
        if !secs.is_finite() {
            return Err(format!("delay must be a finite number of seconds (got {secs})"));
        }
        if secs < 0.0 {
            return Err(format!("delay must be >= 0 seconds (got {secs})"));
        }
        if Duration::try_from_secs_f64(secs).is_err() {
            return Err(format!("delay is too large (got {secs})"));
        }
        Ok(Delay(secs))
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl TryFrom<f64> for Delay {
    type Error = String;

    fn try_from(secs: f64) -> Result<Self, Self::Error> {
        Delay::from_secs(secs)
    }
}

impl std::fmt::Display for Delay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}
