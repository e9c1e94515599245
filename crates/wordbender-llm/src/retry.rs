//! Bounded retry with exponential backoff
//!
//! Providers classify each attempt's outcome as transient or fatal; this
//! module owns the loop around those attempts. The sleep function is a
//! parameter so tests can count attempts and inspect the delay schedule
//! without real time passing.

use crate::LlmError;
use std::future::Future;
use std::time::Duration;

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default initial backoff delay
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Default cap on cumulative backoff sleep
pub const DEFAULT_MAX_TOTAL_WAIT: Duration = Duration::from_secs(60);

/// How one failed attempt should be treated
#[derive(Debug)]
pub enum CallError {
    /// Worth retrying: rate limit, server error, timeout, connection failure.
    /// Carries an optional server-supplied wait hint (Retry-After).
    Transient {
        /// Description of the failure, kept for the final error report
        message: String,
        /// Server-supplied wait before the next attempt, if any
        retry_after: Option<Duration>,
    },

    /// Not worth retrying: fail the request immediately
    Fatal(LlmError),
}

impl CallError {
    /// Transient failure without a wait hint
    pub fn transient(message: impl Into<String>) -> Self {
        CallError::Transient {
            message: message.into(),
            retry_after: None,
        }
    }
}

/// Retry schedule: how many retries, starting where, bounded by what
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt; total attempts = max_retries + 1
    pub max_retries: u32,

    /// First backoff delay; doubles after every transient failure
    pub base_delay: Duration,

    /// Cumulative sleep across all retries never exceeds this
    pub max_total_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            max_total_wait: DEFAULT_MAX_TOTAL_WAIT,
        }
    }
}

impl RetryPolicy {
    /// Set the number of retries after the first attempt
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the initial backoff delay
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }
}

/// Run an operation under the policy's retry schedule
///
/// `op` receives the zero-based attempt number. `sleep` is awaited between
/// attempts with the computed delay (or the provider's Retry-After hint),
/// clamped so cumulative sleep stays within `max_total_wait`. A fatal error
/// returns immediately; exhausting the schedule returns
/// [`LlmError::Unavailable`] with the attempt count and the last transient
/// failure.
pub async fn with_retries<Op, OpFut, Sleep, SleepFut>(
    policy: &RetryPolicy,
    mut op: Op,
    mut sleep: Sleep,
) -> Result<String, LlmError>
where
    Op: FnMut(u32) -> OpFut,
    OpFut: Future<Output = Result<String, CallError>>,
    Sleep: FnMut(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let attempts = policy.max_retries + 1;
    let mut delay = policy.base_delay;
    let mut slept = Duration::ZERO;
    let mut last = String::from("no attempt made");

    for attempt in 0..attempts {
        match op(attempt).await {
            Ok(text) => return Ok(text),
            Err(CallError::Fatal(e)) => return Err(e),
            Err(CallError::Transient {
                message,
                retry_after,
            }) => {
                last = message;
                if attempt + 1 < attempts {
                    let requested = retry_after.unwrap_or(delay);
                    let budget = policy.max_total_wait.saturating_sub(slept);
                    let wait = requested.min(budget);
                    if !wait.is_zero() {
                        sleep(wait).await;
                        slept += wait;
                    }
                    delay = delay.saturating_mul(2);
                }
            }
        }
    }

    Err(LlmError::Unavailable { attempts, last })
}

/// Parse a Retry-After header (seconds form) into a wait hint
pub fn retry_after_hint(headers: &reqwest::header::HeaderMap) -> Option<Duration> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
