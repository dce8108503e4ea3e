//! Retry driver for the whole fetch-and-print operation.

use std::io::Write;
use std::time::Duration;

use crate::constants::{DEFAULT_RETRY_DELAY_SECS, MSG_RETRY_NOTICE};

/// How many times the operation may run in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attempts {
    /// Keep going until the operation succeeds or the process is killed
    #[default]
    Unlimited,
    /// Run at most this many times
    Bounded(u64),
}

impl Attempts {
    /// Map a retry limit to an attempt count.
    ///
    /// `None` or a negative limit means unlimited, `Some(n)` with `n >= 0`
    /// allows the first attempt plus `n` retries.
    pub fn from_retry_limit(limit: Option<i64>) -> Self {
        match limit {
            Some(n) if n >= 0 => Attempts::Bounded(n.unsigned_abs().saturating_add(1)),
            _ => Attempts::Unlimited,
        }
    }

    /// Whether the 1-based attempt number `attempt` may run
    pub fn allows(&self, attempt: u64) -> bool {
        match self {
            Attempts::Unlimited => true,
            Attempts::Bounded(max) => attempt <= *max,
        }
    }

    pub fn max(&self) -> Option<u64> {
        match self {
            Attempts::Unlimited => None,
            Attempts::Bounded(max) => Some(*max),
        }
    }
}

/// Attempt budget and pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: Attempts,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: Attempts, delay: Duration) -> Self {
        Self { attempts, delay }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Attempts::Unlimited, Duration::from_secs(DEFAULT_RETRY_DELAY_SECS))
    }
}

/// How a retry loop ended without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome {
    Succeeded { attempts: u64 },
    Exhausted { attempts: u64 },
}

impl RetryOutcome {
    pub fn attempts(&self) -> u64 {
        match self {
            RetryOutcome::Succeeded { attempts } | RetryOutcome::Exhausted { attempts } => *attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RetryOutcome::Succeeded { .. })
    }
}

/// Run `operation` until it reports success or the attempt budget runs out.
///
/// `operation` returns `Ok(false)` for a retryable failure; any `Err` is fatal
/// and returned immediately without waiting. After every failed attempt,
/// including the last one, a notice is written to `out` and `sleep` is called
/// with the policy delay.
pub fn run_with_retries<W, E, S, F>(
    policy: &RetryPolicy,
    out: &mut W,
    mut sleep: S,
    mut operation: F,
) -> Result<RetryOutcome, E>
where
    W: Write,
    E: From<std::io::Error>,
    S: FnMut(Duration),
    F: FnMut(&mut W) -> Result<bool, E>,
{
    let mut attempt: u64 = 0;

    while policy.attempts.allows(attempt.saturating_add(1)) {
        attempt += 1;
        log::debug!("Attempt {} of {:?}", attempt, policy.attempts.max());

        if operation(out)? {
            return Ok(RetryOutcome::Succeeded { attempts: attempt });
        }

        writeln!(out, "{} {} seconds...", MSG_RETRY_NOTICE, policy.delay.as_secs())?;
        out.flush()?;
        sleep(policy.delay);
    }

    log::warn!("Giving up after {} failed attempts", attempt);
    Ok(RetryOutcome::Exhausted { attempts: attempt })
}
