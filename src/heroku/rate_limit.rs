//! Request rate limiting shared by the tasks of one aggregation pass

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota,
};
use std::num::NonZeroU32;

/// Token bucket admitting at most `per_second` operations per second
///
/// The bucket holds a single token, so admissions are spaced evenly
/// (25ms apart at 40/s) and no one-second window ever sees more than
/// `per_second` of them.
#[derive(Debug)]
pub struct RateLimiter {
    inner: governor::RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RateLimiter {
    /// Create a limiter; a zero rate is treated as one per second
    pub fn new(per_second: u32) -> Self {
        let rate = NonZeroU32::new(per_second).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(rate).allow_burst(NonZeroU32::MIN);
        Self {
            inner: governor::RateLimiter::direct(quota),
        }
    }

    /// Wait until the caller may issue its next request
    pub async fn acquire(&self) {
        self.inner.until_ready().await;
    }
}
