//! Fan-out/fan-in aggregation engine
//!
//! An [`AggregationPass`] owns the rate limiter for one aggregation run.
//! Each fan-out level runs one future per item with bounded concurrency,
//! appends successful records to a collection owned by that level, and waits
//! for every task before reporting. Failures never cancel siblings and never
//! roll back records that other tasks already appended; the first failure (in
//! completion order) is returned next to the collected records.

use futures::future;
use futures::stream::{self, StreamExt};
use log::debug;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use crate::config::limits;
use crate::error::{HerokuError, Result};
use crate::heroku::RateLimiter;

/// Records gathered by an aggregation, with the first failure if any occurred
///
/// A present `error` means at least one task failed; `value` then holds
/// whatever the other tasks produced.
#[derive(Debug)]
pub struct Partial<T> {
    pub value: T,
    pub error: Option<HerokuError>,
}

impl<T> Partial<T> {
    /// A result with no failures
    pub fn complete(value: T) -> Self {
        Self { value, error: None }
    }

    /// Whether every task succeeded
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Transform the collected value, keeping the error
    pub fn map<U, F>(self, f: F) -> Partial<U>
    where
        F: FnOnce(T) -> U,
    {
        Partial {
            value: f(self.value),
            error: self.error,
        }
    }

    /// Discard partial data when any task failed
    pub fn into_result(self) -> Result<T> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.value),
        }
    }
}

/// Shared state of one aggregation run
pub struct AggregationPass {
    limiter: RateLimiter,
    max_concurrency: usize,
}

impl Default for AggregationPass {
    fn default() -> Self {
        Self::new(limits::REQUESTS_PER_SECOND, limits::MAX_CONCURRENT_TASKS)
    }
}

impl AggregationPass {
    /// Create a pass with its own rate limiter and concurrency bound
    pub fn new(requests_per_second: u32, max_concurrency: usize) -> Self {
        Self {
            limiter: RateLimiter::new(requests_per_second),
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Run one task per seed without rate limiting
    ///
    /// Seed tasks list their dependents and usually fan out again. A task
    /// returning `Err` records nothing for its seed; a task returning a
    /// [`Partial`] with an error records the value and forwards the error.
    pub async fn for_each_seed<S, R, F, Fut>(&self, seeds: Vec<S>, task: F) -> Partial<Vec<R>>
    where
        F: Fn(S) -> Fut,
        Fut: Future<Output = Result<Partial<R>>>,
    {
        self.gather(seeds, false, task).await
    }

    /// Run one rate-limited task per dependent entity
    ///
    /// Every task waits on the pass's rate limiter before it starts its
    /// remote calls. A failing task records nothing for its entity.
    pub async fn fan_out<S, R, F, Fut>(&self, dependents: Vec<S>, task: F) -> Partial<Vec<R>>
    where
        F: Fn(S) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        self.gather(dependents, true, |item| {
            let fut = task(item);
            async move { fut.await.map(Partial::complete) }
        })
        .await
    }

    async fn gather<S, R, F, Fut>(&self, items: Vec<S>, throttled: bool, task: F) -> Partial<Vec<R>>
    where
        F: Fn(S) -> Fut,
        Fut: Future<Output = Result<Partial<R>>>,
    {
        let total = items.len();
        debug!(
            "Fanning out {} tasks (throttled: {}, max {} concurrent)",
            total, throttled, self.max_concurrency
        );

        let collected: Mutex<Vec<R>> = Mutex::new(Vec::with_capacity(total));
        let collected_ref = &collected;
        let limiter = &self.limiter;
        let task = &task;

        let failures: Vec<HerokuError> = stream::iter(items)
            .map(move |item| async move {
                if throttled {
                    limiter.acquire().await;
                }
                match task(item).await {
                    Ok(partial) => {
                        collected_ref
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push(partial.value);
                        partial.error
                    }
                    Err(e) => Some(e),
                }
            })
            .buffer_unordered(self.max_concurrency)
            .filter_map(future::ready)
            .collect()
            .await;

        let value = collected
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        if failures.len() > 1 {
            debug!(
                "{} of {} tasks failed; keeping the first error",
                failures.len(),
                total
            );
        }

        Partial {
            value,
            error: failures.into_iter().next(),
        }
    }
}
