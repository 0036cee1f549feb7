// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client-side request throttling.
//!
//! A [`RateLimiter`] is shared (behind an `Arc`) by every client built from the
//! same [`RestConfig`](crate::config::RestConfig), so all of them draw from one
//! budget. [`RateLimitLayer`] plugs a limiter into the `tower` stack of a
//! `kube::Client`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{ready, Context, Poll};
use std::time::Duration;
use tokio::time::{sleep, Instant, Sleep};
use tower::{Layer, Service};

/// Throttling policy applied to outgoing requests
pub trait RateLimiter: Send + Sync + fmt::Debug {
    /// Take a token if one is available right now
    fn try_accept(&self) -> bool;

    /// Take a token, returning how long the caller must wait before using it
    fn reserve(&self) -> Duration;

    /// Sustained queries per second
    fn qps(&self) -> f32;

    /// Maximum number of requests allowed in a burst
    fn burst(&self) -> u32;
}

/// Token bucket holding up to `burst` tokens, refilled at `qps` tokens per second.
///
/// The bucket starts full. Reservations may drive it negative; the debt is
/// paid back by the caller waiting for the returned delay.
#[derive(Debug)]
pub struct TokenBucketRateLimiter {
    qps: f32,
    burst: u32,
    bucket: Mutex<Bucket>,
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last: Instant,
}

impl TokenBucketRateLimiter {
    pub fn new(qps: f32, burst: u32) -> Self {
        Self {
            qps,
            burst,
            bucket: Mutex::new(Bucket {
                tokens: capacity(burst),
                last: Instant::now(),
            }),
        }
    }

    /// Wait until a token is available
    pub async fn accept(&self) {
        let delay = self.reserve();
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }

    fn refill(&self, bucket: &mut Bucket) {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(bucket.last).as_secs_f64();
        bucket.last = now;

        if self.qps > 0.0 {
            bucket.tokens = (bucket.tokens + elapsed * f64::from(self.qps)).min(capacity(self.burst));
        }
    }
}

// A zero burst would never admit a request
fn capacity(burst: u32) -> f64 {
    f64::from(burst.max(1))
}

impl RateLimiter for TokenBucketRateLimiter {
    fn try_accept(&self) -> bool {
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
        self.refill(&mut bucket);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    fn reserve(&self) -> Duration {
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
        self.refill(&mut bucket);
        bucket.tokens -= 1.0;

        if bucket.tokens >= 0.0 {
            Duration::ZERO
        } else if self.qps <= 0.0 {
            Duration::MAX
        } else {
            // Waits too long for a Duration saturate, like a bucket that never refills
            Duration::try_from_secs_f64(-bucket.tokens / f64::from(self.qps)).unwrap_or(Duration::MAX)
        }
    }

    fn qps(&self) -> f32 {
        self.qps
    }

    fn burst(&self) -> u32 {
        self.burst
    }
}

/// Limiter that admits every request immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct Unthrottled;

impl RateLimiter for Unthrottled {
    fn try_accept(&self) -> bool {
        true
    }

    fn reserve(&self) -> Duration {
        Duration::ZERO
    }

    fn qps(&self) -> f32 {
        f32::INFINITY
    }

    fn burst(&self) -> u32 {
        u32::MAX
    }
}

/// `tower` layer that throttles the wrapped service with a shared limiter
#[derive(Clone, Debug)]
pub struct RateLimitLayer {
    limiter: Arc<dyn RateLimiter>,
}

impl RateLimitLayer {
    pub fn new(limiter: Arc<dyn RateLimiter>) -> Self {
        Self { limiter }
    }
}

impl<S> Layer<S> for RateLimitLayer {
    type Service = RateLimitService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RateLimitService {
            inner,
            limiter: self.limiter.clone(),
            permit: Permit::Idle,
        }
    }
}

/// Service produced by [`RateLimitLayer`]. Readiness is withheld until a token
/// has been reserved and its delay has elapsed.
pub struct RateLimitService<S> {
    inner: S,
    limiter: Arc<dyn RateLimiter>,
    permit: Permit,
}

enum Permit {
    Idle,
    Waiting(Pin<Box<Sleep>>),
    Ready,
}

impl<S, Req> Service<Req> for RateLimitService<S>
where
    S: Service<Req>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        loop {
            match &mut self.permit {
                Permit::Idle => {
                    let delay = self.limiter.reserve();
                    self.permit = if delay.is_zero() {
                        Permit::Ready
                    } else {
                        Permit::Waiting(Box::pin(sleep(delay)))
                    };
                }
                Permit::Waiting(delay) => {
                    ready!(delay.as_mut().poll(cx));
                    self.permit = Permit::Ready;
                }
                Permit::Ready => return self.inner.poll_ready(cx),
            }
        }
    }

    fn call(&mut self, req: Req) -> Self::Future {
        // The reserved token is spent on this request
        self.permit = Permit::Idle;
        self.inner.call(req)
    }
}
