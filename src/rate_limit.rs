use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::warn;

use crate::api::models::ErrorResponse;

/// Fixed-window request limiter keyed by client IP. Runs in front of the API
/// handlers; everything it rejects never reaches a store operation.
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

struct Window {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        RateLimiter {
            window,
            max_requests,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub async fn try_acquire(&self, ip: IpAddr) -> bool {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();
        let entry = windows.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });
        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }
        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }
}

pub async fn limit(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request,
    next: Next,
) -> Response {
    // Requests served without a peer address (in-process tests) share one bucket.
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));

    if limiter.try_acquire(ip).await {
        next.run(req).await
    } else {
        warn!(%ip, "rate limit exceeded");
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "Too Many Requests".to_string(),
                message: "Too many requests from this IP, please try again later.".to_string(),
                fields: None,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[tokio::test]
    async fn rejects_beyond_max_within_window() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 3);
        for _ in 0..3 {
            assert!(limiter.try_acquire(ip(1)).await);
        }
        assert!(!limiter.try_acquire(ip(1)).await);
        // other clients are unaffected
        assert!(limiter.try_acquire(ip(2)).await);
    }

    #[tokio::test]
    async fn window_resets_after_expiry() {
        let limiter = RateLimiter::new(Duration::from_millis(20), 1);
        assert!(limiter.try_acquire(ip(1)).await);
        assert!(!limiter.try_acquire(ip(1)).await);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(limiter.try_acquire(ip(1)).await);
    }
}
