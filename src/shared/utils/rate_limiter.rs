use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Minimum-interval rate limiter for external API clients.
///
/// Callers `wait()` before each request; the limiter sleeps just long enough
/// to keep requests at least `min_interval` apart.
pub struct RateLimiter {
    last_request: Mutex<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        Self {
            last_request: Mutex::new(Instant::now() - min_interval),
            min_interval,
        }
    }

    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_from_rate() {
        let limiter = RateLimiter::new(0.5);
        assert_eq!(limiter.min_interval(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn first_wait_does_not_block() {
        let limiter = RateLimiter::new(0.5);
        let start = Instant::now();
        limiter.wait().await;
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn consecutive_waits_are_spaced() {
        let limiter = RateLimiter::new(20.0);
        limiter.wait().await;
        let start = Instant::now();
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(45));
    }
}
