use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};
use reqwest::Response;

pub struct RateLimiter {
    state: Arc<Mutex<RateLimitState>>,
    min_interval: Duration,
}

struct RateLimitState {
    next_slot: Instant,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(RateLimitState {
                next_slot: Instant::now(),
            })),
            min_interval,
        }
    }

    /// Waits for the next free slot. Slots are handed out in call order.
    pub async fn wait(&self) {
        let slot = {
            let mut state = self.state.lock().await;
            let slot = state.next_slot.max(Instant::now());
            state.next_slot = slot + self.min_interval;
            slot
        };

        if slot > Instant::now() {
            tracing::trace!("Pacing upstream request by {:?}", slot - Instant::now());
        }
        sleep_until(slot).await;
    }

    pub async fn back_off(&self, delay: Duration) {
        let mut state = self.state.lock().await;
        let resume_at = Instant::now() + delay;
        if resume_at > state.next_slot {
            tracing::info!("Torre rate limited us, pausing requests for {:?}", delay);
            state.next_slot = resume_at;
        }
    }
}

/// `Retry-After` (in seconds) on a 429 response, if the upstream sent one.
pub fn retry_after(response: &Response) -> Option<Duration> {
    if response.status() != reqwest::StatusCode::TOO_MANY_REQUESTS {
        return None;
    }

    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}
