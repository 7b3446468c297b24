use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Token-bucket gate in front of the embedding service.
///
/// Callers `acquire` one token per request; tokens refill at a fixed rate up
/// to the bucket capacity. With capacity 1 this degenerates to a minimum
/// inter-request interval, which matches the service's per-request rate
/// limit while still letting a larger capacity admit short bursts.
pub struct RequestGate {
    state: Mutex<BucketState>,
    capacity: f64,
    refill_per_sec: f64,
}

struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

impl RequestGate {
    /// Create a gate with the given burst capacity and refill rate
    #[must_use]
    pub fn new(capacity: u32, refill_per_sec: f64) -> Self {
        let capacity = f64::from(capacity.max(1));
        Self {
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
            capacity,
            refill_per_sec: refill_per_sec.max(f64::MIN_POSITIVE),
        }
    }

    /// Convenience constructor: one request per `interval`, no bursting
    #[must_use]
    pub fn per_request_interval(interval: Duration) -> Self {
        Self::new(1, 1.0 / interval.as_secs_f64().max(f64::MIN_POSITIVE))
    }

    /// Wait until one request token is available, then consume it
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut state = self.state.lock().await;
                let now = Instant::now();
                let elapsed = now.duration_since(state.last_refill).as_secs_f64();
                state.tokens = (state.tokens + elapsed * self.refill_per_sec).min(self.capacity);
                state.last_refill = now;

                if state.tokens >= 1.0 {
                    state.tokens -= 1.0;
                    return;
                }
                Duration::from_secs_f64((1.0 - state.tokens) / self.refill_per_sec)
            };
            // Sleep outside the lock so concurrent callers can queue up.
            tokio::time::sleep(wait).await;
        }
    }
}
