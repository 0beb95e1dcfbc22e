//! Per-client request throttling.
//!
//! A shared counter keyed by client IP: each client gets a fixed number of
//! requests per window, and a client's counter expires once it has been
//! quiet for a full window. Expiry is evaluated at check time, so no
//! background task is needed.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Requests allowed per client per window.
const CLIENT_USE_THRESHOLD: u32 = 5;

/// Quiet period after which a client's counter resets.
const CLIENT_USE_RESET: Duration = Duration::from_secs(5 * 60);

#[derive(Debug)]
struct ClientUsage {
    count: u32,
    last_seen: Instant,
}

/// Allow/deny gate keyed by client identity.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    clients: Arc<Mutex<HashMap<IpAddr, ClientUsage>>>,
    threshold: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_limits(CLIENT_USE_THRESHOLD, CLIENT_USE_RESET)
    }

    pub fn with_limits(threshold: u32, window: Duration) -> Self {
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            threshold,
            window,
        }
    }

    /// Returns whether the client is allowed another request, counting this
    /// one if so.
    pub fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut clients = self.clients.lock().expect("rate limiter lock poisoned");

        // Drop every counter that has been quiet for a full window, not
        // just this client's, so the map cannot grow without bound.
        let window = self.window;
        clients.retain(|_, usage| now.duration_since(usage.last_seen) < window);

        let usage = clients.entry(client).or_insert(ClientUsage {
            count: 0,
            last_seen: now,
        });
        if usage.count >= self.threshold {
            return false;
        }
        usage.count += 1;
        usage.last_seen = now;
        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
