//! Nonce generation for authenticated requests
//!
//! Bitfinex requires each authenticated request to carry a nonce strictly
//! greater than the last one seen for the key. Wall-clock nanoseconds give
//! enough headroom that two processes sharing a key rarely collide, but
//! within a process the counter below guarantees strict monotonicity even
//! when calls land on the same clock tick.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// Returns a nonce strictly greater than any previously returned by this
/// process.
///
/// Based on nanoseconds since the Unix epoch, bumped past the previous value
/// when the clock has not advanced. A process restart resets the counter to
/// the current clock, which stays monotonic as long as the clock itself does.
pub fn next_nonce() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos() as u64;

    let mut prev = LAST_NONCE.load(Ordering::Relaxed);
    loop {
        let nonce = now.max(prev + 1);
        match LAST_NONCE.compare_exchange_weak(prev, nonce, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return nonce,
            Err(actual) => prev = actual,
        }
    }
}
