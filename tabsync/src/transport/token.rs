use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TOKEN_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a change token distinct from every token previously generated in
/// this process: wall-clock millis, a process-wide sequence number, and a
/// random component, encoded opaquely.
///
/// The value is never read back for content; observers react only to the
/// token slot changing.
pub fn generate_sync_token() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    let sequence = TOKEN_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    base64::encode(format!("{}-{}-{}", millis, sequence, fastrand::u64(..)))
}
