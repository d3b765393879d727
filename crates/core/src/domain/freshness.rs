//! Record freshness and ordering
//!
//! A record is "new" when it was created at most 24 hours (elapsed time, not
//! calendar days) before `now`. Lists are shown newest first; records with
//! the same timestamp keep the order the API returned them in.
//!
//! Both the flag and the position are recomputed on every fetch.

use chrono::{DateTime, Utc};

/// Freshness window: 24 hours in milliseconds
pub const FRESHNESS_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Anything carrying a creation timestamp
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
}

/// Records that carry a derived freshness flag
pub trait Flagged: Timestamped {
    fn set_new(&mut self, is_new: bool);
}

/// Check whether a record created at `created_at` is still fresh at `now_millis`
///
/// Timestamps in the future count as fresh.
pub fn is_fresh(created_at: DateTime<Utc>, now_millis: i64) -> bool {
    now_millis.saturating_sub(created_at.timestamp_millis()) <= FRESHNESS_WINDOW_MS
}

/// Sort newest first (stable on equal timestamps)
pub fn order_newest_first<T: Timestamped>(items: &mut [T]) {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// Tag every record with its freshness flag and sort newest first
///
/// Applying this twice with the same `now_millis` gives the same result.
pub fn tag_and_order<T: Flagged>(mut items: Vec<T>, now_millis: i64) -> Vec<T> {
    for item in items.iter_mut() {
        let fresh = is_fresh(item.created_at(), now_millis);
        item.set_new(fresh);
    }
    order_newest_first(&mut items);
    items
}
