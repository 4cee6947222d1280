//! Default alias generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Starting value for the alias counter. Chosen so the first generated
/// alias is already four base-36 digits.
const COUNTER_SEED: u64 = 1_000_000;

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates short alphanumeric aliases from a monotonically increasing
/// counter rendered in base-36.
///
/// Never returns the same alias twice for the lifetime of the generator.
/// The generator is pure with respect to storage: it does not consult the
/// alias table, so callers are responsible for checking generated values
/// against user-chosen custom aliases
/// (see [`crate::application::services::AliasService`]).
pub struct AliasGenerator {
    counter: AtomicU64,
}

impl AliasGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(COUNTER_SEED),
        }
    }

    /// Returns the next alias, advancing the counter by one.
    pub fn next(&self) -> String {
        to_base36(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();

    String::from_utf8(digits).expect("base-36 digits are ASCII")
}
