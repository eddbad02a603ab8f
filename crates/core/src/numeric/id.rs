//! Best-effort unique identifiers.
//!
//! Ids look like `1767225600000_k3j9x0a2b`: Unix milliseconds, an underscore,
//! then nine base-36 characters. They are practically unique within a
//! process, but not guaranteed unique and not suitable as secrets.

use chrono::Utc;
use uuid::Uuid;

/// Length of the random suffix.
pub const ID_SUFFIX_LEN: usize = 9;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a new `<millis>_<suffix>` identifier.
///
/// The suffix draws on the OS random source behind UUID v4. No collision
/// check or retry is performed.
#[must_use]
pub fn generate_id() -> String {
    compose_id(Utc::now().timestamp_millis(), Uuid::new_v4().as_u128())
}

/// Builds an id from a timestamp and a random value.
///
/// Only the low-order base-36 digits of `entropy` are used.
fn compose_id(millis: i64, entropy: u128) -> String {
    let mut id = millis.to_string();
    id.push('_');
    id.push_str(&base36_suffix(entropy));
    id
}

fn base36_suffix(mut entropy: u128) -> String {
    let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        #[allow(clippy::cast_possible_truncation)]
        let digit = (entropy % 36) as usize;
        suffix.push(char::from(BASE36_DIGITS[digit]));
        entropy /= 36;
    }
    suffix
}
