//! Identity values matching the synthesized `id` column default.
//!
//! The column default computes
//! `((unix_seconds - 1563741060) * 100000) + (RANDOM() & 65535)` inside the
//! database. Hosts that need to know a row's id before inserting it can
//! generate one here with the same shape.

use chrono::Utc;
use thiserror::Error;

/// Epoch offset, in Unix seconds, shared with the column default.
pub const ID_EPOCH: i64 = 1_563_741_060;

/// Multiplier that leaves room for the random low part.
const ID_SCALE: i64 = 100_000;

#[derive(Error, Debug)]
pub enum IdError {
    #[error("Random source unavailable: {0}")]
    Entropy(#[from] getrandom::Error),
}

/// Deterministic core of [`generate_id`].
pub fn generate_id_at(unix_seconds: i64, salt: u16) -> i64 {
    (unix_seconds - ID_EPOCH) * ID_SCALE + i64::from(salt)
}

/// Generate an id for the current time with a random low part.
pub fn generate_id() -> Result<i64, IdError> {
    let mut bytes = [0u8; 2];
    getrandom::getrandom(&mut bytes)?;
    Ok(generate_id_at(Utc::now().timestamp(), u16::from_le_bytes(bytes)))
}
