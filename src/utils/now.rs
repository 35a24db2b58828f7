use chrono::Utc;

/// Returns the current timestamp in microseconds since the UNIX epoch.
///
/// Used to stamp frames at the moment the reassembler emits them. A clock set
/// before the epoch yields `0`.
///
/// # Example:
/// ```rust
/// use hcicmd::utils::now;
/// let timestamp = now(); // Gets the current time in microseconds
/// ```
pub fn now() -> u64 {
    u64::try_from(Utc::now().timestamp_micros()).unwrap_or(0)
}
