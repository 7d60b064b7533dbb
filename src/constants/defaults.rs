use std::time::Duration;

pub const PORT: u16 = 502;
pub const UNIT_ID: u8 = 1;
pub const POLL_INTERVAL_S: u64 = 30;
pub const MIN_POLL_INTERVAL_S: u64 = 5;
pub const MAX_POLL_INTERVAL_S: u64 = 300;
pub const MIN_UNIT_ID: u8 = 1;
pub const MAX_UNIT_ID: u8 = 247;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Turnaround pause between consecutive individual register requests.
/// The RS485 bridge behind the controller needs a short breather; this is a
/// tunable, not a protocol requirement.
pub const INTER_REQUEST_DELAY: Duration = Duration::from_millis(50);

pub const LOG_LEVEL: &str = "info";
