use thiserror::Error;

/// Errors raised by the transport session itself.
///
/// Exception responses from the device and local I/O failures are kept as
/// separate variants so callers can tell a misbehaving device apart from a
/// broken link. All variants are recoverable; none of them should take the
/// process down.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("could not resolve host '{0}'")]
    Resolve(String),
    #[error("connect failed: {0}")]
    Connect(String),
    #[error("request timed out")]
    Timeout,
    #[error("i/o error: {0}")]
    Io(String),
    #[error("device exception: {0}")]
    Device(String),
    #[error("not connected")]
    NotConnected,
}

/// Outcome of a refresh cycle that produced no usable data.
///
/// Individual register failures are absorbed within the cycle; only a failed
/// connect or a cycle where every single register read failed surfaces here.
#[derive(Error, Debug)]
pub enum PollError {
    #[error("could not connect to device: {0}")]
    Connect(#[from] TransportError),
    #[error("all register reads failed this cycle")]
    TotalReadFailure,
}

/// Errors from the write surface (setpoints, modes, flags).
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("no such register '{0}'")]
    UnknownRegister(String),
    #[error("register '{name}' does not accept {kind} writes")]
    Unsupported { name: String, kind: &'static str },
    #[error("value {value} for '{name}' outside allowed range {min}..={max}")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("unit id {0} outside valid range 1-247")]
    UnitId(u8),
    #[error("poll interval {0}s outside valid range 5-300s")]
    PollInterval(u64),
}
