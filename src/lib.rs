//! Modbus TCP data-acquisition core for CX-series heat pumps.
//!
//! The crate polls a heat-pump controller, decodes its register map into
//! named engineering values, derives a coefficient-of-performance metric,
//! and exposes a small validated write surface for setpoints, modes and
//! flags. Scheduling and presentation belong to the embedding host.

pub mod config;
pub mod constants;
pub mod data_mgmt;
pub mod device;
pub mod error;

pub use config::PumpConfig;
pub use data_mgmt::models::{Record, RtValue};
pub use device::transport::{ModbusTransport, TcpTransport};
pub use device::HeatPump;
pub use error::{ConfigError, PollError, TransportError, WriteError};
