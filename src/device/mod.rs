//! One heat pump behind one Modbus TCP endpoint.
//!
//! The underlying protocol is half-duplex with sequential transaction
//! semantics, so every operation against a session, read cycle or write,
//! goes through the single lock owned by [`HeatPump`]. Separate configured
//! endpoints are fully independent instances.

pub mod catalog;
pub mod control;
pub mod poll;
pub mod transport;

use tokio::sync::Mutex;

use crate::config::PumpConfig;
use crate::data_mgmt::models::Record;
use crate::error::{PollError, WriteError};

use transport::{ModbusTransport, TcpTransport};

pub struct HeatPump<T: ModbusTransport> {
    session: Mutex<T>,
}

impl HeatPump<TcpTransport> {
    pub fn from_config(config: &PumpConfig) -> Self {
        HeatPump::new(TcpTransport::new(config))
    }
}

impl<T: ModbusTransport> HeatPump<T> {
    pub fn new(transport: T) -> Self {
        HeatPump {
            session: Mutex::new(transport),
        }
    }

    /// Run one refresh cycle and return the freshly assembled value map.
    pub async fn refresh(&self) -> Result<Record, PollError> {
        let mut session = self.session.lock().await;
        poll::run_cycle(&mut *session).await
    }

    pub async fn write_setpoint(&self, name: &str, value: f64) -> Result<(), WriteError> {
        let mut session = self.session.lock().await;
        control::write_setpoint(&mut *session, name, value).await
    }

    pub async fn write_mode(&self, name: &str, code: i64) -> Result<(), WriteError> {
        let mut session = self.session.lock().await;
        control::write_mode(&mut *session, name, code).await
    }

    pub async fn write_flag(&self, name: &str, value: bool) -> Result<(), WriteError> {
        let mut session = self.session.lock().await;
        control::write_flag(&mut *session, name, value).await
    }

    /// Tear down the connection. The next operation reconnects on demand.
    pub async fn close(&self) {
        let mut session = self.session.lock().await;
        session.close().await;
    }
}
