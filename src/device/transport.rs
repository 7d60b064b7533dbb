//! Transport session: owns the TCP connection, knows nothing about the
//! register map.
//!
//! The trait seam exists so the poll engine and command executor can be
//! exercised against an in-memory transport in tests; `TcpTransport` is the
//! production implementation over tokio-modbus.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use tokio::time::timeout;
use tokio_modbus::client::Context;
use tokio_modbus::prelude::*;

use crate::config::PumpConfig;
use crate::constants::defaults;
use crate::error::TransportError;

#[allow(async_fn_in_trait)]
pub trait ModbusTransport {
    async fn connect(&mut self) -> Result<(), TransportError>;
    async fn close(&mut self);
    fn is_connected(&self) -> bool;

    async fn read_input_registers(
        &mut self,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError>;
    async fn read_holding_registers(
        &mut self,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError>;
    async fn write_register(&mut self, address: u16, value: u16) -> Result<(), TransportError>;
    async fn write_coil(&mut self, address: u16, value: bool) -> Result<(), TransportError>;
}

/// Modbus TCP session for one configured endpoint.
pub struct TcpTransport {
    host: String,
    port: u16,
    unit_id: u8,
    connect_timeout: Duration,
    request_timeout: Duration,
    ctx: Option<Context>,
}

impl TcpTransport {
    pub fn new(config: &PumpConfig) -> Self {
        TcpTransport {
            host: config.host.clone(),
            port: config.port,
            unit_id: config.unit_id,
            connect_timeout: defaults::CONNECT_TIMEOUT,
            request_timeout: defaults::REQUEST_TIMEOUT,
            ctx: None,
        }
    }

    fn socket_addr(&self) -> Result<SocketAddr, TransportError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| TransportError::Resolve(format!("{}: {}", self.host, e)))?
            .next()
            .ok_or_else(|| TransportError::Resolve(self.host.clone()))
    }

    fn ctx_mut(&mut self) -> Result<&mut Context, TransportError> {
        self.ctx.as_mut().ok_or(TransportError::NotConnected)
    }
}

impl ModbusTransport for TcpTransport {
    /// Open the TCP connection, dropping any previous one first. Safe to
    /// call while already connected.
    async fn connect(&mut self) -> Result<(), TransportError> {
        if let Some(mut old) = self.ctx.take() {
            log::debug!("closing existing connection before reconnecting");
            let _ = old.disconnect().await;
        }

        let socket_addr = self.socket_addr()?;
        log::debug!(
            "connecting to Modbus TCP device at {}/{}",
            socket_addr,
            self.unit_id
        );

        let connected = timeout(
            self.connect_timeout,
            tcp::connect_slave(socket_addr, Slave(self.unit_id)),
        )
        .await;

        match connected {
            Err(_) => Err(TransportError::Connect(format!(
                "timed out after {:?}",
                self.connect_timeout
            ))),
            Ok(Err(e)) => Err(TransportError::Connect(e.to_string())),
            Ok(Ok(ctx)) => {
                log::info!(
                    "connected to Modbus TCP device {}/{}",
                    socket_addr,
                    self.unit_id
                );
                self.ctx = Some(ctx);
                Ok(())
            }
        }
    }

    async fn close(&mut self) {
        if let Some(mut ctx) = self.ctx.take() {
            let _ = ctx.disconnect().await;
            log::info!("disconnected from Modbus TCP device {}", self.host);
        }
    }

    fn is_connected(&self) -> bool {
        self.ctx.is_some()
    }

    async fn read_input_registers(
        &mut self,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError> {
        let request_timeout = self.request_timeout;
        let ctx = self.ctx_mut()?;
        match timeout(request_timeout, ctx.read_input_registers(address, count)).await {
            Err(_) => Err(TransportError::Timeout),
            Ok(Err(e)) => Err(TransportError::Io(e.to_string())),
            Ok(Ok(Err(exc))) => Err(TransportError::Device(exc.to_string())),
            Ok(Ok(Ok(words))) => Ok(words),
        }
    }

    async fn read_holding_registers(
        &mut self,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError> {
        let request_timeout = self.request_timeout;
        let ctx = self.ctx_mut()?;
        match timeout(request_timeout, ctx.read_holding_registers(address, count)).await {
            Err(_) => Err(TransportError::Timeout),
            Ok(Err(e)) => Err(TransportError::Io(e.to_string())),
            Ok(Ok(Err(exc))) => Err(TransportError::Device(exc.to_string())),
            Ok(Ok(Ok(words))) => Ok(words),
        }
    }

    async fn write_register(&mut self, address: u16, value: u16) -> Result<(), TransportError> {
        let request_timeout = self.request_timeout;
        let ctx = self.ctx_mut()?;
        match timeout(request_timeout, ctx.write_single_register(address, value)).await {
            Err(_) => Err(TransportError::Timeout),
            Ok(Err(e)) => Err(TransportError::Io(e.to_string())),
            Ok(Ok(Err(exc))) => Err(TransportError::Device(exc.to_string())),
            Ok(Ok(Ok(()))) => {
                log::debug!("wrote {} to register {}", value, address);
                Ok(())
            }
        }
    }

    async fn write_coil(&mut self, address: u16, value: bool) -> Result<(), TransportError> {
        let request_timeout = self.request_timeout;
        let ctx = self.ctx_mut()?;
        match timeout(request_timeout, ctx.write_single_coil(address, value)).await {
            Err(_) => Err(TransportError::Timeout),
            Ok(Err(e)) => Err(TransportError::Io(e.to_string())),
            Ok(Ok(Err(exc))) => Err(TransportError::Device(exc.to_string())),
            Ok(Ok(Ok(()))) => {
                log::debug!("wrote {} to coil {}", value, address);
                Ok(())
            }
        }
    }
}
