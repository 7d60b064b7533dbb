//! Command executor: validated single-register and single-coil writes.
//!
//! Values are checked against the catalog's write ranges before any wire
//! traffic. A disconnected session gets one reconnect attempt. There is no
//! optimistic state update; callers re-refresh to observe the effect.

use crate::data_mgmt::codec;
use crate::error::WriteError;

use super::catalog::{self, Decode, RegisterDef};
use super::transport::ModbusTransport;

/// Write a temperature setpoint (holding register with tenth-degree scale).
pub async fn write_setpoint<T: ModbusTransport>(
    session: &mut T,
    name: &str,
    value: f64,
) -> Result<(), WriteError> {
    let def = lookup_holding(name)?;
    if def.decode != Decode::Temp {
        return Err(WriteError::Unsupported {
            name: name.to_string(),
            kind: "setpoint",
        });
    }
    check_range(def, value)?;
    let raw = codec::encode_signed_scaled(value);
    ensure_connected(session).await?;
    session.write_register(def.address, raw).await?;
    log::info!("set {} to {:.1}", name, value);
    Ok(())
}

/// Write an unscaled integer control register (operation mode, fan mode,
/// pump speed bounds).
pub async fn write_mode<T: ModbusTransport>(
    session: &mut T,
    name: &str,
    code: i64,
) -> Result<(), WriteError> {
    let def = lookup_holding(name)?;
    if def.decode != Decode::RawInt {
        return Err(WriteError::Unsupported {
            name: name.to_string(),
            kind: "mode",
        });
    }
    check_range(def, code as f64)?;
    ensure_connected(session).await?;
    session.write_register(def.address, code as u16).await?;
    log::info!("set {} to {}", name, code);
    Ok(())
}

/// Write a binary control flag (power, DHW, silent mode).
pub async fn write_flag<T: ModbusTransport>(
    session: &mut T,
    name: &str,
    value: bool,
) -> Result<(), WriteError> {
    let def =
        catalog::coil_register(name).ok_or_else(|| WriteError::UnknownRegister(name.to_string()))?;
    ensure_connected(session).await?;
    session.write_coil(def.address, value).await?;
    log::info!("set {} to {}", name, value);
    Ok(())
}

fn lookup_holding(name: &str) -> Result<&'static RegisterDef, WriteError> {
    catalog::holding_register(name).ok_or_else(|| WriteError::UnknownRegister(name.to_string()))
}

fn check_range(def: &RegisterDef, value: f64) -> Result<(), WriteError> {
    if let Some((min, max)) = def.write_range {
        if !(min..=max).contains(&value) {
            return Err(WriteError::OutOfRange {
                name: def.name.to_string(),
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}

async fn ensure_connected<T: ModbusTransport>(session: &mut T) -> Result<(), WriteError> {
    if !session.is_connected() {
        log::warn!("session not connected; reconnecting before write");
        session.connect().await?;
    }
    Ok(())
}
