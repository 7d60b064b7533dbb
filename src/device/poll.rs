//! Refresh cycle: one complete pass over the register map.
//!
//! The common case is a single bulk read of the hot telemetry block; any
//! bulk failure discards the partial result and falls back to individual
//! reads of the same registers. Per-register failures are logged and the
//! key omitted; only a cycle where nothing at all could be read fails.

use chrono::Utc;
use tokio::time::sleep;

use crate::constants::defaults;
use crate::data_mgmt::derived;
use crate::data_mgmt::models::Record;
use crate::error::PollError;

use super::catalog::{self, RegisterClass, RegisterDef};
use super::transport::ModbusTransport;

/// Run one refresh cycle against an already-locked session.
pub async fn run_cycle<T: ModbusTransport>(session: &mut T) -> Result<Record, PollError> {
    if !session.is_connected() {
        session.connect().await?;
    }

    let mut record = Record::new();
    record.set_timestamp(Utc::now());

    read_hot_block(session, &mut record).await;
    read_individually(session, catalog::COLD_INPUTS, &mut record).await;
    read_individually(session, catalog::HOLDINGS, &mut record).await;

    if record.is_empty() {
        // A cycle where nothing was readable usually means the link died
        // under us; tear the session down so the next cycle reconnects.
        log::error!("refresh cycle produced no readings at all; closing session");
        session.close().await;
        return Err(PollError::TotalReadFailure);
    }

    derived::compose_run_hours(&mut record);
    derived::derive_coil_state(&mut record);
    derived::derive_cop(&mut record);

    log::debug!("refresh cycle complete: {} values", record.len());
    Ok(record)
}

/// Bulk read of the contiguous hot block, decoding each catalogued offset.
/// Falls back to per-register reads on any error or short response.
async fn read_hot_block<T: ModbusTransport>(session: &mut T, record: &mut Record) {
    let (start, count) = catalog::hot_block_span();
    match session.read_input_registers(start, count).await {
        Ok(words) if words.len() == count as usize => {
            for def in catalog::HOT_INPUTS {
                let raw = words[(def.address - start) as usize];
                record.set_field(def.name, def.decode.apply(raw));
            }
            log::debug!("bulk read of {} words at {} ok", count, start);
        }
        Ok(words) => {
            log::warn!(
                "bulk read returned {} of {} words; falling back to individual reads",
                words.len(),
                count
            );
            read_individually(session, catalog::HOT_INPUTS, record).await;
        }
        Err(e) => {
            log::warn!(
                "bulk read at {} failed ({}); falling back to individual reads",
                start,
                e
            );
            read_individually(session, catalog::HOT_INPUTS, record).await;
        }
    }
}

/// Read each register on its own, omitting failures, with a turnaround
/// pause between requests.
async fn read_individually<T: ModbusTransport>(
    session: &mut T,
    defs: &[RegisterDef],
    record: &mut Record,
) {
    for def in defs {
        let result = match def.class {
            RegisterClass::Input => session.read_input_registers(def.address, 1).await,
            RegisterClass::Holding => session.read_holding_registers(def.address, 1).await,
            // Coils are never read; see derived::derive_coil_state.
            RegisterClass::Coil => continue,
        };
        match result {
            Ok(words) if !words.is_empty() => {
                record.set_field(def.name, def.decode.apply(words[0]));
            }
            Ok(_) => {
                log::warn!("empty response for '{}' at {}", def.name, def.address);
            }
            Err(e) => {
                log::warn!("read of '{}' at {} failed: {}", def.name, def.address, e);
            }
        }
        sleep(defaults::INTER_REQUEST_DELAY).await;
    }
}
