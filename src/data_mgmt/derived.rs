//! Values computed from raw readings after a refresh cycle.
//!
//! Derived entries are only ever published when every input they need was
//! read this cycle and passes plausibility bounds; otherwise the key is
//! left absent. A missing metric is information, a fabricated one is not.

use crate::constants::device::{MODE_COOL, MODE_HEAT, STATE_DEFROST};
use crate::data_mgmt::models::{Record, RtValue};

/// Specific heat of water, J/(kg*K).
const WATER_SPECIFIC_HEAT: f64 = 4186.0;
/// Below this electrical draw the COP ratio is noise.
const MIN_ELECTRICAL_POWER_W: f64 = 10.0;
/// Plausibility band for a heat-pump COP.
const COP_MIN: f64 = 0.5;
const COP_MAX: f64 = 10.0;

/// Combine the two run-hour words into one 32-bit counter.
///
/// Published only when both words were read in this cycle; a lone high or
/// low word stays unpublished rather than producing a bogus total.
pub fn compose_run_hours(record: &mut Record) {
    let high = record.get_field("run_hours_high").and_then(RtValue::as_i64);
    let low = record.get_field("run_hours_low").and_then(RtValue::as_i64);
    if let (Some(high), Some(low)) = (high, low) {
        record.set_field("run_hours", RtValue::Int((high << 16) | low));
    }
}

/// Coil state inferred from register data instead of direct coil reads.
///
/// Direct coil reads are disabled for this device class: the RS485 bridge
/// mangles transaction ids on function code 1, so binary state is derived
/// from registers that are already in the record. Swap this function for
/// real coil reads if a firmware without the instability is targeted.
///
/// `power` only reflects "controller is communicating"; it cannot
/// distinguish powered-and-idle from off.
pub fn derive_coil_state(record: &mut Record) {
    let any_data = !record.is_empty();
    record.set_field("power", RtValue::Bool(any_data));

    let mode = record.get_field("operation_mode").and_then(RtValue::as_i64);
    record.set_field("heating_mode", RtValue::Bool(mode == Some(MODE_HEAT)));
    record.set_field("cooling_mode", RtValue::Bool(mode == Some(MODE_COOL)));

    let state = record.get_field("operating_state").and_then(RtValue::as_i64);
    record.set_field("defrost_active", RtValue::Bool(state == Some(STATE_DEFROST)));

    record.set_field("dhw_mode_active", RtValue::Bool(false));
    record.set_field("silent_mode", RtValue::Bool(false));
}

/// Coefficient of performance from flow, temperature delta and electrical
/// draw. Thermal power is flow (L/min) x 4186 J/(kg*K) x |dT| / 60 s,
/// with water at 1 kg/L.
pub fn derive_cop(record: &mut Record) {
    let Some(flow) = record.get_field("flow_rate").and_then(RtValue::as_f64) else {
        return;
    };
    let Some(inlet) = record
        .get_field("water_inlet_temp")
        .and_then(RtValue::as_f64)
    else {
        return;
    };
    let Some(outlet) = record
        .get_field("water_outlet_temp")
        .and_then(RtValue::as_f64)
    else {
        return;
    };
    let Some(voltage) = record.get_field("input_voltage").and_then(RtValue::as_f64) else {
        return;
    };
    let Some(current) = record.get_field("input_current").and_then(RtValue::as_f64) else {
        return;
    };

    let thermal_power = flow * WATER_SPECIFIC_HEAT * (outlet - inlet).abs() / 60.0;
    let electrical_power = voltage * current;

    if electrical_power < MIN_ELECTRICAL_POWER_W {
        log::debug!(
            "skipping COP: electrical power {:.1} W below threshold",
            electrical_power
        );
        return;
    }

    let cop = thermal_power / electrical_power;
    if !(COP_MIN..=COP_MAX).contains(&cop) {
        log::debug!("skipping COP: ratio {:.2} outside plausibility band", cop);
        return;
    }

    record.set_field("cop", RtValue::Float((cop * 100.0).round() / 100.0));
}
