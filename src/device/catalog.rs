//! Static register catalog for the CX-series controller.
//!
//! Every address the engine touches is declared here; nothing outside this
//! table is ever requested. Adding or removing a monitored value is a
//! catalog edit only.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::data_mgmt::codec;
use crate::data_mgmt::models::RtValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterClass {
    Input,
    Holding,
    Coil,
}

/// How a raw 16-bit word maps to an engineering value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decode {
    /// Plain unsigned integer (counters, codes, percentages).
    RawInt,
    /// Two's-complement signed, stored as value x 10 (temperatures).
    Temp,
    /// Unsigned, stored as value x 10 (flow, pressure, capacities).
    Tenth,
    /// Nonzero means true.
    Bool,
}

impl Decode {
    pub fn apply(self, raw: u16) -> RtValue {
        match self {
            Decode::RawInt => RtValue::Int(i64::from(raw)),
            Decode::Temp => RtValue::Float(codec::decode_signed_scaled(raw)),
            Decode::Tenth => RtValue::Float(codec::decode_tenth(raw)),
            Decode::Bool => RtValue::Bool(codec::decode_bool(raw)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RegisterDef {
    pub name: &'static str,
    pub address: u16,
    pub class: RegisterClass,
    pub decode: Decode,
    /// Accepted engineering-value range for writes; None for read-only.
    pub write_range: Option<(f64, f64)>,
}

const fn input(name: &'static str, address: u16, decode: Decode) -> RegisterDef {
    RegisterDef {
        name,
        address,
        class: RegisterClass::Input,
        decode,
        write_range: None,
    }
}

const fn holding(
    name: &'static str,
    address: u16,
    decode: Decode,
    min: f64,
    max: f64,
) -> RegisterDef {
    RegisterDef {
        name,
        address,
        class: RegisterClass::Holding,
        decode,
        write_range: Some((min, max)),
    }
}

const fn coil(name: &'static str, address: u16) -> RegisterDef {
    RegisterDef {
        name,
        address,
        class: RegisterClass::Coil,
        decode: Decode::Bool,
        write_range: None,
    }
}

/// Core telemetry block, covered by a single bulk read per cycle.
///
/// The block spans 1000..=1030; unmapped offsets inside the span are
/// transferred with the bulk response but ignored.
pub const HOT_INPUTS: &[RegisterDef] = &[
    input("water_inlet_temp", 1000, Decode::Temp),
    input("water_outlet_temp", 1001, Decode::Temp),
    input("ambient_temp", 1002, Decode::Temp),
    input("coil_temp", 1003, Decode::Temp),
    input("discharge_temp", 1004, Decode::Temp),
    input("suction_temp", 1005, Decode::Temp),
    input("current_power", 1010, Decode::RawInt),
    input("flow_rate", 1011, Decode::Tenth),
    input("compressor_speed", 1012, Decode::RawInt),
    input("fan_speed", 1013, Decode::RawInt),
    input("pump_speed", 1014, Decode::RawInt),
    input("system_pressure", 1015, Decode::Tenth),
    input("input_voltage", 1016, Decode::RawInt),
    input("input_current", 1017, Decode::Tenth),
    input("error_code", 1020, Decode::RawInt),
    input("operating_state", 1021, Decode::RawInt),
    input("run_hours_high", 1030, Decode::RawInt),
];

/// Slow-moving counters and device-reported performance figures, read
/// individually after the bulk block.
pub const COLD_INPUTS: &[RegisterDef] = &[
    input("run_hours_low", 1031, Decode::RawInt),
    input("compressor_starts", 1032, Decode::RawInt),
    input("defrost_count", 1033, Decode::RawInt),
    input("device_cop", 1040, Decode::Tenth),
    input("heating_capacity", 1041, Decode::Tenth),
    input("cooling_capacity", 1042, Decode::Tenth),
];

/// Control registers. Write ranges follow the vendor commissioning limits.
pub const HOLDINGS: &[RegisterDef] = &[
    holding("setpoint_temp", 2000, Decode::Temp, 15.0, 60.0),
    holding("operation_mode", 2001, Decode::RawInt, 0.0, 4.0),
    holding("fan_mode", 2002, Decode::RawInt, 0.0, 3.0),
    holding("min_pump_speed", 2003, Decode::RawInt, 20.0, 100.0),
    holding("max_pump_speed", 2004, Decode::RawInt, 30.0, 100.0),
    holding("dhw_setpoint", 2005, Decode::Temp, 35.0, 65.0),
    holding("dhw_mode", 2006, Decode::RawInt, 0.0, 1.0),
    holding("antifreeze_temp", 2007, Decode::Temp, -10.0, 10.0),
    holding("max_outlet_temp", 2008, Decode::Temp, 20.0, 65.0),
    holding("min_outlet_temp", 2009, Decode::Temp, 10.0, 40.0),
];

/// Binary control flags. These are written directly but never read back;
/// see `data_mgmt::derived::derive_coil_state` for the read-side workaround.
pub const COILS: &[RegisterDef] = &[
    coil("power", 0),
    coil("heating_mode", 1),
    coil("cooling_mode", 2),
    coil("dhw_priority", 3),
    coil("silent_mode", 4),
    coil("defrost_mode", 5),
    coil("pump_enable", 6),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static RegisterDef>> = Lazy::new(|| {
    HOT_INPUTS
        .iter()
        .chain(COLD_INPUTS)
        .chain(HOLDINGS)
        .chain(COILS)
        .map(|d| (d.name, d))
        .collect()
});

/// Start address and word count of the bulk-read block.
pub fn hot_block_span() -> (u16, u16) {
    let start = HOT_INPUTS.iter().map(|d| d.address).min().unwrap_or(0);
    let end = HOT_INPUTS.iter().map(|d| d.address).max().unwrap_or(0);
    (start, end - start + 1)
}

pub fn holding_register(name: &str) -> Option<&'static RegisterDef> {
    BY_NAME
        .get(name)
        .filter(|d| d.class == RegisterClass::Holding)
        .copied()
}

pub fn coil_register(name: &str) -> Option<&'static RegisterDef> {
    BY_NAME
        .get(name)
        .filter(|d| d.class == RegisterClass::Coil)
        .copied()
}
