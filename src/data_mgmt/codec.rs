//! Register value codec.
//!
//! The controller stores temperatures and fractional quantities on the wire
//! as the engineering value multiplied by 10, with temperatures additionally
//! interpreted as two's-complement 16-bit signed. These transforms are pure
//! and shared by the poll engine and the command executor.

/// Wire scale for temperatures and tenth-resolution values.
pub const WIRE_SCALE: f64 = 10.0;

/// Decode a signed, tenth-scaled register (temperatures).
///
/// Raw values >= 32768 are negative in two's complement and must be
/// corrected by subtracting 65536 before scaling.
pub fn decode_signed_scaled(raw: u16) -> f64 {
    let signed = raw as i16;
    f64::from(signed) / WIRE_SCALE
}

/// Decode an unsigned tenth-scaled register (flow, pressure, capacities).
pub fn decode_tenth(raw: u16) -> f64 {
    f64::from(raw) / WIRE_SCALE
}

/// Encode an engineering value for a signed tenth-scaled register write.
///
/// Truncates toward zero, matching `int(value * 10)` on the device tooling
/// side. Values outside the representable i16 band are clamped.
pub fn encode_signed_scaled(value: f64) -> u16 {
    let scaled = (value * WIRE_SCALE).trunc();
    let clamped = scaled.clamp(f64::from(i16::MIN), f64::from(i16::MAX));
    (clamped as i16) as u16
}

pub fn decode_bool(raw: u16) -> bool {
    raw != 0
}
