//! Mode and state codes as reported by the controller.

pub const MODE_OFF: i64 = 0;
pub const MODE_HEAT: i64 = 1;
pub const MODE_COOL: i64 = 2;
pub const MODE_AUTO: i64 = 3;
pub const MODE_DHW: i64 = 4;

pub const FAN_AUTO: i64 = 0;
pub const FAN_LOW: i64 = 1;
pub const FAN_MEDIUM: i64 = 2;
pub const FAN_HIGH: i64 = 3;

pub const STATE_IDLE: i64 = 0;
pub const STATE_HEATING: i64 = 1;
pub const STATE_COOLING: i64 = 2;
pub const STATE_DEFROST: i64 = 3;
pub const STATE_DHW: i64 = 4;
pub const STATE_STANDBY: i64 = 5;
pub const STATE_ERROR: i64 = 99;

pub fn operation_mode_name(code: i64) -> &'static str {
    match code {
        MODE_OFF => "Off",
        MODE_HEAT => "Heating",
        MODE_COOL => "Cooling",
        MODE_AUTO => "Auto",
        MODE_DHW => "DHW",
        _ => "Unknown",
    }
}

pub fn operating_state_name(code: i64) -> &'static str {
    match code {
        STATE_IDLE => "Idle",
        STATE_HEATING => "Heating",
        STATE_COOLING => "Cooling",
        STATE_DEFROST => "Defrost",
        STATE_DHW => "DHW",
        STATE_STANDBY => "Standby",
        STATE_ERROR => "Error",
        _ => "Unknown",
    }
}
