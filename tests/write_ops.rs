//! Command executor behavior against an in-memory transport.

mod stubs;

use cxmon::{HeatPump, WriteError};
use stubs::transport::{populated_state, MockTransport, Op};

#[tokio::test(start_paused = true)]
async fn setpoint_write_encodes_tenths() {
    let (transport, state) = MockTransport::new(populated_state());
    let pump = HeatPump::new(transport);

    pump.write_setpoint("setpoint_temp", 45.5).await.unwrap();

    let state = state.lock().unwrap();
    assert_eq!(
        state.ops,
        vec![Op::WriteRegister {
            address: 2000,
            value: 455
        }]
    );
    assert_eq!(state.holding.get(&2000), Some(&455));
}

#[tokio::test(start_paused = true)]
async fn negative_setpoint_uses_twos_complement() {
    let (transport, state) = MockTransport::new(populated_state());
    let pump = HeatPump::new(transport);

    pump.write_setpoint("antifreeze_temp", -2.5).await.unwrap();

    assert_eq!(
        state.lock().unwrap().ops,
        vec![Op::WriteRegister {
            address: 2007,
            value: 65511
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn out_of_range_setpoint_never_reaches_the_wire() {
    let (transport, state) = MockTransport::new(populated_state());
    let pump = HeatPump::new(transport);

    let err = pump.write_setpoint("setpoint_temp", 70.0).await.unwrap_err();
    assert!(matches!(err, WriteError::OutOfRange { .. }));
    assert!(state.lock().unwrap().ops.is_empty());
}

#[tokio::test(start_paused = true)]
async fn unknown_register_is_rejected() {
    let (transport, state) = MockTransport::new(populated_state());
    let pump = HeatPump::new(transport);

    let err = pump.write_setpoint("no_such_thing", 20.0).await.unwrap_err();
    assert!(matches!(err, WriteError::UnknownRegister(_)));
    assert!(state.lock().unwrap().ops.is_empty());
}

#[tokio::test(start_paused = true)]
async fn setpoint_path_rejects_integer_registers() {
    let (transport, _state) = MockTransport::new(populated_state());
    let pump = HeatPump::new(transport);

    let err = pump
        .write_setpoint("operation_mode", 1.0)
        .await
        .unwrap_err();
    assert!(matches!(err, WriteError::Unsupported { .. }));
}

#[tokio::test(start_paused = true)]
async fn mode_write_checks_code_range() {
    let (transport, state) = MockTransport::new(populated_state());
    let pump = HeatPump::new(transport);

    pump.write_mode("operation_mode", 2).await.unwrap();
    assert_eq!(
        state.lock().unwrap().ops,
        vec![Op::WriteRegister {
            address: 2001,
            value: 2
        }]
    );

    let err = pump.write_mode("operation_mode", 9).await.unwrap_err();
    assert!(matches!(err, WriteError::OutOfRange { .. }));

    let err = pump.write_mode("fan_mode", -1).await.unwrap_err();
    assert!(matches!(err, WriteError::OutOfRange { .. }));
}

#[tokio::test(start_paused = true)]
async fn flag_write_targets_the_coil() {
    let (transport, state) = MockTransport::new(populated_state());
    let pump = HeatPump::new(transport);

    pump.write_flag("silent_mode", true).await.unwrap();

    let state = state.lock().unwrap();
    assert_eq!(
        state.ops,
        vec![Op::WriteCoil {
            address: 4,
            value: true
        }]
    );
    assert_eq!(state.coils.get(&4), Some(&true));
}

#[tokio::test(start_paused = true)]
async fn unknown_flag_is_rejected() {
    let (transport, _state) = MockTransport::new(populated_state());
    let pump = HeatPump::new(transport);

    let err = pump.write_flag("setpoint_temp", true).await.unwrap_err();
    assert!(matches!(err, WriteError::UnknownRegister(_)));
}

#[tokio::test(start_paused = true)]
async fn write_reconnects_a_dropped_session_once() {
    let (transport, state) = MockTransport::disconnected(populated_state());
    let pump = HeatPump::new(transport);

    pump.write_setpoint("setpoint_temp", 40.0).await.unwrap();

    let state = state.lock().unwrap();
    assert_eq!(state.connects, 1);
    assert_eq!(
        state.ops,
        vec![Op::WriteRegister {
            address: 2000,
            value: 400
        }]
    );
}
