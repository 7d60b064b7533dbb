//! In-memory transport for exercising the poll engine and command executor
//! without a device on the wire.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use cxmon::{ModbusTransport, TransportError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    ReadInput { address: u16, count: u16 },
    ReadHolding { address: u16, count: u16 },
    WriteRegister { address: u16, value: u16 },
    WriteCoil { address: u16, value: bool },
}

impl Op {
    pub fn is_write(&self) -> bool {
        matches!(self, Op::WriteRegister { .. } | Op::WriteCoil { .. })
    }
}

#[derive(Default)]
pub struct MockState {
    pub input: HashMap<u16, u16>,
    pub holding: HashMap<u16, u16>,
    pub coils: HashMap<u16, bool>,
    /// Fail any multi-word read (the bulk block) while letting
    /// single-register reads through.
    pub fail_bulk: bool,
    /// Return half the requested words on multi-word reads.
    pub short_bulk: bool,
    /// Addresses whose individual reads always fail.
    pub fail_addresses: HashSet<u16>,
    /// Fail every read.
    pub fail_all_reads: bool,
    /// Clear `fail_all_reads` and `fail_bulk` on the next connect, like a
    /// dead TCP link that a fresh socket heals.
    pub revive_on_connect: bool,
    pub fail_connect: bool,
    pub connects: usize,
    pub ops: Vec<Op>,
}

pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
    connected: bool,
}

impl MockTransport {
    pub fn new(state: MockState) -> (Self, Arc<Mutex<MockState>>) {
        let shared = Arc::new(Mutex::new(state));
        (
            MockTransport {
                state: shared.clone(),
                connected: true,
            },
            shared,
        )
    }

    pub fn disconnected(state: MockState) -> (Self, Arc<Mutex<MockState>>) {
        let (mut transport, shared) = Self::new(state);
        transport.connected = false;
        (transport, shared)
    }
}

/// Raw register contents resembling a pump heating at 35.5 C outlet.
pub fn populated_state() -> MockState {
    let mut state = MockState::default();
    state.input = HashMap::from([
        (1000, 302),   // inlet 30.2 C
        (1001, 355),   // outlet 35.5 C
        (1002, 105),   // ambient 10.5 C
        (1003, 280),   // coil 28.0 C
        (1004, 652),   // discharge 65.2 C
        (1005, 121),   // suction 12.1 C
        (1010, 2001),  // power draw W
        (1011, 200),   // flow 20.0 L/min
        (1012, 80),
        (1013, 60),
        (1014, 70),
        (1015, 24), // pressure 2.4
        (1016, 230),
        (1017, 87), // current 8.7 A
        (1020, 0),
        (1021, 1), // operating state: heating
        (1030, 2), // run hours high word
        (1031, 300),
        (1032, 1234),
        (1033, 17),
        (1040, 38), // device-reported COP 3.8
        (1041, 95),
        (1042, 0),
    ]);
    state.holding = HashMap::from([
        (2000, 455),
        (2001, 1),
        (2002, 0),
        (2003, 30),
        (2004, 90),
        (2005, 500),
        (2006, 0),
        (2007, 65516), // antifreeze -2.0 C
        (2008, 600),
        (2009, 150),
    ]);
    state
}

impl ModbusTransport for MockTransport {
    async fn connect(&mut self) -> Result<(), TransportError> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.connects += 1;
        if state.fail_connect {
            return Err(TransportError::Connect("simulated connect failure".into()));
        }
        if state.revive_on_connect {
            state.fail_all_reads = false;
            state.fail_bulk = false;
        }
        self.connected = true;
        Ok(())
    }

    async fn close(&mut self) {
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn read_input_registers(
        &mut self,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.ops.push(Op::ReadInput { address, count });
        if state.fail_all_reads
            || (count > 1 && state.fail_bulk)
            || state.fail_addresses.contains(&address)
        {
            return Err(TransportError::Io("simulated read failure".into()));
        }
        let mut words: Vec<u16> = (address..address + count)
            .map(|a| state.input.get(&a).copied().unwrap_or(0))
            .collect();
        if count > 1 && state.short_bulk {
            words.truncate(count as usize / 2);
        }
        Ok(words)
    }

    async fn read_holding_registers(
        &mut self,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, TransportError> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.ops.push(Op::ReadHolding { address, count });
        if state.fail_all_reads || state.fail_addresses.contains(&address) {
            return Err(TransportError::Io("simulated read failure".into()));
        }
        Ok((address..address + count)
            .map(|a| state.holding.get(&a).copied().unwrap_or(0))
            .collect())
    }

    async fn write_register(&mut self, address: u16, value: u16) -> Result<(), TransportError> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.ops.push(Op::WriteRegister { address, value });
        state.holding.insert(address, value);
        Ok(())
    }

    async fn write_coil(&mut self, address: u16, value: bool) -> Result<(), TransportError> {
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.ops.push(Op::WriteCoil { address, value });
        state.coils.insert(address, value);
        Ok(())
    }
}
