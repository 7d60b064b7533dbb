use anyhow::Result;
use tokio::time::sleep;

use cxmon::constants::defaults;
use cxmon::data_mgmt::codec::{decode_signed_scaled, decode_tenth};
use cxmon::{ModbusTransport, PumpConfig, TcpTransport};

use crate::argsets::ScanArgs;

/// Best-effort diagnostic sweep over a register range.
///
/// Prints the raw word plus its candidate decodes for each address, so an
/// unfamiliar firmware's map can be eyeballed. Individual failures are
/// printed and skipped.
pub fn scan(args: ScanArgs) -> Result<()> {
    let config = args.conn.into_config()?;
    super::runtime()?.block_on(run(config, args.start, args.count, args.holding))
}

async fn run(config: PumpConfig, start: u16, count: u16, holding: bool) -> Result<()> {
    let mut session = TcpTransport::new(&config);
    session.connect().await?;

    let kind = if holding { "holding" } else { "input" };
    println!("scanning {} {} registers from {}", count, kind, start);
    println!("{:>5}  {:>6}  {:>8}  {:>8}", "addr", "raw", "as-temp", "as-10th");

    for address in start..start.saturating_add(count) {
        let result = if holding {
            session.read_holding_registers(address, 1).await
        } else {
            session.read_input_registers(address, 1).await
        };
        match result {
            Ok(words) if !words.is_empty() => {
                let raw = words[0];
                println!(
                    "{:>5}  {:>6}  {:>8.1}  {:>8.1}",
                    address,
                    raw,
                    decode_signed_scaled(raw),
                    decode_tenth(raw)
                );
            }
            Ok(_) => println!("{:>5}  <empty response>", address),
            Err(e) => println!("{:>5}  <{}>", address, e),
        }
        sleep(defaults::INTER_REQUEST_DELAY).await;
    }

    session.close().await;
    Ok(())
}
