use anyhow::Result;

use cxmon::{HeatPump, PumpConfig};

use crate::argsets::ConnectArgs;

/// Run a single refresh cycle and print the value map as JSON.
pub fn read(args: ConnectArgs) -> Result<()> {
    let config = args.into_config()?;
    super::runtime()?.block_on(run(config))
}

async fn run(config: PumpConfig) -> Result<()> {
    let pump = HeatPump::from_config(&config);
    let record = pump.refresh().await?;
    println!("{}", serde_json::to_string_pretty(&record.sorted_fields())?);
    pump.close().await;
    Ok(())
}
