use anyhow::Result;
use tokio::time::interval;

use cxmon::constants::device::operating_state_name;
use cxmon::{HeatPump, PumpConfig, RtValue};

use crate::argsets::WatchArgs;

/// Poll at a fixed interval, printing one JSON line per successful cycle.
/// Failed cycles are logged and the loop carries on; the device may simply
/// be rebooting.
pub fn watch(args: WatchArgs) -> Result<()> {
    let config = args.into_config()?;
    super::runtime()?.block_on(run(config))
}

async fn run(config: PumpConfig) -> Result<()> {
    let pump = HeatPump::from_config(&config);
    let mut timer = interval(config.poll_interval());

    log::info!(
        "watching {}:{} unit {} every {}s",
        config.host,
        config.port,
        config.unit_id,
        config.poll_interval_s
    );

    loop {
        timer.tick().await;
        match pump.refresh().await {
            Ok(record) => {
                let state = record
                    .get_field("operating_state")
                    .and_then(RtValue::as_i64)
                    .map(operating_state_name)
                    .unwrap_or("Unknown");
                log::info!("cycle ok: {} values, state {}", record.len(), state);
                println!("{}", serde_json::to_string(&record.sorted_fields())?);
            }
            Err(e) => {
                log::error!("refresh failed: {}", e);
            }
        }
    }
}
