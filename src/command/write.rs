use anyhow::Result;

use cxmon::{HeatPump, PumpConfig};

use crate::argsets::{WriteArgs, WriteTarget};

/// Issue one validated control write. The device state is not assumed to
/// have changed until a following refresh confirms it.
pub fn write(args: WriteArgs) -> Result<()> {
    let config = args.conn.into_config()?;
    super::runtime()?.block_on(run(config, args.target))
}

async fn run(config: PumpConfig, target: WriteTarget) -> Result<()> {
    let pump = HeatPump::from_config(&config);
    match target {
        WriteTarget::Setpoint(value) => pump.write_setpoint("setpoint_temp", value).await?,
        WriteTarget::OperationMode(code) => pump.write_mode("operation_mode", code).await?,
        WriteTarget::FanMode(code) => pump.write_mode("fan_mode", code).await?,
        WriteTarget::Power(on) => pump.write_flag("power", on).await?,
        WriteTarget::DhwMode(on) => pump.write_flag("dhw_priority", on).await?,
        WriteTarget::SilentMode(on) => pump.write_flag("silent_mode", on).await?,
    }
    println!("ok");
    pump.close().await;
    Ok(())
}
