//! Argument structs for the CLI subcommands.

use anyhow::{anyhow, Result};
use pico_args::Arguments;

use cxmon::constants::defaults;
use cxmon::PumpConfig;

pub struct ConnectArgs {
    pub host: String,
    pub port: u16,
    pub unit_id: u8,
}

impl ConnectArgs {
    pub fn parse(args: &mut Arguments) -> Result<Self> {
        Ok(ConnectArgs {
            host: args.value_from_str("--host")?,
            port: args
                .opt_value_from_str("--port")?
                .unwrap_or(defaults::PORT),
            unit_id: args
                .opt_value_from_str("--unit")?
                .unwrap_or(defaults::UNIT_ID),
        })
    }

    pub fn into_config(self) -> Result<PumpConfig> {
        let config = PumpConfig {
            host: self.host,
            port: self.port,
            unit_id: self.unit_id,
            poll_interval_s: defaults::POLL_INTERVAL_S,
        };
        config.validate()?;
        Ok(config)
    }
}

pub struct WatchArgs {
    pub conn: ConnectArgs,
    pub interval_s: u64,
}

impl WatchArgs {
    pub fn parse(args: &mut Arguments) -> Result<Self> {
        Ok(WatchArgs {
            interval_s: args
                .opt_value_from_str("--interval")?
                .unwrap_or(defaults::POLL_INTERVAL_S),
            conn: ConnectArgs::parse(args)?,
        })
    }

    pub fn into_config(self) -> Result<PumpConfig> {
        let mut config = self.conn.into_config()?;
        config.poll_interval_s = self.interval_s;
        config.validate()?;
        Ok(config)
    }
}

pub enum WriteTarget {
    Setpoint(f64),
    OperationMode(i64),
    FanMode(i64),
    Power(bool),
    DhwMode(bool),
    SilentMode(bool),
}

pub struct WriteArgs {
    pub conn: ConnectArgs,
    pub target: WriteTarget,
}

impl WriteArgs {
    pub fn parse(args: &mut Arguments) -> Result<Self> {
        let conn = ConnectArgs::parse(args)?;
        let target = match args.subcommand()?.as_deref() {
            Some("setpoint") => WriteTarget::Setpoint(args.free_from_str()?),
            Some("mode") => WriteTarget::OperationMode(args.free_from_str()?),
            Some("fan-mode") => WriteTarget::FanMode(args.free_from_str()?),
            Some("power") => WriteTarget::Power(parse_on_off(args)?),
            Some("dhw") => WriteTarget::DhwMode(parse_on_off(args)?),
            Some("silent") => WriteTarget::SilentMode(parse_on_off(args)?),
            _ => {
                return Err(anyhow!(
                    "write target must be one of 'setpoint', 'mode', 'fan-mode', 'power', 'dhw', 'silent'"
                ))
            }
        };
        Ok(WriteArgs { conn, target })
    }
}

fn parse_on_off(args: &mut Arguments) -> Result<bool> {
    let raw: String = args.free_from_str()?;
    match raw.as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        other => Err(anyhow!("expected 'on' or 'off', got '{}'", other)),
    }
}

pub struct ScanArgs {
    pub conn: ConnectArgs,
    pub start: u16,
    pub count: u16,
    pub holding: bool,
}

impl ScanArgs {
    pub fn parse(args: &mut Arguments) -> Result<Self> {
        Ok(ScanArgs {
            start: args.value_from_str("--start")?,
            count: args.opt_value_from_str("--count")?.unwrap_or(16),
            holding: args.contains("--holding"),
            conn: ConnectArgs::parse(args)?,
        })
    }
}
