mod argsets;
mod command;

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use env_logger::Env;

use cxmon::constants::defaults;

const CMD_READ: &str = "read";
const CMD_WATCH: &str = "watch";
const CMD_WRITE: &str = "write";
const CMD_SCAN: &str = "scan";

const LOG_LEVEL_ENV_VAR: &str = "LOGGING_LEVEL";

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(LOG_LEVEL_ENV_VAR, defaults::LOG_LEVEL),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_READ) => command::read(argsets::ConnectArgs::parse(&mut args)?),
        Some(CMD_WATCH) => command::watch(argsets::WatchArgs::parse(&mut args)?),
        Some(CMD_WRITE) => command::write(argsets::WriteArgs::parse(&mut args)?),
        Some(CMD_SCAN) => command::scan(argsets::ScanArgs::parse(&mut args)?),
        _ => Err(anyhow!(
            "Subcommand must be one of 'read', 'watch', 'write', 'scan'"
        )),
    }
}
