mod read;
mod scan;
mod watch;
mod write;

pub use read::read;
pub use scan::scan;
pub use watch::watch;
pub use write::write;

use anyhow::Result;

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
