use std::error::Error;

use clap::Parser;
use log::{LevelFilter, debug, warn};
use tokio::{fs, io::AsyncWriteExt};

#[derive(Debug, Parser)]
pub struct Init {
    /// Adjusts the verbosity of the logger.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Init {
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        if fs::try_exists(crate::DASHBOARD_FILE).await? {
            warn!("Not creating {} because it already exists", crate::DASHBOARD_FILE);
        } else {
            debug!("Creating default {}", crate::DASHBOARD_FILE);
            let mut file = fs::File::create(crate::DASHBOARD_FILE).await?;
            file.write_all(crate::DEFAULT_DASHBOARD.as_bytes()).await?;
        }

        Ok(())
    }
}
