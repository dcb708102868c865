//! The catalog "database" caches the parsed `dashboard.yaml` and re-reads it
//! when the file changes.

use std::{
    io::{self, ErrorKind},
    path::PathBuf,
    time::{Duration, SystemTime},
};

use chrono::{DateTime, Local};
use log::{debug, error, info};
use tokio::{fs::File, io::AsyncReadExt};

use crate::model::Dashboard;

pub struct CatalogDb {
    path: PathBuf,
    ttl: Duration,
    checked: SystemTime,
    last_modified: SystemTime,
    dashboard: Option<Dashboard>,
}

impl CatalogDb {
    pub fn new(path: PathBuf, ttl_seconds: u32) -> Result<Self, io::Error> {
        Ok(Self {
            path: dunce::canonicalize(path)?,
            ttl: Duration::from_secs(ttl_seconds as u64),
            checked: SystemTime::UNIX_EPOCH,
            last_modified: SystemTime::UNIX_EPOCH,
            dashboard: None,
        })
    }

    /// The last time the catalog file was modified
    pub fn last_modified(&self) -> DateTime<Local> {
        self.last_modified.into()
    }

    pub async fn refresh(&mut self) -> Result<&Dashboard, io::Error> {
        let due = self.checked + self.ttl <= SystemTime::now();
        if self.dashboard.is_none() || due {
            self.reload().await?;
        }

        self.dashboard
            .as_ref()
            .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "catalog was never loaded"))
    }

    async fn reload(&mut self) -> Result<(), io::Error> {
        let mut file = File::open(&self.path).await.map_err(|err| {
            error!("{err} (opening {:?})", self.path);
            err
        })?;

        let modified = file.metadata().await?.modified()?;
        self.checked = SystemTime::now();

        if self.dashboard.is_some() && self.last_modified >= modified {
            debug!("Catalog unchanged since last check");
            return Ok(());
        }

        let mut buffer = String::new();
        file.read_to_string(&mut buffer).await?;

        let dashboard = Dashboard::from_yaml(&buffer)?;
        info!("Loaded {} apps from {:?}", dashboard.apps.len(), self.path);

        self.dashboard = Some(dashboard);
        self.last_modified = modified;

        Ok(())
    }
}
