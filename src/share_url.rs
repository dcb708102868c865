//! `share-url` command handler.

use std::{error::Error, path::PathBuf};

use clap::Parser;
use log::{debug, warn, LevelFilter};
use url::Url;

use crate::{
    model::{Chain, Dashboard},
    routing::{build_share_url, Environment, Router},
};

#[derive(Debug, Parser)]
pub struct ShareUrl {
    /// Launch URL of the app to share.
    app_url: String,

    /// Short name of the network the link is scoped to, e.g. `eth`.
    #[arg(long)]
    chain: Option<String>,

    /// Public origin of the dashboard. Without it the link has no protocol or host.
    #[arg(short, long)]
    origin: Option<Url>,

    /// Read the base path, locale and known chains from this dashboard.yaml.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Adjusts the verbosity of the logger.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl ShareUrl {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let dashboard = match &self.config {
            Some(path) => Some(Dashboard::from_yaml(std::fs::read_to_string(path)?)?),
            None => None,
        };

        let router = dashboard.as_ref().map_or_else(Router::default, |dashboard| {
            Router::new(&dashboard.base_path).with_locale(dashboard.locale.clone())
        });

        let chain = match (&self.chain, &dashboard) {
            (Some(short_name), Some(dashboard)) => match dashboard.chain(short_name) {
                Some(chain) => Some(chain.clone()),
                None => {
                    warn!("Chain {short_name:?} is not configured in the dashboard");
                    Some(Chain::with_short_name(short_name.as_str()))
                }
            },
            (Some(short_name), None) => Some(Chain::with_short_name(short_name.as_str())),
            (None, Some(dashboard)) => dashboard.active_chain().cloned(),
            (None, None) => None,
        };

        let environment = self
            .origin
            .as_ref()
            .map_or(Environment::Server, Environment::from_origin);
        debug!("Building share URL with {environment:?} and {chain:?}");

        println!("{}", build_share_url(&router, &environment, &self.app_url, chain.as_ref()));

        Ok(())
    }
}
