pub use serde::Deserialize;

use super::{Chain, Error, SafeApp};

/// The `dashboard.yaml` document: routing settings, known networks and the
/// Safe Apps catalog.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Dashboard {
    pub title: String,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    pub locale: Option<String>,
    #[serde(default)]
    pub chains: Vec<Chain>,
    pub default_chain: Option<String>,
    #[serde(default)]
    pub apps: Vec<SafeApp>,
}

impl Dashboard {
    pub fn from_yaml<S: AsRef<str>>(yaml: S) -> Result<Self, Error> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml.as_ref());
        let dashboard = Self::deserialize(deserializer)?;

        for (i, app) in dashboard.apps.iter().enumerate() {
            if dashboard.apps[..i]
                .iter()
                .any(|other| other.url.trim_end_matches('/') == app.url.trim_end_matches('/'))
            {
                return Err(Error::DuplicateAppUrl(app.url.clone()));
            }
        }

        Ok(dashboard)
    }

    pub fn chain(&self, short_name: &str) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.short_name == short_name)
    }

    /// The network selected by `default_chain`, if it names a known chain.
    pub fn active_chain(&self) -> Option<&Chain> {
        self.default_chain
            .as_deref()
            .and_then(|short_name| self.chain(short_name))
    }

    pub fn app_by_url(&self, url: &str) -> Option<&SafeApp> {
        let url = url.trim_end_matches('/');
        self.apps
            .iter()
            .find(|app| app.url.trim_end_matches('/') == url)
    }
}

fn default_base_path() -> String {
    "/".to_string()
}
