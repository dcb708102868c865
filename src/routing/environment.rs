use url::Url;

/// Protocol and host of the page the dashboard is displayed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Includes the trailing colon, e.g. `https:`.
    pub protocol: String,
    /// Hostname plus an optional port.
    pub host: String,
}

/// Where rendering happens. Share links only carry an origin when there is
/// a browser location to take it from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    Browser(Location),
    #[default]
    Server,
}

impl Environment {
    pub fn from_origin(origin: &Url) -> Self {
        let host = match (origin.host_str(), origin.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };

        Self::Browser(Location {
            protocol: format!("{}:", origin.scheme()),
            host,
        })
    }

    pub fn protocol(&self) -> &str {
        match self {
            Environment::Browser(location) => &location.protocol,
            Environment::Server => "",
        }
    }

    pub fn host(&self) -> &str {
        match self {
            Environment::Browser(location) => &location.host,
            Environment::Server => "",
        }
    }
}
