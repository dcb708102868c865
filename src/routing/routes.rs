pub struct AppRoutes;

impl AppRoutes {
    pub const HOME: &'static str = "/";
    pub const APPS: &'static str = "/apps";
    /// Deep link that launches an app inside the dashboard.
    pub const SHARE_SAFE_APP: &'static str = "/share/safe-app";
}

/// Query keys understood by the share route.
pub const APP_URL_QUERY: &str = "appUrl";
pub const CHAIN_QUERY: &str = "chain";
