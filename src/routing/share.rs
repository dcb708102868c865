use crate::model::Chain;

use super::{AppRoutes, Environment, ResolveHref, UrlObject, APP_URL_QUERY, CHAIN_QUERY};

/// Builds the link that opens `app_url` through the dashboard's share route.
///
/// The origin comes from `environment`, so a link built outside a browser
/// has no protocol or host. `app_url` is passed through as a query value
/// without validation. The `chain` parameter is only present when a
/// network is selected.
pub fn build_share_url<R>(
    router: &R,
    environment: &Environment,
    app_url: &str,
    chain: Option<&Chain>,
) -> String
where
    R: ResolveHref + ?Sized,
{
    let url = UrlObject {
        protocol: environment.protocol().to_string(),
        host: environment.host().to_string(),
        pathname: AppRoutes::SHARE_SAFE_APP.to_string(),
        query: vec![],
    }
    .with_query(APP_URL_QUERY, Some(app_url.to_string()))
    .with_query(CHAIN_QUERY, chain.map(|chain| chain.short_name.clone()));

    router.resolve_href(&url)
}
