use dioxus::prelude::*;

use crate::{
    model::{Chain, Dashboard},
    routing::{build_share_url, AppRoutes, Environment, Router},
};

#[derive(Props, PartialEq)]
pub struct ShareProps {
    pub dashboard: Dashboard,
    pub app_url: String,
    pub chain: Option<String>,
    pub environment: Environment,
}

/// Landing page behind a share link. Links that point outside the catalog
/// are treated as custom apps and shown by URL.
pub fn share(cx: Scope<ShareProps>) -> Element {
    let dashboard = &cx.props.dashboard;
    let router = Router::new(&dashboard.base_path).with_locale(dashboard.locale.clone());
    let stylesheet = router.local_path("/public/styles.css");
    let home = router.local_path(AppRoutes::HOME);

    let app = dashboard.app_by_url(&cx.props.app_url);
    let name = app.map_or(cx.props.app_url.as_str(), |app| app.name.as_str());

    let network = match cx.props.chain.as_deref() {
        Some(short_name) => match dashboard.chain(short_name) {
            Some(chain) => format!("on {}", chain.label()),
            None => format!("on unknown network {short_name:?}"),
        },
        None => "on any network".to_string(),
    };

    let canonical = match &cx.props.environment {
        Environment::Browser(_) => {
            let chain = cx.props.chain.as_deref().map(|short_name| {
                dashboard
                    .chain(short_name)
                    .cloned()
                    .unwrap_or_else(|| Chain::with_short_name(short_name))
            });
            Some(build_share_url(&router, &cx.props.environment, &cx.props.app_url, chain.as_ref()))
        }
        Environment::Server => None,
    };

    let description = app.and_then(|app| {
        if app.description.is_empty() {
            None
        } else {
            cx.render(rsx! {
                p { class: "description", "{app.description}" }
            })
        }
    });

    let custom = if app.is_none() {
        cx.render(rsx! {
            p { class: "warning", "This app is not part of the catalog. Only open it if you trust its source." }
        })
    } else {
        None
    };

    cx.render(rsx! {
        super::preamble {
            title: "{name}",
            stylesheet: "{stylesheet}",
            canonical: canonical,
            summary: app.map(|app| app.description.as_str()),
        }
        body {
            main {
                class: "share-landing",
                header {
                    a { href: "{home}", "{dashboard.title}" }
                }
                h1 { "{name}" }
                p { class: "network", "{network}" }
                description
                custom
                a {
                    class: "launch",
                    href: "{cx.props.app_url}",
                    rel: "noopener noreferrer",
                    "Open {name}"
                }
            }
        }
    })
}
