use dioxus::prelude::*;
use itertools::Itertools;
use log::debug;

use crate::{
    analytics::Analytics,
    model::{ActiveChain, Dashboard, SafeApp},
    routing::{build_share_url, AppRoutes, Environment, Router},
};

#[derive(Props, PartialEq)]
pub struct CatalogProps {
    pub dashboard: Dashboard,
    pub environment: Environment,
}

pub fn catalog(cx: Scope<CatalogProps>) -> Element {
    let dashboard = &cx.props.dashboard;
    let router = use_context_provider(cx, || {
        Router::new(&dashboard.base_path).with_locale(dashboard.locale.clone())
    });
    use_context_provider(cx, || cx.props.environment.clone());
    use_context_provider(cx, || ActiveChain(dashboard.active_chain().cloned()));
    use_context_provider(cx, Analytics::default);

    let chain = dashboard.active_chain();
    let network = chain.map_or("All networks", |chain| chain.label());
    let stylesheet = router.local_path("/public/styles.css");
    let canonical = router.absolute_href(&cx.props.environment, AppRoutes::HOME);

    // Plain links keep sharing usable when the page runs without event handlers.
    let cards = dashboard
        .apps
        .iter()
        .filter(|app| chain.map_or(true, |chain| app.supports_chain(&chain.chain_id)))
        .map(|app| (app, build_share_url(router, &cx.props.environment, &app.url, chain)))
        .collect_vec();

    cx.render(rsx! {
        super::preamble {
            title: &dashboard.title,
            stylesheet: "{stylesheet}",
            canonical: canonical,
            summary: None,
        }
        body {
            main {
                class: "catalog",
                header {
                    h1 { "{dashboard.title}" }
                    p { class: "network", "{network}" }
                }
                ul {
                    class: "app-grid",
                    for (app, share_url) in cards {
                        li {
                            key: "{app.id}",
                            class: "app-card",
                            a {
                                class: "app-link",
                                href: "{app.url}",
                                header {
                                    app.icon_url.as_ref().map(|src| rsx! {
                                        img { class: "app-icon", src: "{src}", alt: "" }
                                    })
                                    h3 { "{app.name}" }
                                }
                                p { class: "description", "{app.description}" }
                            }
                            super::safe_app_action_buttons {
                                safe_app: app,
                                bookmark_safe_app: None,
                                remove_custom_app: app.is_custom().then(|| {
                                    cx.event_handler(|app: SafeApp| debug!("Remove requested for {}", app.url))
                                }),
                                open_preview_drawer: Some(cx.event_handler(|app: SafeApp| {
                                    debug!("Preview requested for {}", app.name)
                                })),
                            }
                            a {
                                class: "share-link",
                                href: "{share_url}",
                                rel: "nofollow",
                                "Share link"
                            }
                        }
                    }
                }
            }
        }
    })
}
