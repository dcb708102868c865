//! `render` command handler.

use std::{error::Error, path::PathBuf};

use clap::Parser;
use dioxus::prelude::*;
use log::{info, LevelFilter};
use url::Url;

use crate::{
    model::{ActiveChain, Dashboard, SafeApp},
    routing::{Environment, Router},
    util,
};

#[derive(Debug, Parser)]
pub struct Render {
    /// Catalog id of the app whose buttons are rendered.
    #[arg(allow_negative_numbers = true)]
    id: i64,

    /// Path to dashboard.yaml
    #[arg(short, long, default_value = crate::DASHBOARD_FILE)]
    config: PathBuf,

    /// Public origin of the dashboard, used for the share link.
    #[arg(short, long)]
    origin: Option<Url>,

    /// Render the preview button.
    #[arg(long)]
    preview: bool,

    /// Render the bookmark button.
    #[arg(long)]
    bookmark: bool,

    /// Render the bookmark button in its pinned state. Implies --bookmark.
    #[arg(long)]
    bookmarked: bool,

    /// Render the delete button.
    #[arg(long)]
    remove: bool,

    /// Adjusts the verbosity of the logger.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

#[derive(Props, PartialEq)]
struct ButtonRowProps {
    app: SafeApp,
    dashboard: Dashboard,
    environment: Environment,
    preview: bool,
    bookmark: bool,
    bookmarked: bool,
    remove: bool,
}

fn button_row(cx: Scope<ButtonRowProps>) -> Element {
    let dashboard = &cx.props.dashboard;
    use_context_provider(cx, || {
        Router::new(&dashboard.base_path).with_locale(dashboard.locale.clone())
    });
    use_context_provider(cx, || cx.props.environment.clone());
    use_context_provider(cx, || ActiveChain(dashboard.active_chain().cloned()));

    cx.render(rsx! {
        crate::view::safe_app_action_buttons {
            safe_app: &cx.props.app,
            is_bookmarked: cx.props.bookmarked,
            bookmark_safe_app: cx.props.bookmark.then(|| cx.event_handler(|id: i64| info!("Pin toggled for app {id}"))),
            remove_custom_app: cx.props.remove.then(|| cx.event_handler(|app: SafeApp| info!("Remove requested for {}", app.url))),
            open_preview_drawer: cx.props.preview.then(|| cx.event_handler(|app: SafeApp| info!("Preview requested for {}", app.name))),
        }
    })
}

impl Render {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let dashboard = Dashboard::from_yaml(std::fs::read_to_string(&self.config)?)?;

        let Some(app) = dashboard.apps.iter().find(|app| app.id == self.id).cloned() else {
            return Err(format!("No app with id {} in {:?}", self.id, self.config).into());
        };

        let environment = self
            .origin
            .as_ref()
            .map_or(Environment::Server, Environment::from_origin);

        let vdom = VirtualDom::new_with_props(
            button_row,
            ButtonRowProps {
                app,
                dashboard,
                environment,
                preview: self.preview,
                bookmark: self.bookmark || self.bookmarked,
                bookmarked: self.bookmarked,
                remove: self.remove,
            },
        );

        println!("{}", util::render_fragment(vdom));

        Ok(())
    }
}
