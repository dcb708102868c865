use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Start the HTTP server.
    Serve(crate::serve::Serve),
    /// Create a default dashboard.yaml in the current working directory.
    Init(crate::init::Init),
    /// Print the share link for an app.
    ShareUrl(crate::share_url::ShareUrl),
    /// Print the action buttons of a catalog app as HTML.
    Render(crate::render::Render),
}

impl Action {
    pub fn log_level(&self) -> LevelFilter {
        match self {
            Action::Serve(serve) => serve.log_level,
            Action::Init(init) => init.log_level,
            Action::ShareUrl(share_url) => share_url.log_level,
            Action::Render(render) => render.log_level,
        }
    }
}
