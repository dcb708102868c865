mod analytics;
mod cli;
mod clipboard;
mod init;
mod model;
mod render;
mod routing;
mod serve;
mod share_url;
mod util;
mod view;

use std::error::Error;

use clap::Parser;
use cli::Action;

use crate::cli::Cli;

pub const DASHBOARD_FILE: &str = "dashboard.yaml";
pub const DEFAULT_DASHBOARD: &str = include_str!("res/dashboard.yaml");
pub const DEFAULT_STYLES: &str = include_str!("res/styles.css");

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(args.action.log_level())
        .init()
        .expect("Initializing logger");

    match args.action {
        Action::Serve(serve) => serve.run().await?,
        Action::Init(init) => init.run().await?,
        Action::ShareUrl(share_url) => share_url.run()?,
        Action::Render(render) => render.run()?,
    }

    Ok(())
}
