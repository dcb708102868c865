//! `serve` command handler.

use chrono::{DateTime, Utc};
use clap::Parser;
use dioxus::prelude::*;
use hyper::{
    header::{CACHE_CONTROL, CONTENT_TYPE, LAST_MODIFIED},
    server::conn::AddrStream,
    service::service_fn,
    Body, Method, Request, Response, StatusCode,
};
use log::{debug, info, LevelFilter};
use std::{
    collections::HashMap, convert::Infallible, env, error::Error, net::SocketAddr, path::PathBuf,
    sync::Arc,
};
use tokio::sync::RwLock;
use url::Url;

use crate::{
    model::Dashboard,
    routing::{AppRoutes, Environment, Router, APP_URL_QUERY, CHAIN_QUERY},
    util::{self, db::CatalogDb},
    view::{self, CatalogProps, NotFoundProps, ShareProps},
};

#[derive(Debug, Parser)]
pub struct Serve {
    /// Directory containing dashboard.yaml
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Address and port the server will use.
    #[arg(short, long, default_value = "127.0.0.1:4198")]
    address: SocketAddr,

    /// Catalog cache time-to-live, in seconds. Lower values pick up changes to dashboard.yaml sooner.
    #[arg(short = 'c', long, default_value = "300")]
    cache_ttl: u32,

    /// Public origin of the dashboard, e.g. https://dash.example.
    ///
    /// Share links are absolute when this is set and origin-less otherwise.
    #[arg(short, long)]
    origin: Option<Url>,

    /// Adjusts the verbosity of the logger.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

struct Server {
    db: CatalogDb,
    environment: Environment,
}

const ROBOTS_TXT: &str = include_str!("res/robots.txt");

impl Serve {
    pub fn directory(&self) -> Result<PathBuf, std::io::Error> {
        self.directory
            .as_ref()
            .map_or_else(|| env::current_dir(), |path| dunce::canonicalize(path))
    }

    fn into_server(self) -> Result<Server, std::io::Error> {
        let dir = self.directory()?;
        let db = CatalogDb::new(dir.join(crate::DASHBOARD_FILE), self.cache_ttl)?;

        let environment = self
            .origin
            .as_ref()
            .map_or(Environment::Server, Environment::from_origin);

        Ok(Server { db, environment })
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        let address = self.address;
        let server = Arc::from(RwLock::new(self.into_server()?));

        // fail on startup rather than on the first request
        server.write().await.db.refresh().await?;

        let make_service = hyper::service::make_service_fn(|conn: &AddrStream| {
            let address = conn.remote_addr();

            let server = server.clone();

            let service =
                service_fn(move |request| Server::handle(server.clone(), address, request));

            async move { Ok::<_, Infallible>(service) }
        });

        info!("Listening on http://{}", address);

        hyper::Server::bind(&address).serve(make_service).await?;

        Ok(())
    }
}

impl Server {
    async fn handle(
        server: Arc<RwLock<Server>>,
        client_addr: SocketAddr,
        req: Request<Body>,
    ) -> Result<Response<Body>, hyper::http::Error> {
        debug!("{client_addr} {} {:?}", req.method(), req.uri());

        let dashboard = {
            let mut server = server.write().await;
            server.db.refresh().await.map(|dashboard| dashboard.clone())
        };

        let result = match dashboard {
            Ok(dashboard) => server.read().await.route(req, dashboard),
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(ok) => Ok(ok),
            Err(err) => {
                let response = Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from(format!("error: {err}")))?;
                Ok(response)
            }
        }
    }

    fn route(&self, req: Request<Body>, dashboard: Dashboard) -> Result<Response<Body>, Box<dyn Error>> {
        if req.method() != Method::GET {
            return Self::not_found(req, &dashboard);
        }

        if req.uri().path().to_lowercase().as_str() == "/robots.txt" {
            return Self::robots();
        }

        let router = Router::new(&dashboard.base_path).with_locale(dashboard.locale.clone());
        let path = router.strip_local(req.uri().path()).map(|path| path.to_string());

        match path.as_deref() {
            Some(AppRoutes::HOME) | Some(AppRoutes::APPS) => self.catalog(req, dashboard),
            Some(AppRoutes::SHARE_SAFE_APP) => self.share(req, dashboard),
            Some("/public/styles.css") => Self::styles(),
            _ => Self::not_found(req, &dashboard),
        }
    }

    fn catalog(&self, req: Request<Body>, dashboard: Dashboard) -> Result<Response<Body>, Box<dyn Error>> {
        if util::cache_valid(&req, &self.db.last_modified()) {
            return Ok(Response::builder()
                .status(StatusCode::NOT_MODIFIED)
                .body(Body::empty())?);
        }

        let last_modified = DateTime::<Utc>::from(self.db.last_modified()).to_rfc2822();
        let lang = dashboard.locale.clone().unwrap_or_else(|| "en".to_string());
        let vdom = VirtualDom::new_with_props(
            view::catalog,
            CatalogProps {
                dashboard,
                environment: self.environment.clone(),
            },
        );
        let body = util::render_html(vdom, &lang);

        Ok(Response::builder()
            .status(StatusCode::OK)
            .header(CACHE_CONTROL, "max-age=60")
            .header(LAST_MODIFIED, last_modified)
            .header(CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(body))?)
    }

    fn share(&self, req: Request<Body>, dashboard: Dashboard) -> Result<Response<Body>, Box<dyn Error>> {
        let mut query = share_query(&req)?;

        let Some(app_url) = query.remove(APP_URL_QUERY).filter(|url| !url.is_empty()) else {
            return Ok(Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .body(Body::from(format!("error: missing {APP_URL_QUERY} parameter")))?);
        };
        let chain = query.remove(CHAIN_QUERY).filter(|chain| !chain.is_empty());

        let lang = dashboard.locale.clone().unwrap_or_else(|| "en".to_string());
        let vdom = VirtualDom::new_with_props(
            view::share,
            ShareProps {
                dashboard,
                app_url,
                chain,
                environment: self.environment.clone(),
            },
        );
        let body = util::render_html(vdom, &lang);

        Ok(Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(body))?)
    }

    fn styles() -> Result<Response<Body>, Box<dyn Error>> {
        Ok(Response::builder()
            .status(StatusCode::OK)
            .header(CACHE_CONTROL, "max-age=3600")
            .header(CONTENT_TYPE, "text/css; charset=utf-8")
            .body(Body::from(crate::DEFAULT_STYLES))?)
    }

    fn robots() -> Result<Response<Body>, Box<dyn Error>> {
        Ok(Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(Body::from(ROBOTS_TXT))?)
    }

    fn not_found(req: Request<Body>, dashboard: &Dashboard) -> Result<Response<Body>, Box<dyn Error>> {
        let router = Router::new(&dashboard.base_path).with_locale(dashboard.locale.clone());
        let path = req.uri().clone();
        let method = req.method().clone();
        let home = router.local_path(AppRoutes::HOME);
        let vdom = VirtualDom::new_with_props(view::not_found, NotFoundProps { path, method, home });

        Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header(CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(util::render_fragment(vdom)))?)
    }
}

/// First value of every query parameter on the request.
fn share_query(req: &Request<Body>) -> Result<HashMap<String, String>, url::ParseError> {
    let url = Url::parse(&format!("http://dummy{}", req.uri()))?;
    let mut query = HashMap::new();
    for (key, value) in url.query_pairs() {
        query.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }
    Ok(query)
}
