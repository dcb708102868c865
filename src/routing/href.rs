use url::form_urlencoded;

use super::Environment;

/// A URL in structured form, before it is resolved against the router.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlObject {
    pub protocol: String,
    pub host: String,
    pub pathname: String,
    /// Pairs with a `None` value are left out of the query string.
    pub query: Vec<(String, Option<String>)>,
}

impl UrlObject {
    pub fn with_query<K: Into<String>>(mut self, key: K, value: Option<String>) -> Self {
        self.query.push((key.into(), value));
        self
    }
}

pub fn format_url(url: &UrlObject) -> String {
    let mut protocol = url.protocol.clone();
    if !protocol.is_empty() && !protocol.ends_with(':') {
        protocol.push(':');
    }

    let (host, pathname) = if url.host.is_empty() {
        (String::new(), url.pathname.clone())
    } else if url.pathname.is_empty() || url.pathname.starts_with('/') {
        (format!("//{}", url.host), url.pathname.clone())
    } else {
        (format!("//{}", url.host), format!("/{}", url.pathname))
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in url.query.iter() {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }

    let search = if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    };

    format!("{protocol}{host}{pathname}{search}")
}

/// Turns a structured URL into the string the hosting application links to.
pub trait ResolveHref {
    fn resolve_href(&self, url: &UrlObject) -> String;
}

/// Routing context of the dashboard: every local path lives below
/// `base_path`, followed by the locale segment when one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    base_path: String,
    locale: Option<String>,
}

impl Router {
    pub fn new<S: AsRef<str>>(base_path: S) -> Self {
        let trimmed = base_path.as_ref().trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };

        Self {
            base_path,
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale.filter(|locale| !locale.trim_matches('/').is_empty());
        self
    }

    /// Prefixes `path` with the base path and locale.
    pub fn local_path(&self, path: &str) -> String {
        let mut out = self.base_path.clone();
        if let Some(locale) = &self.locale {
            out.push('/');
            out.push_str(locale.trim_matches('/'));
        }

        let path = path.trim_start_matches('/');
        if !path.is_empty() || out.is_empty() {
            out.push('/');
            out.push_str(path);
        }
        out
    }

    /// Absolute URL of a local page, or `None` when there is no browser
    /// origin to anchor it to.
    pub fn absolute_href(&self, environment: &Environment, pathname: &str) -> Option<String> {
        match environment {
            Environment::Browser(location) => Some(self.resolve_href(&UrlObject {
                protocol: location.protocol.clone(),
                host: location.host.clone(),
                pathname: pathname.to_string(),
                query: vec![],
            })),
            Environment::Server => None,
        }
    }

    /// The inverse of [`Router::local_path`]. Returns `None` for paths
    /// outside the router's base.
    pub fn strip_local<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix(self.base_path.as_str())?;
        let rest = match &self.locale {
            Some(locale) => rest
                .strip_prefix('/')
                .and_then(|rest| rest.strip_prefix(locale.trim_matches('/')))?,
            None => rest,
        };

        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl ResolveHref for Router {
    fn resolve_href(&self, url: &UrlObject) -> String {
        let url = UrlObject {
            pathname: self.local_path(&url.pathname),
            ..url.clone()
        };
        format_url(&url)
    }
}
