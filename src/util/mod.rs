use chrono::{DateTime, TimeZone};
use dioxus::prelude::VirtualDom;
use hyper::{Body, Request};

pub mod db;
pub mod header_ext;

use header_ext::HeaderExt;

pub fn render_html(mut vdom: VirtualDom, lang: &str) -> String {
    let _ = vdom.rebuild();
    let lang = html_escape::encode_unquoted_attribute(lang);
    format!("<!DOCTYPE html><html lang=\"{lang}\">{}</html>", dioxus_ssr::render(&vdom))
}

/// Renders a component tree without the document wrapper.
pub fn render_fragment(mut vdom: VirtualDom) -> String {
    let _ = vdom.rebuild();
    dioxus_ssr::render(&vdom)
}

/// Whether the client's cached copy of a resource last changed at
/// `timestamp` is still current.
pub fn cache_valid<TZ: TimeZone>(req: &Request<Body>, timestamp: &DateTime<TZ>) -> bool {
    req.headers().is_cache_valid(timestamp)
}
