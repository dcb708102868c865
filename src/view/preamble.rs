use dioxus::prelude::*;

#[derive(Props)]
pub struct PreambleProps<'a> {
    title: &'a str,
    stylesheet: &'a str,
    /// Absolute page URL. Only known when the server has a public origin.
    #[props(!optional)]
    canonical: Option<String>,
    #[props(!optional)]
    summary: Option<&'a str>,
}

pub fn preamble<'a>(cx: Scope<'a, PreambleProps<'a>>) -> Element<'a> {
    let canonical = cx.props.canonical.as_deref().and_then(|canonical| cx.render(rsx! {
        link { rel: "canonical", href: "{canonical}" }
    }));

    let summary = cx.props.summary.and_then(|summary| cx.render(rsx! {
        meta { name: "description", content: "{summary}" }
    }));

    cx.render(rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width,initial-scale=1" }
            title { "{cx.props.title}" }
            canonical
            summary
            link {
                rel: "stylesheet",
                href: "{cx.props.stylesheet}"
            }
        }
    })
}
