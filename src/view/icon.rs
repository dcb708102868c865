use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Info,
    Share,
    Bookmark,
    Bookmarked,
    Delete,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Info => "info",
            Icon::Share => "share",
            Icon::Bookmark => "bookmark",
            Icon::Bookmarked => "bookmarked",
            Icon::Delete => "delete",
        }
    }

    pub fn svg(self) -> &'static str {
        match self {
            Icon::Info => include_str!("../res/info.svg"),
            Icon::Share => include_str!("../res/share.svg"),
            Icon::Bookmark => include_str!("../res/bookmark.svg"),
            Icon::Bookmarked => include_str!("../res/bookmarked.svg"),
            Icon::Delete => include_str!("../res/delete.svg"),
        }
    }
}

#[derive(Props, PartialEq)]
pub struct IconProps {
    icon: Icon,
    #[props(default)]
    primary: bool,
}

pub fn icon(cx: Scope<IconProps>) -> Element {
    let name = cx.props.icon.name();
    let color = if cx.props.primary { " primary" } else { "" };

    cx.render(rsx! {
        span {
            class: "icon icon-{name}{color}",
            dangerous_inner_html: cx.props.icon.svg()
        }
    })
}
