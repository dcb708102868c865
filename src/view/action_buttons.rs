use dioxus::prelude::*;

use super::Icon;
use crate::{
    analytics::{Analytics, SAFE_APPS_COPY_SHARE_URL},
    model::{ActiveChain, SafeApp},
    routing::{build_share_url, Environment, Router},
};

/// One button in the action row, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeAppAction {
    Preview,
    CopyShareUrl,
    Bookmark,
    Remove,
}

impl SafeAppAction {
    /// Actions whose handler is present. Copying the share URL needs no
    /// handler and is always available.
    pub fn available(preview: bool, bookmark: bool, remove: bool) -> Vec<Self> {
        [
            (Self::Preview, preview),
            (Self::CopyShareUrl, true),
            (Self::Bookmark, bookmark),
            (Self::Remove, remove),
        ]
        .into_iter()
        .filter_map(|(action, present)| present.then_some(action))
        .collect()
    }

    fn key(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::CopyShareUrl => "share",
            Self::Bookmark => "bookmark",
            Self::Remove => "remove",
        }
    }
}

/// Custom apps are reported by URL, catalog apps by name.
fn track_share_url_copy(analytics: &Analytics, app: &SafeApp) {
    analytics.track_safe_app_event(SAFE_APPS_COPY_SHARE_URL, app.display_name())
}

#[derive(Props)]
pub struct SafeAppActionButtonsProps<'a> {
    pub safe_app: &'a SafeApp,
    #[props(default)]
    pub is_bookmarked: bool,
    #[props(!optional)]
    pub bookmark_safe_app: Option<EventHandler<'a, i64>>,
    #[props(!optional)]
    pub remove_custom_app: Option<EventHandler<'a, SafeApp>>,
    #[props(!optional)]
    pub open_preview_drawer: Option<EventHandler<'a, SafeApp>>,
}

/// Preview, share, bookmark and delete buttons for a Safe App card.
///
/// Buttons sit inside a clickable card, so every click stops propagation
/// and suppresses the default navigation before calling its handler.
pub fn safe_app_action_buttons<'a>(cx: Scope<'a, SafeAppActionButtonsProps<'a>>) -> Element<'a> {
    let app = cx.props.safe_app;

    let router = cx.consume_context::<Router>().unwrap_or_default();
    let environment = cx.consume_context::<Environment>().unwrap_or_default();
    let chain = cx.consume_context::<ActiveChain>().unwrap_or_default().0;
    let analytics = cx.consume_context::<Analytics>().unwrap_or_default();

    let share_url = build_share_url(&router, &environment, &app.url, chain.as_ref());
    let share_url = share_url.as_str();

    let actions = SafeAppAction::available(
        cx.props.open_preview_drawer.is_some(),
        cx.props.bookmark_safe_app.is_some(),
        cx.props.remove_custom_app.is_some(),
    );

    let buttons = actions.into_iter().map(|action| {
        let key = action.key();
        match action {
            SafeAppAction::Preview => rsx! {
                button {
                    key: "{key}",
                    class: "safe-app-action preview",
                    title: "About {app.name}",
                    prevent_default: "onclick",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        if let Some(open_preview_drawer) = &cx.props.open_preview_drawer {
                            open_preview_drawer.call(app.clone());
                        }
                    },
                    super::icon { icon: Icon::Info }
                }
            },
            SafeAppAction::CopyShareUrl => {
                let analytics = analytics.clone();
                rsx! {
                    super::copy_button {
                        key: "{key}",
                        text: "{share_url}",
                        initial_tooltip: "Copy share URL for {app.name}",
                        on_copy: move |_| track_share_url_copy(&analytics, app),
                        super::icon { icon: Icon::Share }
                    }
                }
            }
            SafeAppAction::Bookmark => {
                let (verb, bookmark_icon, class) = if cx.props.is_bookmarked {
                    ("Unpin", Icon::Bookmarked, "safe-app-action bookmark bookmarked")
                } else {
                    ("Pin", Icon::Bookmark, "safe-app-action bookmark")
                };

                rsx! {
                    button {
                        key: "{key}",
                        class: "{class}",
                        title: "{verb} {app.name}",
                        prevent_default: "onclick",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            if let Some(bookmark_safe_app) = &cx.props.bookmark_safe_app {
                                bookmark_safe_app.call(app.id);
                            }
                        },
                        super::icon { icon: bookmark_icon, primary: cx.props.is_bookmarked }
                    }
                }
            }
            SafeAppAction::Remove => rsx! {
                button {
                    key: "{key}",
                    class: "safe-app-action remove",
                    title: "Delete {app.name}",
                    prevent_default: "onclick",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        if let Some(remove_custom_app) = &cx.props.remove_custom_app {
                            remove_custom_app.call(app.clone());
                        }
                    },
                    super::icon { icon: Icon::Delete }
                }
            },
        }
    });

    cx.render(rsx! {
        div {
            class: "safe-app-actions",
            buttons
        }
    })
}

#[cfg(test)]
mod test {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use dioxus::{
        core::{ElementId, Mutation},
        prelude::*,
    };
    use url::Url;

    use super::{track_share_url_copy, SafeAppAction};
    use crate::{
        analytics::{test::RecordingSink, Analytics},
        clipboard::{Clipboard, ClipboardError, ClipboardWriter},
        model::{ActiveChain, Chain, SafeApp},
        routing::Environment,
    };

    #[derive(Props, PartialEq)]
    struct HarnessProps {
        app: SafeApp,
        bookmarked: bool,
        chain: Option<Chain>,
        environment: Environment,
    }

    fn foo() -> SafeApp {
        SafeApp {
            id: 5,
            name: "Foo".to_string(),
            url: "https://foo.app".to_string(),
            description: String::new(),
            icon_url: None,
            chain_ids: vec![],
            tags: vec![],
        }
    }

    fn eth() -> Chain {
        Chain {
            chain_id: "1".to_string(),
            short_name: "eth".to_string(),
            chain_name: None,
        }
    }

    fn props(chain: Option<Chain>) -> HarnessProps {
        HarnessProps {
            app: foo(),
            bookmarked: false,
            chain,
            environment: Environment::from_origin(&Url::parse("https://dash.example/").unwrap()),
        }
    }

    fn with_every_handler(cx: Scope<HarnessProps>) -> Element {
        use_context_provider(cx, || ActiveChain(cx.props.chain.clone()));
        use_context_provider(cx, || cx.props.environment.clone());

        cx.render(rsx! {
            super::safe_app_action_buttons {
                safe_app: &cx.props.app,
                is_bookmarked: cx.props.bookmarked,
                bookmark_safe_app: Some(cx.event_handler(|_id: i64| {})),
                remove_custom_app: Some(cx.event_handler(|_app: SafeApp| {})),
                open_preview_drawer: Some(cx.event_handler(|_app: SafeApp| {})),
            }
        })
    }

    fn without_handlers(cx: Scope<HarnessProps>) -> Element {
        use_context_provider(cx, || ActiveChain(cx.props.chain.clone()));
        use_context_provider(cx, || cx.props.environment.clone());

        cx.render(rsx! {
            super::safe_app_action_buttons {
                safe_app: &cx.props.app,
                bookmark_safe_app: None,
                remove_custom_app: None,
                open_preview_drawer: None,
            }
        })
    }

    fn bookmark_only(cx: Scope<HarnessProps>) -> Element {
        cx.render(rsx! {
            super::safe_app_action_buttons {
                safe_app: &cx.props.app,
                is_bookmarked: cx.props.bookmarked,
                bookmark_safe_app: Some(cx.event_handler(|_id: i64| {})),
                remove_custom_app: None,
                open_preview_drawer: None,
            }
        })
    }

    /// Everything a click can reach: the enclosing card, the row's handlers,
    /// the clipboard and the analytics sink.
    #[derive(Clone, Default, PartialEq)]
    struct Calls {
        card: Rc<Cell<usize>>,
        bookmarked: Rc<RefCell<Vec<i64>>>,
        removed: Rc<RefCell<Vec<SafeApp>>>,
        previewed: Rc<RefCell<Vec<SafeApp>>>,
        copied: Rc<RefCell<Vec<String>>>,
        events: RecordingSink,
    }

    impl Calls {
        fn handled(&self) -> usize {
            self.bookmarked.borrow().len()
                + self.removed.borrow().len()
                + self.previewed.borrow().len()
                + self.events.0.borrow().len()
        }
    }

    struct RecordingClipboard(Rc<RefCell<Vec<String>>>);

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl ClipboardWriter for DeniedClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Denied("no user gesture".to_string()))
        }
    }

    #[derive(Props, PartialEq)]
    struct CardProps {
        app: SafeApp,
        handlers: bool,
        deny_clipboard: bool,
        calls: Calls,
    }

    fn card(app: SafeApp, handlers: bool, deny_clipboard: bool) -> CardProps {
        CardProps {
            app,
            handlers,
            deny_clipboard,
            calls: Calls::default(),
        }
    }

    /// The action row inside a clickable card, with a clipboard and an
    /// analytics sink in context.
    fn clickable_card(cx: Scope<CardProps>) -> Element {
        let calls = &cx.props.calls;
        let handlers = cx.props.handlers;

        use_context_provider(cx, || Analytics::new(calls.events.clone()));
        use_context_provider(cx, || {
            if cx.props.deny_clipboard {
                Clipboard::new(DeniedClipboard)
            } else {
                Clipboard::new(RecordingClipboard(calls.copied.clone()))
            }
        });

        cx.render(rsx! {
            div {
                class: "app-card",
                onclick: move |_| calls.card.set(calls.card.get() + 1),
                super::safe_app_action_buttons {
                    safe_app: &cx.props.app,
                    bookmark_safe_app: handlers.then(|| {
                        cx.event_handler(move |id: i64| calls.bookmarked.borrow_mut().push(id))
                    }),
                    remove_custom_app: handlers.then(|| {
                        cx.event_handler(move |app: SafeApp| calls.removed.borrow_mut().push(app))
                    }),
                    open_preview_drawer: handlers.then(|| {
                        cx.event_handler(move |app: SafeApp| calls.previewed.borrow_mut().push(app))
                    }),
                }
            }
        })
    }

    /// Clicks every element with a click listener once and returns how many
    /// there were. Panics when a click on a button also reaches the card or
    /// fires more than one callback.
    fn click_everything(props: CardProps) -> usize {
        let calls = props.calls.clone();
        let mut vdom = VirtualDom::new_with_props(clickable_card, props);

        let listeners: Vec<ElementId> = vdom
            .rebuild()
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name.trim_start_matches("on") == "click" => {
                    Some(*id)
                }
                _ => None,
            })
            .collect();

        let mut card_clicks = 0;
        for id in listeners.iter().copied() {
            let (card, handled) = (calls.card.get(), calls.handled());
            vdom.handle_event("click", Rc::new(MouseData::default()), id, true);

            match (calls.card.get() - card, calls.handled() - handled) {
                // the card's own listener
                (1, 0) => card_clicks += 1,
                (0, 0) | (0, 1) => {}
                other => panic!("click on {id:?} gave (card, callbacks) = {other:?}"),
            }
        }
        assert_eq!(card_clicks, 1);

        listeners.len()
    }

    fn render(root: fn(Scope<HarnessProps>) -> Element, props: HarnessProps) -> String {
        let mut vdom = VirtualDom::new_with_props(root, props);
        let _ = vdom.rebuild();
        dioxus_ssr::render(&vdom)
    }

    #[test]
    fn available_actions_follow_handlers() {
        use SafeAppAction::*;

        assert_eq!(SafeAppAction::available(false, false, false), vec![CopyShareUrl]);
        assert_eq!(
            SafeAppAction::available(true, true, true),
            vec![Preview, CopyShareUrl, Bookmark, Remove]
        );
        assert_eq!(SafeAppAction::available(false, true, false), vec![CopyShareUrl, Bookmark]);
        assert_eq!(SafeAppAction::available(true, false, true), vec![Preview, CopyShareUrl, Remove]);
    }

    #[test]
    fn copy_is_tracked_by_display_name() {
        let sink = RecordingSink::default();
        let analytics = Analytics::new(sink.clone());

        track_share_url_copy(&analytics, &foo());
        track_share_url_copy(&analytics, &SafeApp { id: 0, ..foo() });

        let labels: Vec<_> = sink.0.borrow().iter().map(|event| event.label.clone()).collect();
        assert_eq!(
            labels,
            vec![Some("Foo".to_string()), Some("https://foo.app".to_string())]
        );
        assert!(sink.0.borrow().iter().all(|event| event.action == "Copy share URL"));
    }

    #[test]
    fn every_handler_renders_every_button() {
        let html = render(with_every_handler, props(Some(eth())));

        assert_eq!(html.matches("<button").count(), 4);
        assert!(html.contains("safe-app-action preview"));
        assert!(html.contains("safe-app-action share"));
        assert!(html.contains("safe-app-action bookmark"));
        assert!(html.contains("safe-app-action remove"));
        assert!(html.contains("Copy share URL for Foo"));
        assert!(html.contains("Pin Foo"));
        assert!(html.contains("Delete Foo"));
    }

    #[test]
    fn share_button_is_always_rendered() {
        let html = render(without_handlers, props(None));

        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("safe-app-action share"));
        assert!(!html.contains("safe-app-action preview"));
        assert!(!html.contains("safe-app-action bookmark"));
        assert!(!html.contains("safe-app-action remove"));
    }

    #[test]
    fn share_button_carries_share_url() {
        let html = render(without_handlers, props(Some(eth())));
        assert!(html.contains("https://dash.example/share/safe-app?appUrl=https%3A%2F%2Ffoo.app"));
        assert!(html.contains("chain=eth"));

        let html = render(without_handlers, props(None));
        assert!(html.contains("https://dash.example/share/safe-app?appUrl=https%3A%2F%2Ffoo.app"));
        assert!(!html.contains("chain="));
    }

    #[test]
    fn share_url_without_context_has_no_origin() {
        let html = render(bookmark_only, props(Some(eth())));

        assert!(html.contains("/share/safe-app?appUrl=https%3A%2F%2Ffoo.app"));
        assert!(!html.contains("dash.example"));
        assert!(!html.contains("chain="));
    }

    #[test]
    fn bookmark_button_reflects_state() {
        let html = render(bookmark_only, props(None));
        assert_eq!(html.matches("<button").count(), 2);
        assert!(html.contains("Pin Foo"));
        assert!(!html.contains("bookmarked"));

        let html = render(
            bookmark_only,
            HarnessProps {
                bookmarked: true,
                ..props(None)
            },
        );
        assert!(html.contains("Unpin Foo"));
        assert!(html.contains("safe-app-action bookmark bookmarked"));
        assert!(html.contains("icon icon-bookmarked primary"));
    }

    #[test]
    fn clicks_stay_inside_the_row() {
        let props = card(foo(), true, false);
        let calls = props.calls.clone();

        assert_eq!(click_everything(props), 5);

        assert_eq!(calls.card.get(), 1);
        assert_eq!(*calls.bookmarked.borrow(), vec![5]);
        assert_eq!(*calls.removed.borrow(), vec![foo()]);
        assert_eq!(*calls.previewed.borrow(), vec![foo()]);
        assert_eq!(
            *calls.copied.borrow(),
            vec!["/share/safe-app?appUrl=https%3A%2F%2Ffoo.app".to_string()]
        );
    }

    #[test]
    fn copy_click_is_tracked_once() {
        let props = card(foo(), false, false);
        let calls = props.calls.clone();

        assert_eq!(click_everything(props), 2);

        let events = calls.events.0.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, "safe-apps");
        assert_eq!(events[0].action, "Copy share URL");
        assert_eq!(events[0].label.as_deref(), Some("Foo"));
    }

    #[test]
    fn custom_app_copy_is_tracked_by_url() {
        let props = card(SafeApp { id: 0, ..foo() }, false, false);
        let calls = props.calls.clone();

        click_everything(props);

        let labels: Vec<_> = calls.events.0.borrow().iter().map(|event| event.label.clone()).collect();
        assert_eq!(labels, vec![Some("https://foo.app".to_string())]);
    }

    #[test]
    fn denied_copy_is_not_tracked() {
        let props = card(foo(), false, true);
        let calls = props.calls.clone();

        assert_eq!(click_everything(props), 2);

        assert!(calls.copied.borrow().is_empty());
        assert!(calls.events.0.borrow().is_empty());
        assert_eq!(calls.card.get(), 1);
    }
}
