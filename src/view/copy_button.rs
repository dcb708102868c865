use dioxus::prelude::*;

use crate::clipboard::{copy_text, Clipboard};

#[derive(Props)]
pub struct CopyButtonProps<'a> {
    text: &'a str,
    initial_tooltip: &'a str,
    /// Fired after `text` was written to the clipboard.
    on_copy: Option<EventHandler<'a>>,
    children: Element<'a>,
}

/// Icon button that copies `text` through the [`Clipboard`] found in
/// context. `on_copy` is not fired when the copy fails.
pub fn copy_button<'a>(cx: Scope<'a, CopyButtonProps<'a>>) -> Element<'a> {
    let copied = use_state(cx, || false);
    let tooltip = if *copied.get() {
        "Copied"
    } else {
        cx.props.initial_tooltip
    };

    cx.render(rsx! {
        button {
            class: "safe-app-action share",
            title: "{tooltip}",
            value: "{cx.props.text}",
            prevent_default: "onclick",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();

                let clipboard = cx.consume_context::<Clipboard>();
                if copy_text(clipboard.as_ref(), cx.props.text) {
                    copied.set(true);
                    if let Some(on_copy) = &cx.props.on_copy {
                        on_copy.call(());
                    }
                }
            },
            &cx.props.children
        }
    })
}
