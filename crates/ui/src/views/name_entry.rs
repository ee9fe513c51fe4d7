use dioxus::prelude::*;

use crate::views::ViewError;

#[component]
pub fn NameEntry(
    mut name: Signal<String>,
    error: Option<ViewError>,
    disabled: bool,
    on_start: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "name-entry",
            h2 { "Discover how you prefer to think" }
            p { "Rate each statement from 1 (never) to 5 (always). Enter your name to begin." }
            form {
                class: "name-entry__form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_start.call(());
                },
                input {
                    id: "name-input",
                    r#type: "text",
                    placeholder: "Your name",
                    autofocus: true,
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                button {
                    id: "start-button",
                    r#type: "submit",
                    disabled,
                    "Start"
                }
            }
            if let Some(err) = error {
                p { class: "form-error", id: "name-error", "{err.message()}" }
            }
        }
    }
}
