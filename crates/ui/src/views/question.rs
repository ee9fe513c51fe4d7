use dioxus::prelude::*;
use quiz_core::model::Rating;

use crate::views::ViewError;
use crate::vm::QuizIntent;

fn rating_for_key(key: &str) -> Option<Rating> {
    key.parse::<u8>().ok().and_then(|value| Rating::new(value).ok())
}

#[component]
pub fn QuestionPanel(
    text: String,
    progress: String,
    pending: Option<Rating>,
    error: Option<ViewError>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let on_key = move |evt: KeyboardEvent| match evt.data.key() {
        Key::Enter => {
            evt.prevent_default();
            on_intent.call(QuizIntent::Confirm);
        }
        Key::Character(typed) => {
            if let Some(rating) = rating_for_key(&typed) {
                on_intent.call(QuizIntent::Select(rating));
            }
        }
        _ => {}
    };

    rsx! {
        section {
            class: "question",
            id: "question-root",
            tabindex: "0",
            onkeydown: on_key,
            p { class: "question__progress", "{progress}" }
            h2 { class: "question__text", id: "question-text", "{text}" }
            div { class: "ratings",
                for rating in Rating::ALL {
                    RatingButton {
                        key: "{rating.value()}",
                        rating,
                        selected: pending == Some(rating),
                        on_intent,
                    }
                }
            }
            button {
                class: "question__enter",
                id: "enter-button",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Confirm),
                "Enter"
            }
            if let Some(err) = error {
                p { class: "form-error", id: "question-error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn RatingButton(rating: Rating, selected: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if selected {
        "rating rating--selected"
    } else {
        "rating"
    };
    rsx! {
        button {
            class,
            id: "rating-{rating.value()}",
            r#type: "button",
            "aria-pressed": "{selected}",
            onclick: move |_| on_intent.call(QuizIntent::Select(rating)),
            span { class: "rating__value", "{rating.value()}" }
            span { class: "rating__label", "{rating.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_to_ratings() {
        assert_eq!(rating_for_key("1"), Some(Rating::NEVER));
        assert_eq!(rating_for_key("5"), Some(Rating::ALWAYS));
        assert_eq!(rating_for_key("6"), None);
        assert_eq!(rating_for_key("a"), None);
    }
}
