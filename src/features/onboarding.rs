use crate::state::AppState;
use crate::ui::{Button, Column, Text};
use rust_i18n::t;
use serde_json::Value;

pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
}

/// Fixed welcome deck, shown once. The stepper is a plain index with no
/// invariants; finishing it persists the one-shot flag via the router.
pub static SLIDES: &[Slide] = &[
    Slide {
        title: "Al Asma ul Husna",
        body: "The 99 beautiful names, with meaning, transliteration and benefits.",
    },
    Slide {
        title: "Recitation",
        body: "Listen to the recitation with synchronized text, line by line.",
    },
    Slide {
        title: "Tasbeeh",
        body: "Count your dhikr with a target ring. Your count is saved on the device.",
    },
];

pub fn render_onboarding_screen(state: &AppState) -> Value {
    let locale = &state.locale;
    let slide = &SLIDES[state.onboarding_slide.min(SLIDES.len() - 1)];
    let last = state.onboarding_slide + 1 >= SLIDES.len();

    let position = format!("{} / {}", state.onboarding_slide + 1, SLIDES.len());
    let mut children = vec![
        serde_json::to_value(Text::new(slide.title).size(24.0)).unwrap(),
        serde_json::to_value(Text::new(slide.body).size(15.0)).unwrap(),
        serde_json::to_value(
            Text::new(&position)
                .size(12.0)
                .content_description("onboarding_position"),
        )
        .unwrap(),
    ];
    if last {
        children.push(
            serde_json::to_value(
                Button::new(&t!("onboarding_done", locale = locale), "onboarding_done")
                    .id("onboarding_done"),
            )
            .unwrap(),
        );
    } else {
        children.push(
            serde_json::to_value(
                Button::new(&t!("onboarding_next", locale = locale), "onboarding_next")
                    .id("onboarding_next"),
            )
            .unwrap(),
        );
        children.push(
            serde_json::to_value(
                Button::new(&t!("onboarding_done", locale = locale), "onboarding_done")
                    .id("onboarding_skip"),
            )
            .unwrap(),
        );
    }

    serde_json::to_value(Column::new(children).padding(32)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_index_is_clamped_to_deck() {
        let mut state = AppState::new();
        state.onboarding_slide = 999;
        let ui = render_onboarding_screen(&state);
        let text = ui.to_string();
        assert!(text.contains(SLIDES.last().unwrap().title));
    }

    #[test]
    fn last_slide_offers_only_done() {
        let mut state = AppState::new();
        state.onboarding_slide = SLIDES.len() - 1;
        let ui = render_onboarding_screen(&state);
        let text = ui.to_string();
        assert!(text.contains("onboarding_done"));
        assert!(!text.contains("onboarding_next"));
    }
}
