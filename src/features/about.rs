use crate::state::AppState;
use crate::ui::{maybe_push_back, Button, Card, Column, Text};
use rust_i18n::t;
use serde_json::{json, Value};

pub fn render_about_screen(state: &AppState) -> Value {
    let locale = &state.locale;

    let language_buttons: Vec<Value> = [("English", "en"), ("Français", "fr"), ("العربية", "ar")]
        .iter()
        .map(|(label, code)| {
            let mut button =
                Button::new(label, "set_locale").payload(json!({ "locale": code }));
            if state.locale == *code {
                button = button.content_description("selected_locale");
            }
            serde_json::to_value(button).unwrap()
        })
        .collect();

    let mut children = vec![
        serde_json::to_value(Text::new(&t!("app_title", locale = locale)).size(22.0)).unwrap(),
        serde_json::to_value(
            Text::new(&format!("Version: {}", env!("CARGO_PKG_VERSION"))).size(14.0),
        )
        .unwrap(),
        serde_json::to_value(Text::new("License: AGPL-3.0-or-later").size(14.0)).unwrap(),
        serde_json::to_value(
            Text::new("Free software; the catalog text and recitation are in the public domain.")
                .size(12.0),
        )
        .unwrap(),
        serde_json::to_value(
            Card::new(vec![
                serde_json::to_value(Column::new(language_buttons).padding(8)).unwrap()
            ])
            .title(&t!("language", locale = locale))
            .padding(12),
        )
        .unwrap(),
    ];
    maybe_push_back(&mut children, state);

    serde_json::to_value(Column::new(children).padding(24)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_screen_shows_version_and_languages() {
        let mut state = AppState::new();
        state.ensure_navigation();
        let ui = render_about_screen(&state);
        let text = ui.to_string();
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
        assert!(text.contains("Français"));
        assert!(text.contains("set_locale"));
    }
}
