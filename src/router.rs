use crate::features::about::render_about_screen;
use crate::features::catalog::{self, render_catalog_screen, render_detail_screen};
use crate::features::onboarding::{render_onboarding_screen, SLIDES};
use crate::features::playback::{render_audio_sheet, PlaybackState, DEFAULT_TICK_DT};
use crate::features::share::compose_share_text;
use crate::features::storage;
use crate::features::tally::render_tally_screen;
use crate::i18n::update_locale;
use crate::platform_log;
use crate::state::{AppState, Screen};
use crate::ui::{Button, Card, Column, Dialog, Stack, Text};

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use rust_i18n::t;
use serde::Deserialize;
use serde_json::{json, Value};
use std::{collections::HashMap, ptr, sync::Mutex};

static STATE: Mutex<AppState> = Mutex::new(AppState::new());

#[derive(Deserialize)]
struct Command {
    action: String,
    bindings: Option<HashMap<String, String>>,
    snapshot: Option<String>,
}

#[derive(Debug)]
enum Action {
    Init,
    Reset,
    Back,
    Snapshot,
    Restore { snapshot: String },
    SetLocale { locale: Option<String> },
    CatalogScreen,
    NameOpen { index: Option<usize> },
    TallyScreen,
    AboutScreen,
    OnboardingNext,
    OnboardingDone,
    TallyIncrement,
    TallyReset,
    TallySetTarget { target: Option<u32> },
    TallyCustomTarget { raw: Option<String> },
    TallyToggleVibrate,
    AudioOpen,
    AudioClose,
    AudioToggle,
    AudioTick { dt: f64 },
    AudioSeek { delta: f64 },
    ShareName,
    ExitConfirm,
    ExitCancel,
    Noop,
}

fn parse_usize_binding(bindings: &HashMap<String, String>, key: &str) -> Option<usize> {
    bindings.get(key).and_then(|v| v.trim().parse::<usize>().ok())
}

fn parse_u32_binding(bindings: &HashMap<String, String>, key: &str) -> Option<u32> {
    bindings.get(key).and_then(|v| v.trim().parse::<u32>().ok())
}

fn parse_f64_binding(bindings: &HashMap<String, String>, key: &str) -> Option<f64> {
    bindings.get(key).and_then(|v| v.trim().parse::<f64>().ok())
}

fn parse_action(command: Command) -> Result<Action, String> {
    let Command {
        action,
        bindings,
        snapshot,
    } = command;

    let bindings = bindings.unwrap_or_default();

    match action.as_str() {
        "init" => Ok(Action::Init),
        "reset" => Ok(Action::Reset),
        "back" => Ok(Action::Back),
        "snapshot" => Ok(Action::Snapshot),
        "restore_state" => snapshot
            .ok_or_else(|| "missing_snapshot".to_string())
            .map(|snap| Action::Restore { snapshot: snap }),
        "set_locale" => Ok(Action::SetLocale {
            locale: bindings.get("locale").cloned(),
        }),
        "catalog_screen" => Ok(Action::CatalogScreen),
        "name_open" => Ok(Action::NameOpen {
            index: parse_usize_binding(&bindings, "index"),
        }),
        "tally_screen" => Ok(Action::TallyScreen),
        "about_screen" => Ok(Action::AboutScreen),
        "onboarding_next" => Ok(Action::OnboardingNext),
        "onboarding_done" => Ok(Action::OnboardingDone),
        "tally_increment" => Ok(Action::TallyIncrement),
        "tally_reset" => Ok(Action::TallyReset),
        "tally_set_target" => Ok(Action::TallySetTarget {
            target: parse_u32_binding(&bindings, "target"),
        }),
        "tally_custom_target" => Ok(Action::TallyCustomTarget {
            raw: bindings.get("target").cloned(),
        }),
        "tally_toggle_vibrate" => Ok(Action::TallyToggleVibrate),
        "audio_open" => Ok(Action::AudioOpen),
        "audio_close" => Ok(Action::AudioClose),
        "audio_toggle" => Ok(Action::AudioToggle),
        "audio_tick" => Ok(Action::AudioTick {
            dt: parse_f64_binding(&bindings, "dt").unwrap_or(DEFAULT_TICK_DT),
        }),
        "audio_seek" => Ok(Action::AudioSeek {
            delta: parse_f64_binding(&bindings, "delta").unwrap_or(0.0),
        }),
        "share_name" => Ok(Action::ShareName),
        "exit_confirm" => Ok(Action::ExitConfirm),
        "exit_cancel" => Ok(Action::ExitCancel),
        "noop" => Ok(Action::Noop),
        other => Err(format!("unknown_action:{other}")),
    }
}

#[no_mangle]
pub extern "system" fn Java_app_husna_MainActivity_dispatch(
    mut env: JNIEnv,
    _class: JClass,
    input: JString,
) -> jstring {
    let response = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let input_str: String = env
            .get_string(&input)
            .map(|s| s.into())
            .unwrap_or_else(|_| "{}".to_string());

        let command: Command = serde_json::from_str(&input_str).unwrap_or(Command {
            action: "error".into(),
            bindings: None,
            snapshot: None,
        });

        handle_command(command)
    }));

    let json_value = match response {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => error_ui(&err),
        Err(_) => error_ui("panic"),
    };

    let output_string = json_value.to_string();
    match env.new_string(output_string) {
        Ok(java_str) => java_str.into_raw(),
        Err(_) => {
            let fallback = error_ui("jni_new_string_failed").to_string();
            env.new_string(fallback)
                .map(|s| s.into_raw())
                .unwrap_or(ptr::null_mut())
        }
    }
}

fn handle_command(command: Command) -> Result<Value, String> {
    let mut state = match STATE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            platform_log("ui mutex poisoned; recovering state");
            poisoned.into_inner()
        }
    };

    state.ensure_navigation();

    let action = match parse_action(command) {
        Ok(action) => action,
        Err(err) => {
            state.last_error = Some(err);
            return Ok(render_ui(&state));
        }
    };

    match action {
        Action::Init => {
            if state.locale.is_empty() {
                let preferred = state.preferred_locale.clone();
                update_locale(&mut state, &preferred);
            }
            state.tally.count = storage::read_counter();
            state.onboarding_seen = storage::onboarding_seen();
            // The gate only decides the entry screen; it never interrupts a
            // session that is already somewhere.
            if !state.onboarding_seen && state.nav_depth() <= 1 {
                state.nav_stack.clear();
                state.nav_stack.push(Screen::Onboarding);
            }
        }
        Action::Reset => {
            state.reset_runtime();
            state.reset_navigation();
        }
        Action::Snapshot => {
            state.ensure_navigation();
            let snap =
                serde_json::to_string(&*state).map_err(|e| format!("snapshot_failed:{e}"))?;
            return Ok(json!({
                "type": "Snapshot",
                "snapshot": snap
            }));
        }
        Action::Restore { snapshot } => match serde_json::from_str::<AppState>(&snapshot) {
            Ok(mut restored) => {
                restored.ensure_navigation();
                // Playback never survives a restore; the sheet reopens cold.
                restored.audio_sheet_open = false;
                *state = restored;
            }
            Err(e) => {
                state.last_error = Some(format!("restore_failed:{e}"));
            }
        },
        Action::Back => {
            // Host back signal: overlays first, then the stack, and at the
            // top level ask before leaving instead of navigating.
            if state.audio_sheet_open {
                state.close_audio_sheet();
            } else if state.exit_dialog_open {
                state.exit_dialog_open = false;
            } else if state.current_screen() == Screen::Home {
                state.exit_dialog_open = true;
            } else {
                state.pop_screen();
            }
        }
        Action::SetLocale { locale } => {
            let raw = locale.unwrap_or_default();
            state.preferred_locale = raw.clone();
            update_locale(&mut state, &raw);
        }
        Action::CatalogScreen => {
            state.push_screen(Screen::Catalog);
        }
        Action::NameOpen { index } => {
            // An out-of-range index is treated like a missing context: the
            // detail screen renders its fallback.
            if let Some(i) = index.filter(|i| catalog::name_at(*i).is_some()) {
                state.selected_name = Some(i);
            }
            state.push_screen(Screen::Detail);
        }
        Action::TallyScreen => {
            state.push_screen(Screen::Tally);
        }
        Action::AboutScreen => {
            state.push_screen(Screen::About);
        }
        Action::OnboardingNext => {
            state.onboarding_slide = (state.onboarding_slide + 1).min(SLIDES.len() - 1);
        }
        Action::OnboardingDone => {
            state.onboarding_seen = true;
            if let Err(e) = storage::mark_onboarding_seen() {
                platform_log(&format!("onboarding flag not persisted: {e}"));
            }
            state.onboarding_slide = 0;
            state.reset_navigation();
        }
        Action::TallyIncrement => {
            let milestone = state.tally.increment();
            persist_count(&state);
            if state.current_screen() == Screen::Tally {
                return Ok(compose_overlays(&state, render_tally_screen(&state, milestone)));
            }
        }
        Action::TallyReset => {
            state.tally.reset();
            persist_count(&state);
        }
        Action::TallySetTarget { target } => {
            if let Some(n) = target {
                state.tally.set_target(n);
            }
        }
        Action::TallyCustomTarget { raw } => {
            if let Some(raw) = raw {
                state.tally.set_custom_target(&raw);
            }
        }
        Action::TallyToggleVibrate => {
            state.tally.vibrate_on_milestone = !state.tally.vibrate_on_milestone;
        }
        Action::AudioOpen => {
            state.audio_sheet_open = true;
            state.playback = Some(PlaybackState::for_recitation());
        }
        Action::AudioClose => {
            state.close_audio_sheet();
        }
        Action::AudioToggle => {
            if let Some(playback) = state.playback.as_mut() {
                playback.toggle_play();
            }
        }
        Action::AudioTick { dt } => {
            // A tick that outlives the sheet finds no playback state and is
            // silently dropped.
            if let Some(playback) = state.playback.as_mut() {
                playback.tick(dt);
            }
        }
        Action::AudioSeek { delta } => {
            if let Some(playback) = state.playback.as_mut() {
                playback.seek(delta);
            }
        }
        Action::ShareName => {
            if let Some(record) = state.selected_name.and_then(catalog::name_at) {
                return Ok(json!({
                    "type": "Share",
                    "text": compose_share_text(record)
                }));
            }
            // No selection: nothing to share, fall through to the UI.
        }
        Action::ExitConfirm => {
            state.exit_dialog_open = false;
            return Ok(json!({ "type": "Exit" }));
        }
        Action::ExitCancel => {
            state.exit_dialog_open = false;
        }
        Action::Noop => {}
    }

    Ok(render_ui(&state))
}

/// Flush the durable count after a mutation. Write failure is logged and
/// swallowed; the in-memory count stays authoritative for this session.
fn persist_count(state: &AppState) {
    if let Err(e) = storage::write_counter(state.tally.count) {
        platform_log(&format!("counter not persisted: {e}"));
    }
}

fn error_ui(message: &str) -> Value {
    json!({
        "type": "Column",
        "padding": 24,
        "children": [
            { "type": "Text", "text": "Error", "size": 18.0 },
            { "type": "Text", "text": message }
        ]
    })
}

fn render_ui(state: &AppState) -> Value {
    let screen = match state.current_screen() {
        Screen::Home => render_home_screen(state),
        Screen::Catalog => render_catalog_screen(state),
        Screen::Detail => render_detail_screen(state),
        Screen::Tally => render_tally_screen(state, false),
        Screen::About => render_about_screen(state),
        Screen::Onboarding => render_onboarding_screen(state),
    };
    compose_overlays(state, screen)
}

/// Overlays sit above the screen in z-order and are never part of the nav
/// stack; without any open overlay the screen is the root node itself.
fn compose_overlays(state: &AppState, screen: Value) -> Value {
    if !state.any_overlay_open() {
        return screen;
    }

    let mut layers = vec![screen];
    if state.audio_sheet_open {
        if let Some(playback) = state.playback.as_ref() {
            layers.push(render_audio_sheet(state, playback));
        }
    }
    if state.exit_dialog_open {
        layers.push(render_exit_dialog(state));
    }
    serde_json::to_value(Stack::new(layers)).unwrap()
}

fn render_exit_dialog(state: &AppState) -> Value {
    let locale = &state.locale;
    let title = t!("exit_title", locale = locale);
    let message = t!("exit_message", locale = locale);
    let confirm = t!("exit_confirm", locale = locale);
    let cancel = t!("exit_cancel", locale = locale);
    serde_json::to_value(
        Dialog::new(
            &title,
            (&confirm, "exit_confirm"),
            (&cancel, "exit_cancel"),
        )
        .message(&message),
    )
    .unwrap()
}

fn render_home_screen(state: &AppState) -> Value {
    let locale = &state.locale;

    let count_line = format!(
        "{}: {}",
        t!("tally_count", locale = locale),
        state.tally.count
    );
    let mut children = vec![
        serde_json::to_value(Text::new(&t!("app_title", locale = locale)).size(24.0)).unwrap(),
        serde_json::to_value(Text::new(&t!("home_subtitle", locale = locale)).size(14.0)).unwrap(),
        serde_json::to_value(
            Card::new(vec![
                serde_json::to_value(
                    Button::new(&t!("browse_names", locale = locale), "catalog_screen")
                        .id("home_catalog"),
                )
                .unwrap(),
                serde_json::to_value(
                    Button::new(&t!("tasbeeh", locale = locale), "tally_screen").id("home_tally"),
                )
                .unwrap(),
                serde_json::to_value(
                    Button::new(&t!("listen", locale = locale), "audio_open").id("home_listen"),
                )
                .unwrap(),
                serde_json::to_value(
                    Button::new(&t!("about", locale = locale), "about_screen").id("home_about"),
                )
                .unwrap(),
            ])
            .padding(12),
        )
        .unwrap(),
        serde_json::to_value(
            Text::new(&count_line)
                .size(13.0)
                .content_description("home_count"),
        )
        .unwrap(),
    ];

    if let Some(err) = &state.last_error {
        children.push(
            serde_json::to_value(
                Text::new(err).size(11.0).content_description("error_note"),
            )
            .unwrap(),
        );
    }

    serde_json::to_value(Column::new(children).padding(24)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::playback::{CAPTIONS, TRACK_DURATION};
    use crate::features::storage::test_env_lock;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn make_command(action: &str) -> Command {
        Command {
            action: action.into(),
            bindings: None,
            snapshot: None,
        }
    }

    fn command_with(action: &str, bindings: &[(&str, &str)]) -> Command {
        Command {
            action: action.into(),
            bindings: Some(
                bindings
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<HashMap<_, _>>(),
            ),
            snapshot: None,
        }
    }

    fn reset_state() {
        handle_command(make_command("reset")).expect("reset command should succeed");
        let mut state = STATE.lock().unwrap();
        state.locale = "en".into();
        state.preferred_locale.clear();
        state.last_error = None;
        rust_i18n::set_locale("en");
    }

    fn extract_texts(ui: &Value) -> Vec<String> {
        fn walk(node: &Value, acc: &mut Vec<String>) {
            if let Some(text) = node.get("text").and_then(|t| t.as_str()) {
                acc.push(text.to_string());
            }
            if let Some(children) = node.get("children").and_then(|c| c.as_array()) {
                for child in children {
                    walk(child, acc);
                }
            }
        }

        let mut out = Vec::new();
        walk(ui, &mut out);
        out
    }

    fn assert_contains_text(ui: &Value, needle: &str) {
        let texts = extract_texts(ui);
        assert!(
            texts.iter().any(|t| t.contains(needle)),
            "expected UI to contain text with `{needle}`, found: {texts:?}"
        );
    }

    fn contains_type(ui: &Value, kind: &str) -> bool {
        if ui.get("type").and_then(|t| t.as_str()) == Some(kind) {
            return true;
        }
        ui.get("children")
            .and_then(|c| c.as_array())
            .map(|children| children.iter().any(|child| contains_type(child, kind)))
            .unwrap_or(false)
    }

    struct TempStore {
        _dir: TempDir,
    }

    impl TempStore {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            std::env::set_var("HUSNA_DATA_DIR", dir.path());
            Self { _dir: dir }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            std::env::remove_var("HUSNA_DATA_DIR");
        }
    }

    #[test]
    fn init_gates_on_onboarding_until_completed() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = test_env_lock().lock().unwrap();
        let _store = TempStore::new();
        reset_state();

        handle_command(make_command("init")).expect("init should succeed");
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.current_screen(), Screen::Onboarding);
            assert_eq!(state.nav_depth(), 1);
        }

        handle_command(make_command("onboarding_next")).unwrap();
        let ui = handle_command(make_command("onboarding_done")).unwrap();
        assert_contains_text(&ui, "Al Asma ul Husna");
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.current_screen(), Screen::Home);
            assert_eq!(state.nav_depth(), 1);
        }

        // Second launch against the same store skips the gate.
        reset_state();
        handle_command(make_command("init")).unwrap();
        let state = STATE.lock().unwrap();
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn back_pops_to_previous_screen() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(make_command("catalog_screen")).unwrap();
        handle_command(command_with("name_open", &[("index", "0")])).unwrap();
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.current_screen(), Screen::Detail);
            assert_eq!(state.nav_depth(), 3);
        }

        handle_command(make_command("back")).unwrap();
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.current_screen(), Screen::Catalog);
            assert_eq!(state.nav_depth(), 2);
        }

        handle_command(make_command("back")).unwrap();
        let state = STATE.lock().unwrap();
        assert_eq!(state.current_screen(), Screen::Home);
        assert_eq!(state.nav_depth(), 1);
    }

    #[test]
    fn repeated_navigation_to_same_screen_still_pushes() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(make_command("catalog_screen")).unwrap();
        handle_command(make_command("catalog_screen")).unwrap();
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.nav_depth(), 3);
        }
        handle_command(make_command("back")).unwrap();
        let state = STATE.lock().unwrap();
        assert_eq!(state.current_screen(), Screen::Catalog);
    }

    #[test]
    fn back_from_home_asks_before_exiting() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        let ui = handle_command(make_command("back")).unwrap();
        assert!(contains_type(&ui, "Dialog"), "expected exit dialog, got {ui}");
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.current_screen(), Screen::Home);
            assert_eq!(state.nav_depth(), 1);
            assert!(state.exit_dialog_open);
        }

        let ui = handle_command(make_command("exit_cancel")).unwrap();
        assert!(!contains_type(&ui, "Dialog"));

        handle_command(make_command("back")).unwrap();
        let exit = handle_command(make_command("exit_confirm")).unwrap();
        assert_eq!(exit.get("type"), Some(&Value::String("Exit".into())));
        let state = STATE.lock().unwrap();
        assert!(!state.exit_dialog_open);
    }

    #[test]
    fn back_closes_audio_sheet_before_navigating() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(make_command("catalog_screen")).unwrap();
        let ui = handle_command(make_command("audio_open")).unwrap();
        assert!(contains_type(&ui, "Sheet"));

        let ui = handle_command(make_command("back")).unwrap();
        assert!(!contains_type(&ui, "Sheet"));
        let state = STATE.lock().unwrap();
        // The sheet absorbed the back press; navigation did not move.
        assert_eq!(state.current_screen(), Screen::Catalog);
        assert!(state.playback.is_none());
    }

    #[test]
    fn selection_stays_stale_after_back() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(command_with("name_open", &[("index", "4")])).unwrap();
        handle_command(make_command("back")).unwrap();

        // Entering the tally without fresh context reuses the stale name.
        let ui = handle_command(make_command("tally_screen")).unwrap();
        assert_contains_text(&ui, catalog::name_at(4).unwrap().transliteration);
    }

    #[test]
    fn out_of_range_name_index_degrades_to_fallback() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        let ui = handle_command(command_with("name_open", &[("index", "500")])).unwrap();
        assert_contains_text(&ui, "Select a name");
        let state = STATE.lock().unwrap();
        assert_eq!(state.selected_name, None);
        assert_eq!(state.current_screen(), Screen::Detail);
    }

    #[test]
    fn tally_counts_and_fires_milestone_at_target() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = test_env_lock().lock().unwrap();
        let _store = TempStore::new();
        reset_state();

        handle_command(make_command("tally_screen")).unwrap();
        for n in 1..=32 {
            let ui = handle_command(make_command("tally_increment")).unwrap();
            assert!(
                !contains_type(&ui, "Haptic"),
                "no milestone expected at count {n}"
            );
        }
        let ui = handle_command(make_command("tally_increment")).unwrap();
        assert!(contains_type(&ui, "Haptic"), "milestone expected at 33");
        assert_contains_text(&ui, "Count: 33");

        for _ in 34..=65 {
            let ui = handle_command(make_command("tally_increment")).unwrap();
            assert!(!contains_type(&ui, "Haptic"));
        }
        let ui = handle_command(make_command("tally_increment")).unwrap();
        assert!(contains_type(&ui, "Haptic"), "milestone expected at 66");
    }

    #[test]
    fn milestone_haptic_respects_vibrate_toggle() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = test_env_lock().lock().unwrap();
        let _store = TempStore::new();
        reset_state();

        handle_command(make_command("tally_screen")).unwrap();
        handle_command(command_with("tally_set_target", &[("target", "2")])).unwrap();
        handle_command(make_command("tally_toggle_vibrate")).unwrap();

        handle_command(make_command("tally_increment")).unwrap();
        let ui = handle_command(make_command("tally_increment")).unwrap();
        assert!(
            !contains_type(&ui, "Haptic"),
            "vibration disabled, no haptic directive expected"
        );
    }

    #[test]
    fn custom_target_rejects_garbage_input() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = test_env_lock().lock().unwrap();
        let _store = TempStore::new();
        reset_state();

        handle_command(command_with("tally_custom_target", &[("target", "abc")])).unwrap();
        handle_command(command_with("tally_custom_target", &[("target", "-5")])).unwrap();
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.tally.target, 33);
        }
        handle_command(command_with("tally_custom_target", &[("target", "11")])).unwrap();
        let state = STATE.lock().unwrap();
        assert_eq!(state.tally.target, 11);
    }

    #[test]
    fn counter_survives_a_simulated_restart() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = test_env_lock().lock().unwrap();
        let _store = TempStore::new();
        reset_state();

        for _ in 0..7 {
            handle_command(make_command("tally_increment")).unwrap();
        }

        // Runtime reset wipes memory but not the store; init reloads it.
        handle_command(make_command("reset")).unwrap();
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.tally.count, 0);
        }
        handle_command(make_command("init")).unwrap();
        let state = STATE.lock().unwrap();
        assert_eq!(state.tally.count, 7);
    }

    #[test]
    fn audio_sheet_opens_at_zero_with_first_caption_pending() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        let ui = handle_command(make_command("audio_open")).unwrap();
        assert!(contains_type(&ui, "Sheet"));
        assert_contains_text(&ui, CAPTIONS[0].1);
        let state = STATE.lock().unwrap();
        let playback = state.playback.as_ref().unwrap();
        assert_eq!(playback.clock, 0.0);
        assert!(!playback.playing);
    }

    #[test]
    fn ticks_advance_only_while_playing() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(make_command("audio_open")).unwrap();
        handle_command(make_command("audio_tick")).unwrap();
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.playback.as_ref().unwrap().clock, 0.0);
        }

        handle_command(make_command("audio_toggle")).unwrap();
        for _ in 0..5 {
            handle_command(make_command("audio_tick")).unwrap();
        }
        let state = STATE.lock().unwrap();
        let clock = state.playback.as_ref().unwrap().clock;
        assert!((clock - 0.5).abs() < 1e-9, "clock was {clock}");
    }

    #[test]
    fn seek_clamps_and_stops_at_track_end() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(make_command("audio_open")).unwrap();
        handle_command(command_with("audio_seek", &[("delta", "10")])).unwrap();
        handle_command(command_with("audio_seek", &[("delta", "-100")])).unwrap();
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.playback.as_ref().unwrap().clock, 0.0);
        }

        handle_command(make_command("audio_toggle")).unwrap();
        handle_command(command_with("audio_seek", &[("delta", "100000")])).unwrap();
        let state = STATE.lock().unwrap();
        let playback = state.playback.as_ref().unwrap();
        assert_eq!(playback.clock, TRACK_DURATION);
        assert!(!playback.playing);
    }

    #[test]
    fn caption_tracks_seeks_through_the_table() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(make_command("audio_open")).unwrap();
        let ui = handle_command(command_with("audio_seek", &[("delta", "10.0")])).unwrap();
        assert_contains_text(&ui, "Ar-Rahman, Ar-Raheem, Al-Malik");

        let ui = handle_command(command_with("audio_seek", &[("delta", "-10.0")])).unwrap();
        assert_contains_text(&ui, CAPTIONS[0].1);
    }

    #[test]
    fn late_tick_after_close_is_harmless() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(make_command("audio_open")).unwrap();
        handle_command(make_command("audio_toggle")).unwrap();
        handle_command(make_command("audio_close")).unwrap();

        // The host's final timer callback may still land after teardown.
        let ui = handle_command(make_command("audio_tick")).unwrap();
        assert!(!contains_type(&ui, "Sheet"));
        let state = STATE.lock().unwrap();
        assert!(state.playback.is_none());
    }

    #[test]
    fn reopening_the_sheet_starts_from_zero() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(make_command("audio_open")).unwrap();
        handle_command(make_command("audio_toggle")).unwrap();
        handle_command(command_with("audio_seek", &[("delta", "60")])).unwrap();
        handle_command(make_command("audio_close")).unwrap();

        handle_command(make_command("audio_open")).unwrap();
        let state = STATE.lock().unwrap();
        let playback = state.playback.as_ref().unwrap();
        assert_eq!(playback.clock, 0.0);
        assert!(!playback.playing);
    }

    #[test]
    fn share_returns_payload_for_selected_name() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(command_with("name_open", &[("index", "0")])).unwrap();
        let response = handle_command(make_command("share_name")).unwrap();
        assert_eq!(response.get("type"), Some(&Value::String("Share".into())));
        let text = response.get("text").and_then(|t| t.as_str()).unwrap();
        assert!(text.contains("الرحمن"));
        assert!(text.contains("Ar-Rahman"));
    }

    #[test]
    fn share_without_selection_renders_ui_instead() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        let response = handle_command(make_command("share_name")).unwrap();
        assert_ne!(response.get("type"), Some(&Value::String("Share".into())));
    }

    #[test]
    fn snapshot_and_restore_round_trip() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        handle_command(command_with("name_open", &[("index", "7")])).unwrap();
        handle_command(make_command("tally_screen")).unwrap();

        let snap_value = handle_command(make_command("snapshot")).unwrap();
        let snap_str = snap_value
            .get("snapshot")
            .and_then(|v| v.as_str())
            .expect("snapshot missing")
            .to_string();

        reset_state();
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.current_screen(), Screen::Home);
            assert_eq!(state.selected_name, None);
        }

        let mut restore_cmd = make_command("restore_state");
        restore_cmd.snapshot = Some(snap_str);
        handle_command(restore_cmd).unwrap();

        let state = STATE.lock().unwrap();
        assert_eq!(state.current_screen(), Screen::Tally);
        assert_eq!(state.selected_name, Some(7));
        // Playback never crosses a restore.
        assert!(state.playback.is_none());
        assert!(!state.audio_sheet_open);
    }

    #[test]
    fn unknown_action_is_reported_not_fatal() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        let ui = handle_command(make_command("frobnicate")).unwrap();
        assert_contains_text(&ui, "unknown_action:frobnicate");
        let state = STATE.lock().unwrap();
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn locale_switch_translates_the_home_screen() {
        let _guard = TEST_MUTEX.lock().unwrap();
        reset_state();

        let ui = handle_command(command_with("set_locale", &[("locale", "fr")])).unwrap();
        assert_contains_text(&ui, "Parcourir les noms");
        {
            let state = STATE.lock().unwrap();
            assert_eq!(state.locale, "fr");
        }

        let ui = handle_command(command_with("set_locale", &[("locale", "en-US")])).unwrap();
        assert_contains_text(&ui, "Browse the names");
    }

    #[test]
    fn home_screen_shows_running_count() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = test_env_lock().lock().unwrap();
        let _store = TempStore::new();
        reset_state();

        handle_command(make_command("tally_screen")).unwrap();
        handle_command(make_command("tally_increment")).unwrap();
        handle_command(make_command("back")).unwrap();
        let ui = handle_command(make_command("noop")).unwrap();
        assert_contains_text(&ui, "Count: 1");
    }
}
