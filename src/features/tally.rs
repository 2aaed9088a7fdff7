use crate::features::catalog;
use crate::state::AppState;
use crate::ui::{maybe_push_back, Button, Card, Column, ProgressRing, Text, TextInput};
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DEFAULT_TARGET: u32 = 33;

/// The running tasbeeh count. The count itself is durable (the router flushes
/// it through `storage` after every mutation); target and vibration are
/// session preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallyState {
    pub count: u64,
    pub target: u32,
    pub vibrate_on_milestone: bool,
}

impl TallyState {
    pub const fn new() -> Self {
        Self {
            count: 0,
            target: DEFAULT_TARGET,
            vibrate_on_milestone: true,
        }
    }

    /// Advance the count by one. Returns true when this increment lands
    /// exactly on a multiple of the target; the predicate runs once, here,
    /// against the target in force right now (never retroactively).
    pub fn increment(&mut self) -> bool {
        self.count += 1;
        self.count % u64::from(self.target) == 0
    }

    /// Explicit reset is the only way the count decreases. Target stays.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Non-positive targets are ignored; the previous target survives.
    pub fn set_target(&mut self, target: u32) {
        if target > 0 {
            self.target = target;
        }
    }

    /// Free-text target entry. Unparseable or non-positive input is silently
    /// dropped, same policy as the default-target fallback.
    pub fn set_custom_target(&mut self, raw: &str) {
        if let Ok(parsed) = raw.trim().parse::<u32>() {
            self.set_target(parsed);
        }
    }

    /// Ring fill in [0, 1). At an exact multiple of the target the ring has
    /// just wrapped, so the fraction is 0, not 1.
    pub fn progress_fraction(&self) -> f64 {
        let target = u64::from(self.target);
        (self.count % target) as f64 / target as f64
    }
}

pub fn render_tally_screen(state: &AppState, milestone: bool) -> Value {
    let locale = &state.locale;
    let tally = &state.tally;

    let mut children: Vec<Value> = Vec::new();

    match state.selected_name.and_then(catalog::name_at) {
        Some(record) => {
            children.push(serde_json::to_value(Text::new(record.arabic).arabic().size(34.0)).unwrap());
            children.push(
                serde_json::to_value(Text::new(record.transliteration).size(16.0)).unwrap(),
            );
        }
        None => {
            // Stale or absent selection: count without a name fragment.
            children.push(
                serde_json::to_value(
                    Text::new(&t!("tally_no_selection", locale = locale)).size(14.0),
                )
                .unwrap(),
            );
        }
    }

    let ring_label = format!("{} / {}", tally.count % u64::from(tally.target), tally.target);
    children.push(
        serde_json::to_value(
            ProgressRing::new(tally.progress_fraction())
                .label(&ring_label)
                .content_description("tally_ring"),
        )
        .unwrap(),
    );
    children.push(
        serde_json::to_value(
            Text::new(&format!("{}: {}", t!("tally_count", locale = locale), tally.count))
                .size(20.0)
                .content_description("tally_count"),
        )
        .unwrap(),
    );

    if milestone && tally.vibrate_on_milestone {
        // Outbound side effect; the host may lack a vibrator and drop it.
        children.push(json!({ "type": "Haptic", "pattern": "milestone" }));
    }

    children.push(
        serde_json::to_value(
            Button::new(&t!("tally_tap", locale = locale), "tally_increment").id("tally_tap"),
        )
        .unwrap(),
    );
    children.push(
        serde_json::to_value(
            Button::new(&t!("tally_reset", locale = locale), "tally_reset").id("tally_reset"),
        )
        .unwrap(),
    );

    let target_label = format!("{}: {}", t!("tally_target", locale = locale), tally.target);
    let preset_buttons: Vec<Value> = [33u32, 99, 100]
        .iter()
        .map(|n| {
            serde_json::to_value(
                Button::new(&n.to_string(), "tally_set_target")
                    .payload(json!({ "target": n.to_string() })),
            )
            .unwrap()
        })
        .collect();
    let target_card = Card::new(vec![
        serde_json::to_value(Column::new(preset_buttons).padding(4)).unwrap(),
        serde_json::to_value(
            TextInput::new("target")
                .hint(&t!("tally_custom_target", locale = locale))
                .single_line(true)
                .action_on_submit("tally_custom_target"),
        )
        .unwrap(),
    ])
    .title(&target_label)
    .padding(12);
    children.push(serde_json::to_value(target_card).unwrap());

    let vibrate_label = format!(
        "{}: {}",
        t!("tally_vibrate", locale = locale),
        if tally.vibrate_on_milestone { "✓" } else { "✗" }
    );
    children.push(
        serde_json::to_value(
            Button::new(&vibrate_label, "tally_toggle_vibrate").id("tally_vibrate"),
        )
        .unwrap(),
    );

    maybe_push_back(&mut children, state);
    serde_json::to_value(Column::new(children).padding(20)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestone_fires_on_every_target_multiple() {
        let mut tally = TallyState::new();
        let mut fired_at = Vec::new();
        for _ in 0..66 {
            if tally.increment() {
                fired_at.push(tally.count);
            }
        }
        assert_eq!(fired_at, vec![33, 66]);
    }

    #[test]
    fn count_matches_number_of_increments() {
        let mut tally = TallyState::new();
        for _ in 0..7 {
            tally.increment();
        }
        assert_eq!(tally.count, 7);
        tally.reset();
        assert_eq!(tally.count, 0);
        assert_eq!(tally.target, DEFAULT_TARGET);
    }

    #[test]
    fn invalid_custom_targets_keep_previous_value() {
        let mut tally = TallyState::new();
        tally.set_custom_target("abc");
        assert_eq!(tally.target, 33);
        tally.set_custom_target("-5");
        assert_eq!(tally.target, 33);
        tally.set_custom_target("0");
        assert_eq!(tally.target, 33);
        tally.set_custom_target(" 99 ");
        assert_eq!(tally.target, 99);
    }

    #[test]
    fn zero_target_is_rejected() {
        let mut tally = TallyState::new();
        tally.set_target(0);
        assert_eq!(tally.target, DEFAULT_TARGET);
    }

    #[test]
    fn progress_wraps_at_target() {
        let mut tally = TallyState::new();
        tally.set_target(4);
        assert_eq!(tally.progress_fraction(), 0.0);
        tally.increment();
        assert_eq!(tally.progress_fraction(), 0.25);
        tally.increment();
        tally.increment();
        assert_eq!(tally.progress_fraction(), 0.75);
        // The 4th tap lands on the target: ring shows wrapped zero, not full.
        let milestone = tally.increment();
        assert!(milestone);
        assert_eq!(tally.progress_fraction(), 0.0);
    }

    #[test]
    fn target_change_is_not_retroactive() {
        let mut tally = TallyState::new();
        tally.set_target(10);
        for _ in 0..9 {
            assert!(!tally.increment());
        }
        // Count sits at 9; shrinking the target fires nothing by itself,
        // only later increments are evaluated against it.
        tally.set_target(3);
        assert!(!tally.increment());
        assert!(!tally.increment());
        assert!(tally.increment());
        assert_eq!(tally.count, 12);
    }
}
