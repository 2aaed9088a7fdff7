use crate::state::AppState;
use crate::ui::{Button, Column, Sheet, Text};
use rust_i18n::t;
use serde_json::Value;

/// Length of the bundled recitation track, in seconds.
pub const TRACK_DURATION: f64 = 247.0;

/// Nominal host timer cadence. The synchronizer itself only ever sees a `dt`;
/// the cadence is advertised so the host can schedule (and suspend) the timer.
pub const TICK_INTERVAL_MS: u64 = 100;
pub const DEFAULT_TICK_DT: f64 = 0.1;

pub const SEEK_STEP: f64 = 10.0;

/// Lyric lines of the recitation, ascending by start offset. The active line
/// is the one with the greatest offset at or before the clock.
pub static CAPTIONS: &[(f64, &str)] = &[
    (0.0, "Bismillah ir-Rahman ir-Raheem"),
    (4.0, "Huwa Allahu alladhi la ilaha illa Hu"),
    (10.0, "Ar-Rahman, Ar-Raheem, Al-Malik"),
    (17.0, "Al-Quddus, As-Salam, Al-Mu'min"),
    (24.0, "Al-Muhaymin, Al-Aziz, Al-Jabbar"),
    (31.0, "Al-Mutakabbir, Al-Khaliq, Al-Bari"),
    (38.0, "Al-Musawwir, Al-Ghaffar, Al-Qahhar"),
    (45.0, "Al-Wahhab, Ar-Razzaq, Al-Fattah"),
    (52.0, "Al-Alim, Al-Qabid, Al-Basit"),
    (59.0, "Al-Khafid, Ar-Rafi, Al-Mu'izz"),
    (66.0, "Al-Mudhill, As-Sami, Al-Basir"),
    (73.0, "Al-Hakam, Al-Adl, Al-Latif"),
    (80.0, "Al-Khabir, Al-Halim, Al-Azim"),
    (87.0, "Al-Ghafur, Ash-Shakur, Al-Ali"),
    (94.0, "Al-Kabir, Al-Hafiz, Al-Muqit"),
    (101.0, "Al-Hasib, Al-Jalil, Al-Karim"),
    (108.0, "Ar-Raqib, Al-Mujib, Al-Wasi"),
    (115.0, "Al-Hakim, Al-Wadud, Al-Majid"),
    (122.0, "Al-Ba'ith, Ash-Shahid, Al-Haqq"),
    (129.0, "Al-Wakil, Al-Qawiyy, Al-Matin"),
    (136.0, "Al-Waliyy, Al-Hamid, Al-Muhsi"),
    (143.0, "Al-Mubdi, Al-Mu'id, Al-Muhyi"),
    (150.0, "Al-Mumit, Al-Hayy, Al-Qayyum"),
    (157.0, "Al-Wajid, Al-Majid, Al-Wahid"),
    (164.0, "Al-Ahad, As-Samad, Al-Qadir"),
    (171.0, "Al-Muqtadir, Al-Muqaddim, Al-Mu'akhkhir"),
    (178.0, "Al-Awwal, Al-Akhir, Az-Zahir"),
    (185.0, "Al-Batin, Al-Wali, Al-Muta'ali"),
    (192.0, "Al-Barr, At-Tawwab, Al-Muntaqim"),
    (199.0, "Al-Afuww, Ar-Ra'uf, Malik-ul-Mulk"),
    (206.0, "Dhul-Jalali wal-Ikram, Al-Muqsit, Al-Jami"),
    (213.0, "Al-Ghaniyy, Al-Mughni, Al-Mani"),
    (220.0, "Ad-Darr, An-Nafi, An-Nur"),
    (227.0, "Al-Hadi, Al-Badi, Al-Baqi"),
    (234.0, "Al-Warith, Ar-Rashid, As-Sabur"),
    (241.0, "Jalla Jalaluhu"),
];

/// Playback clock for the recitation overlay. Created when the audio sheet
/// opens, dropped when it closes; never persisted.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    pub clock: f64,
    pub playing: bool,
    pub duration: f64,
}

impl PlaybackState {
    /// A zero-length track is a programming error, not a runtime condition.
    pub fn new(duration: f64) -> Self {
        assert!(duration > 0.0, "playback duration must be positive");
        Self {
            clock: 0.0,
            playing: false,
            duration,
        }
    }

    pub fn for_recitation() -> Self {
        Self::new(TRACK_DURATION)
    }

    /// Advance the clock by `dt` while playing. Hitting the end stops
    /// playback so the host can let its timer go idle.
    pub fn tick(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        self.clock = (self.clock + dt).clamp(0.0, self.duration);
        if self.clock >= self.duration {
            self.playing = false;
        }
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Relative seek, clamped to the track. Does not pause or resume, except
    /// that landing on the end stops playback like a natural finish.
    pub fn seek(&mut self, delta: f64) {
        self.clock = (self.clock + delta).clamp(0.0, self.duration);
        if self.clock >= self.duration {
            self.playing = false;
        }
    }

    pub fn finished(&self) -> bool {
        self.clock >= self.duration
    }

    /// The caption line for the current clock: greatest entry at or before
    /// it (inclusive), empty before the first entry. Pure in the clock, so
    /// seeks can never show a stale line.
    pub fn caption(&self) -> &'static str {
        current_caption(CAPTIONS, self.clock)
    }
}

pub fn current_caption<'a>(table: &[(f64, &'a str)], clock: f64) -> &'a str {
    let idx = table.partition_point(|(at, _)| *at <= clock);
    if idx == 0 {
        ""
    } else {
        table[idx - 1].1
    }
}

fn format_clock(seconds: f64) -> String {
    let whole = seconds.max(0.0) as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

pub fn render_audio_sheet(state: &AppState, playback: &PlaybackState) -> Value {
    let locale = &state.locale;

    let toggle_label = if playback.playing {
        t!("audio_pause", locale = locale)
    } else {
        t!("audio_play", locale = locale)
    };
    let position = format!(
        "{} / {}",
        format_clock(playback.clock),
        format_clock(playback.duration)
    );

    let caption = playback.caption();
    let children = vec![
        serde_json::to_value(Text::new(&t!("listen", locale = locale)).size(18.0)).unwrap(),
        serde_json::to_value(
            Text::new(caption)
                .size(16.0)
                .content_description("caption"),
        )
        .unwrap(),
        serde_json::to_value(
            Text::new(&position)
                .size(12.0)
                .content_description("playback_position"),
        )
        .unwrap(),
        serde_json::to_value(
            Column::new(vec![
                serde_json::to_value(
                    Button::new(&t!("audio_rewind", locale = locale), "audio_seek")
                        .payload(serde_json::json!({ "delta": (-SEEK_STEP).to_string() })),
                )
                .unwrap(),
                serde_json::to_value(
                    Button::new(&toggle_label, "audio_toggle").id("audio_toggle"),
                )
                .unwrap(),
                serde_json::to_value(
                    Button::new(&t!("audio_forward", locale = locale), "audio_seek")
                        .payload(serde_json::json!({ "delta": SEEK_STEP.to_string() })),
                )
                .unwrap(),
            ])
            .padding(4),
        )
        .unwrap(),
        serde_json::to_value(
            Button::new(&t!("audio_close", locale = locale), "audio_close").id("audio_close"),
        )
        .unwrap(),
    ];

    serde_json::to_value(Sheet::new(children, playback.playing, TICK_INTERVAL_MS)).unwrap()
}
