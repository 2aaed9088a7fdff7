use crate::features::playback::PlaybackState;
use crate::features::tally::TallyState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Screen {
    Home,
    Catalog,
    Detail,
    Tally,
    About,
    Onboarding,
}

#[derive(Serialize, Deserialize)]
pub struct AppState {
    pub nav_stack: Vec<Screen>,
    /// Index into the name catalog. Deliberately left stale on back
    /// navigation; every renderer guards against absence.
    pub selected_name: Option<usize>,
    pub audio_sheet_open: bool,
    pub exit_dialog_open: bool,
    pub tally: TallyState,
    /// Lives only while the audio sheet is open. Never persisted; a restored
    /// process reopens the sheet from clock zero.
    #[serde(skip)]
    pub playback: Option<PlaybackState>,
    pub onboarding_slide: usize,
    pub onboarding_seen: bool,
    pub locale: String,
    pub preferred_locale: String,
    pub last_error: Option<String>,
}

impl AppState {
    // const so it can be used in static initialization
    pub const fn new() -> Self {
        Self {
            nav_stack: Vec::new(),
            selected_name: None,
            audio_sheet_open: false,
            exit_dialog_open: false,
            tally: TallyState::new(),
            playback: None,
            onboarding_slide: 0,
            onboarding_seen: false,
            locale: String::new(),
            preferred_locale: String::new(),
            last_error: None,
        }
    }

    pub fn ensure_navigation(&mut self) {
        if self.nav_stack.is_empty() {
            self.nav_stack.push(Screen::Home);
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.nav_stack.last().copied().unwrap_or(Screen::Home)
    }

    pub fn nav_depth(&self) -> usize {
        let depth = self.nav_stack.len();
        if depth == 0 {
            1
        } else {
            depth
        }
    }

    /// Forward navigation always pushes, even onto the same screen; every
    /// call is a transition the back button must be able to undo.
    pub fn push_screen(&mut self, screen: Screen) {
        self.ensure_navigation();
        self.nav_stack.push(screen);
    }

    pub fn replace_current(&mut self, screen: Screen) {
        self.ensure_navigation();
        if let Some(last) = self.nav_stack.last_mut() {
            *last = screen;
        } else {
            self.nav_stack.push(screen);
        }
    }

    /// Pop never underflows: an exhausted stack lands on Home.
    pub fn pop_screen(&mut self) {
        self.ensure_navigation();
        if self.nav_stack.len() > 1 {
            self.nav_stack.pop();
        } else {
            self.nav_stack.clear();
            self.nav_stack.push(Screen::Home);
        }
    }

    pub fn reset_navigation(&mut self) {
        self.nav_stack.clear();
        self.nav_stack.push(Screen::Home);
    }

    pub fn any_overlay_open(&self) -> bool {
        self.audio_sheet_open || self.exit_dialog_open
    }

    pub fn close_audio_sheet(&mut self) {
        self.audio_sheet_open = false;
        // Dropping the playback state here is what makes a leaked host timer
        // harmless: a late tick finds nothing to advance.
        self.playback = None;
    }

    pub fn reset_runtime(&mut self) {
        self.selected_name = None;
        self.audio_sheet_open = false;
        self.exit_dialog_open = false;
        self.tally = TallyState::new();
        self.playback = None;
        self.onboarding_slide = 0;
        self.last_error = None;
    }
}
