use crate::state::AppState;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct Text<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<&'a str>,
}

impl<'a> Text<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            kind: "Text",
            text,
            size: None,
            arabic: None,
            content_description: None,
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Hint for the host to use the Arabic display face and RTL shaping.
    pub fn arabic(mut self) -> Self {
        self.arabic = Some(true);
        self
    }

    pub fn content_description(mut self, cd: &'a str) -> Self {
        self.content_description = Some(cd);
        self
    }
}

#[derive(Serialize)]
pub struct Button<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'a str,
    pub action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<&'a str>,
}

impl<'a> Button<'a> {
    pub fn new(text: &'a str, action: &'a str) -> Self {
        Self {
            kind: "Button",
            text,
            action,
            id: None,
            payload: None,
            copy_text: None,
            content_description: None,
        }
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Extra bindings the host echoes back with the action.
    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Host-side clipboard copy; the action may be "noop".
    pub fn copy_text(mut self, text: &'a str) -> Self {
        self.copy_text = Some(text);
        self
    }

    pub fn content_description(mut self, cd: &'a str) -> Self {
        self.content_description = Some(cd);
        self
    }
}

#[derive(Serialize)]
pub struct Column<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollable: Option<bool>,
    pub children: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<&'a str>,
}

impl<'a> Column<'a> {
    pub fn new(children: Vec<Value>) -> Self {
        Self {
            kind: "Column",
            padding: None,
            scrollable: None,
            children,
            content_description: None,
        }
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = Some(scrollable);
        self
    }

    pub fn content_description(mut self, cd: &'a str) -> Self {
        self.content_description = Some(cd);
        self
    }
}

#[derive(Serialize)]
pub struct Grid<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub children: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<&'a str>,
}

impl<'a> Grid<'a> {
    pub fn new(children: Vec<Value>) -> Self {
        Self {
            kind: "Grid",
            children,
            columns: None,
            padding: None,
            content_description: None,
        }
    }

    pub fn columns(mut self, cols: u32) -> Self {
        self.columns = Some(cols);
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn content_description(mut self, cd: &'a str) -> Self {
        self.content_description = Some(cd);
        self
    }
}

#[derive(Serialize)]
pub struct Card<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    pub children: Vec<Value>,
}

impl<'a> Card<'a> {
    pub fn new(children: Vec<Value>) -> Self {
        Self {
            kind: "Card",
            title: None,
            subtitle: None,
            padding: None,
            children,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }
}

#[derive(Serialize)]
pub struct TextInput<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub bind_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_on_submit: Option<&'a str>,
}

impl<'a> TextInput<'a> {
    pub fn new(bind_key: &'a str) -> Self {
        Self {
            kind: "TextInput",
            bind_key,
            hint: None,
            text: None,
            single_line: None,
            action_on_submit: None,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    pub fn single_line(mut self, single_line: bool) -> Self {
        self.single_line = Some(single_line);
        self
    }

    pub fn action_on_submit(mut self, action: &'a str) -> Self {
        self.action_on_submit = Some(action);
        self
    }
}

/// Circular progress indicator for the tasbeeh ring. `fraction` is always
/// in [0, 1); the counter wraps it at the target.
#[derive(Serialize)]
pub struct ProgressRing<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub fraction: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<&'a str>,
}

impl<'a> ProgressRing<'a> {
    pub fn new(fraction: f64) -> Self {
        Self {
            kind: "ProgressRing",
            fraction,
            label: None,
            content_description: None,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn content_description(mut self, cd: &'a str) -> Self {
        self.content_description = Some(cd);
        self
    }
}

/// Modal confirmation dialog rendered above the current screen.
#[derive(Serialize)]
pub struct Dialog<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    pub confirm_text: &'a str,
    pub confirm_action: &'a str,
    pub cancel_text: &'a str,
    pub cancel_action: &'a str,
}

impl<'a> Dialog<'a> {
    pub fn new(
        title: &'a str,
        confirm: (&'a str, &'a str),
        cancel: (&'a str, &'a str),
    ) -> Self {
        Self {
            kind: "Dialog",
            title,
            message: None,
            confirm_text: confirm.0,
            confirm_action: confirm.1,
            cancel_text: cancel.0,
            cancel_action: cancel.1,
        }
    }

    pub fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Bottom sheet hosting the audio player. The host reads `playing` and
/// `tick_interval_ms` to drive (and suspend) its periodic tick timer.
#[derive(Serialize)]
pub struct Sheet {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub children: Vec<Value>,
    pub playing: bool,
    pub tick_interval_ms: u64,
    pub close_action: &'static str,
}

impl Sheet {
    pub fn new(children: Vec<Value>, playing: bool, tick_interval_ms: u64) -> Self {
        Self {
            kind: "Sheet",
            children,
            playing,
            tick_interval_ms,
            close_action: "audio_close",
        }
    }
}

/// Root node when overlays are present: screen first, overlays above it in
/// z-order. Navigation history never contains overlays.
#[derive(Serialize)]
pub struct Stack {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub children: Vec<Value>,
}

impl Stack {
    pub fn new(children: Vec<Value>) -> Self {
        Self {
            kind: "Stack",
            children,
        }
    }
}

/// Append a software back button when there is somewhere to go back to.
pub fn maybe_push_back(children: &mut Vec<Value>, state: &AppState) {
    if state.nav_depth() > 1 {
        children.push(
            serde_json::to_value(
                Button::new("←", "back").content_description("navigate_back"),
            )
            .unwrap(),
        );
    }
}
