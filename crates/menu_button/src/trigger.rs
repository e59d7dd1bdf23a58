//! Contains [TriggerButton], the control that opens a menu, and the triggers
//! that ship with this crate.

use egui::{Button, Color32, Response, Stroke, Ui, Vec2, WidgetText};

/// Settings forwarded untouched to whichever [TriggerButton] is in use.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerProps {
    pub enabled: bool,
    pub small: bool,
    /// Draw the trigger in its "selected" style.
    pub selected: bool,
    pub min_size: Vec2,
    pub hover_text: Option<String>,
}

impl Default for TriggerProps {
    fn default() -> Self {
        Self {
            enabled: true,
            small: false,
            selected: false,
            min_size: Vec2::ZERO,
            hover_text: None,
        }
    }
}

impl TriggerProps {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn min_size(mut self, min_size: Vec2) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn hover_text(mut self, text: impl Into<String>) -> Self {
        self.hover_text = Some(text.into());
        self
    }

    fn apply_hover_text(&self, response: Response) -> Response {
        match &self.hover_text {
            Some(text) => response.on_hover_text(text.as_str()),
            None => response,
        }
    }
}

/// Anything that can be drawn as a clickable control. The menu opens when the
/// returned [Response] is clicked.
///
/// Closures with a matching signature are triggers too:
///
/// ```no_run
/// use menu_button::{MenuButton, TriggerProps};
///
/// let menu = MenuButton::new("⋮", Vec::new()).with_trigger(
///     |ui: &mut egui::Ui, content: egui::WidgetText, _props: &TriggerProps| {
///         ui.add(egui::Label::new(content).sense(egui::Sense::click()))
///     },
/// );
/// ```
pub trait TriggerButton {
    fn show(&mut self, ui: &mut Ui, content: WidgetText, props: &TriggerProps) -> Response;
}

impl<F> TriggerButton for F
where
    F: FnMut(&mut Ui, WidgetText, &TriggerProps) -> Response,
{
    fn show(&mut self, ui: &mut Ui, content: WidgetText, props: &TriggerProps) -> Response {
        self(ui, content, props)
    }
}

/// A regular framed egui button. This is the default trigger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardButton;

impl TriggerButton for StandardButton {
    fn show(&mut self, ui: &mut Ui, content: WidgetText, props: &TriggerProps) -> Response {
        let mut button = Button::new(content)
            .min_size(props.min_size)
            .selected(props.selected);
        if props.small {
            button = button.small();
        }

        let response = ui.add_enabled(props.enabled, button);
        props.apply_hover_text(response)
    }
}

/// A toolbar style button: no frame, just a faint highlight while hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FramelessButton {
    pub hover_fill: Color32,
}

impl Default for FramelessButton {
    fn default() -> Self {
        Self {
            hover_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 15),
        }
    }
}

impl TriggerButton for FramelessButton {
    fn show(&mut self, ui: &mut Ui, content: WidgetText, props: &TriggerProps) -> Response {
        let mut button = Button::new(content)
            .frame(false)
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::NONE)
            .min_size(props.min_size)
            .selected(props.selected);
        if props.small {
            button = button.small();
        }

        let response = ui.add_enabled(props.enabled, button);
        if response.hovered() {
            ui.painter().rect_filled(response.rect, 4.0, self.hover_fill);
        }

        props.apply_hover_text(response)
    }
}
