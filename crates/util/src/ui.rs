//! Common UI utilities.

use egui::{Color32, Context, Key, Modifiers, Style, Visuals, vec2};

/// A more readable helper for determining if a key ([Key]) was pressed. The
/// key press is consumed.
pub fn key_pressed(ctx: &Context, key: Key) -> bool {
    shortcut_pressed(ctx, Modifiers::NONE, key)
}

/// A more readable helper for determining if a shortcut ([Modifiers] + [Key])
/// was pressed. The key press is consumed.
pub fn shortcut_pressed(ctx: &Context, mods: Modifiers, key: Key) -> bool {
    ctx.input_mut(|i| i.consume_key(mods, key))
}

/// The dark, compact style shared by our windows.
pub fn compact_dark_style() -> Style {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = Color32::from_rgb(24, 29, 31);
    visuals.window_fill = Color32::from_rgb(20, 24, 27);

    // Frameless buttons (menu entries, toolbar triggers)
    visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(40, 44, 47);
    visuals.widgets.active.weak_bg_fill = Color32::from_rgb(50, 54, 57);

    let mut style = Style::default();
    style.spacing.item_spacing = vec2(4.0, 4.0);
    style.spacing.button_padding = vec2(8.0, 4.0);
    style.visuals = visuals;
    style
}

#[cfg(test)]
mod tests {
    use egui::{Event, RawInput};

    use super::*;

    fn escape_event() -> Event {
        Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn key_press_is_consumed() {
        let ctx = Context::default();
        let input = RawInput {
            events: vec![escape_event()],
            ..Default::default()
        };

        let mut presses = Vec::new();
        let _ = ctx.run(input, |ctx| {
            presses.push((key_pressed(ctx, Key::Escape), key_pressed(ctx, Key::Escape)));
        });

        assert!(!presses.is_empty());
        assert!(presses.iter().all(|p| *p == (true, false)));
    }

    #[test]
    fn no_event_no_press() {
        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |ctx| {
            assert!(!key_pressed(ctx, Key::Escape));
        });
    }

    #[test]
    fn compact_style_is_dark() {
        let style = compact_dark_style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.spacing.item_spacing, vec2(4.0, 4.0));
    }
}
