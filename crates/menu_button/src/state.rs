//! Contains [MenuState], the open/closed state of a menu.
//!
//! A menu is open exactly when it has an [Anchor].

use std::fmt::{self, Display, Formatter};

use egui::{Id, Pos2, Rect, Response, vec2};

/// The element a menu is attached to (normally its trigger).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub id: Id,
    pub rect: Rect,
}

impl Anchor {
    pub fn from_response(response: &Response) -> Self {
        Self {
            id: response.id,
            rect: response.rect,
        }
    }

    /// Where the menu's top left corner goes: just below the anchor, `gap`
    /// points down.
    pub fn menu_origin(&self, gap: f32) -> Pos2 {
        self.rect.left_bottom() + vec2(0.0, gap)
    }
}

/// What a call to [MenuState::activate] or [MenuState::dismiss] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Opened,
    /// The menu was already open and got moved to a new anchor.
    Reanchored,
    Closed,
    Unchanged,
}

/// Why a menu was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    Escape,
    ClickedOutside,
    ItemSelected,
    /// [MenuState::dismiss] was called directly.
    Requested,
}

impl Display for DismissReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DismissReason::Escape => "escape pressed",
            DismissReason::ClickedOutside => "clicked outside",
            DismissReason::ItemSelected => "item selected",
            DismissReason::Requested => "requested",
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MenuState {
    anchor: Option<Anchor>,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Open the menu at `anchor`, or move it there if it's already open.
    pub fn activate(&mut self, anchor: Anchor) -> Transition {
        match self.anchor.replace(anchor) {
            Some(_) => Transition::Reanchored,
            None => Transition::Opened,
        }
    }

    pub fn dismiss(&mut self) -> Transition {
        match self.anchor.take() {
            Some(_) => Transition::Closed,
            None => Transition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::pos2;

    use super::*;

    fn anchor_at(x: f32, y: f32) -> Anchor {
        Anchor {
            id: Id::new((x as i32, y as i32)),
            rect: Rect::from_min_size(pos2(x, y), vec2(80.0, 20.0)),
        }
    }

    #[test]
    fn starts_closed() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert_eq!(state.anchor(), None);
    }

    #[test]
    fn activate_opens_at_anchor() {
        let mut state = MenuState::default();
        let anchor = anchor_at(10.0, 10.0);

        assert_eq!(state.activate(anchor), Transition::Opened);
        assert!(state.is_open());
        assert_eq!(state.anchor(), Some(anchor));
    }

    #[test]
    fn activating_again_reanchors() {
        let mut state = MenuState::default();
        state.activate(anchor_at(10.0, 10.0));

        let moved = anchor_at(200.0, 50.0);
        assert_eq!(state.activate(moved), Transition::Reanchored);
        assert!(state.is_open());
        assert_eq!(state.anchor(), Some(moved));
    }

    #[test]
    fn dismiss_closes() {
        let mut state = MenuState::default();
        state.activate(anchor_at(10.0, 10.0));

        assert_eq!(state.dismiss(), Transition::Closed);
        assert!(!state.is_open());
        assert_eq!(state.anchor(), None);
    }

    #[test]
    fn dismissing_closed_menu_does_nothing() {
        let mut state = MenuState::default();
        assert_eq!(state.dismiss(), Transition::Unchanged);
        assert!(!state.is_open());
    }

    #[test]
    fn menu_sits_below_anchor() {
        let anchor = anchor_at(10.0, 10.0);
        assert_eq!(anchor.menu_origin(4.0), pos2(10.0, 34.0));
    }
}
