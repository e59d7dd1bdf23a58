//! Contains [MenuButtonConfig], the behavior settings of a menu button.

use serde::{Deserialize, Serialize};

/// What happens to an open menu after one of its entries is clicked.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SelectBehavior {
    /// The menu stays open until it's dismissed.
    #[default]
    KeepOpen,
    CloseOnSelect,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuButtonConfig {
    #[serde(default)]
    pub select_behavior: SelectBehavior,
    #[serde(default = "MenuButtonConfig::default_true")]
    pub dismiss_on_escape: bool,
    /// Close when the pointer clicks somewhere other than the menu or its
    /// trigger.
    #[serde(default = "MenuButtonConfig::default_true")]
    pub dismiss_on_click_outside: bool,
    /// Vertical space between the trigger and the menu.
    #[serde(default = "MenuButtonConfig::default_menu_gap")]
    pub menu_gap: f32,
    /// The menu is never narrower than this or its trigger.
    #[serde(default)]
    pub min_menu_width: f32,
}

impl MenuButtonConfig {
    #[inline(always)]
    const fn default_true() -> bool {
        true
    }

    #[inline(always)]
    const fn default_menu_gap() -> f32 {
        2.0
    }
}

impl Default for MenuButtonConfig {
    fn default() -> Self {
        Self {
            select_behavior: SelectBehavior::default(),
            dismiss_on_escape: true,
            dismiss_on_click_outside: true,
            menu_gap: Self::default_menu_gap(),
            min_menu_width: 0.0,
        }
    }
}
