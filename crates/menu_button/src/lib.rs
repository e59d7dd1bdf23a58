//! A button that opens a dropdown menu of actions, built on egui.
//!
//! The widget keeps track of whether its menu is open (and what it's anchored
//! to), links the trigger and the menu through accessibility IDs, gives every
//! menu entry a stable key and forwards clicks on an entry to that entry's
//! handler. Everything else (painting, layering, input) is left to egui.
//!
//! ```no_run
//! use menu_button::{MenuButton, MenuButtonItem};
//!
//! let actions = MenuButton::new(
//!     "Actions",
//!     vec![
//!         MenuButtonItem::new("Edit", |_| println!("edit")),
//!         MenuButtonItem::new("Delete", |_| println!("delete")),
//!     ],
//! );
//!
//! # fn frame(ui: &mut egui::Ui, mut actions: MenuButton) {
//! // Every frame:
//! actions.ui(ui);
//! # }
//! # let _ = frame;
//! # drop(actions);
//! ```

pub mod accessibility;
pub mod config;
pub mod errors;
pub mod item;
pub mod menu_button;
pub mod state;
pub mod trigger;

pub use accessibility::{MenuAccessibility, TriggerAccessibility};
pub use config::{MenuButtonConfig, SelectBehavior};
pub use errors::MenuButtonError;
pub use item::{Interaction, ItemEvent, KeyedItem, MenuButtonItem};
pub use menu_button::{MenuButton, MenuButtonResponse};
pub use state::{Anchor, DismissReason, MenuState, Transition};
pub use trigger::{FramelessButton, StandardButton, TriggerButton, TriggerProps};
