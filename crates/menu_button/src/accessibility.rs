//! Accessibility attributes that tie a trigger to the menu it opens.
//!
//! With the `accesskit` feature these get written onto egui's AccessKit nodes:
//! the trigger's node carries `has_popup`, `expanded` and `controls`, and the
//! menu's node is labelled by the trigger.

#[cfg(feature = "accesskit")]
use egui::accesskit::{HasPopup, NodeId, Role};
#[cfg(feature = "accesskit")]
use egui::{Context, Id};

/// Attributes carried by the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerAccessibility {
    pub id: String,
    /// The menu's ID. Only present while the menu is open.
    pub controls: Option<String>,
    /// Always `true`, the trigger opens a popup.
    pub has_popup: bool,
    /// Only present (and `true`) while the menu is open.
    pub expanded: Option<bool>,
}

impl TriggerAccessibility {
    pub fn new(button_id: &str, menu_id: &str, open: bool) -> Self {
        Self {
            id: button_id.to_owned(),
            controls: open.then(|| menu_id.to_owned()),
            has_popup: true,
            expanded: open.then_some(true),
        }
    }

    /// Write these attributes onto the AccessKit node of the widget `trigger`.
    /// `menu` is the egui ID of the menu's [egui::Area].
    ///
    /// Does nothing unless AccessKit is enabled on `ctx`.
    #[cfg(feature = "accesskit")]
    pub fn write_accesskit(&self, ctx: &Context, trigger: Id, menu: Id) {
        ctx.accesskit_node_builder(trigger, |node| {
            node.set_author_id(self.id.as_str());
            if self.has_popup {
                node.set_has_popup(HasPopup::Menu);
            }
            if let Some(expanded) = self.expanded {
                node.set_expanded(expanded);
            }
            if self.controls.is_some() {
                node.push_controlled(node_id(menu));
            }
        });
    }
}

/// Attributes carried by the menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuAccessibility {
    pub id: String,
    /// The trigger's ID.
    pub labelled_by: String,
}

impl MenuAccessibility {
    pub fn new(menu_id: &str, button_id: &str) -> Self {
        Self {
            id: menu_id.to_owned(),
            labelled_by: button_id.to_owned(),
        }
    }

    /// Write these attributes onto the AccessKit node of the [egui::Area]
    /// `menu`. `trigger` is the ID of the trigger's response.
    ///
    /// Does nothing unless AccessKit is enabled on `ctx`.
    #[cfg(feature = "accesskit")]
    pub fn write_accesskit(&self, ctx: &Context, menu: Id, trigger: Id) {
        ctx.accesskit_node_builder(menu, |node| {
            node.set_role(Role::Menu);
            node.set_author_id(self.id.as_str());
            node.push_labelled_by(node_id(trigger));
        });
    }
}

/// The AccessKit node egui creates for the widget or [egui::Ui] with `id`.
#[cfg(feature = "accesskit")]
pub fn node_id(id: Id) -> NodeId {
    NodeId(id.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_trigger_only_has_id_and_popup_flag() {
        let a11y = TriggerAccessibility::new("button", "menu", false);
        assert_eq!(
            a11y,
            TriggerAccessibility {
                id: "button".into(),
                controls: None,
                has_popup: true,
                expanded: None,
            }
        );
    }

    #[test]
    fn open_trigger_points_at_menu() {
        let a11y = TriggerAccessibility::new("button", "menu", true);
        assert_eq!(a11y.controls.as_deref(), Some("menu"));
        assert_eq!(a11y.expanded, Some(true));
        assert!(a11y.has_popup);
    }

    #[test]
    fn menu_is_labelled_by_trigger() {
        let a11y = MenuAccessibility::new("menu", "button");
        assert_eq!(a11y.id, "menu");
        assert_eq!(a11y.labelled_by, "button");
    }
}
