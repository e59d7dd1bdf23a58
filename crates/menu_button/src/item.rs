//! Menu entries: the caller's [MenuButtonItem]s and the [KeyedItem]s they get
//! rendered as.

use std::fmt::{self, Debug, Formatter};

use egui::{Id, Modifiers, Pos2, Response};

/// A handler that runs when its menu entry is clicked.
pub type ItemHandler = Box<dyn FnMut(&ItemEvent)>;

/// One selectable entry of a menu: a label and what to do when it's clicked.
pub struct MenuButtonItem {
    label: String,
    on_click: ItemHandler,
}

impl MenuButtonItem {
    pub fn new(label: impl Into<String>, on_click: impl FnMut(&ItemEvent) + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Box::new(on_click),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn invoke(&mut self, event: &ItemEvent) {
        (self.on_click)(event);
    }
}

impl Debug for MenuButtonItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuButtonItem")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// The pointer and keyboard state at the moment an entry was clicked.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub pointer_pos: Option<Pos2>,
    pub modifiers: Modifiers,
}

impl Interaction {
    /// Capture the interaction that produced `response` (normally a click).
    pub fn from_response(response: &Response) -> Self {
        Self {
            pointer_pos: response.interact_pointer_pos(),
            modifiers: response.ctx.input(|i| i.modifiers),
        }
    }
}

/// What an [ItemHandler] receives.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEvent {
    /// Position of the entry in the menu.
    pub index: usize,
    pub key: Id,
    pub label: String,
    pub interaction: Interaction,
}

/// A menu entry ready to be laid out. The key gives egui a stable identity for
/// the entry between frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyedItem {
    pub key: Id,
    pub label: String,
}

/// Derive a key for every item from the menu's ID, the item's position and its
/// label. Equal lists produce equal keys, and keys never repeat within a list
/// (even when labels do).
pub fn key_items(menu_id: Id, items: &[MenuButtonItem]) -> Vec<KeyedItem> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| KeyedItem {
            key: menu_id.with((index, item.label.as_str())),
            label: item.label.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn items(labels: &[&str]) -> Vec<MenuButtonItem> {
        labels
            .iter()
            .map(|label| MenuButtonItem::new(*label, |_| {}))
            .collect()
    }

    #[test]
    fn every_item_is_keyed_in_order() {
        let keyed = key_items(Id::new("menu"), &items(&["Edit", "Copy", "Delete"]));
        let labels: Vec<_> = keyed.iter().map(|k| k.label.as_str()).collect();
        assert_eq!(labels, ["Edit", "Copy", "Delete"]);
    }

    #[test]
    fn empty_list_has_no_keys() {
        assert!(key_items(Id::new("menu"), &[]).is_empty());
    }

    #[test]
    fn duplicate_labels_get_distinct_keys() {
        let keyed = key_items(Id::new("menu"), &items(&["Same", "Same", "Same"]));
        let keys: HashSet<_> = keyed.iter().map(|k| k.key).collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn equal_lists_get_equal_keys() {
        let menu_id = Id::new("menu");
        assert_eq!(
            key_items(menu_id, &items(&["Edit", "Delete"])),
            key_items(menu_id, &items(&["Edit", "Delete"]))
        );
    }

    #[test]
    fn keys_depend_on_the_menu() {
        let list = items(&["Edit"]);
        assert_ne!(
            key_items(Id::new("a"), &list)[0].key,
            key_items(Id::new("b"), &list)[0].key
        );
    }

    #[test]
    fn handler_receives_the_event() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(None));
        let mut item = MenuButtonItem::new("Edit", {
            let seen = seen.clone();
            move |event: &ItemEvent| *seen.borrow_mut() = Some(event.clone())
        });

        let event = ItemEvent {
            index: 0,
            key: Id::new("key"),
            label: "Edit".into(),
            interaction: Interaction::default(),
        };
        item.invoke(&event);

        assert_eq!(seen.borrow().as_ref(), Some(&event));
    }
}
