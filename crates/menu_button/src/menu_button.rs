//! Contains [MenuButton], a trigger button plus the dropdown menu it opens.

use egui::{
    Align, Area, Button, Frame, Id, Key, Layout, Order, Rect, Response, Ui, WidgetInfo,
    WidgetText, WidgetType,
};

use util::uid::Uid;

use crate::accessibility::{MenuAccessibility, TriggerAccessibility};
use crate::config::{MenuButtonConfig, SelectBehavior};
use crate::errors::MenuButtonError;
use crate::item::{self, Interaction, ItemEvent, KeyedItem, MenuButtonItem};
use crate::state::{Anchor, DismissReason, MenuState, Transition};
use crate::trigger::{StandardButton, TriggerButton, TriggerProps};

/// A button that opens a dropdown menu when clicked.
///
/// Unlike most egui widgets this one is kept around between frames: create it
/// once, store it in your app state and call [MenuButton::ui] every frame. The
/// IDs linking the trigger and the menu are generated on creation and stay the
/// same for as long as the value lives.
///
/// Clicking an entry runs its handler. Whether the menu then closes is up to
/// [MenuButtonConfig::select_behavior].
pub struct MenuButton<T = StandardButton> {
    button_uid: Uid,
    menu_uid: Uid,
    content: WidgetText,
    items: Vec<MenuButtonItem>,
    keyed_items: Vec<KeyedItem>,
    trigger: T,
    props: TriggerProps,
    config: MenuButtonConfig,
    state: MenuState,
}

/// What happened during one call to [MenuButton::ui].
#[derive(Debug)]
pub struct MenuButtonResponse {
    pub trigger: Response,
    /// Whether the menu is open after this frame.
    pub is_open: bool,
    /// The menu went from closed to open this frame.
    pub opened: bool,
    /// The menu went from open to closed this frame.
    pub closed: bool,
    pub menu_rect: Option<Rect>,
    /// One response per menu entry, in order. Empty while the menu is closed.
    pub items: Vec<Response>,
    /// Index of the entry clicked this frame.
    pub selected: Option<usize>,
}

impl MenuButton<StandardButton> {
    /// Create a menu button showing `content` on a [StandardButton].
    pub fn new(content: impl Into<WidgetText>, items: Vec<MenuButtonItem>) -> Self {
        let menu_uid = Uid::new();
        let keyed_items = item::key_items(Self::menu_egui_id_for(menu_uid), &items);

        Self {
            button_uid: Uid::new(),
            menu_uid,
            content: content.into(),
            items,
            keyed_items,
            trigger: StandardButton,
            props: TriggerProps::default(),
            config: MenuButtonConfig::default(),
            state: MenuState::default(),
        }
    }
}

impl<T> MenuButton<T> {
    /// Swap the trigger for any other [TriggerButton], keeping everything else.
    pub fn with_trigger<U: TriggerButton>(self, trigger: U) -> MenuButton<U> {
        MenuButton {
            button_uid: self.button_uid,
            menu_uid: self.menu_uid,
            content: self.content,
            items: self.items,
            keyed_items: self.keyed_items,
            trigger,
            props: self.props,
            config: self.config,
            state: self.state,
        }
    }

    pub fn with_props(mut self, props: TriggerProps) -> Self {
        self.props = props;
        self
    }

    pub fn with_config(mut self, config: MenuButtonConfig) -> Self {
        self.config = config;
        self
    }

    pub fn props(&self) -> &TriggerProps {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut TriggerProps {
        &mut self.props
    }

    pub fn config(&self) -> &MenuButtonConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut MenuButtonConfig {
        &mut self.config
    }

    pub fn set_content(&mut self, content: impl Into<WidgetText>) {
        self.content = content.into();
    }

    pub fn items(&self) -> &[MenuButtonItem] {
        &self.items
    }

    /// The entries as they get laid out: one per item, in order.
    pub fn keyed_items(&self) -> &[KeyedItem] {
        &self.keyed_items
    }

    /// Replace the menu's items, re-deriving every entry's key.
    pub fn set_items(&mut self, items: Vec<MenuButtonItem>) {
        self.keyed_items = item::key_items(self.menu_egui_id(), &items);
        self.items = items;
    }

    /// The trigger's accessibility ID.
    pub fn button_id(&self) -> String {
        self.button_uid.tagged("menu-button")
    }

    /// The menu's accessibility ID.
    pub fn menu_id(&self) -> String {
        self.menu_uid.tagged("menu")
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// What the menu is attached to. `None` while closed.
    pub fn anchor(&self) -> Option<Anchor> {
        self.state.anchor()
    }

    pub fn trigger_accessibility(&self) -> TriggerAccessibility {
        TriggerAccessibility::new(&self.button_id(), &self.menu_id(), self.is_open())
    }

    pub fn menu_accessibility(&self) -> MenuAccessibility {
        MenuAccessibility::new(&self.menu_id(), &self.button_id())
    }

    /// Open the menu at `anchor` (or move it there if it's already open).
    pub fn activate(&mut self, anchor: Anchor) -> Transition {
        let transition = self.state.activate(anchor);
        match transition {
            Transition::Opened => util::debug_log_info!("Opened menu `{}`.", self.menu_id()),
            Transition::Reanchored => {
                util::debug_log_info!("Re-anchored open menu `{}`.", self.menu_id())
            }
            Transition::Closed | Transition::Unchanged => {}
        }
        transition
    }

    /// Close the menu.
    pub fn dismiss(&mut self) -> Transition {
        self.close(DismissReason::Requested)
    }

    /// Run the handler of the item at `index` as if it had been clicked.
    pub fn select(
        &mut self,
        index: usize,
        interaction: Interaction,
    ) -> Result<(), MenuButtonError> {
        if index >= self.items.len() {
            util::debug_log_warning!(
                "Tried to select item {index} of menu `{}` which only has {}.",
                self.menu_id(),
                self.items.len()
            );
            return Err(MenuButtonError::ItemOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        self.deliver(index, interaction);
        Ok(())
    }

    fn close(&mut self, reason: DismissReason) -> Transition {
        let transition = self.state.dismiss();
        if transition == Transition::Closed {
            util::debug_log_info!("Closed menu `{}` ({reason}).", self.menu_id());
        }
        transition
    }

    /// `index` must be in bounds.
    fn deliver(&mut self, index: usize, interaction: Interaction) {
        let keyed = &self.keyed_items[index];
        let event = ItemEvent {
            index,
            key: keyed.key,
            label: keyed.label.clone(),
            interaction,
        };

        util::debug_log_info!(
            "Selected `{}` (item {index}) from menu `{}`.",
            event.label,
            self.menu_id()
        );
        self.items[index].invoke(&event);

        if self.config.select_behavior == SelectBehavior::CloseOnSelect {
            self.close(DismissReason::ItemSelected);
        }
    }

    fn trigger_egui_id(&self) -> Id {
        Id::new(("menu_button::trigger", self.button_uid))
    }

    fn menu_egui_id(&self) -> Id {
        Self::menu_egui_id_for(self.menu_uid)
    }

    fn menu_egui_id_for(menu_uid: Uid) -> Id {
        Id::new(("menu_button::menu", menu_uid))
    }
}

impl<T: TriggerButton> MenuButton<T> {
    /// Show the trigger and, while open, the menu. Handles opening, dismissing
    /// and item clicks.
    pub fn ui(&mut self, ui: &mut Ui) -> MenuButtonResponse {
        let was_open = self.is_open();

        let trigger = ui
            .push_id(self.trigger_egui_id(), |ui| {
                self.trigger.show(ui, self.content.clone(), &self.props)
            })
            .inner;

        let enabled = self.props.enabled;
        let label = self.content.text().to_owned();
        trigger.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, &label));

        if trigger.clicked() {
            self.activate(Anchor::from_response(&trigger));
        }

        let mut items = Vec::new();
        let mut selected = None;
        let mut menu_rect = None;

        if let Some(anchor) = self.anchor() {
            let min_width = self.config.min_menu_width.max(anchor.rect.width());
            let keyed_items = &self.keyed_items;

            let area = Area::new(self.menu_egui_id())
                .order(Order::Foreground)
                .fixed_pos(anchor.menu_origin(self.config.menu_gap))
                .show(ui.ctx(), |ui| {
                    Frame::menu(ui.style()).show(ui, |ui| {
                        ui.set_min_width(min_width);
                        ui.with_layout(Layout::top_down_justified(Align::LEFT), |ui| {
                            for (index, keyed) in keyed_items.iter().enumerate() {
                                let response = ui
                                    .push_id(keyed.key, |ui| {
                                        ui.add(Button::new(keyed.label.as_str()).frame(false))
                                    })
                                    .inner;
                                if response.clicked() {
                                    selected = Some(index);
                                }
                                items.push(response);
                            }
                        });
                    });
                });
            let area_rect = area.response.rect;
            menu_rect = Some(area_rect);

            #[cfg(feature = "accesskit")]
            self.menu_accessibility()
                .write_accesskit(ui.ctx(), self.menu_egui_id(), trigger.id);

            if let Some(index) = selected {
                self.deliver(index, Interaction::from_response(&items[index]));
            } else if !trigger.clicked() {
                self.dismiss_on_input(ui, area_rect, trigger.rect);
            }
        }

        #[cfg(feature = "accesskit")]
        self.trigger_accessibility()
            .write_accesskit(ui.ctx(), trigger.id, self.menu_egui_id());

        let is_open = self.is_open();
        MenuButtonResponse {
            trigger,
            is_open,
            opened: !was_open && is_open,
            closed: was_open && !is_open,
            menu_rect,
            items,
            selected,
        }
    }

    fn dismiss_on_input(&mut self, ui: &Ui, menu_rect: Rect, trigger_rect: Rect) {
        if self.config.dismiss_on_escape && util::ui::key_pressed(ui.ctx(), Key::Escape) {
            self.close(DismissReason::Escape);
            return;
        }

        let clicked_outside = ui.input(|i| {
            i.pointer.any_click()
                && i
                    .pointer
                    .interact_pos()
                    .is_some_and(|pos| !menu_rect.contains(pos) && !trigger_rect.contains(pos))
        });
        if self.config.dismiss_on_click_outside && clicked_outside {
            self.close(DismissReason::ClickedOutside);
        }
    }
}
