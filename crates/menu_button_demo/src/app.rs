//! Contains [DemoApp], the demo window's state.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::{App, Frame};
use egui::{
    CentralPanel, Context, Label, Response, RichText, ScrollArea, Sense, TopBottomPanel, Ui,
    WidgetText,
};

use menu_button::{
    FramelessButton, ItemEvent, MenuButton, MenuButtonConfig, MenuButtonItem,
    MenuButtonResponse, SelectBehavior, TriggerProps,
};

pub trait View {
    fn ui(&mut self, ui: &mut Ui);
}

/// The File trigger's text. The arrow points down while the menu is open.
fn file_label(open: bool) -> RichText {
    RichText::new(if open { "File ⏷" } else { "File ⏵" }).size(16.0)
}

/// A trigger drawn as clickable text.
type LinkTrigger = fn(&mut Ui, WidgetText, &TriggerProps) -> Response;

fn link_trigger(ui: &mut Ui, content: WidgetText, props: &TriggerProps) -> Response {
    ui.add_enabled(props.enabled, Label::new(content).sense(Sense::click()))
}

/// Every menu entry click that happened, oldest first.
#[derive(Debug, Default, Clone)]
pub struct ActionLog(Rc<RefCell<Vec<String>>>);

impl ActionLog {
    /// A handler that records its entry's label under `menu`.
    pub fn recorder(&self, menu: &'static str) -> impl FnMut(&ItemEvent) + 'static {
        let log = self.0.clone();
        move |event: &ItemEvent| {
            log.borrow_mut().push(format!("{menu} → {}", event.label));
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct DemoApp {
    file_menu: MenuButton<FramelessButton>,
    actions_menu: MenuButton,
    overflow_menu: MenuButton<LinkTrigger>,
    log: ActionLog,
}

impl DemoApp {
    pub fn new(config: MenuButtonConfig) -> Self {
        let log = ActionLog::default();

        let file_menu = MenuButton::new(
            file_label(false),
            ["Import", "Export", "Settings"]
                .into_iter()
                .map(|label| MenuButtonItem::new(label, log.recorder("File")))
                .collect(),
        )
        .with_trigger(FramelessButton::default())
        .with_config(config.clone());

        let actions_menu = MenuButton::new(
            "Actions",
            vec![
                MenuButtonItem::new("Edit", log.recorder("Actions")),
                MenuButtonItem::new("Delete", log.recorder("Actions")),
            ],
        )
        .with_props(TriggerProps::default().hover_text("Things you can do to the selection"))
        .with_config(config.clone());

        let overflow_menu = MenuButton::new(
            "More…",
            vec![
                MenuButtonItem::new("Duplicate", log.recorder("More")),
                MenuButtonItem::new("Rename", log.recorder("More")),
                MenuButtonItem::new("Archive", log.recorder("More")),
            ],
        )
        .with_trigger(link_trigger as LinkTrigger)
        .with_config(config);

        Self {
            file_menu,
            actions_menu,
            overflow_menu,
            log,
        }
    }

    pub fn select_behavior(&self) -> SelectBehavior {
        self.actions_menu.config().select_behavior
    }

    pub fn set_select_behavior(&mut self, behavior: SelectBehavior) {
        self.file_menu.config_mut().select_behavior = behavior;
        self.actions_menu.config_mut().select_behavior = behavior;
        self.overflow_menu.config_mut().select_behavior = behavior;
    }

    pub fn overflow_enabled(&self) -> bool {
        self.overflow_menu.props().enabled
    }

    /// Grey out the "More…" trigger. Disabling it also closes its menu.
    pub fn set_overflow_enabled(&mut self, enabled: bool) {
        self.overflow_menu.props_mut().enabled = enabled;
        if !enabled {
            self.overflow_menu.dismiss();
        }
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Draw the whole window. Returns what the File menu did this frame.
    pub fn show(&mut self, ctx: &Context) -> MenuButtonResponse {
        let file = TopBottomPanel::top("menu")
            .show(ctx, |ui| ui.horizontal(|ui| self.menu_bar_ui(ui)).inner)
            .inner;

        CentralPanel::default().show(ctx, |ui| {
            View::ui(self, ui);
        });

        file
    }

    fn menu_bar_ui(&mut self, ui: &mut Ui) -> MenuButtonResponse {
        self.file_menu.set_content(file_label(self.file_menu.is_open()));
        self.file_menu.ui(ui)
    }

    fn controls_ui(&mut self, ui: &mut Ui) {
        let mut close_on_select = self.select_behavior() == SelectBehavior::CloseOnSelect;
        if ui
            .checkbox(&mut close_on_select, "Close menus when an entry is clicked")
            .changed()
        {
            self.set_select_behavior(if close_on_select {
                SelectBehavior::CloseOnSelect
            } else {
                SelectBehavior::KeepOpen
            });
        }

        let mut overflow_enabled = self.overflow_enabled();
        if ui
            .checkbox(&mut overflow_enabled, "Enable the \"More…\" menu")
            .changed()
        {
            self.set_overflow_enabled(overflow_enabled);
        }

        if ui.button("Clear log").clicked() {
            self.log.clear();
        }
    }

    fn log_ui(&self, ui: &mut Ui) {
        let entries = self.log.entries();
        if entries.is_empty() {
            ui.label(RichText::new("Nothing clicked yet.").weak());
            return;
        }

        ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
            for entry in entries {
                ui.label(entry);
            }
        });
    }
}

impl View for DemoApp {
    fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.actions_menu.ui(ui);
            self.overflow_menu.ui(ui);
        });

        ui.separator();
        self.controls_ui(ui);

        ui.separator();
        self.log_ui(ui);
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput};
    use menu_button::{Anchor, Interaction};

    use super::*;

    #[test]
    fn handlers_write_to_log() {
        let log = ActionLog::default();
        let mut menu = MenuButton::new(
            "Actions",
            vec![
                MenuButtonItem::new("Edit", log.recorder("Actions")),
                MenuButtonItem::new("Delete", log.recorder("Actions")),
            ],
        );

        menu.select(1, Interaction::default()).unwrap();
        menu.select(0, Interaction::default()).unwrap();

        assert_eq!(log.entries(), ["Actions → Delete", "Actions → Edit"]);

        log.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn select_behavior_applies_to_every_menu() {
        let mut app = DemoApp::new(MenuButtonConfig::default());
        assert_eq!(app.select_behavior(), SelectBehavior::KeepOpen);

        app.set_select_behavior(SelectBehavior::CloseOnSelect);
        assert_eq!(app.file_menu.config().select_behavior, SelectBehavior::CloseOnSelect);
        assert_eq!(app.actions_menu.config().select_behavior, SelectBehavior::CloseOnSelect);
        assert_eq!(app.overflow_menu.config().select_behavior, SelectBehavior::CloseOnSelect);
    }

    #[test]
    fn app_starts_with_all_menus_closed() {
        let app = DemoApp::new(MenuButtonConfig::default());
        assert!(!app.file_menu.is_open());
        assert!(!app.actions_menu.is_open());
        assert!(!app.overflow_menu.is_open());
        assert!(app.log().entries().is_empty());
    }

    #[test]
    fn disabling_overflow_menu_closes_it() {
        let mut app = DemoApp::new(MenuButtonConfig::default());
        assert!(app.overflow_enabled());

        app.overflow_menu.activate(Anchor {
            id: egui::Id::new("more"),
            rect: egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(40.0, 20.0)),
        });
        app.set_overflow_enabled(false);
        assert!(!app.overflow_enabled());
        assert!(!app.overflow_menu.is_open());

        app.set_overflow_enabled(true);
        assert!(app.overflow_enabled());
    }

    /// Runs [DemoApp::show] on a headless [egui::Context], one frame per call.
    struct Window {
        ctx: egui::Context,
        app: DemoApp,
        time: f64,
    }

    impl Window {
        fn new() -> Self {
            Self {
                ctx: egui::Context::default(),
                app: DemoApp::new(MenuButtonConfig::default()),
                time: 0.0,
            }
        }

        fn frame(&mut self, events: Vec<Event>) -> MenuButtonResponse {
            self.time += 1.0 / 60.0;
            let input = RawInput {
                time: Some(self.time),
                events,
                ..Default::default()
            };

            let mut file = None;
            let _ = self.ctx.run(input, |ctx| {
                file = Some(self.app.show(ctx));
            });
            file.expect("the menu bar should be shown every frame")
        }

        fn click(&mut self, pos: Pos2) -> MenuButtonResponse {
            self.frame(vec![Event::PointerMoved(pos)]);
            self.frame(vec![pointer_button(pos, true)]);
            self.frame(vec![pointer_button(pos, false)])
        }
    }

    fn pointer_button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn file_menu_opens_from_the_window() {
        let mut window = Window::new();

        let file = window.frame(Vec::new());
        assert!(!file.is_open);

        let file = window.click(file.trigger.rect.center());
        assert!(file.opened);
        assert!(window.app.file_menu.is_open());
        assert!(!window.app.actions_menu.is_open());
        assert!(!window.app.overflow_menu.is_open());

        let file = window.frame(Vec::new());
        assert_eq!(file.items.len(), 3);

        let file = window.click(file.items[1].rect.center());
        assert_eq!(file.selected, Some(1));
        assert_eq!(window.app.log().entries(), ["File → Export"]);
        assert!(window.app.file_menu.is_open());

        window.frame(vec![Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }]);
        assert!(!window.app.file_menu.is_open());
    }
}
