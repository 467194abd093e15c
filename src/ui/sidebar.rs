use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Pack, Scroll, ScrollType},
    prelude::*,
};

use crate::app::catalog::Catalog;
use crate::app::messages::Message;
use crate::ui::theme::Palette;

pub const SIDEBAR_WIDTH: i32 = 250;
const ITEM_HEIGHT: i32 = 40;

/// Catalog navigation: app title, theme toggle, one button per entry.
/// Rebuilt whenever the selection, catalog, or theme changes.
pub struct Sidebar {
    container: Flex,
    title: Frame,
    toggle: Button,
    scroll: Scroll,
    pack: Pack,
    buttons: Vec<Button>,
}

impl Sidebar {
    /// Build the sidebar inside the currently open group.
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut container = Flex::default();
        container.set_type(FlexType::Column);
        container.set_margin(8);

        let mut header = Flex::default();
        header.set_type(FlexType::Row);

        let mut title = Frame::default();
        title.set_label("BuildMyMeta");
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(18);
        title.set_align(Align::Left | Align::Inside);

        let mut toggle = Button::default();
        toggle.set_frame(FrameType::FlatBox);
        toggle.set_label_size(16);
        toggle.set_tooltip("Toggle theme");
        toggle.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleDarkMode)
        });
        header.fixed(&toggle, 36);
        header.end();
        container.fixed(&header, 44);

        let mut scroll = Scroll::default();
        scroll.set_type(ScrollType::Vertical);
        scroll.set_frame(FrameType::FlatBox);
        let mut pack = Pack::default().with_size(SIDEBAR_WIDTH - 32, 10);
        pack.set_spacing(4);
        pack.end();
        scroll.end();

        container.end();

        Self {
            container,
            title,
            toggle,
            scroll,
            pack,
            buttons: Vec::new(),
        }
    }

    pub fn widget(&self) -> &Flex {
        &self.container
    }

    /// Rebuild the entry list for the current catalog and selection.
    pub fn rebuild(
        &mut self,
        catalog: &Catalog,
        selected: &str,
        sender: &Sender<Message>,
        palette: &Palette,
        is_dark: bool,
    ) {
        self.pack.clear();
        self.buttons.clear();

        self.pack.resize(
            self.scroll.x(),
            self.scroll.y(),
            self.scroll.w() - 18,
            10,
        );
        self.pack.begin();
        for entry in catalog.entries() {
            let mut button = Button::default().with_size(0, ITEM_HEIGHT);
            button.set_label(&entry.name);
            button.set_frame(FrameType::FlatBox);
            button.set_align(Align::Left | Align::Inside);
            button.set_label_size(14);
            if entry.id == selected {
                button.set_color(palette.accent_bg);
                button.set_label_color(palette.accent);
            } else {
                button.set_color(palette.surface);
                button.set_label_color(palette.text_secondary);
            }
            button.set_selection_color(palette.hover);
            button.set_callback({
                let s = *sender;
                let id = entry.id.clone();
                move |_| s.send(Message::SelectDoc(id.clone()))
            });
            self.buttons.push(button);
        }
        self.pack.end();

        // Chrome colors for the current mode
        self.container.set_color(palette.surface);
        self.container.set_frame(FrameType::FlatBox);
        self.scroll.set_color(palette.surface);
        self.pack.set_color(palette.surface);
        self.title.set_label_color(palette.text);
        self.toggle.set_color(palette.hover);
        self.toggle.set_label_color(palette.text_secondary);
        self.toggle.set_label(if is_dark { "\u{2600}" } else { "\u{263e}" });

        self.container.redraw();
    }
}
