use fltk::{
    app::Sender,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;
use super::content::ContentView;
use super::sidebar::{Sidebar, SIDEBAR_WIDTH};

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub sidebar: Sidebar,
    pub content: ContentView,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1080, 720, "MetaDocs");
    wind.set_xclass("MetaDocs");

    let mut outer = Flex::new(0, 0, 1080, 720, None);
    outer.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    outer.fixed(&menu, 30);

    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    row.set_spacing(0);

    let sidebar = Sidebar::new(sender);
    row.fixed(sidebar.widget(), SIDEBAR_WIDTH);

    let content = ContentView::new();

    row.end();
    outer.end();

    wind.resizable(&outer);
    wind.end();

    MainWidgets {
        wind,
        menu,
        sidebar,
        content,
    }
}
