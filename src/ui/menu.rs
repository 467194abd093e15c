use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::catalog::Catalog;
use crate::app::messages::Message;
use crate::app::settings::{AppSettings, SyntaxTheme};

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    catalog: &Catalog,
    settings: &AppSettings,
    initial_dark_mode: bool,
) {
    let s = sender;

    // File
    menu.add("File/Open Catalog...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenCatalog) });
    menu.add("File/Built-in Catalog", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::UseBuiltinCatalog) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Go
    menu.add("Go/Back", Shortcut::Ctrl | Key::Left, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::GoBack) });
    menu.add("Go/Forward", Shortcut::Ctrl | Key::Right, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::GoForward) });
    for entry in catalog.entries() {
        let id = entry.id.clone();
        menu.add(&format!("Go/{}", entry.name), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SelectDoc(id.clone())) });
    }

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    let anim_flag = if settings.animations_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Animations", Shortcut::None, anim_flag, { let s = *s; move |_| s.send(Message::ToggleAnimations) });

    // Format
    menu.add("Format/Font Size/Small (12)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(12)) });
    menu.add("Format/Font Size/Medium (16)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(16)) });
    menu.add("Format/Font Size/Large (20)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(20)) });
    for theme in SyntaxTheme::all() {
        let theme = *theme;
        menu.add(&format!("Format/Code Theme/{}", theme.display_name()), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetSyntaxTheme(theme)) });
    }

    // Help
    menu.add("Help/About MetaDocs", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
    menu.add("Help/BuildMyMeta Website", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenUrl("https://www.buildmymeta.dev".to_string())) });
    menu.add("Help/Report an Issue", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenUrl("https://github.com/buildmymeta/metadocs/issues".to_string())) });
}
