use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use fltk::{app, app::Sender, dialog, menu::MenuBar, prelude::*, window::Window};

use super::catalog::Catalog;
use super::clipboard::{self, CopyIndicator, COPY_FEEDBACK_SECS};
use super::messages::Message;
use super::navigation::{initial_selection, location_for, History};
use super::session;
use super::settings::{AppSettings, SyntaxTheme};
use super::syntax::SnippetHighlighter;
use super::theme::{SettingsStore, Theme, ThemeManager};
use crate::ui::content::ContentView;
use crate::ui::file_dialogs::native_open_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::build_menu;
use crate::ui::sidebar::Sidebar;
use crate::ui::theme::{apply_chrome, Palette};
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub catalog: Catalog,
    pub selected: String,
    pub history: History,
    theme: ThemeManager<SettingsStore>,
    settings: Rc<RefCell<AppSettings>>,
    window: Window,
    menu: MenuBar,
    sidebar: Sidebar,
    content: ContentView,
    highlighter: SnippetHighlighter,
    indicators: Vec<CopyIndicator>,
    sender: Sender<Message>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        catalog: Catalog,
        theme: ThemeManager<SettingsStore>,
        settings: Rc<RefCell<AppSettings>>,
        sender: Sender<Message>,
        history: History,
    ) -> Self {
        let selected = initial_selection(&catalog, history.current()).id.clone();
        let (font_size, syntax_theme) = {
            let s = settings.borrow();
            (s.font_size, s.current_syntax_theme(theme.theme().is_dark()))
        };
        let highlighter =
            SnippetHighlighter::new(syntax_theme, fltk::enums::Font::Courier, font_size as i32);

        Self {
            catalog,
            selected,
            history,
            theme,
            settings,
            window: widgets.wind,
            menu: widgets.menu,
            sidebar: widgets.sidebar,
            content: widgets.content,
            highlighter,
            indicators: Vec::new(),
            sender,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Re-render the selected document and the sidebar for the current
    /// mode and settings.
    pub fn render_current(&mut self) {
        let is_dark = self.theme.theme().is_dark();
        let palette = Palette::for_mode(is_dark);
        let (font_size, animate, syntax_theme) = {
            let s = self.settings.borrow();
            (s.font_size, s.animations_enabled, s.current_syntax_theme(is_dark))
        };
        self.highlighter.set_theme(syntax_theme);
        self.highlighter.set_font_size(font_size as i32);

        let entry = match self.catalog.find(&self.selected) {
            Some(entry) => entry.clone(),
            None => self.catalog.first().clone(),
        };

        self.content.rebuild(
            &entry,
            &mut self.highlighter,
            &palette,
            font_size,
            animate,
            &self.sender,
        );
        self.indicators = vec![CopyIndicator::new(); self.content.code_count()];

        self.sidebar
            .rebuild(&self.catalog, &self.selected, &self.sender, &palette, is_dark);

        self.window.set_label(&format!("{} - MetaDocs", entry.name));
        self.window.redraw();
    }

    // --- Navigation ---

    /// User selection: update state, mirror it into the location history.
    pub fn select_doc(&mut self, id: &str) {
        if self.catalog.find(id).is_none() || self.selected == id {
            return;
        }
        self.selected = id.to_string();
        self.history.push(location_for(id));
        self.render_current();
    }

    /// Derive the selection from a location string without pushing history
    /// (the back/forward path).
    fn apply_location(&mut self, query: &str) {
        let id = initial_selection(&self.catalog, query).id.clone();
        if id != self.selected {
            self.selected = id;
            self.render_current();
        }
    }

    pub fn go_back(&mut self) {
        if let Some(location) = self.history.back().map(str::to_string) {
            self.apply_location(&location);
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(location) = self.history.forward().map(str::to_string) {
            self.apply_location(&location);
        }
    }

    // --- Catalog ---

    pub fn open_catalog_file(&mut self) {
        let Some(path) = native_open_dialog("*.json") else {
            return;
        };
        match Catalog::from_json_file(Path::new(&path)) {
            Ok(catalog) => self.install_catalog(catalog),
            Err(e) => dialog::alert_default(&format!("Could not load catalog: {}", e)),
        }
    }

    pub fn use_builtin_catalog(&mut self) {
        self.install_catalog(Catalog::builtin());
    }

    fn install_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.selected = self.catalog.first().id.clone();
        self.history = History::new(location_for(&self.selected));
        self.rebuild_menu();
        self.apply_mode(self.theme.theme());
    }

    fn rebuild_menu(&mut self) {
        self.menu.clear();
        build_menu(
            &mut self.menu,
            &self.sender,
            &self.catalog,
            &self.settings.borrow(),
            self.theme.theme().is_dark(),
        );
    }

    // --- Theme ---

    pub fn toggle_dark_mode(&mut self) {
        let theme = self.theme.toggle();
        self.apply_mode(theme);
    }

    /// Another instance changed the stored preference; converge to it.
    pub fn refresh_theme(&mut self) {
        if let Some(theme) = self.theme.refresh() {
            self.apply_mode(theme);
        }
    }

    /// Re-skin the whole window for `theme` and re-render.
    pub fn apply_mode(&mut self, theme: Theme) {
        let palette = Palette::for_mode(theme.is_dark());
        apply_chrome(&mut self.window, &mut self.menu, &palette);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, theme.is_dark());
        self.update_menu_checkbox("View/Toggle Dark Mode", theme.is_dark());
        self.render_current();
    }

    // --- View & format settings ---

    pub fn toggle_animations(&mut self) {
        let enabled = {
            let mut s = self.settings.borrow_mut();
            s.animations_enabled = !s.animations_enabled;
            if let Err(e) = s.save() {
                eprintln!("Failed to save settings: {}", e);
            }
            s.animations_enabled
        };
        self.update_menu_checkbox("View/Toggle Animations", enabled);
    }

    pub fn set_font_size(&mut self, size: u32) {
        {
            let mut s = self.settings.borrow_mut();
            s.font_size = size;
            if let Err(e) = s.save() {
                eprintln!("Failed to save settings: {}", e);
            }
        }
        self.render_current();
    }

    /// Pick the syntect theme for whichever mode is active.
    pub fn set_syntax_theme(&mut self, theme: SyntaxTheme) {
        let is_dark = self.theme.theme().is_dark();
        {
            let mut s = self.settings.borrow_mut();
            if is_dark {
                s.syntax_theme_dark = theme;
            } else {
                s.syntax_theme_light = theme;
            }
            if let Err(e) = s.save() {
                eprintln!("Failed to save settings: {}", e);
            }
        }
        self.render_current();
    }

    // --- Clipboard ---

    pub fn copy_code(&mut self, index: usize) {
        let Some(code) = self.content.code_text(index).map(str::to_string) else {
            return;
        };
        match clipboard::write_text(&code) {
            Ok(()) => {
                if let Some(indicator) = self.indicators.get_mut(index) {
                    let generation = indicator.mark_copied();
                    self.content.set_copy_label(index, true);
                    let s = self.sender;
                    app::add_timeout3(COPY_FEEDBACK_SECS, move |_| {
                        s.send(Message::CopyReset { index, generation });
                    });
                }
            }
            Err(e) => {
                eprintln!("Clipboard write failed: {}", e);
                dialog::alert_default(
                    "Clipboard is not available. Please copy the snippet manually.",
                );
            }
        }
    }

    pub fn reset_copy(&mut self, index: usize, generation: u64) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            if indicator.acknowledge(generation) {
                self.content.set_copy_label(index, false);
            }
        }
    }

    // --- External links & lifecycle ---

    pub fn open_url(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            dialog::alert_default(&format!("Failed to open link: {}", e));
        }
    }

    pub fn persist_session(&self) {
        if let Err(e) = session::save_session(&self.history) {
            eprintln!("Failed to save session: {}", e);
        }
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}
