use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::SystemTime;

use fltk::{app, enums::Event, prelude::*};

use meta_docs::app::catalog::Catalog;
use meta_docs::app::messages::Message;
use meta_docs::app::navigation::{initial_selection, location_for, History};
use meta_docs::app::platform::system_prefers_dark;
use meta_docs::app::session;
use meta_docs::app::settings::AppSettings;
use meta_docs::app::state::AppState;
use meta_docs::app::theme::{SettingsStore, ThemeManager};
use meta_docs::ui::dialogs::show_about_dialog;
use meta_docs::ui::main_window::build_main_window;
use meta_docs::ui::menu::build_menu;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// How often the settings file is polled for writes by other instances.
const PREFERENCE_POLL_SECS: f64 = 2.0;

fn main() {
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let theme = ThemeManager::init(SettingsStore::new(settings.clone()), system_prefers_dark());
    let catalog = Catalog::builtin();

    // A query-string argument is a deep link and beats the previous session.
    let history = match std::env::args().nth(1) {
        Some(query) => History::new(location_for(&initial_selection(&catalog, &query).id)),
        None => session::load_session()
            .map(|s| s.into_history())
            .unwrap_or_else(|| History::new(location_for(&catalog.first().id))),
    };

    let mut widgets = build_main_window(&sender);
    build_menu(
        &mut widgets.menu,
        &sender,
        &catalog,
        &settings.borrow(),
        theme.theme().is_dark(),
    );

    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });
    widgets.wind.show();

    let mut state = AppState::new(widgets, catalog, theme, settings, sender, history);
    let initial = state.theme();
    state.apply_mode(initial);

    spawn_preference_watcher(sender);

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::SelectDoc(id) => state.select_doc(&id),
                Message::GoBack => state.go_back(),
                Message::GoForward => state.go_forward(),
                Message::OpenCatalog => state.open_catalog_file(),
                Message::UseBuiltinCatalog => state.use_builtin_catalog(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ToggleAnimations => state.toggle_animations(),
                Message::PreferenceFileChanged => state.refresh_theme(),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::SetSyntaxTheme(theme) => state.set_syntax_theme(theme),
                Message::CopyCode(index) => state.copy_code(index),
                Message::CopyReset { index, generation } => state.reset_copy(index, generation),
                Message::OpenUrl(url) => state.open_url(&url),
                Message::ShowAbout => show_about_dialog(),
                Message::Quit => {
                    state.persist_session();
                    app.quit();
                }
            }
        }
    }
}

/// Watch the settings file so a theme toggled in another running instance
/// converges here too. The handler is idempotent, so notifications caused
/// by our own writes are harmless.
fn spawn_preference_watcher(sender: app::Sender<Message>) {
    let path = AppSettings::config_path();
    let mut last_modified = modified_at(&path);
    app::add_timeout3(PREFERENCE_POLL_SECS, move |handle| {
        let now = modified_at(&path);
        if now != last_modified {
            last_modified = now;
            sender.send(Message::PreferenceFileChanged);
        }
        app::repeat_timeout3(PREFERENCE_POLL_SECS, handle);
    });
}

fn modified_at(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
