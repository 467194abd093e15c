use super::settings::SyntaxTheme;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SelectDoc(String),
    GoBack,
    GoForward,

    // Catalog
    OpenCatalog,
    UseBuiltinCatalog,

    // View
    ToggleDarkMode,
    ToggleAnimations,
    PreferenceFileChanged,

    // Format
    SetFontSize(u32),
    SetSyntaxTheme(SyntaxTheme),

    // Content
    CopyCode(usize),
    CopyReset { index: usize, generation: u64 },
    OpenUrl(String),

    // Help & lifecycle
    ShowAbout,
    Quit,
}
