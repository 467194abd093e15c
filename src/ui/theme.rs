use fltk::{enums::Color, menu::MenuBar, prelude::*, window::Window};

/// Resolved widget colors for one mode. Values transposed from the
/// BuildMyMeta site palette.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window_bg: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub accent_bg: Color,
    pub hover: Color,
}

impl Palette {
    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self {
                window_bg: Color::from_rgb(17, 24, 39),
                surface: Color::from_rgb(31, 41, 55),
                border: Color::from_rgb(55, 65, 81),
                text: Color::from_rgb(243, 244, 246),
                text_secondary: Color::from_rgb(209, 213, 219),
                accent: Color::from_rgb(96, 165, 250),
                accent_bg: Color::from_rgb(30, 48, 80),
                hover: Color::from_rgb(55, 65, 81),
            }
        } else {
            Self {
                window_bg: Color::from_rgb(249, 250, 251),
                surface: Color::White,
                border: Color::from_rgb(229, 231, 235),
                text: Color::from_rgb(17, 24, 39),
                text_secondary: Color::from_rgb(55, 65, 81),
                accent: Color::from_rgb(37, 99, 235),
                accent_bg: Color::from_rgb(239, 246, 255),
                hover: Color::from_rgb(243, 244, 246),
            }
        }
    }
}

/// Recolor the window chrome. The sidebar and content pane are recolored
/// when they rebuild.
pub fn apply_chrome(window: &mut Window, menu: &mut MenuBar, palette: &Palette) {
    window.set_color(palette.window_bg);
    window.set_label_color(palette.text);
    menu.set_color(palette.surface);
    menu.set_text_color(palette.text);
    menu.set_selection_color(palette.hover);
    menu.redraw();
    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
