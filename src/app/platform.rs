//! OS-level probes for the user's color-scheme preference.

/// Ask the OS whether the user prefers a dark color scheme.
/// Falls back to light when no probe gives an answer.
pub fn system_prefers_dark() -> bool {
    probe_dark_preference().unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn probe_dark_preference() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let value: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn probe_dark_preference() -> Option<bool> {
    // GNOME and most modern desktops expose color-scheme; older ones
    // only hint through the GTK theme name.
    if let Some(scheme) = gsettings_value("color-scheme") {
        if scheme.contains("prefer-dark") {
            return Some(true);
        }
        if scheme.contains("prefer-light") {
            return Some(false);
        }
    }
    let theme = gsettings_value("gtk-theme")?;
    Some(theme.to_lowercase().contains("dark"))
}

#[cfg(target_os = "linux")]
fn gsettings_value(key: &str) -> Option<String> {
    use std::process::Command;

    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn probe_dark_preference() -> Option<bool> {
    use std::process::Command;

    // AppleInterfaceStyle is only set when dark mode is active
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        return Some(false);
    }
    Some(String::from_utf8_lossy(&output.stdout).to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn probe_dark_preference() -> Option<bool> {
    None
}
