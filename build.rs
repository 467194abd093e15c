fn main() {
    // Embed Windows icon
    #[cfg(target_os = "windows")]
    {
        if std::path::Path::new("metadocs.ico").exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon("metadocs.ico");
            res.compile().unwrap();
        }
    }
}
