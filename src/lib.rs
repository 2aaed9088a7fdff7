pub mod features;
pub mod i18n;
pub mod router;
pub mod state;
pub mod ui;

rust_i18n::i18n!("locales", fallback = "en");

/// Log through the platform channel: logcat on Android, stderr elsewhere.
/// Persistence failures and other fire-and-forget errors end up here; they
/// must never surface in the UI tree.
pub(crate) fn platform_log(message: &str) {
    #[cfg(target_os = "android")]
    {
        use std::ffi::CString;
        let tag = CString::new("husna_core").unwrap_or_default();
        let text = CString::new(message).unwrap_or_default();
        unsafe {
            android_log_sys::__android_log_print(
                android_log_sys::LogPriority::WARN as _,
                tag.as_ptr(),
                text.as_ptr(),
            );
        }
    }
    #[cfg(not(target_os = "android"))]
    eprintln!("husna_core: {message}");
}
