use crate::state::AppState;

pub fn update_locale(state: &mut AppState, locale_str: &str) {
    let normalized = normalize_locale(locale_str);
    state.locale = normalized.to_string();
    rust_i18n::set_locale(normalized);
}

fn normalize_locale(locale_str: &str) -> &'static str {
    let trimmed = locale_str.trim();
    if trimmed.is_empty() {
        return "en";
    }

    // rust-i18n looks up compiled locales by name (e.g. "en", "ar"), so normalize
    // incoming BCP-47 tags like "fr-FR" / "ar_EG" down to a supported language.
    let lower = trimmed.to_ascii_lowercase().replace('_', "-");
    let lang = lower.split('-').next().unwrap_or("en");

    match lang {
        "fr" => "fr",
        "ar" => "ar",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_locale;

    #[test]
    fn regional_tags_collapse_to_language() {
        assert_eq!(normalize_locale("fr-FR"), "fr");
        assert_eq!(normalize_locale("ar_EG"), "ar");
        assert_eq!(normalize_locale("en-US"), "en");
    }

    #[test]
    fn unknown_or_empty_falls_back_to_english() {
        assert_eq!(normalize_locale(""), "en");
        assert_eq!(normalize_locale("  "), "en");
        assert_eq!(normalize_locale("zh-Hans"), "en");
    }
}
