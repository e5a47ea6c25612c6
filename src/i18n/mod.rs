//! i18n - Internationalization Module
//!
//! Default component strings using HashMap-based lookups. Every string can be
//! overridden per component; these are only the fallbacks.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::{App, Global, SharedString};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Global for Locale {}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Parse a language code such as `en`, `zh` or `zh-CN`
    pub fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Short language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }

    /// The other supported locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }

    /// Locale installed as a global, English otherwise
    pub fn current(cx: &App) -> Self {
        cx.try_global::<Locale>().copied().unwrap_or_default()
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Shared
    map.insert("select-placeholder", ("Select options", "请选择"));
    map.insert("select-single-placeholder", ("Select an option", "请选择一项"));
    map.insert("select-search", ("Search...", "搜索..."));
    map.insert("select-empty", ("No results found.", "无匹配结果"));
    map.insert("select-loading", ("Loading...", "加载中..."));

    // Multi-select
    map.insert("select-all", ("(Select All)", "（全选）"));
    map.insert("select-clear", ("Clear", "清除"));
    map.insert("select-close", ("Close", "关闭"));
    map.insert("select-more", ("+{count} more", "+{count} 项"));

    // Gallery
    map.insert("gallery-title", ("Select Components", "选择组件"));
    map.insert("gallery-frameworks", ("Frameworks", "框架"));
    map.insert("gallery-frameworks-desc", ("Local filtering, select all, overflow badges", "本地过滤、全选、溢出徽章"));
    map.insert("gallery-turbines", ("Turbines", "风机"));
    map.insert("gallery-turbines-desc", ("Server-side search with infinite scroll", "服务端搜索与无限滚动"));
    map.insert("gallery-region", ("Region", "区域"));
    map.insert("gallery-region-desc", ("Local filtering on label and key", "按名称和键本地过滤"));
    map.insert("gallery-device", ("Device", "设备"));
    map.insert("gallery-device-desc", ("Delegated search with infinite scroll", "委托搜索与无限滚动"));
    map.insert("gallery-selected", ("Selected", "已选"));
    map.insert("gallery-none", ("(none)", "（无）"));
    map.insert("gallery-shortcuts", ("Shortcuts", "快捷键"));
    map.insert("gallery-theme", ("Toggle theme", "切换主题"));
    map.insert("gallery-locale", ("Toggle language", "切换语言"));
    map.insert("gallery-modal", ("Modal popovers", "模态弹出层"));
    map.insert("gallery-quit", ("Quit", "退出"));
    map.insert("gallery-navigate", ("Move highlight", "移动高亮"));
    map.insert("gallery-confirm", ("Toggle or choose", "切换或选择"));
    map.insert("gallery-dismiss", ("Close popover", "关闭弹出层"));
    map.insert("gallery-on", ("On", "开"));
    map.insert("gallery-off", ("Off", "关"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key containing a `{count}` placeholder
pub fn t_count(locale: Locale, key: &str, count: usize) -> SharedString {
    t(locale, key).replace("{count}", &count.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_and_fallback() {
        assert_eq!(t(Locale::EnUS, "select-clear"), SharedString::from("Clear"));
        assert_eq!(t(Locale::ZhCN, "select-clear"), SharedString::from("清除"));
        assert_eq!(t(Locale::EnUS, "no-such-key"), SharedString::from("no-such-key"));
    }

    #[test]
    fn test_count_substitution() {
        assert_eq!(t_count(Locale::EnUS, "select-more", 4), SharedString::from("+4 more"));
        assert_eq!(t_count(Locale::ZhCN, "select-more", 2), SharedString::from("+2 项"));
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_code("en"), Locale::EnUS);
        assert_eq!(Locale::from_code("fr"), Locale::EnUS);
        assert_eq!(Locale::EnUS.toggled().code(), "zh");
    }
}
