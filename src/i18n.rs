use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const DEFAULT_LOCALE: &str = "en-US";

pub const WINDOW_TITLE: &str = "window_title";
pub const OPERATING_SYSTEM_LABEL: &str = "operating_system_label";
pub const RUNTIME_LABEL: &str = "runtime_label";
pub const NEW_VARIETY_LABEL: &str = "new_variety_label";
pub const ADD_BUTTON: &str = "add_button";
pub const VARIETIES_LABEL: &str = "varieties_label";
pub const REMOVE_BUTTON: &str = "remove_button";
pub const REMOVE_ALL_BUTTON: &str = "remove_all_button";

static BUILTIN: Lazy<LocalizationTable> = Lazy::new(|| {
    let mut table = LocalizationTable::default();
    table.insert_locale(
        "en-US",
        [
            (WINDOW_TITLE, "Potato"),
            (OPERATING_SYSTEM_LABEL, "Operating System:"),
            (RUNTIME_LABEL, "Runtime:"),
            (NEW_VARIETY_LABEL, "New variety:"),
            (ADD_BUTTON, "Add"),
            (VARIETIES_LABEL, "Varieties:"),
            (REMOVE_BUTTON, "Remove"),
            (REMOVE_ALL_BUTTON, "Remove All"),
        ],
    );
    table.insert_locale(
        "de-DE",
        [
            (WINDOW_TITLE, "Potato"),
            (OPERATING_SYSTEM_LABEL, "Betriebssystem:"),
            (RUNTIME_LABEL, "Laufzeit:"),
            (NEW_VARIETY_LABEL, "Neue Sorte:"),
            (ADD_BUTTON, "Hinzufügen"),
            (VARIETIES_LABEL, "Sorten:"),
            (REMOVE_BUTTON, "Entfernen"),
            (REMOVE_ALL_BUTTON, "Alles entfernen"),
        ],
    );
    table
});

/// Locale tag → key → text.
#[derive(Debug, Default, Clone)]
pub struct LocalizationTable {
    entries: HashMap<String, HashMap<String, String>>,
}

impl LocalizationTable {
    /// The English and German tables shipped with the app.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn insert(&mut self, locale: &str, key: &str, text: &str) {
        self.entries
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    pub fn insert_locale<'a>(&mut self, locale: &str, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (key, text) in pairs {
            self.insert(locale, key, text);
        }
    }

    /// Exact-locale lookup. Misses come back as `[key]`.
    pub fn lookup(&self, locale: &str, key: &str) -> String {
        self.entries
            .get(locale)
            .and_then(|strings| strings.get(key))
            .cloned()
            .unwrap_or_else(|| format!("[{key}]"))
    }

    /// Locale tags in sorted order.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}

/// Maps a host locale string such as `de_DE.UTF-8` onto a table locale.
pub fn locale_from_host(value: &str) -> &'static str {
    if value.starts_with("de") { "de-DE" } else { DEFAULT_LOCALE }
}

/// Reads the POSIX locale variables in precedence order.
pub fn detect_host_locale() -> &'static str {
    detect_host_locale_with(|var| std::env::var(var).ok())
}

/// `LC_ALL`, then `LC_MESSAGES`, then `LANG`; empty values are skipped.
pub fn detect_host_locale_with(get: impl Fn(&str) -> Option<String>) -> &'static str {
    let host = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|&var| get(var))
        .find(|v| !v.is_empty());
    match host {
        Some(value) => locale_from_host(&value),
        None => DEFAULT_LOCALE,
    }
}

/// The table plus the locale currently in effect.
#[derive(Debug, Clone)]
pub struct Strings {
    table: LocalizationTable,
    current: String,
}

impl Strings {
    pub fn new(table: LocalizationTable, locale: Option<&str>) -> Self {
        let current = locale.unwrap_or(DEFAULT_LOCALE).to_string();
        Self { table, current }
    }

    /// Builtin table with the locale taken from the override or the host.
    pub fn from_host(override_locale: Option<&str>) -> Self {
        let locale = override_locale.unwrap_or_else(|| detect_host_locale());
        Self::new(LocalizationTable::builtin(), Some(locale))
    }

    pub fn current_locale(&self) -> &str {
        &self.current
    }

    pub fn set_current_locale(&mut self, locale: impl Into<String>) {
        self.current = locale.into();
        tracing::debug!(locale = %self.current, "locale changed");
    }

    /// Switches to the next locale in the table, wrapping around.
    pub fn cycle_locale(&mut self) {
        let locales = self.table.locales();
        if locales.is_empty() {
            return;
        }
        let next = match locales.iter().position(|l| *l == self.current) {
            Some(i) => locales[(i + 1) % locales.len()],
            None => locales[0],
        };
        let next = next.to_string();
        self.set_current_locale(next);
    }

    pub fn get(&self, key: &str) -> String {
        self.table.lookup(&self.current, key)
    }

    pub fn window_title(&self) -> String {
        self.get(WINDOW_TITLE)
    }

    pub fn operating_system_label(&self) -> String {
        self.get(OPERATING_SYSTEM_LABEL)
    }

    pub fn runtime_label(&self) -> String {
        self.get(RUNTIME_LABEL)
    }

    pub fn new_variety_label(&self) -> String {
        self.get(NEW_VARIETY_LABEL)
    }

    pub fn add_button(&self) -> String {
        self.get(ADD_BUTTON)
    }

    pub fn varieties_label(&self) -> String {
        self.get(VARIETIES_LABEL)
    }

    pub fn remove_button(&self) -> String {
        self.get(REMOVE_BUTTON)
    }

    pub fn remove_all_button(&self) -> String {
        self.get(REMOVE_ALL_BUTTON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_window_title() {
        let table = LocalizationTable::builtin();
        assert_eq!(table.lookup("de-DE", "window_title"), "Potato");
        assert_eq!(table.lookup("de-DE", REMOVE_ALL_BUTTON), "Alles entfernen");
    }

    #[test]
    fn missing_key_is_bracketed() {
        let table = LocalizationTable::builtin();
        assert_eq!(table.lookup("en-US", "no_such_key"), "[no_such_key]");
        assert_eq!(table.lookup("de-DE", "no_such_key"), "[no_such_key]");
    }

    #[test]
    fn unknown_locale_does_not_fall_back_to_english() {
        let strings = Strings::new(LocalizationTable::builtin(), Some("fr-FR"));
        assert_eq!(strings.add_button(), "[add_button]");
    }

    #[test]
    fn both_locales_define_all_keys() {
        let table = LocalizationTable::builtin();
        let keys = [
            WINDOW_TITLE,
            OPERATING_SYSTEM_LABEL,
            RUNTIME_LABEL,
            NEW_VARIETY_LABEL,
            ADD_BUTTON,
            VARIETIES_LABEL,
            REMOVE_BUTTON,
            REMOVE_ALL_BUTTON,
        ];
        for locale in ["en-US", "de-DE"] {
            for key in keys {
                assert!(!table.lookup(locale, key).starts_with('['), "{locale}/{key}");
            }
        }
    }

    #[test]
    fn extra_locales_need_no_code_changes() {
        let mut table = LocalizationTable::builtin();
        table.insert("nl-NL", ADD_BUTTON, "Toevoegen");
        let strings = Strings::new(table, Some("nl-NL"));
        assert_eq!(strings.add_button(), "Toevoegen");
        assert_eq!(strings.remove_button(), "[remove_button]");
    }

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| pairs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.to_string())
    }

    #[test]
    fn lc_all_wins_over_lang() {
        let env = [("LC_ALL", "de_DE.UTF-8"), ("LANG", "en_US.UTF-8")];
        assert_eq!(detect_host_locale_with(vars(&env)), "de-DE");
        let env = [("LC_MESSAGES", "en_GB.UTF-8"), ("LANG", "de_DE.UTF-8")];
        assert_eq!(detect_host_locale_with(vars(&env)), "en-US");
    }

    #[test]
    fn empty_lc_all_is_skipped() {
        let env = [("LC_ALL", ""), ("LANG", "de_AT.UTF-8")];
        assert_eq!(detect_host_locale_with(vars(&env)), "de-DE");
    }

    #[test]
    fn no_locale_vars_gives_default() {
        assert_eq!(detect_host_locale_with(vars(&[])), DEFAULT_LOCALE);
        assert_eq!(detect_host_locale_with(vars(&[("LANG", "")])), DEFAULT_LOCALE);
    }

    #[test]
    fn host_locale_prefix_match() {
        assert_eq!(locale_from_host("de_DE.UTF-8"), "de-DE");
        assert_eq!(locale_from_host("de-AT"), "de-DE");
        assert_eq!(locale_from_host("en_GB.UTF-8"), "en-US");
        assert_eq!(locale_from_host("C"), "en-US");
    }

    #[test]
    fn default_locale_when_unset() {
        let strings = Strings::new(LocalizationTable::builtin(), None);
        assert_eq!(strings.current_locale(), DEFAULT_LOCALE);
        assert_eq!(strings.operating_system_label(), "Operating System:");
    }

    #[test]
    fn setter_switches_lookups() {
        let mut strings = Strings::from_host(Some("en-US"));
        assert_eq!(strings.varieties_label(), "Varieties:");
        strings.set_current_locale("de-DE");
        assert_eq!(strings.varieties_label(), "Sorten:");
    }

    #[test]
    fn cycle_walks_sorted_locales() {
        let mut strings = Strings::from_host(Some("de-DE"));
        strings.cycle_locale();
        assert_eq!(strings.current_locale(), "en-US");
        strings.cycle_locale();
        assert_eq!(strings.current_locale(), "de-DE");

        let mut unknown = Strings::from_host(Some("fr-FR"));
        unknown.cycle_locale();
        assert_eq!(unknown.current_locale(), "de-DE");
    }
}
