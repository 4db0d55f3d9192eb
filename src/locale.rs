use phf::phf_map;
use tracing::debug;

use crate::error::{CalendarError, CalendarResult};

/// Supplies the labels shown around a month grid
///
/// Implementations hold no mutable state; the grid builder calls them fresh
/// for every computation. A provider that cannot produce labels must return
/// an error instead of inventing them.
pub trait LocaleLabelProvider: Send + Sync {
    /// Seven short weekday names, Sunday first (matching the grid columns)
    fn weekday_symbols(&self) -> CalendarResult<[String; 7]>;

    /// Full name of `month` (1-12)
    fn month_name(&self, month: u32) -> CalendarResult<String>;
}

/// Locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en";

static WEEKDAY_SYMBOLS: phf::Map<&'static str, [&'static str; 7]> = phf_map! {
    "en" => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    "fr" => ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    "de" => ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    "es" => ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    "it" => ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
    "pt" => ["dom.", "seg.", "ter.", "qua.", "qui.", "sex.", "sáb."],
    "nl" => ["zo", "ma", "di", "wo", "do", "vr", "za"],
};

static MONTH_NAMES: phf::Map<&'static str, [&'static str; 12]> = phf_map! {
    "en" => [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    "fr" => [
        "janvier", "février", "mars", "avril", "mai", "juin",
        "juillet", "août", "septembre", "octobre", "novembre", "décembre",
    ],
    "de" => [
        "Januar", "Februar", "März", "April", "Mai", "Juni",
        "Juli", "August", "September", "Oktober", "November", "Dezember",
    ],
    "es" => [
        "enero", "febrero", "marzo", "abril", "mayo", "junio",
        "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
    ],
    "it" => [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno",
        "luglio", "agosto", "settembre", "ottobre", "novembre", "dicembre",
    ],
    "pt" => [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho",
        "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
    ],
    "nl" => [
        "januari", "februari", "maart", "april", "mei", "juni",
        "juli", "augustus", "september", "oktober", "november", "december",
    ],
};

/// Label provider backed by the built-in locale tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinLocale {
    code: &'static str,
}

impl BuiltinLocale {
    /// Look up a locale by code
    ///
    /// Accepts POSIX and BCP 47 style identifiers ("fr_CA", "en-US",
    /// "de_DE.UTF-8"); only the language part is used.
    pub fn new(locale: &str) -> CalendarResult<Self> {
        let language = language_code(locale);
        match WEEKDAY_SYMBOLS.get_entry(language.as_str()) {
            Some((code, _)) if MONTH_NAMES.contains_key(*code) => Ok(Self { code: *code }),
            _ => Err(CalendarError::LocaleUnavailable(format!(
                "no labels for locale '{}'",
                locale
            ))),
        }
    }

    pub fn english() -> Self {
        Self { code: DEFAULT_LOCALE }
    }

    /// Resolve the locale from LC_ALL, LC_TIME or LANG, falling back to English
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let candidate = ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|var| lookup(var))
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX");

        match candidate.as_deref().map(Self::new) {
            Some(Ok(locale)) => locale,
            Some(Err(e)) => {
                debug!("LOCALE: {}, using {}", e, DEFAULT_LOCALE);
                Self::english()
            }
            None => Self::english(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl Default for BuiltinLocale {
    fn default() -> Self {
        Self::english()
    }
}

impl LocaleLabelProvider for BuiltinLocale {
    fn weekday_symbols(&self) -> CalendarResult<[String; 7]> {
        let symbols = WEEKDAY_SYMBOLS
            .get(self.code)
            .ok_or_else(|| CalendarError::LocaleUnavailable(self.code.to_string()))?;
        Ok((*symbols).map(|s| s.to_string()))
    }

    fn month_name(&self, month: u32) -> CalendarResult<String> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let names = MONTH_NAMES
            .get(self.code)
            .ok_or_else(|| CalendarError::LocaleUnavailable(self.code.to_string()))?;
        Ok(names[month as usize - 1].to_string())
    }
}

/// All locale codes with built-in labels, sorted
pub fn available_locales() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = WEEKDAY_SYMBOLS.keys().copied().collect();
    codes.sort_unstable();
    codes
}

fn language_code(locale: &str) -> String {
    locale
        .split(|c| c == '_' || c == '-' || c == '.' || c == '@')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}
