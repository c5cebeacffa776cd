//! Translation catalog for the checkout screens.
//!
//! The catalog is a two-level table (language -> text key -> string) built
//! once from the static tables below and never mutated afterwards. Lookups
//! that miss return `None`; callers decide what a miss means.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::OnceLock;

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ukrainian,
    English,
    German,
    Russian,
}

impl Language {
    /// All languages, in the order the language bar shows them
    pub const ALL: [Language; 4] = [
        Language::Ukrainian,
        Language::English,
        Language::German,
        Language::Russian,
    ];

    /// Short code used for persistence and control matching
    pub fn code(self) -> &'static str {
        match self {
            Language::Ukrainian => "uk",
            Language::English => "en",
            Language::German => "de",
            Language::Russian => "ru",
        }
    }

    /// Parse a language code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Label shown on the language selector button
    pub fn button_label(self) -> &'static str {
        match self {
            Language::Ukrainian => "UK",
            Language::English => "EN",
            Language::German => "DE",
            Language::Russian => "RU",
        }
    }

    /// Next language in selector order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Language bound to a number key ('1' = first button)
    pub fn from_shortcut(key: char) -> Option<Self> {
        let index = key.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Key of the pay button, rendered with the order amount appended
pub const PAY_KEY: &str = "pay_btn";

/// Currency suffix appended after the pay amount
pub const CURRENCY_SUFFIX: &str = "₴";

type Table = &'static [(&'static str, &'static str)];

const UK: Table = &[
    ("title_checkout", "Оплата замовлення"),
    ("to_pay", "До сплати"),
    ("change_acc", "Змінити акаунт"),
    ("card_label", "Номер картки"),
    ("expiry_label", "Термін"),
    ("cvv_label", "CVV"),
    ("save_card", "Зберегти карту для майбутніх оплат"),
    ("pay_btn", "Оплатити"),
    ("enter_email", "Вхід"),
    ("enter_email_desc", "Введіть ваш Email, щоб продовжити"),
    ("get_code", "Отримати код"),
    ("verify_title", "Підтвердження"),
    ("verify_desc", "Ми надіслали код на"),
    ("verify_btn", "Увійти"),
    ("change_email", "Змінити Email"),
    ("your_cards", "Ваші карти"),
    ("history_title", "Історія транзакцій"),
    ("success_title", "Оплата успішна!"),
    ("success_msg", "Ваш платіж успішно оброблено. Дякуємо."),
    ("order_num", "Номер замовлення"),
    ("sum_label", "Сума"),
    ("date_label", "Дата та час"),
    ("status_label", "Статус"),
    ("status_paid", "Оплачено"),
    ("return_btn", "Повернутися до магазину"),
    ("receipt_sent", "Чек надіслано на вашу пошту"),
    ("security_check", "Перевірка безпеки"),
    ("security_desc", "Код підтвердження надіслано на"),
    ("confirm_payment", "Підтвердити платіж"),
    ("resend_code", "Надіслати код повторно"),
    // Terminal chrome
    ("controls.language", "Мова:"),
    ("controls.theme", "Тема:"),
    ("controls.screens", "Екрани:"),
    ("controls.quit", "вихід"),
    ("controls.help", "Довідка:"),
    ("help.title", "Клавіші"),
    ("status.language_changed", "Мову змінено"),
    ("status.not_saved", "Не збережено"),
    ("status.theme_dark", "Темна тема"),
    ("status.theme_light", "Світла тема"),
    ("screen.checkout", "Оплата"),
    ("screen.login", "Вхід"),
    ("screen.verify", "Код"),
    ("screen.cards", "Карти"),
    ("screen.security", "Безпека"),
    ("screen.success", "Готово"),
];

const EN: Table = &[
    ("title_checkout", "Checkout"),
    ("to_pay", "Total Amount"),
    ("change_acc", "Change Account"),
    ("card_label", "Card Number"),
    ("expiry_label", "Expiry"),
    ("cvv_label", "CVV"),
    ("save_card", "Save card for future payments"),
    ("pay_btn", "Pay"),
    ("enter_email", "Login"),
    ("enter_email_desc", "Enter your Email to continue"),
    ("get_code", "Get Code"),
    ("verify_title", "Verification"),
    ("verify_desc", "We sent a code to"),
    ("verify_btn", "Enter"),
    ("change_email", "Change Email"),
    ("your_cards", "Your Cards"),
    ("history_title", "Transaction History"),
    ("success_title", "Payment Successful!"),
    (
        "success_msg",
        "Your payment has been processed successfully. Thank you.",
    ),
    ("order_num", "Order Number"),
    ("sum_label", "Amount"),
    ("date_label", "Date & Time"),
    ("status_label", "Status"),
    ("status_paid", "Paid"),
    ("return_btn", "Return to Store"),
    ("receipt_sent", "Receipt sent to your email"),
    ("security_check", "Security Check"),
    ("security_desc", "Verification code sent to"),
    ("confirm_payment", "Confirm Payment"),
    ("resend_code", "Resend Code"),
    // Terminal chrome
    ("controls.language", "Language:"),
    ("controls.theme", "Theme:"),
    ("controls.screens", "Screens:"),
    ("controls.quit", "quit"),
    ("controls.help", "Help:"),
    ("help.title", "Key Bindings"),
    ("status.language_changed", "Language changed"),
    ("status.not_saved", "Not saved"),
    ("status.theme_dark", "Dark theme"),
    ("status.theme_light", "Light theme"),
    ("screen.checkout", "Checkout"),
    ("screen.login", "Login"),
    ("screen.verify", "Code"),
    ("screen.cards", "Cards"),
    ("screen.security", "Security"),
    ("screen.success", "Done"),
];

const DE: Table = &[
    ("title_checkout", "Kasse"),
    ("to_pay", "Gesamtbetrag"),
    ("change_acc", "Konto wechseln"),
    ("card_label", "Kartennummer"),
    ("expiry_label", "Gültigkeit"),
    ("cvv_label", "CVV"),
    ("save_card", "Karte für zukünftige Zahlungen speichern"),
    ("pay_btn", "Bezahlen"),
    ("enter_email", "Anmeldung"),
    ("enter_email_desc", "Geben Sie Ihre E-Mail ein"),
    ("get_code", "Code erhalten"),
    ("verify_title", "Bestätigung"),
    ("verify_desc", "Code gesendet an"),
    ("verify_btn", "Eingeben"),
    ("change_email", "E-Mail ändern"),
    ("your_cards", "Ihre Karten"),
    ("history_title", "Transaktionsverlauf"),
    ("success_title", "Zahlung erfolgreich!"),
    (
        "success_msg",
        "Ihre Zahlung wurde erfolgreich bearbeitet. Danke.",
    ),
    ("order_num", "Bestellnummer"),
    ("sum_label", "Betrag"),
    ("date_label", "Datum & Zeit"),
    ("status_label", "Status"),
    ("status_paid", "Bezahlt"),
    ("return_btn", "Zurück zum Geschäft"),
    ("receipt_sent", "Quittung an Ihre E-Mail gesendet"),
    ("security_check", "Sicherheitsprüfung"),
    ("security_desc", "Bestätigungscode gesendet an"),
    ("confirm_payment", "Zahlung bestätigen"),
    ("resend_code", "Code erneut senden"),
    // Terminal chrome
    ("controls.language", "Sprache:"),
    ("controls.theme", "Design:"),
    ("controls.screens", "Ansichten:"),
    ("controls.quit", "beenden"),
    ("controls.help", "Hilfe:"),
    ("help.title", "Tastenbelegung"),
    ("status.language_changed", "Sprache geändert"),
    ("status.not_saved", "Nicht gespeichert"),
    ("status.theme_dark", "Dunkles Design"),
    ("status.theme_light", "Helles Design"),
    ("screen.checkout", "Kasse"),
    ("screen.login", "Anmeldung"),
    ("screen.verify", "Code"),
    ("screen.cards", "Karten"),
    ("screen.security", "Sicherheit"),
    ("screen.success", "Fertig"),
];

const RU: Table = &[
    ("title_checkout", "Оплата заказа"),
    ("to_pay", "К оплате"),
    ("change_acc", "Сменить аккаунт"),
    ("card_label", "Номер карты"),
    ("expiry_label", "Срок"),
    ("cvv_label", "CVV"),
    ("save_card", "Сохранить карту"),
    ("pay_btn", "Оплатить"),
    ("enter_email", "Вход"),
    ("enter_email_desc", "Введите Email для продолжения"),
    ("get_code", "Получить код"),
    ("verify_title", "Подтверждение"),
    ("verify_desc", "Мы отправили код на"),
    ("verify_btn", "Войти"),
    ("change_email", "Сменить Email"),
    ("your_cards", "Ваши карты"),
    ("history_title", "История транзакций"),
    ("success_title", "Оплата успешна!"),
    ("success_msg", "Ваш платеж успешно обработан. Спасибо."),
    ("order_num", "Номер заказа"),
    ("sum_label", "Сумма"),
    ("date_label", "Дата и время"),
    ("status_label", "Статус"),
    ("status_paid", "Оплачено"),
    ("return_btn", "Вернуться в магазин"),
    ("receipt_sent", "Чек отправлен на вашу почту"),
    ("security_check", "Проверка безопасности"),
    ("security_desc", "Код подтверждения отправлен на"),
    ("confirm_payment", "Подтвердить платеж"),
    ("resend_code", "Отправить код повторно"),
    // Terminal chrome
    ("controls.language", "Язык:"),
    ("controls.theme", "Тема:"),
    ("controls.screens", "Экраны:"),
    ("controls.quit", "выход"),
    ("controls.help", "Справка:"),
    ("help.title", "Клавиши"),
    ("status.language_changed", "Язык изменён"),
    ("status.not_saved", "Не сохранено"),
    ("status.theme_dark", "Тёмная тема"),
    ("status.theme_light", "Светлая тема"),
    ("screen.checkout", "Оплата"),
    ("screen.login", "Вход"),
    ("screen.verify", "Код"),
    ("screen.cards", "Карты"),
    ("screen.security", "Безопасность"),
    ("screen.success", "Готово"),
];

/// Immutable language -> key -> string table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: Vec<Language>,
    entries: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl Catalog {
    /// Build a catalog from explicit per-language tables
    pub fn from_tables(tables: &[(Language, Table)]) -> Self {
        let mut catalog = Catalog::default();
        for (language, table) in tables {
            if !catalog.languages.contains(language) {
                catalog.languages.push(*language);
            }
            catalog
                .entries
                .entry(*language)
                .or_default()
                .extend(table.iter().copied());
        }
        catalog
    }

    /// The shipped catalog, built on first use
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Catalog::from_tables(&[
                (Language::Ukrainian, UK),
                (Language::English, EN),
                (Language::German, DE),
                (Language::Russian, RU),
            ])
        })
    }

    /// Translated string for `key`, or `None` when the language lacks it
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.entries.get(&language)?.get(key).copied()
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Sorted key set of one language
    pub fn keys(&self, language: Language) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .entries
            .get(&language)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Every (language, key) pair where some other language defines the key
    /// and this one does not
    pub fn missing_keys(&self) -> Vec<(Language, &'static str)> {
        let all_keys: BTreeSet<&'static str> = self
            .entries
            .values()
            .flat_map(|table| table.keys().copied())
            .collect();

        let mut missing = Vec::new();
        for language in &self.languages {
            for key in &all_keys {
                if self.lookup(*language, key).is_none() {
                    missing.push((*language, *key));
                }
            }
        }
        missing
    }
}

/// Internationalization support for terminal chrome text
pub struct I18n {
    language: Language,
    catalog: &'static Catalog,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            catalog: Catalog::global(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        // Fallback to key if not found
        self.catalog.lookup(self.language, key).unwrap_or(key)
    }
}
