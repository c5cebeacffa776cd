use chrono::{DateTime, Local};

use crate::features::locale::{ElementRole, LanguageControl, TaggedElement, ThemeIcons, UiTree};
use crate::shared::i18n::{CURRENCY_SUFFIX, PAY_KEY};
use crate::shared::Language;

/// Screens of the checkout flow, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Checkout,
    Login,
    Verify,
    Cards,
    Security,
    Success,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 6] = [
        ScreenKind::Checkout,
        ScreenKind::Login,
        ScreenKind::Verify,
        ScreenKind::Cards,
        ScreenKind::Security,
        ScreenKind::Success,
    ];

    /// Catalog key of the screen's tab title
    pub fn title_key(self) -> &'static str {
        match self {
            ScreenKind::Checkout => "screen.checkout",
            ScreenKind::Login => "screen.login",
            ScreenKind::Verify => "screen.verify",
            ScreenKind::Cards => "screen.cards",
            ScreenKind::Security => "screen.security",
            ScreenKind::Success => "screen.success",
        }
    }
}

/// Order shown on the checkout screens
#[derive(Debug, Clone)]
pub struct Order {
    pub amount: String,
    pub order_number: String,
    pub email: String,
    pub masked_card: String,
    pub expiry: String,
    pub created_at: DateTime<Local>,
}

impl Order {
    /// Sample order used by the terminal demo
    pub fn demo() -> Self {
        Self {
            amount: "499.00".to_string(),
            order_number: "#102938".to_string(),
            email: "user@example.com".to_string(),
            masked_card: "•••• •••• •••• 4242".to_string(),
            expiry: "12/27".to_string(),
            created_at: Local::now(),
        }
    }

    pub fn amount_display(&self) -> String {
        format!("{} {CURRENCY_SUFFIX}", self.amount)
    }

    pub fn date_display(&self) -> String {
        self.created_at.format("%d.%m.%Y %H:%M").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Screen {
    pub kind: ScreenKind,
    pub elements: Vec<TaggedElement>,
}

fn label(key: &str, value: impl Into<String>) -> TaggedElement {
    TaggedElement::new(
        key,
        ElementRole::Label {
            value: Some(value.into()),
        },
    )
}

fn heading(key: &str) -> TaggedElement {
    TaggedElement::new(key, ElementRole::Heading)
}

fn text(key: &str) -> TaggedElement {
    TaggedElement::new(key, ElementRole::Text)
}

fn button(key: &str) -> TaggedElement {
    TaggedElement::new(key, ElementRole::Button)
}

fn build_screens(order: &Order) -> Vec<Screen> {
    let amount = order.amount_display();

    ScreenKind::ALL
        .into_iter()
        .map(|kind| {
            let elements = match kind {
                ScreenKind::Checkout => vec![
                    heading("title_checkout"),
                    label("to_pay", amount.clone()),
                    button("change_acc"),
                    label("card_label", order.masked_card.clone()),
                    label("expiry_label", order.expiry.clone()),
                    label("cvv_label", "•••"),
                    TaggedElement::new("save_card", ElementRole::Checkbox),
                    button(PAY_KEY).with_amount(order.amount.clone()),
                ],
                ScreenKind::Login => vec![
                    heading("enter_email"),
                    text("enter_email_desc"),
                    TaggedElement::new(
                        "enter_email",
                        ElementRole::Input {
                            placeholder: "email@example.com".to_string(),
                        },
                    )
                    .with_text("Email"),
                    button("get_code"),
                ],
                ScreenKind::Verify => vec![
                    heading("verify_title"),
                    label("verify_desc", order.email.clone()),
                    button("verify_btn"),
                    button("change_email"),
                    button("resend_code"),
                ],
                ScreenKind::Cards => vec![
                    heading("your_cards"),
                    label("card_label", order.masked_card.clone()),
                    heading("history_title"),
                    label("order_num", order.order_number.clone()),
                    label("sum_label", amount.clone()),
                    text("status_paid"),
                ],
                ScreenKind::Security => vec![
                    heading("security_check"),
                    label("security_desc", order.email.clone()),
                    button("confirm_payment"),
                    button("resend_code"),
                ],
                ScreenKind::Success => vec![
                    heading("success_title"),
                    text("success_msg"),
                    label("order_num", order.order_number.clone()),
                    label("sum_label", amount.clone()),
                    label("date_label", order.date_display()),
                    TaggedElement::new("status_label", ElementRole::Label { value: None }),
                    text("status_paid"),
                    text("receipt_sent"),
                    button("return_btn"),
                ],
            };
            Screen { kind, elements }
        })
        .collect()
}

/// The checkout flow as a tagged UI tree
#[derive(Debug, Clone)]
pub struct CheckoutPage {
    order: Order,
    screens: Vec<Screen>,
    current: usize,
    controls: Vec<LanguageControl>,
    theme_icons: Option<ThemeIcons>,
    dark_mode: bool,
}

impl CheckoutPage {
    pub fn new(order: Order) -> Self {
        let screens = build_screens(&order);
        Self {
            order,
            screens,
            current: 0,
            controls: Language::ALL
                .into_iter()
                .map(LanguageControl::for_language)
                .collect(),
            theme_icons: Some(ThemeIcons::default()),
            dark_mode: false,
        }
    }

    /// Same page without the sun/moon toggle
    pub fn without_theme_toggle(mut self) -> Self {
        self.theme_icons = None;
        self
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_screen(&self) -> &Screen {
        &self.screens[self.current]
    }

    pub fn next_screen(&mut self) {
        self.current = (self.current + 1) % self.screens.len();
    }

    pub fn prev_screen(&mut self) {
        self.current = (self.current + self.screens.len() - 1) % self.screens.len();
    }

    pub fn language_controls(&self) -> &[LanguageControl] {
        &self.controls
    }

    pub fn theme_icons(&self) -> Option<&ThemeIcons> {
        self.theme_icons.as_ref()
    }

    /// First element tagged with `key`, searching screens in order
    pub fn element(&self, key: &str) -> Option<&TaggedElement> {
        self.screens
            .iter()
            .flat_map(|screen| screen.elements.iter())
            .find(|element| element.key() == key)
    }
}

impl UiTree for CheckoutPage {
    fn tagged_elements_mut(&mut self) -> impl Iterator<Item = &mut TaggedElement> {
        self.screens
            .iter_mut()
            .flat_map(|screen| screen.elements.iter_mut())
    }

    fn language_controls_mut(&mut self) -> impl Iterator<Item = &mut LanguageControl> {
        self.controls.iter_mut()
    }

    fn theme_icons_mut(&mut self) -> Option<&mut ThemeIcons> {
        self.theme_icons.as_mut()
    }

    fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }
}
