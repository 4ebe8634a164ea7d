//! Localization provider for the landing page
//!
//! Every display string lives in one immutable bundle per language. The
//! bundles are `&'static`, so lookups are pure and free.

use thiserror::Error;

/// Errors raised by language lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported language tag `{0}` (expected `en` or `hi`)")]
    UnsupportedLanguage(String),
}

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Parse a language tag such as `en`, `hi` or `en-IN`
    pub fn from_code(code: &str) -> Result<Self, LocaleError> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            _ => Err(LocaleError::UnsupportedLanguage(code.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Caption shown on the language toggle
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Hi => "हिन्दी",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    pub fn bundle(self) -> &'static LocalizationBundle {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
        }
    }
}

/// Look up a bundle by language tag, failing fast on unknown tags
#[allow(dead_code)] // tag-keyed lookup; the page itself holds a parsed Language
pub fn get_bundle(code: &str) -> Result<&'static LocalizationBundle, LocaleError> {
    Language::from_code(code).map(Language::bundle)
}

/// Input placeholders
#[derive(Debug)]
pub struct Placeholders {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub city: &'static str,
    pub message: &'static str,
}

/// Company contact details
#[derive(Debug)]
pub struct ContactDetails {
    pub address: &'static str,
    pub mail: &'static str,
    pub phone: &'static str,
}

/// User-facing copy for each submission failure kind
#[derive(Debug)]
pub struct ErrorMessages {
    pub invalid_email: &'static str,
    pub invalid_phone: &'static str,
    pub system_error: &'static str,
    pub connection_failed: &'static str,
}

/// Complete set of display strings for one language
#[derive(Debug)]
pub struct LocalizationBundle {
    pub tag: &'static str,
    pub tagline: &'static str,
    pub sub: &'static str,
    pub notify_button: &'static str,
    pub form_title: &'static str,
    pub farmer: &'static str,
    pub dealer: &'static str,
    pub placeholders: Placeholders,
    pub submit: &'static str,
    pub sending: &'static str,
    pub success_message: &'static str,
    pub new_inquiry: &'static str,
    pub contact: ContactDetails,
    pub errors: ErrorMessages,
}

const CONTACT_MAIL: &str = "agrovitaorganics@gmail.com";
const CONTACT_PHONE: &str = "+91 95103 04547";

static EN: LocalizationBundle = LocalizationBundle {
    tag: "Launching Soon",
    tagline: "Cultivating the Future of Soil.",
    sub: "AgroVita Organics combines innovation with tradition. We are building a sustainable \
          range of lab-tested organic fertilizers to make your harvest greener and healthier.",
    notify_button: "Notify Me",
    form_title: "Connect With Us",
    farmer: "I am a Farmer",
    dealer: "I am a Dealer",
    placeholders: Placeholders {
        name: "Full Name",
        email: "Email Address",
        phone: "WhatsApp No.",
        city: "City/District",
        message: "Message...",
    },
    submit: "Send Inquiry",
    sending: "Sending...",
    success_message: "Email sent! Check your inbox.",
    new_inquiry: "New Inquiry",
    contact: ContactDetails {
        address: "Bandhani Chokdi, Anand - Sojitra Road, Bandhani, Ta. Petlad, Dist. Anand, \
                  Gujarat - 388410",
        mail: CONTACT_MAIL,
        phone: CONTACT_PHONE,
    },
    errors: ErrorMessages {
        invalid_email: "Please enter a valid email address.",
        invalid_phone: "Phone number must be exactly 10 digits.",
        system_error: "System error. Please try again later.",
        connection_failed: "Submission failed. Please check your connection and try again, \
                            or call us on +91 95103 04547.",
    },
};

static HI: LocalizationBundle = LocalizationBundle {
    tag: "जल्द आ रहा है",
    tagline: "मिट्टी के भविष्य को सँवारते हुए।",
    sub: "एग्रोविटा ऑर्गेनिक्स नवाचार को परंपरा के साथ जोड़ता है। हम आपकी फसल को हरा-भरा और \
          स्वस्थ बनाने के लिए प्रयोगशाला में परीक्षण किए गए जैविक उर्वरकों की एक श्रृंखला बना रहे हैं।",
    notify_button: "सूचित करें",
    form_title: "हमसे जुड़ें",
    farmer: "मैं एक किसान हूँ",
    dealer: "मैं एक डीलर हूँ",
    placeholders: Placeholders {
        name: "पूरा नाम",
        email: "ईमेल",
        phone: "व्हाट्सएप नंबर",
        city: "शहर / जिला",
        message: "संदेश...",
    },
    submit: "पूछताछ भेजें",
    sending: "भेजा जा रहा है...",
    success_message: "ईमेल भेजा गया! अपना इनबॉक्स जांचें।",
    new_inquiry: "नई पूछताछ",
    contact: ContactDetails {
        address: "बांधनी चौकड़ी, आनंद - सोजित्रा रोड, बांधनी, ता. पेटलाद, जिला. आनंद, गुजरात - 388410",
        mail: CONTACT_MAIL,
        phone: CONTACT_PHONE,
    },
    errors: ErrorMessages {
        invalid_email: "कृपया एक मान्य ईमेल पता दर्ज करें।",
        invalid_phone: "फ़ोन नंबर ठीक 10 अंकों का होना चाहिए।",
        system_error: "सिस्टम त्रुटि। कृपया बाद में पुनः प्रयास करें।",
        connection_failed: "सबमिशन विफल रहा। कृपया अपना कनेक्शन जांचें और पुनः प्रयास करें, \
                            या हमें +91 95103 04547 पर कॉल करें।",
    },
};

/// Holds the active language for the whole page
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer {
    current: Language,
}

impl Localizer {
    pub fn new(current: Language) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn bundle(&self) -> &'static LocalizationBundle {
        self.current.bundle()
    }

    /// Switch the page language; the next draw picks up the new bundle
    pub fn set_language(&mut self, lang: Language) {
        if self.current != lang {
            tracing::info!(from = self.current.code(), to = lang.code(), "language switched");
        }
        self.current = lang;
    }

    pub fn toggle(&mut self) {
        self.set_language(self.current.toggle());
    }
}
