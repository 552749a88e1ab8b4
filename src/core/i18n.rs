//! Localized UI strings.
//!
//! Each supported locale has a static table for the capture modal and one
//! for the landing page. The browser's preferred languages pick the table.

use crate::core::email_capture::{CaptureError, SUBSCRIBE_FALLBACK_MESSAGE};

/// Supported UI locales
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Es, Locale::Fr, Locale::De];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    /// Match a language tag such as `es-MX` or `fr_CA` by its primary subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Locale::ALL.into_iter().find(|l| l.as_str() == primary)
    }

    /// Pick the first supported tag in preference order, else English.
    pub fn negotiate<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .find_map(|tag| Locale::from_tag(tag.as_ref()))
            .unwrap_or_default()
    }

    pub fn capture_copy(&self) -> &'static CaptureCopy {
        match self {
            Locale::En => &CAPTURE_EN,
            Locale::Es => &CAPTURE_ES,
            Locale::Fr => &CAPTURE_FR,
            Locale::De => &CAPTURE_DE,
        }
    }

    pub fn landing_copy(&self) -> &'static LandingCopy {
        match self {
            Locale::En => &LANDING_EN,
            Locale::Es => &LANDING_ES,
            Locale::Fr => &LANDING_FR,
            Locale::De => &LANDING_DE,
        }
    }
}

/// Strings for the email capture modal
#[derive(Debug)]
pub struct CaptureCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub close_label: &'static str,
    pub email_required: &'static str,
    pub subscribe_failed: &'static str,
}

impl CaptureCopy {
    /// Text shown for a form error.
    ///
    /// Server-provided detail is shown verbatim; everything else is localized.
    pub fn error_text(&self, error: &CaptureError) -> String {
        match error {
            CaptureError::Validation => self.email_required.to_string(),
            CaptureError::Transport => self.subscribe_failed.to_string(),
            CaptureError::ServerRejected(msg) if msg == SUBSCRIBE_FALLBACK_MESSAGE => {
                self.subscribe_failed.to_string()
            }
            CaptureError::ServerRejected(msg) => msg.clone(),
        }
    }
}

/// Strings for the landing page
#[derive(Debug)]
pub struct LandingCopy {
    pub hero_title: &'static str,
    pub hero_lead: &'static str,
    pub cta: &'static str,
    pub features_heading: &'static str,
    pub features: [(&'static str, &'static str); 3],
    pub steps_heading: &'static str,
    pub steps: [&'static str; 3],
    pub closing_heading: &'static str,
    pub footer: &'static str,
}

const CAPTURE_EN: CaptureCopy = CaptureCopy {
    title: "Learn a little every week",
    subtitle: "Get short lessons, new vocabulary and study tips in your inbox.",
    name_label: "Name",
    name_placeholder: "Your name (optional)",
    email_label: "Email",
    email_placeholder: "you@example.com",
    submit: "Subscribe",
    submitting: "Subscribing...",
    success_title: "You're subscribed!",
    success_body: "Check your inbox for your first lesson.",
    close_label: "Close",
    email_required: "Email is required",
    subscribe_failed: "Failed to subscribe. Please try again.",
};

const CAPTURE_ES: CaptureCopy = CaptureCopy {
    title: "Aprende un poco cada semana",
    subtitle: "Recibe lecciones cortas, vocabulario nuevo y consejos de estudio en tu correo.",
    name_label: "Nombre",
    name_placeholder: "Tu nombre (opcional)",
    email_label: "Correo electrónico",
    email_placeholder: "tu@ejemplo.com",
    submit: "Suscribirme",
    submitting: "Suscribiendo...",
    success_title: "¡Ya estás suscrito!",
    success_body: "Revisa tu bandeja de entrada para tu primera lección.",
    close_label: "Cerrar",
    email_required: "El correo electrónico es obligatorio",
    subscribe_failed: "No se pudo completar la suscripción. Inténtalo de nuevo.",
};

const CAPTURE_FR: CaptureCopy = CaptureCopy {
    title: "Apprenez un peu chaque semaine",
    subtitle: "Recevez de courtes leçons, du vocabulaire et des conseils d'étude par e-mail.",
    name_label: "Nom",
    name_placeholder: "Votre nom (facultatif)",
    email_label: "E-mail",
    email_placeholder: "vous@exemple.com",
    submit: "S'abonner",
    submitting: "Abonnement...",
    success_title: "Vous êtes abonné !",
    success_body: "Consultez votre boîte de réception pour votre première leçon.",
    close_label: "Fermer",
    email_required: "L'e-mail est obligatoire",
    subscribe_failed: "L'abonnement a échoué. Veuillez réessayer.",
};

const CAPTURE_DE: CaptureCopy = CaptureCopy {
    title: "Jede Woche ein bisschen lernen",
    subtitle: "Kurze Lektionen, neue Vokabeln und Lerntipps direkt in dein Postfach.",
    name_label: "Name",
    name_placeholder: "Dein Name (optional)",
    email_label: "E-Mail",
    email_placeholder: "du@beispiel.de",
    submit: "Abonnieren",
    submitting: "Wird abonniert...",
    success_title: "Du bist angemeldet!",
    success_body: "Deine erste Lektion wartet in deinem Postfach.",
    close_label: "Schließen",
    email_required: "E-Mail ist erforderlich",
    subscribe_failed: "Anmeldung fehlgeschlagen. Bitte versuche es erneut.",
};

const LANDING_EN: LandingCopy = LandingCopy {
    hero_title: "Speak a new language with confidence",
    hero_lead: "Bite-sized lessons, real conversations and a study plan that adapts to you.",
    cta: "Start learning free",
    features_heading: "Why learners stay with us",
    features: [
        ("Daily micro-lessons", "Five focused minutes a day build lasting habits."),
        ("Real conversations", "Practice dialogues recorded by native speakers."),
        ("Smart review", "Spaced repetition brings words back right before you forget them."),
    ],
    steps_heading: "How it works",
    steps: [
        "Pick a language and set a weekly goal.",
        "Learn with short lessons and speaking drills.",
        "Review what matters and watch your streak grow.",
    ],
    closing_heading: "Your first lesson takes five minutes",
    footer: "Lingua. Learn languages, one habit at a time.",
};

const LANDING_ES: LandingCopy = LandingCopy {
    hero_title: "Habla un nuevo idioma con confianza",
    hero_lead: "Lecciones breves, conversaciones reales y un plan de estudio que se adapta a ti.",
    cta: "Empieza gratis",
    features_heading: "Por qué nuestros estudiantes se quedan",
    features: [
        ("Microlecciones diarias", "Cinco minutos al día crean hábitos duraderos."),
        ("Conversaciones reales", "Diálogos grabados por hablantes nativos."),
        ("Repaso inteligente", "La repetición espaciada te recuerda las palabras justo a tiempo."),
    ],
    steps_heading: "Cómo funciona",
    steps: [
        "Elige un idioma y fija una meta semanal.",
        "Aprende con lecciones cortas y ejercicios de pronunciación.",
        "Repasa lo importante y mira crecer tu racha.",
    ],
    closing_heading: "Tu primera lección dura cinco minutos",
    footer: "Lingua. Aprende idiomas, un hábito a la vez.",
};

const LANDING_FR: LandingCopy = LandingCopy {
    hero_title: "Parlez une nouvelle langue en toute confiance",
    hero_lead: "Des leçons courtes, de vraies conversations et un programme qui s'adapte à vous.",
    cta: "Commencer gratuitement",
    features_heading: "Pourquoi nos apprenants restent",
    features: [
        ("Micro-leçons quotidiennes", "Cinq minutes par jour pour des habitudes durables."),
        ("Vraies conversations", "Des dialogues enregistrés par des locuteurs natifs."),
        ("Révision intelligente", "La répétition espacée ramène les mots juste avant l'oubli."),
    ],
    steps_heading: "Comment ça marche",
    steps: [
        "Choisissez une langue et un objectif hebdomadaire.",
        "Apprenez avec des leçons courtes et des exercices d'oral.",
        "Révisez l'essentiel et regardez votre série grandir.",
    ],
    closing_heading: "Votre première leçon prend cinq minutes",
    footer: "Lingua. Apprenez les langues, une habitude à la fois.",
};

const LANDING_DE: LandingCopy = LandingCopy {
    hero_title: "Sprich eine neue Sprache mit Selbstvertrauen",
    hero_lead: "Kurze Lektionen, echte Gespräche und ein Lernplan, der sich dir anpasst.",
    cta: "Kostenlos starten",
    features_heading: "Warum Lernende bei uns bleiben",
    features: [
        ("Tägliche Mini-Lektionen", "Fünf Minuten am Tag schaffen dauerhafte Gewohnheiten."),
        ("Echte Gespräche", "Dialoge, aufgenommen von Muttersprachlern."),
        ("Cleveres Wiederholen", "Verteiltes Wiederholen holt Wörter zurück, bevor du sie vergisst."),
    ],
    steps_heading: "So funktioniert's",
    steps: [
        "Wähle eine Sprache und ein Wochenziel.",
        "Lerne mit kurzen Lektionen und Sprechübungen.",
        "Wiederhole das Wichtigste und sieh deine Serie wachsen.",
    ],
    closing_heading: "Deine erste Lektion dauert fünf Minuten",
    footer: "Lingua. Sprachen lernen, eine Gewohnheit nach der anderen.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_matches_primary_subtag() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("FR_ca"), Some(Locale::Fr));
        assert_eq!(Locale::from_tag(" de-AT "), Some(Locale::De));
    }

    #[test]
    fn test_from_tag_unsupported() {
        assert_eq!(Locale::from_tag("ja-JP"), None);
        assert_eq!(Locale::from_tag(""), None);
        // "eng" is not "en"
        assert_eq!(Locale::from_tag("eng"), None);
    }

    #[test]
    fn test_negotiate_first_supported_wins() {
        assert_eq!(Locale::negotiate(["ja-JP", "fr-FR", "es"]), Locale::Fr);
        assert_eq!(Locale::negotiate(vec!["de".to_string()]), Locale::De);
    }

    #[test]
    fn test_negotiate_falls_back_to_english() {
        assert_eq!(Locale::negotiate(["ja", "ko"]), Locale::En);
        assert_eq!(Locale::negotiate(Vec::<String>::new()), Locale::En);
    }

    #[test]
    fn test_english_matches_default_messages() {
        let copy = Locale::En.capture_copy();
        assert_eq!(copy.email_required, CaptureError::Validation.to_string());
        assert_eq!(copy.subscribe_failed, SUBSCRIBE_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_error_text_localizes_fixed_messages() {
        let copy = Locale::Es.capture_copy();
        assert_eq!(
            copy.error_text(&CaptureError::Validation),
            "El correo electrónico es obligatorio"
        );
        assert_eq!(copy.error_text(&CaptureError::Transport), copy.subscribe_failed);
        assert_eq!(
            copy.error_text(&CaptureError::rejected(None)),
            copy.subscribe_failed
        );
    }

    #[test]
    fn test_error_text_keeps_server_detail() {
        let copy = Locale::De.capture_copy();
        let err = CaptureError::ServerRejected("Already subscribed".to_string());
        assert_eq!(copy.error_text(&err), "Already subscribed");
    }

    #[test]
    fn test_every_locale_has_copy() {
        for locale in Locale::ALL {
            let capture = locale.capture_copy();
            let landing = locale.landing_copy();
            assert!(!capture.title.is_empty(), "{:?}", locale);
            assert!(!capture.close_label.is_empty(), "{:?}", locale);
            assert!(!landing.hero_title.is_empty(), "{:?}", locale);
            assert!(landing.steps.iter().all(|s| !s.is_empty()), "{:?}", locale);
        }
    }
}
