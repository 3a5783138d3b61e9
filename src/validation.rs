//! Live feedback for single form fields.
//!
//! Validators never fail: they return a [`ValidationResult`] whose `errors`
//! block the field and whose `suggestions` are advisory. The score starts
//! at 100 and each failed check subtracts a fixed penalty.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::lexicon::{self, contains_any, ACTION_VERB_RE, SUSPICIOUS_WORD_RE};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
    pub score: i32,
}

impl ValidationResult {
    fn missing(error: &str) -> Self {
        Self {
            is_valid: false,
            errors: vec![error.to_string()],
            suggestions: Vec::new(),
            score: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    min_words: usize,
    role_min_chars: usize,
    role_max_chars: usize,
    role_max_words: usize,
    role_ideal_words: (usize, usize),
    target_min_chars: usize,
    target_max_chars: usize,
    target_max_words: usize,
    activity_min_chars: usize,
    activity_max_chars: usize,
    activity_min_words: usize,
    activity_max_words: usize,
    activity_ideal_chars: (usize, usize),
    /// Minimum share of recognisable words, in tenths.
    activity_valid_word_tenths: usize,
    repeated_char_run: usize,
    repeated_word_min_chars: usize,
    repeated_word_max_count: usize,
    repeated_word_text_limit: usize,
    startup_min_chars: usize,
    startup_max_chars: usize,
}

static HP: Hyperparameters = Hyperparameters {
    min_words: 2,
    role_min_chars: 3,
    role_max_chars: 100,
    role_max_words: 8,
    role_ideal_words: (2, 4),
    target_min_chars: 5,
    target_max_chars: 150,
    target_max_words: 10,
    activity_min_chars: 50,
    activity_max_chars: 500,
    activity_min_words: 8,
    activity_max_words: 50,
    activity_ideal_chars: (100, 300),
    activity_valid_word_tenths: 7,
    repeated_char_run: 4,
    repeated_word_min_chars: 2,
    repeated_word_max_count: 3,
    repeated_word_text_limit: 200,
    startup_min_chars: 50,
    startup_max_chars: 1000,
};

const ITALIAN_ACCENTS: &str = "àèéìíîòóùúÀÈÉÌÍÎÒÓÙÚ";
const ALLOWED_PUNCTUATION: &str = ".,;:!?'\"()-";
const PROFESSIONAL_PRAISE: &str = "Ottimo! Hai usato termini professionali appropriati";

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

struct Checks {
    errors: Vec<String>,
    suggestions: Vec<String>,
    score: i32,
}

impl Checks {
    fn new() -> Self {
        Self {
            errors: Vec::new(),
            suggestions: Vec::new(),
            score: 100,
        }
    }

    fn fail(&mut self, error: impl Into<String>, penalty: i32) {
        self.errors.push(error.into());
        self.score -= penalty;
    }

    fn fail_with(&mut self, error: impl Into<String>, suggestion: impl Into<String>, penalty: i32) {
        self.fail(error, penalty);
        self.suggest(suggestion);
    }

    fn suggest(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            suggestions: self.suggestions,
            score: self.score.clamp(0, 100),
        }
    }
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || ITALIAN_ACCENTS.contains(c)
        || ALLOWED_PUNCTUATION.contains(c)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ITALIAN_ACCENTS.contains(c)
}

/// Distinct disallowed characters in order of first appearance.
fn invalid_characters(text: &str) -> Vec<char> {
    let mut found = Vec::new();
    for c in text.chars().filter(|c| !is_allowed_char(*c)) {
        if !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

fn suspicious_words(text: &str) -> Vec<String> {
    lexicon::distinct_matches(&SUSPICIOUS_WORD_RE, text)
}

fn only_numbers_or_symbols(text: &str) -> bool {
    !text.chars().any(char::is_alphabetic)
}

/// A plain word of at least two letters, ignoring trailing punctuation.
fn is_valid_word(word: &str) -> bool {
    let clean = word.trim_end_matches(['.', ',', ';', ':', '!', '?']);
    clean.chars().count() >= 2 && clean.chars().all(is_word_char)
}

fn has_char_run(text: &str, run: usize) -> bool {
    let mut prev = None;
    let mut len = 0;
    for c in text.chars() {
        if Some(c) == prev {
            len += 1;
        } else {
            prev = Some(c);
            len = 1;
        }
        if len >= run {
            return true;
        }
    }
    false
}

fn has_excessive_repetition(text: &str) -> bool {
    if has_char_run(text, HP.repeated_char_run) {
        return true;
    }
    if text.chars().count() >= HP.repeated_word_text_limit {
        return false;
    }
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    words.iter().any(|w| {
        w.chars().count() > HP.repeated_word_min_chars
            && words.iter().filter(|o| *o == w).count() > HP.repeated_word_max_count
    })
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Bio fields
// ---------------------------------------------------------------------------

pub fn validate_role(role: &str) -> ValidationResult {
    let trimmed = role.trim();
    if trimmed.is_empty() {
        return ValidationResult::missing("Il ruolo è obbligatorio");
    }
    let chars = trimmed.chars().count();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let mut c = Checks::new();

    if chars < HP.role_min_chars {
        c.fail(
            format!("Il ruolo è troppo breve (minimo {} caratteri)", HP.role_min_chars),
            30,
        );
    }
    if chars > HP.role_max_chars {
        c.fail(
            format!("Il ruolo è troppo lungo (massimo {} caratteri)", HP.role_max_chars),
            20,
        );
    }
    if words.len() < HP.min_words {
        c.fail_with(
            format!("Il ruolo deve contenere almeno {} parole", HP.min_words),
            "Esempio: \"Frontend Developer\" o \"Digital Marketing Consultant\"",
            25,
        );
    }
    if words.len() > HP.role_max_words {
        c.fail_with(
            format!("Il ruolo è troppo lungo (massimo {} parole)", HP.role_max_words),
            "Sintetizza il ruolo in poche parole chiave",
            15,
        );
    }

    let invalid = invalid_characters(trimmed);
    if !invalid.is_empty() {
        c.fail(format!("Caratteri non validi trovati: {}", join_chars(&invalid)), 20);
    }
    let suspicious = suspicious_words(trimmed);
    if !suspicious.is_empty() {
        c.fail_with(
            format!("Parole sospette rilevate: {}", suspicious.join(", ")),
            "Usa termini professionali reali e specifici",
            40,
        );
    }
    if only_numbers_or_symbols(trimmed) {
        c.fail_with(
            "Il ruolo non può contenere solo numeri o simboli",
            "Inserisci un ruolo professionale reale con parole",
            50,
        );
    }
    if has_excessive_repetition(trimmed) {
        c.fail_with(
            "Troppe ripetizioni di caratteri o parole",
            "Verifica di aver scritto correttamente il ruolo",
            30,
        );
    }
    if !words.iter().any(|w| is_valid_word(w)) {
        c.fail_with(
            "Nessuna parola valida trovata",
            "Usa parole italiane o inglesi comuni nel contesto professionale",
            50,
        );
    }

    if contains_any(trimmed, lexicon::PROFESSIONAL_TERMS) {
        c.suggest(PROFESSIONAL_PRAISE);
    }
    let (lo, hi) = HP.role_ideal_words;
    if (lo..=hi).contains(&words.len()) {
        c.suggest("Lunghezza del ruolo ottimale");
    }

    let result = c.finish();
    trace!(score = result.score, valid = result.is_valid, "validated role");
    result
}

pub fn validate_target(target: &str) -> ValidationResult {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return ValidationResult::missing("Il target è obbligatorio");
    }
    let chars = trimmed.chars().count();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let mut c = Checks::new();

    if chars < HP.target_min_chars {
        c.fail(
            format!("Il target è troppo breve (minimo {} caratteri)", HP.target_min_chars),
            30,
        );
    }
    if chars > HP.target_max_chars {
        c.fail(
            format!("Il target è troppo lungo (massimo {} caratteri)", HP.target_max_chars),
            20,
        );
    }
    if words.len() < HP.min_words {
        c.fail_with(
            format!("Il target deve contenere almeno {} parole", HP.min_words),
            "Esempio: \"startup tech\" o \"PMI digitali\"",
            25,
        );
    }
    if words.len() > HP.target_max_words {
        c.fail_with(
            format!("Il target è troppo lungo (massimo {} parole)", HP.target_max_words),
            "Sintetizza il target in poche parole chiave",
            15,
        );
    }

    let invalid = invalid_characters(trimmed);
    if !invalid.is_empty() {
        c.fail(format!("Caratteri non validi trovati: {}", join_chars(&invalid)), 20);
    }
    let suspicious = suspicious_words(trimmed);
    if !suspicious.is_empty() {
        c.fail_with(
            format!("Parole sospette rilevate: {}", suspicious.join(", ")),
            "Usa termini professionali reali per descrivere il tuo target",
            40,
        );
    }
    if only_numbers_or_symbols(trimmed) {
        c.fail_with(
            "Il target non può contenere solo numeri o simboli",
            "Descrivi il tuo target con parole reali",
            50,
        );
    }
    if !words.iter().any(|w| is_valid_word(w)) {
        c.fail_with(
            "Nessuna parola valida trovata",
            "Usa parole italiane o inglesi comuni per descrivere il target",
            50,
        );
    }

    if contains_any(trimmed, lexicon::PROFESSIONAL_TERMS) {
        c.suggest(PROFESSIONAL_PRAISE);
    }

    let result = c.finish();
    trace!(score = result.score, valid = result.is_valid, "validated target");
    result
}

pub fn validate_activity(activity: &str) -> ValidationResult {
    let trimmed = activity.trim();
    if trimmed.is_empty() {
        return ValidationResult::missing("Le attività sono obbligatorie");
    }
    let chars = trimmed.chars().count();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let mut c = Checks::new();

    if chars < HP.activity_min_chars {
        c.fail_with(
            format!(
                "Le attività sono troppo brevi (minimo {} caratteri)",
                HP.activity_min_chars
            ),
            "Descrivi in dettaglio cosa fai e il valore che porti",
            30,
        );
    }
    if chars > HP.activity_max_chars {
        c.fail_with(
            format!(
                "Le attività sono troppo lunghe (massimo {} caratteri)",
                HP.activity_max_chars
            ),
            "Sintetizza mantenendo solo le informazioni più importanti",
            20,
        );
    }
    if words.len() < HP.activity_min_words {
        c.fail_with(
            format!(
                "Le attività devono contenere almeno {} parole",
                HP.activity_min_words
            ),
            "Aggiungi più dettagli su cosa fai concretamente",
            25,
        );
    }
    if words.len() > HP.activity_max_words {
        c.fail(
            format!(
                "Le attività sono troppo lunghe (massimo {} parole)",
                HP.activity_max_words
            ),
            15,
        );
    }

    let invalid = invalid_characters(trimmed);
    if !invalid.is_empty() {
        c.fail(format!("Caratteri non validi trovati: {}", join_chars(&invalid)), 20);
    }
    let suspicious = suspicious_words(trimmed);
    if !suspicious.is_empty() {
        c.fail_with(
            format!("Parole sospette rilevate: {}", suspicious.join(", ")),
            "Usa termini professionali reali e descrizioni concrete",
            40,
        );
    }
    if only_numbers_or_symbols(trimmed) {
        c.fail_with(
            "Le attività non possono contenere solo numeri o simboli",
            "Descrivi le tue attività con parole reali",
            50,
        );
    }

    let has_action_verb = ACTION_VERB_RE.is_match(trimmed);
    if !has_action_verb && words.len() >= HP.activity_min_words {
        c.fail_with(
            "Manca un verbo d'azione che descriva cosa fai",
            "Inizia con verbi come \"Sviluppo\", \"Creo\", \"Aiuto\", \"Progetto\"",
            20,
        );
    }

    let valid_words = words.iter().filter(|w| is_valid_word(w)).count();
    if valid_words * 10 < words.len() * HP.activity_valid_word_tenths {
        c.fail_with(
            "Troppe parole non valide o sospette",
            "Verifica di aver scritto correttamente le tue attività",
            30,
        );
    }
    if has_excessive_repetition(trimmed) {
        c.fail_with(
            "Troppe ripetizioni di caratteri o parole",
            "Variare il linguaggio rende la descrizione più professionale",
            20,
        );
    }

    if contains_any(trimmed, lexicon::PROFESSIONAL_TERMS) {
        c.suggest(PROFESSIONAL_PRAISE);
    }
    if has_action_verb {
        c.suggest("Ottimo! Hai incluso verbi d'azione che rendono la descrizione più efficace");
    }
    let (lo, hi) = HP.activity_ideal_chars;
    if (lo..=hi).contains(&chars) {
        c.suggest("Lunghezza ottimale per una descrizione professionale");
    }

    let result = c.finish();
    trace!(score = result.score, valid = result.is_valid, "validated activity");
    result
}

// ---------------------------------------------------------------------------
// Startup fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StartupField {
    Problem,
    Solution,
    TargetMarket,
    Competition,
    BusinessModel,
}

impl StartupField {
    pub const ALL: [StartupField; 5] = [
        StartupField::Problem,
        StartupField::Solution,
        StartupField::TargetMarket,
        StartupField::Competition,
        StartupField::BusinessModel,
    ];

    /// Italian name of the field, used as the subject of messages.
    pub fn label(self) -> &'static str {
        match self {
            StartupField::Problem => "Il problema",
            StartupField::Solution => "La soluzione",
            StartupField::TargetMarket => "Il target di mercato",
            StartupField::Competition => "L'analisi della competizione",
            StartupField::BusinessModel => "Il modello di business",
        }
    }

    fn indicators(self) -> &'static [&'static str] {
        match self {
            StartupField::Problem => lexicon::PROBLEM_INDICATORS,
            StartupField::Solution => lexicon::SOLUTION_INDICATORS,
            StartupField::TargetMarket => lexicon::TARGET_INDICATORS,
            StartupField::Competition => lexicon::COMPETITION_INDICATORS,
            StartupField::BusinessModel => lexicon::BUSINESS_MODEL_INDICATORS,
        }
    }

    fn hint(self) -> &'static str {
        match self {
            StartupField::Problem => "chi soffre il problema, quanto costa e perché oggi non è risolto",
            StartupField::Solution => "cosa offre il prodotto e come risolve il problema",
            StartupField::TargetMarket => "il segmento di clienti, il settore e la dimensione del mercato",
            StartupField::Competition => "i competitor principali e il tuo vantaggio rispetto a loro",
            StartupField::BusinessModel => "come generi ricavi (abbonamento, commissione, licenza)",
        }
    }
}

pub fn validate_startup_field(field: StartupField, text: &str) -> ValidationResult {
    let label = field.label();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ValidationResult::missing(&format!("{label} è un campo obbligatorio"));
    }
    let chars = trimmed.chars().count();
    let mut c = Checks::new();

    if chars < HP.startup_min_chars {
        c.fail_with(
            format!(
                "{label} è troppo breve (minimo {} caratteri, ora {chars})",
                HP.startup_min_chars
            ),
            format!("Descrivi meglio: {}", field.hint()),
            30,
        );
    }
    if chars > HP.startup_max_chars {
        c.fail_with(
            format!(
                "{label} è troppo lungo (massimo {} caratteri, ora {chars})",
                HP.startup_max_chars
            ),
            "Sintetizza mantenendo solo le informazioni più importanti",
            20,
        );
    }
    if !contains_any(trimmed, field.indicators()) {
        c.score -= 10;
        c.suggest(format!("Prova a essere più specifico: indica {}", field.hint()));
    }

    let result = c.finish();
    trace!(?field, score = result.score, valid = result.is_valid, "validated startup field");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_required() {
        for result in [validate_role("  "), validate_target(""), validate_activity("\n")] {
            assert!(!result.is_valid);
            assert_eq!(result.errors.len(), 1);
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn good_role_is_valid_and_praised() {
        let result = validate_role("Frontend Developer");
        assert!(result.is_valid, "{:?}", result.errors);
        assert_eq!(result.score, 100);
        assert!(result.suggestions.contains(&PROFESSIONAL_PRAISE.to_string()));
        assert!(result
            .suggestions
            .contains(&"Lunghezza del ruolo ottimale".to_string()));
    }

    #[test]
    fn single_word_role_needs_two_words() {
        let result = validate_role("Fornaio");
        assert!(!result.is_valid);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn suspicious_role_is_blocked() {
        let result = validate_role("asdf qwerty");
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("asdf, qwerty"));
    }

    #[test]
    fn suspicious_words_match_whole_tokens() {
        assert!(suspicious_words("Software tester").is_empty());
        assert_eq!(suspicious_words("Test engineer"), vec!["test".to_string()]);
    }

    #[test]
    fn symbols_only_role() {
        let result = validate_role("123 456");
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("solo numeri o simboli")));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn invalid_characters_are_listed_once() {
        assert_eq!(invalid_characters("C# dev ## @home"), vec!['#', '@']);
        assert!(invalid_characters("Perché sì? (È così) - ok.").is_empty());
    }

    #[test]
    fn repetition_detection() {
        assert!(has_char_run("aaaa", 4));
        assert!(!has_char_run("aaa bbb", 4));
        assert!(has_excessive_repetition("web web web web designer"));
        assert!(!has_excessive_repetition("web web web designer"));
        assert!(!has_excessive_repetition("un un un un designer"));
    }

    #[test]
    fn valid_word_ignores_trailing_punctuation() {
        assert!(is_valid_word("sviluppo,"));
        assert!(is_valid_word("città."));
        assert!(!is_valid_word("a"));
        assert!(!is_valid_word("web3"));
    }

    #[test]
    fn target_examples() {
        assert!(validate_target("startup tech").is_valid);
        assert!(validate_target("PMI digitali").is_valid);
        let short = validate_target("PMI");
        assert!(!short.is_valid);
        assert_eq!(short.errors.len(), 2);
    }

    #[test]
    fn activity_with_verb_is_valid() {
        let result = validate_activity(
            "Sviluppo interfacce web moderne usando React, aiutando i team a lanciare prodotti più velocemente",
        );
        assert!(result.is_valid, "{:?}", result.errors);
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("verbi d'azione")));
    }

    #[test]
    fn activity_without_verb_is_flagged() {
        let result = validate_activity(
            "Interfacce web moderne con React per i team di prodotto delle aziende italiane",
        );
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("verbo d'azione")));
    }

    #[test]
    fn short_activity_is_flagged() {
        let result = validate_activity("Creo siti");
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("minimo 50 caratteri")));
        assert!(result.errors.iter().any(|e| e.contains("almeno 8 parole")));
    }

    #[test]
    fn professional_terms_never_block() {
        let result = validate_activity("piattaforma");
        assert!(!result.is_valid);
        assert!(result.suggestions.contains(&PROFESSIONAL_PRAISE.to_string()));
    }

    #[test]
    fn startup_field_bounds() {
        let empty = validate_startup_field(StartupField::Problem, "   ");
        assert!(!empty.is_valid);
        assert_eq!(empty.score, 0);

        let short = validate_startup_field(StartupField::Solution, "Un'app.");
        assert!(!short.is_valid);
        assert!(short.errors[0].starts_with("La soluzione è troppo breve"));

        let long = "problema ".repeat(150);
        let result = validate_startup_field(StartupField::Problem, &long);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("massimo 1000"));
    }

    #[test]
    fn every_startup_field_is_required() {
        for field in StartupField::ALL {
            let result = validate_startup_field(field, "");
            assert!(!result.is_valid);
            assert_eq!(result.score, 0);
            assert!(result.errors[0].starts_with(field.label()), "{:?}", result.errors);
        }
    }

    #[test]
    fn startup_keyword_gate_only_suggests() {
        let text = "Molte officine perdono ore ogni settimana per ordinare pezzi al telefono.";
        let result = validate_startup_field(StartupField::BusinessModel, text);
        assert!(result.is_valid);
        assert_eq!(result.score, 90);
        assert_eq!(result.suggestions.len(), 1);

        let ok = validate_startup_field(StartupField::Problem, &format!("Il problema: {text}"));
        assert!(ok.is_valid);
        assert_eq!(ok.score, 100);
    }
}
