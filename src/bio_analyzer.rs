//! Rubric checks for a generated (or hand-written) bio.
//!
//! Four gates decide the booleans of the report (clarity, target, call to
//! action, length). Three more checks only add warnings and suggestions
//! (self-reference, vague words, value focus). The analyzer is
//! deterministic: the same bio and input always give the same report.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PitchError, Result};
use crate::lexicon::{
    self, ACTION_VERB_RE, RESULT_KEYWORD_RE, SELF_REFERENCE_RE, VAGUE_WORD_RE, WEAK_CTA_RE,
};
use crate::model::{BioAnalysisReport, BioInput, GeneratedBio};

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    min_length: usize,
    max_length: usize,
    section_too_short: usize,
    section_short: usize,
    target_token_min_chars: usize,
    self_ref_strong_count: usize,
    self_ref_strong_density: f64,
    self_ref_mild_count: usize,
    self_ref_mild_density: f64,
    vague_strong_count: usize,
    vague_mild_count: usize,
    vague_named_max: usize,
    first_warning_penalty: i32,
    next_warning_penalty: i32,
    warning_penalty_cap: i32,
    clean_bonus: i32,
    clean_bonus_min_score: i32,
    score_min: i32,
    score_max: i32,
}

static HP: Hyperparameters = Hyperparameters {
    min_length: 50,
    max_length: 2000,
    section_too_short: 30,
    section_short: 50,
    target_token_min_chars: 3,
    self_ref_strong_count: 8,
    self_ref_strong_density: 0.15,
    self_ref_mild_count: 5,
    self_ref_mild_density: 0.10,
    vague_strong_count: 3,
    vague_mild_count: 1,
    vague_named_max: 3,
    first_warning_penalty: 3,
    next_warning_penalty: 5,
    warning_penalty_cap: 25,
    clean_bonus: 5,
    clean_bonus_min_score: 80,
    score_min: 0,
    score_max: 100,
};

/// Points awarded by each passing gate.
///
/// Two revisions of the rubric exist. `ENHANCED` favours clarity and is the
/// default; `UNIFORM` weighs every gate the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub clarity: i32,
    pub target: i32,
    pub cta: i32,
    pub length: i32,
}

impl ScoreWeights {
    pub const ENHANCED: ScoreWeights = ScoreWeights {
        clarity: 30,
        target: 25,
        cta: 25,
        length: 20,
    };

    pub const UNIFORM: ScoreWeights = ScoreWeights {
        clarity: 25,
        target: 25,
        cta: 25,
        length: 25,
    };

    pub fn total(&self) -> i32 {
        self.clarity + self.target + self.cta + self.length
    }

    pub fn validate(&self) -> Result<()> {
        let parts = [self.clarity, self.target, self.cta, self.length];
        if parts.iter().any(|w| *w < 0) {
            return Err(PitchError::Config(format!(
                "Score weights must not be negative, got {self:?}"
            )));
        }
        if self.total() != HP.score_max {
            return Err(PitchError::Config(format!(
                "Score weights must sum to {}, got {}",
                HP.score_max,
                self.total()
            )));
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::ENHANCED
    }
}

// ---------------------------------------------------------------------------
// Rule plumbing
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RuleOutput {
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl RuleOutput {
    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn suggest(&mut self, msg: impl Into<String>) {
        self.suggestions.push(msg.into());
    }
}

fn merge_output(warnings: &mut Vec<String>, suggestions: &mut Vec<String>, out: RuleOutput) {
    warnings.extend(out.warnings);
    suggestions.extend(out.suggestions);
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

// ---------------------------------------------------------------------------
// Gates
// ---------------------------------------------------------------------------

fn rule_clarity(bio: &GeneratedBio) -> (bool, RuleOutput) {
    let mut out = RuleOutput::default();
    let lengths: Vec<usize> = bio.sections().iter().map(|s| char_len(s.trim())).collect();

    if lengths.iter().any(|&n| n == 0) {
        out.warn("Alcune sezioni della bio sono vuote o incomplete.");
        out.suggest("Completa tutte le sezioni per una bio più efficace.");
        return (false, out);
    }
    if lengths.iter().all(|&n| n < HP.section_too_short) {
        out.warn("Le sezioni sono troppo brevi e poco descrittive.");
        out.suggest("Aggiungi più dettagli per rendere la bio più chiara e coinvolgente.");
        return (false, out);
    }
    if lengths.iter().all(|&n| n < HP.section_short) {
        out.warn("Tutte le sezioni sono piuttosto brevi: la bio rischia di sembrare generica.");
        out.suggest("Sviluppa almeno una sezione con esempi concreti del tuo lavoro.");
        return (false, out);
    }
    (true, out)
}

fn rule_target(bio_lower: &str, target: &str) -> (bool, RuleOutput) {
    let mut out = RuleOutput::default();
    let target = target.trim();
    if target.is_empty() {
        out.warn("Non hai indicato un target: la bio non si rivolge a nessuno in particolare.");
        return (false, out);
    }

    let target_lower = target.to_lowercase();
    let tokens: Vec<&str> = target_lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| char_len(t) > HP.target_token_min_chars)
        .collect();

    let (matched, total) = if tokens.is_empty() {
        (usize::from(bio_lower.contains(&target_lower)), 1)
    } else {
        let hits = tokens.iter().filter(|t| bio_lower.contains(**t)).count();
        (hits, tokens.len())
    };
    debug!(matched, total, "target token coverage");

    if matched * 2 >= total {
        return (true, out);
    }

    out.warn("Il target specificato non è menzionato esplicitamente nella bio.");
    let single_word = !target_lower.contains(char::is_whitespace);
    if matched == 0 && single_word && lexicon::GENERIC_TARGETS.contains(&target_lower.as_str()) {
        out.suggest(format!(
            "\"{target}\" è un target troppo generico: indica un settore, una dimensione o una nicchia."
        ));
    }
    (false, out)
}

fn rule_cta(call_to_action: &str) -> (bool, RuleOutput) {
    let mut out = RuleOutput::default();
    let cta_lower = call_to_action.to_lowercase();
    let indicators = lexicon::CTA_INDICATORS
        .iter()
        .filter(|i| cta_lower.contains(**i))
        .count();

    if indicators == 0 {
        out.warn("La call to action non è chiara o mancante.");
        out.suggest("Chiudi con un invito diretto, ad esempio \"Contattami per...\".");
        return (false, out);
    }
    if indicators == 1 && WEAK_CTA_RE.is_match(call_to_action) {
        out.warn("La call to action è poco decisa: evita parole come \"forse\" o \"magari\".");
    }
    (true, out)
}

fn rule_length(full_text: &str) -> (bool, RuleOutput) {
    let mut out = RuleOutput::default();
    let length = char_len(full_text);

    if length < HP.min_length {
        out.warn(format!(
            "La bio è troppo breve ({length} caratteri). LinkedIn consiglia almeno {} caratteri.",
            HP.min_length
        ));
        out.suggest("Aggiungi più dettagli sulle tue competenze e sul valore che porti.");
        return (false, out);
    }
    if length > HP.max_length {
        out.warn(format!(
            "La bio è troppo lunga ({length} caratteri). LinkedIn consiglia massimo {} caratteri.",
            HP.max_length
        ));
        out.suggest("Sintetizza il contenuto mantenendo solo le informazioni più rilevanti.");
        return (false, out);
    }
    (true, out)
}

// ---------------------------------------------------------------------------
// Warning-only checks
// ---------------------------------------------------------------------------

fn rule_self_reference(full_text: &str) -> RuleOutput {
    let mut out = RuleOutput::default();
    let count = SELF_REFERENCE_RE.find_iter(full_text).count();
    let words = full_text.split_whitespace().count();
    let density = if words > 0 {
        count as f64 / words as f64
    } else {
        0.0
    };
    debug!(count, density, "self references");

    if count > HP.self_ref_strong_count || density > HP.self_ref_strong_density {
        out.warn("La bio è troppo autoreferenziale. Troppi riferimenti a \"io\", \"mio\", ecc.");
        out.suggest(
            "Usa un linguaggio più orientato al valore per il lettore, evitando troppi riferimenti personali.",
        );
    } else if count > HP.self_ref_mild_count || density > HP.self_ref_mild_density {
        out.warn("La bio parla un po' troppo di te: prova a spostare il focus su chi ti legge.");
    }
    out
}

fn rule_vague_words(body: &str) -> RuleOutput {
    let mut out = RuleOutput::default();
    let count = VAGUE_WORD_RE.find_iter(body).count();

    if count > HP.vague_strong_count {
        let named: Vec<String> = lexicon::distinct_matches(&VAGUE_WORD_RE, body)
            .into_iter()
            .take(HP.vague_named_max)
            .map(|w| format!("\"{w}\""))
            .collect();
        out.warn(format!(
            "La bio contiene troppe parole vaghe come {}.",
            named.join(", ")
        ));
        out.suggest(
            "Sostituisci le parole vaghe con descrizioni concrete di cosa fai e quali risultati ottieni.",
        );
    } else if count > HP.vague_mild_count {
        out.warn("La bio contiene alcune parole vaghe: prova a renderle più concrete.");
    }
    out
}

fn rule_value_focus(body: &str) -> RuleOutput {
    let mut out = RuleOutput::default();
    let verbs = lexicon::distinct_matches(&ACTION_VERB_RE, body).len();

    match verbs {
        0 => {
            out.warn("La bio manca di verbi d'azione che evidenzino il valore portato.");
            out.suggest(
                "Usa verbi d'azione come \"aiuto\", \"risolvo\", \"creo\" per rendere più chiaro il tuo valore.",
            );
        }
        1 => {
            out.warn("La bio usa un solo verbo d'azione: aggiungine altri per descrivere meglio cosa fai.");
        }
        _ => {}
    }
    if verbs > 0 && !RESULT_KEYWORD_RE.is_match(body) {
        out.suggest(
            "Indica i risultati che ottieni, ad esempio \"aumentare le vendite\" o \"ridurre i costi\".",
        );
    }
    out
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

fn warning_penalty(warnings: usize) -> i32 {
    if warnings == 0 {
        return 0;
    }
    let rest = i32::try_from(warnings - 1).unwrap_or(i32::MAX / HP.next_warning_penalty);
    HP.first_warning_penalty
        .saturating_add(rest.saturating_mul(HP.next_warning_penalty))
        .min(HP.warning_penalty_cap)
}

fn compute_score(gates: [bool; 4], warnings: usize, weights: &ScoreWeights) -> i32 {
    let [clarity, target, cta, length] = gates;
    let weighted: i32 = [
        (clarity, weights.clarity),
        (target, weights.target),
        (cta, weights.cta),
        (length, weights.length),
    ]
    .iter()
    .filter(|(passed, _)| *passed)
    .map(|(_, w)| *w)
    .sum();

    let mut score = weighted - warning_penalty(warnings);
    if warnings == 0 && weighted >= HP.clean_bonus_min_score {
        score += HP.clean_bonus;
    }
    score.clamp(HP.score_min, HP.score_max)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyze with the default (`ScoreWeights::ENHANCED`) weighting.
pub fn analyze_bio(bio: &GeneratedBio, input: &BioInput, scoring_enabled: bool) -> BioAnalysisReport {
    analyze_bio_with(bio, input, scoring_enabled, &ScoreWeights::default())
}

pub fn analyze_bio_with(
    bio: &GeneratedBio,
    input: &BioInput,
    scoring_enabled: bool,
    weights: &ScoreWeights,
) -> BioAnalysisReport {
    let full_text = bio.full_text();
    let full_lower = full_text.to_lowercase();
    let body = bio.body_text();

    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    // 1. Clarity
    let (clarity, out) = rule_clarity(bio);
    merge_output(&mut warnings, &mut suggestions, out);
    // 2. Target presence
    let (has_target, out) = rule_target(&full_lower, &input.target);
    merge_output(&mut warnings, &mut suggestions, out);
    // 3. Call to action
    let (has_cta, out) = rule_cta(&bio.call_to_action);
    merge_output(&mut warnings, &mut suggestions, out);
    // 4. Length
    let (adequate_length, out) = rule_length(&full_text);
    merge_output(&mut warnings, &mut suggestions, out);
    // 5. Self-reference
    merge_output(&mut warnings, &mut suggestions, rule_self_reference(&full_text));
    // 6. Vague words
    merge_output(&mut warnings, &mut suggestions, rule_vague_words(&body));
    // 7. Value focus
    merge_output(&mut warnings, &mut suggestions, rule_value_focus(&body));

    let score = scoring_enabled.then(|| {
        compute_score(
            [clarity, has_target, has_cta, adequate_length],
            warnings.len(),
            weights,
        )
    });
    debug!(
        clarity,
        has_target,
        has_cta,
        adequate_length,
        warnings = warnings.len(),
        ?score,
        "analyzed bio"
    );

    BioAnalysisReport {
        clarity,
        has_target,
        has_cta,
        adequate_length,
        warnings,
        suggestions,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bio(who: &str, value: &str, cta: &str) -> GeneratedBio {
        GeneratedBio {
            who_you_are: who.into(),
            value_proposition: value.into(),
            call_to_action: cta.into(),
        }
    }

    fn good_bio() -> GeneratedBio {
        bio(
            "Lavoro come Frontend Developer al fianco di startup tech.",
            "Sviluppo interfacce web moderne con React e creo design system, aiutando i team a raggiungere risultati concreti.",
            "Contattami per scoprire come posso aiutare startup tech a raggiungere i suoi obiettivi.",
        )
    }

    fn input(target: &str) -> BioInput {
        BioInput::new("Frontend Developer", target, "Sviluppo interfacce", "clienti")
    }

    #[test]
    fn good_bio_passes_every_gate() {
        let report = analyze_bio(&good_bio(), &input("startup tech"), true);
        assert!(report.clarity);
        assert!(report.has_target);
        assert!(report.has_cta);
        assert!(report.adequate_length);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert_eq!(report.score, Some(100));
    }

    #[test]
    fn score_absent_when_disabled() {
        let report = analyze_bio(&good_bio(), &input("startup tech"), false);
        assert_eq!(report.score, None);
    }

    #[test]
    fn empty_section_fails_clarity() {
        let b = bio("Lavoro come sviluppatore per PMI digitali.", "", "Contattami.");
        let (passed, out) = rule_clarity(&b);
        assert!(!passed);
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.suggestions.len(), 1);
    }

    #[test]
    fn short_sections_fail_clarity_with_distinct_wording() {
        let tiny = bio("Dev.", "Creo app.", "Contattami.");
        let (passed_tiny, tiny_out) = rule_clarity(&tiny);
        let short = bio(
            "Lavoro come sviluppatore web.",
            "Sviluppo app per negozi di quartiere.",
            "Contattami per un preventivo.",
        );
        let (passed_short, short_out) = rule_clarity(&short);
        assert!(!passed_tiny);
        assert!(!passed_short);
        assert_ne!(tiny_out.warnings, short_out.warnings);
    }

    #[test]
    fn target_half_of_tokens_passes_at_boundary() {
        // "PMI" is too short to count; "digitali" matches, "italiane" does not.
        let text = "aiuto le aziende digitali a crescere".to_string();
        let (passed, out) = rule_target(&text, "PMI digitali italiane");
        assert!(passed);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn target_below_half_fails() {
        let text = "aiuto le aziende a crescere".to_string();
        let (passed, out) = rule_target(&text, "negozi digitali italiani");
        assert!(!passed);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn target_with_only_short_tokens_matches_whole_phrase() {
        let (passed, _) = rule_target("lavoro con le pmi del nord", "PMI");
        assert!(passed);
        let (missing, _) = rule_target("lavoro con le imprese", "PMI");
        assert!(!missing);
    }

    #[test]
    fn generic_single_word_target_gets_suggestion() {
        let (passed, out) = rule_target("sviluppo software su misura", "Aziende");
        assert!(!passed);
        assert_eq!(out.suggestions.len(), 1);
        assert!(out.suggestions[0].contains("generico"));
    }

    #[test]
    fn empty_target_fails() {
        let (passed, out) = rule_target("qualunque testo", "  ");
        assert!(!passed);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn missing_cta_is_hard_fail() {
        let (passed, out) = rule_cta("Grazie per l'attenzione.");
        assert!(!passed);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn weak_cta_warns_but_passes() {
        let (passed, out) = rule_cta("Magari contattami se ti va.");
        assert!(passed);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn weak_word_with_two_indicators_is_silent() {
        let (passed, out) = rule_cta("Magari scrivimi o contattami.");
        assert!(passed);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn length_bounds_report_actual_count() {
        let (short_ok, short) = rule_length("Troppo corta.");
        assert!(!short_ok);
        assert!(short.warnings[0].contains("13 caratteri"));

        let long = "a".repeat(2001);
        let (long_ok, long_out) = rule_length(&long);
        assert!(!long_ok);
        assert!(long_out.warnings[0].contains("2001 caratteri"));

        let (ok, _) = rule_length(&"a".repeat(2000));
        assert!(ok);
    }

    #[test]
    fn self_reference_fires_at_nine_tokens() {
        let mut text = "io mi sono ho mio mia miei mie me".to_string();
        text.push_str(&" parola".repeat(60));
        let out = rule_self_reference(&text);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("troppo autoreferenziale"));
    }

    #[test]
    fn self_reference_mild_tier() {
        let mut text = "io mi sono ho mio mia".to_string();
        text.push_str(&" parola".repeat(60));
        let out = rule_self_reference(&text);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("un po' troppo"));
    }

    #[test]
    fn no_self_reference_is_silent() {
        let out = rule_self_reference("Sviluppo software per aziende del territorio.");
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn vague_words_tiers() {
        let strong = rule_vague_words("Esperto, qualificato, competente ed eccellente professionista");
        assert_eq!(strong.warnings.len(), 1);
        assert!(strong.warnings[0].contains("\"esperto\", \"qualificato\", \"competente\""));
        assert!(!strong.warnings[0].contains("eccellente"));

        let mild = rule_vague_words("Esperto e qualificato");
        assert_eq!(mild.warnings.len(), 1);
        assert!(mild.suggestions.is_empty());

        let none = rule_vague_words("Esperto di React");
        assert!(none.warnings.is_empty());
    }

    #[test]
    fn value_focus_levels() {
        let none = rule_value_focus("Frontend developer a Milano");
        assert_eq!(none.warnings.len(), 1);
        assert_eq!(none.suggestions.len(), 1);

        let one = rule_value_focus("Sviluppo siti per aumentare le vendite");
        assert_eq!(one.warnings.len(), 1);
        assert!(one.suggestions.is_empty());

        let no_results = rule_value_focus("Sviluppo siti e creo app");
        assert!(no_results.warnings.is_empty());
        assert_eq!(no_results.suggestions.len(), 1);
    }

    #[test]
    fn penalty_is_tiered_and_capped() {
        assert_eq!(warning_penalty(0), 0);
        assert_eq!(warning_penalty(1), 3);
        assert_eq!(warning_penalty(2), 8);
        assert_eq!(warning_penalty(3), 13);
        assert_eq!(warning_penalty(50), 25);
        assert_eq!(warning_penalty(usize::MAX), 25);
    }

    #[test]
    fn score_uses_weights() {
        let gates = [true, false, true, true];
        assert_eq!(compute_score(gates, 1, &ScoreWeights::ENHANCED), 75 - 3);
        assert_eq!(compute_score(gates, 1, &ScoreWeights::UNIFORM), 75 - 3);
        assert_eq!(compute_score([false, true, true, true], 0, &ScoreWeights::ENHANCED), 70);
        assert_eq!(compute_score([false, true, true, true], 0, &ScoreWeights::UNIFORM), 75);
        assert_eq!(compute_score([true, true, true, false], 0, &ScoreWeights::ENHANCED), 85);
    }

    #[test]
    fn score_clamped_for_empty_bio() {
        let report = analyze_bio(&GeneratedBio::default(), &BioInput::default(), true);
        assert_eq!(report.score, Some(0));
        assert!(!report.clarity && !report.has_target && !report.has_cta && !report.adequate_length);
    }

    #[test]
    fn weights_validation() {
        assert!(ScoreWeights::ENHANCED.validate().is_ok());
        assert!(ScoreWeights::UNIFORM.validate().is_ok());
        let bad = ScoreWeights {
            clarity: 50,
            target: 50,
            cta: 50,
            length: 0,
        };
        assert!(bad.validate().is_err());
        let negative = ScoreWeights {
            clarity: 120,
            target: -20,
            cta: 0,
            length: 0,
        };
        assert!(negative.validate().is_err());
    }
}
