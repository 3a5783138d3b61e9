//! Five-dimension review of a startup idea.
//!
//! Each dimension analyzer looks at one field (the solution also peeks at
//! the problem) and returns its metrics plus issues. The aggregation step
//! derives strengths, weaknesses, improvements and typed risks from those
//! metrics, then folds everything into an optional overall score.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::lexicon::{self, contains_any};
use crate::model::{
    BusinessModelAnalysis, CompetitionAnalysis, MarketAnalysis, ProblemAnalysis, Risk, Severity,
    SolutionAnalysis, StartupAnalysisReport, StartupInput,
};

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    min_length: usize,
    strength_threshold: i32,
    weakness_threshold: i32,
    improvement_threshold: i32,
    high_risk_threshold: i32,
    medium_risk_threshold: i32,
    high_risk_penalty: f64,
    many_strengths: usize,
    many_strengths_bonus: f64,
    shared_word_min_chars: usize,
    shared_words_required: usize,
    competition_red_flag_penalty: i32,
    broad_market_penalty: i32,
    score_min: i32,
    score_max: i32,
}

static HP: Hyperparameters = Hyperparameters {
    min_length: 50,
    strength_threshold: 70,
    weakness_threshold: 50,
    improvement_threshold: 60,
    high_risk_threshold: 40,
    medium_risk_threshold: 50,
    high_risk_penalty: 10.0,
    many_strengths: 5,
    many_strengths_bonus: 5.0,
    shared_word_min_chars: 4,
    shared_words_required: 2,
    competition_red_flag_penalty: 30,
    broad_market_penalty: 20,
    score_min: 0,
    score_max: 100,
};

/// Share of the overall score carried by each dimension.
struct DimensionWeights {
    problem: f64,
    solution: f64,
    market: f64,
    competition: f64,
    business_model: f64,
}

static LOWERCASE_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]+\b").unwrap());

const DIMENSION_WEIGHTS: DimensionWeights = DimensionWeights {
    problem: 0.20,
    solution: 0.25,
    market: 0.20,
    competition: 0.15,
    business_model: 0.20,
};

fn long_enough(text: &str) -> bool {
    text.trim().chars().count() >= HP.min_length
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Pick `hit` when the keyword test passes, otherwise `miss` and an issue.
fn keyword_metric(
    text: &str,
    keywords: &[&str],
    hit: i32,
    miss: i32,
    issue: &str,
    issues: &mut Vec<String>,
) -> i32 {
    if contains_any(text, keywords) {
        hit
    } else {
        issues.push(issue.to_string());
        miss
    }
}

// ---------------------------------------------------------------------------
// Presence flags
// ---------------------------------------------------------------------------

fn has_content(text: &str, indicators: &[&str]) -> bool {
    long_enough(text) && contains_any(text, indicators)
}

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

fn analyze_problem(problem: &str) -> ProblemAnalysis {
    let mut analysis = ProblemAnalysis::default();
    if !long_enough(problem) {
        analysis
            .issues
            .push("Problema non descritto o troppo vago".to_string());
        return analysis;
    }

    let words = word_count(problem);
    analysis.clarity = if (20..=100).contains(&words) {
        80
    } else if words >= 10 {
        60
    } else {
        analysis
            .issues
            .push("Il problema è descritto in modo troppo sintetico".to_string());
        40
    };

    analysis.urgency = keyword_metric(
        problem,
        lexicon::URGENCY_WORDS,
        70,
        40,
        "Non è chiaro quanto sia urgente risolvere questo problema",
        &mut analysis.issues,
    );
    analysis.size = keyword_metric(
        problem,
        lexicon::PROBLEM_SCALE_WORDS,
        70,
        50,
        "Non è chiaro quanto sia grande il problema o quante persone colpisce",
        &mut analysis.issues,
    );

    if contains_any(problem, lexicon::RED_FLAGS) {
        analysis.issues.push(
            "Attenzione: il problema potrebbe essere troppo generico o poco realistico".to_string(),
        );
    }
    analysis
}

fn analyze_solution(solution: &str, problem: &str) -> SolutionAnalysis {
    let mut analysis = SolutionAnalysis::default();
    if !long_enough(solution) {
        analysis
            .issues
            .push("Soluzione non descritta o troppo vaga".to_string());
        return analysis;
    }

    let words = word_count(solution);
    let has_tech = contains_any(solution, lexicon::SOLUTION_TECH_WORDS);
    analysis.feasibility = if has_tech && words >= 30 {
        70
    } else if words >= 20 {
        60
    } else {
        analysis
            .issues
            .push("La soluzione è descritta in modo troppo generico".to_string());
        40
    };

    analysis.differentiation = keyword_metric(
        solution,
        lexicon::SOLUTION_DIFF_WORDS,
        60,
        40,
        "Non è chiaro in cosa la soluzione si differenzia dalle alternative esistenti",
        &mut analysis.issues,
    );
    analysis.scalability = keyword_metric(
        solution,
        lexicon::SOLUTION_SCALE_WORDS,
        70,
        50,
        "Non è chiaro come la soluzione possa scalare",
        &mut analysis.issues,
    );

    if !problem.trim().is_empty() && shared_words(problem, solution) < HP.shared_words_required {
        analysis.issues.push(
            "La soluzione potrebbe non essere direttamente collegata al problema descritto"
                .to_string(),
        );
    }
    analysis
}

/// Distinct lower-cased words longer than the content-word minimum that
/// appear in both texts.
fn shared_words(a: &str, b: &str) -> usize {
    let content = |text: &str| -> HashSet<String> {
        text.split_whitespace()
            .map(str::to_lowercase)
            .filter(|w| w.chars().count() > HP.shared_word_min_chars)
            .collect()
    };
    content(a).intersection(&content(b)).count()
}

fn analyze_market(target_market: &str) -> MarketAnalysis {
    let mut analysis = MarketAnalysis::default();
    if !long_enough(target_market) {
        analysis
            .issues
            .push("Target di mercato non definito o troppo vago".to_string());
        return analysis;
    }

    analysis.size = keyword_metric(
        target_market,
        lexicon::MARKET_SIZE_WORDS,
        70,
        50,
        "Non è chiaro quanto sia grande il mercato target",
        &mut analysis.issues,
    );
    analysis.accessibility = keyword_metric(
        target_market,
        lexicon::MARKET_ACCESS_WORDS,
        70,
        50,
        "Non è chiaro come raggiungere il target di mercato",
        &mut analysis.issues,
    );
    analysis.growth = keyword_metric(
        target_market,
        lexicon::MARKET_GROWTH_WORDS,
        70,
        50,
        "Non è chiaro se il mercato è in crescita o stabile",
        &mut analysis.issues,
    );

    if contains_any(target_market, lexicon::OVERLY_BROAD_MARKET) {
        analysis
            .issues
            .push("Il target è troppo generico. Sii più specifico".to_string());
        analysis.size = (analysis.size - HP.broad_market_penalty).max(HP.score_min);
    }
    analysis
}

fn analyze_competition(competition: &str) -> CompetitionAnalysis {
    let mut analysis = CompetitionAnalysis::default();
    if !long_enough(competition) {
        analysis
            .issues
            .push("Analisi della competizione mancante o insufficiente".to_string());
        return analysis;
    }

    let words = lowercase_words(competition);
    debug!(words, "competition words");
    analysis.awareness = match words {
        n if n >= 3 => 80,
        n if n >= 1 => 60,
        _ => {
            analysis
                .issues
                .push("Non sono menzionati competitor specifici".to_string());
            30
        }
    };

    analysis.differentiation = keyword_metric(
        competition,
        lexicon::COMPETITION_DIFF_WORDS,
        70,
        40,
        "Non è chiaro come ti differenzi dalla competizione",
        &mut analysis.issues,
    );
    analysis.competitive_advantage = keyword_metric(
        competition,
        lexicon::COMPETITION_ADVANTAGE_WORDS,
        70,
        40,
        "Non è chiaro quale sia il tuo vantaggio competitivo",
        &mut analysis.issues,
    );

    let lower = competition.to_lowercase();
    let denies_competition = contains_any(competition, lexicon::COMPETITION_RED_FLAGS)
        || (lower.contains("nessun") && lower.contains("competitor"));
    if denies_competition {
        analysis.issues.push(
            "Attenzione: è raro che non ci sia competizione. Potresti non averla identificata correttamente"
                .to_string(),
        );
        analysis.awareness =
            (analysis.awareness - HP.competition_red_flag_penalty).max(HP.score_min);
    }
    analysis
}

/// Plain lowercase ASCII words in the lower-cased text.
fn lowercase_words(text: &str) -> usize {
    LOWERCASE_WORD_RE.find_iter(&text.to_lowercase()).count()
}

fn analyze_business_model(business_model: &str) -> BusinessModelAnalysis {
    let mut analysis = BusinessModelAnalysis::default();
    if !long_enough(business_model) {
        analysis
            .issues
            .push("Modello di business non descritto o troppo vago".to_string());
        return analysis;
    }

    let words = word_count(business_model);
    analysis.clarity = if words >= 30 {
        70
    } else if words >= 15 {
        50
    } else {
        analysis
            .issues
            .push("Il modello di business è descritto in modo troppo sintetico".to_string());
        30
    };

    analysis.sustainability = keyword_metric(
        business_model,
        lexicon::REVENUE_WORDS,
        70,
        40,
        "Non è chiaro come genererai ricavi",
        &mut analysis.issues,
    );
    analysis.scalability = keyword_metric(
        business_model,
        lexicon::BUSINESS_SCALE_WORDS,
        70,
        50,
        "Non è chiaro come il modello di business possa scalare",
        &mut analysis.issues,
    );
    analysis
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

fn push_if(list: &mut Vec<String>, cond: bool, msg: &str) {
    if cond {
        list.push(msg.to_string());
    }
}

fn identify_strengths(r: &mut StartupAnalysisReport) {
    let t = HP.strength_threshold;
    let s = &mut r.strengths;
    push_if(s, r.problem_analysis.clarity >= t, "Problema descritto in modo chiaro e dettagliato");
    push_if(s, r.problem_analysis.urgency >= t, "Il problema sembra urgente e importante per il target");
    push_if(s, r.solution_analysis.feasibility >= t, "La soluzione sembra fattibile e ben pensata");
    push_if(
        s,
        r.solution_analysis.differentiation >= t,
        "La soluzione si differenzia chiaramente dalle alternative",
    );
    push_if(s, r.market_analysis.size >= t, "Il mercato target sembra avere buone dimensioni");
    push_if(
        s,
        r.competition_analysis.awareness >= t,
        "Hai una buona consapevolezza della competizione",
    );
    push_if(
        s,
        r.competition_analysis.competitive_advantage >= t,
        "Hai identificato un chiaro vantaggio competitivo",
    );
    push_if(
        s,
        r.business_model_analysis.sustainability >= t,
        "Il modello di business sembra sostenibile",
    );
}

fn identify_weaknesses(r: &mut StartupAnalysisReport) {
    let t = HP.weakness_threshold;
    let w = &mut r.weaknesses;
    push_if(w, r.problem_analysis.clarity < t, "Il problema non è descritto con sufficiente chiarezza");
    push_if(w, r.problem_analysis.urgency < t, "Non è chiaro quanto sia urgente risolvere il problema");
    push_if(w, r.solution_analysis.feasibility < t, "La fattibilità della soluzione non è chiara");
    push_if(
        w,
        r.solution_analysis.differentiation < t,
        "La differenziazione dalla competizione è debole",
    );
    push_if(
        w,
        r.market_analysis.size < t,
        "Il mercato target potrebbe essere troppo piccolo o poco definito",
    );
    push_if(w, r.competition_analysis.awareness < t, "La conoscenza della competizione è insufficiente");
    push_if(
        w,
        r.business_model_analysis.clarity < t,
        "Il modello di business non è chiaramente definito",
    );
    push_if(
        w,
        r.business_model_analysis.sustainability < t,
        "La sostenibilità economica del modello è incerta",
    );
}

fn identify_improvements(r: &mut StartupAnalysisReport) {
    let prefixed: [(&str, &[String]); 5] = [
        ("Problema", r.problem_analysis.issues.as_slice()),
        ("Soluzione", r.solution_analysis.issues.as_slice()),
        ("Mercato", r.market_analysis.issues.as_slice()),
        ("Competizione", r.competition_analysis.issues.as_slice()),
        ("Modello di business", r.business_model_analysis.issues.as_slice()),
    ];
    for (dimension, issues) in prefixed {
        r.improvements
            .extend(issues.iter().map(|issue| format!("{dimension}: {issue}")));
    }

    let t = HP.improvement_threshold;
    let i = &mut r.improvements;
    push_if(
        i,
        r.problem_analysis.size < t,
        "Quantifica meglio la dimensione del problema (quante persone colpisce?)",
    );
    push_if(i, r.solution_analysis.scalability < t, "Spiega meglio come la soluzione può scalare");
    push_if(
        i,
        r.market_analysis.accessibility < t,
        "Definisci meglio come raggiungere il tuo target di mercato",
    );
}

fn identify_risks(r: &mut StartupAnalysisReport, input: &StartupInput) {
    let high = HP.high_risk_threshold;
    let medium = HP.medium_risk_threshold;

    let checks: [(bool, Severity, &str); 8] = [
        (
            r.problem_analysis.clarity < high,
            Severity::High,
            "Il problema non è chiaro - potresti risolvere un problema che non esiste",
        ),
        (
            r.solution_analysis.feasibility < high,
            Severity::High,
            "La soluzione potrebbe non essere fattibile tecnicamente o economicamente",
        ),
        (
            r.market_analysis.size < high,
            Severity::High,
            "Il mercato potrebbe essere troppo piccolo per sostenere il business",
        ),
        (
            r.competition_analysis.awareness < high,
            Severity::High,
            "Non conoscere la competizione può portare a fallire nel mercato",
        ),
        (
            r.business_model_analysis.sustainability < high,
            Severity::High,
            "Il modello di business potrebbe non essere sostenibile nel lungo termine",
        ),
        (
            r.solution_analysis.differentiation < medium,
            Severity::Medium,
            "Senza differenziazione chiara, sarà difficile competere",
        ),
        (
            r.market_analysis.accessibility < medium,
            Severity::Medium,
            "Se non riesci a raggiungere il target, il business non decollerà",
        ),
        (
            r.business_model_analysis.scalability < medium,
            Severity::Medium,
            "Un modello non scalabile limita la crescita",
        ),
    ];
    r.risks.extend(
        checks
            .into_iter()
            .filter(|(fired, _, _)| *fired)
            .map(|(_, severity, msg)| Risk::new(severity, msg)),
    );

    let combined = format!(
        "{} {} {}",
        input.problem, input.solution, input.target_market
    );
    if contains_any(&combined, lexicon::OVERLY_BROAD_MARKET) {
        r.risks.push(Risk::new(
            Severity::Low,
            "Target troppo generico - \"tutti\" non è un target di mercato",
        ));
    }
    if contains_any(&combined, lexicon::EASE_CLAIMS) {
        r.risks.push(Risk::new(
            Severity::Low,
            "Se fosse così facile, qualcuno l'avrebbe già fatto",
        ));
    }
}

fn weighted(metrics: [(i32, f64); 3]) -> f64 {
    metrics.iter().map(|(v, w)| f64::from(*v) * w).sum()
}

fn compute_overall_score(r: &StartupAnalysisReport) -> i32 {
    let p = &r.problem_analysis;
    let s = &r.solution_analysis;
    let m = &r.market_analysis;
    let c = &r.competition_analysis;
    let b = &r.business_model_analysis;

    let mut score = weighted([(p.clarity, 0.4), (p.urgency, 0.3), (p.size, 0.3)])
        * DIMENSION_WEIGHTS.problem
        + weighted([(s.feasibility, 0.4), (s.differentiation, 0.3), (s.scalability, 0.3)])
            * DIMENSION_WEIGHTS.solution
        + weighted([(m.size, 0.4), (m.accessibility, 0.3), (m.growth, 0.3)])
            * DIMENSION_WEIGHTS.market
        + weighted([
            (c.awareness, 0.3),
            (c.differentiation, 0.4),
            (c.competitive_advantage, 0.3),
        ]) * DIMENSION_WEIGHTS.competition
        + weighted([(b.clarity, 0.3), (b.sustainability, 0.4), (b.scalability, 0.3)])
            * DIMENSION_WEIGHTS.business_model;

    score -= r.high_risk_count() as f64 * HP.high_risk_penalty;
    if r.strengths.len() >= HP.many_strengths {
        score += HP.many_strengths_bonus;
    }
    (score.round() as i32).clamp(HP.score_min, HP.score_max)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn analyze_startup(input: &StartupInput, scoring_enabled: bool) -> StartupAnalysisReport {
    let mut report = StartupAnalysisReport {
        // 1. Presence flags
        has_clear_problem: has_content(&input.problem, lexicon::PROBLEM_INDICATORS),
        has_viable_solution: has_content(&input.solution, lexicon::SOLUTION_INDICATORS),
        has_defined_target: has_content(&input.target_market, lexicon::TARGET_INDICATORS),
        has_competition_analysis: has_content(
            &input.competition,
            lexicon::COMPETITION_INDICATORS,
        ),
        has_business_model: has_content(
            &input.business_model,
            lexicon::BUSINESS_MODEL_INDICATORS,
        ),
        // 2. Dimensions
        problem_analysis: analyze_problem(&input.problem),
        solution_analysis: analyze_solution(&input.solution, &input.problem),
        market_analysis: analyze_market(&input.target_market),
        competition_analysis: analyze_competition(&input.competition),
        business_model_analysis: analyze_business_model(&input.business_model),
        ..Default::default()
    };

    // 3. Aggregation
    identify_strengths(&mut report);
    identify_weaknesses(&mut report);
    identify_improvements(&mut report);
    identify_risks(&mut report, input);

    // 4. Score
    if scoring_enabled {
        report.overall_score = Some(compute_overall_score(&report));
    }
    debug!(
        strengths = report.strengths.len(),
        weaknesses = report.weaknesses.len(),
        risks = report.risks.len(),
        high_risks = report.high_risk_count(),
        score = ?report.overall_score,
        "analyzed startup"
    );
    report
}
