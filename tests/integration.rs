use pitchcheck::{
    analyze_bio, analyze_bio_with, analyze_startup, generate_bio_with, validate_activity,
    validate_role, validate_target, BioInput, BioSession, GeneratedBio, ScoreBand, ScoreWeights,
    StartupInput,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn frontend_input() -> BioInput {
    BioInput::new(
        "Frontend Developer",
        "startup tech",
        "Sviluppo interfacce web moderne usando React, aiutando i team a lanciare prodotti più velocemente",
        "clienti",
    )
}

#[test]
fn frontend_developer_bio_passes_the_rubric() {
    let input = frontend_input();
    for seed in 0..20 {
        let bio = generate_bio_with(&input, &mut StdRng::seed_from_u64(seed));
        assert!(
            bio.sections().iter().all(|s| !s.is_empty()),
            "seed {seed}: {bio:?}"
        );

        let report = analyze_bio(&bio, &input, true);
        assert!(report.has_target, "seed {seed}: {}", bio.full_text());
        assert!(report.has_cta, "seed {seed}: {}", bio.call_to_action);
        assert!(report.adequate_length);
        assert!(report.clarity);
        let score = report.score.unwrap();
        assert!(score >= 70, "seed {seed}: score {score}, {:?}", report.warnings);
        assert_eq!(report.band(), Some(ScoreBand::Eccellente));
    }
}

#[test]
fn vague_self_centred_bio_scores_low() {
    let bio = GeneratedBio {
        who_you_are: "Io sono un professionista esperto, qualificato e competente.".into(),
        value_proposition: "Ho esperienza pluriennale e sono appassionato del mio lavoro.".into(),
        call_to_action: "Forse potrei essere utile.".into(),
    };
    let input = BioInput::new("Consulente", "aziende", "consulenza", "clienti");
    let report = analyze_bio(&bio, &input, true);

    assert!(!report.has_target);
    assert!(!report.has_cta);
    assert!(report.warnings.len() >= 4, "{:?}", report.warnings);
    let score = report.score.unwrap();
    assert!(score < 50, "score {score}");
    assert_eq!(report.band(), Some(ScoreBand::DaMigliorare));
}

#[test]
fn report_json_uses_camel_case_and_omits_disabled_score() {
    let input = frontend_input();
    let bio = generate_bio_with(&input, &mut StdRng::seed_from_u64(1));

    let bio_json = serde_json::to_value(&bio).unwrap();
    assert!(bio_json.get("whoYouAre").is_some());
    assert!(bio_json.get("valueProposition").is_some());
    assert!(bio_json.get("callToAction").is_some());

    let off = serde_json::to_value(analyze_bio(&bio, &input, false)).unwrap();
    assert!(off.get("score").is_none());
    assert!(off.get("hasTarget").is_some());

    let on = serde_json::to_value(analyze_bio(&bio, &input, true)).unwrap();
    assert!(on.get("score").unwrap().is_i64());
}

#[test]
fn startup_report_json_shape() {
    let report = analyze_startup(&StartupInput::default(), true);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overallScore"], 0);
    assert!(json["problemAnalysis"]["issues"].is_array());
    assert!(json["competitionAnalysis"].get("competitiveAdvantage").is_some());
    assert_eq!(json["risks"][0]["severity"], "high");
}

#[test]
fn uniform_weights_change_the_score() {
    let input = frontend_input();
    // Every section is short, so only clarity fails.
    let bio = GeneratedBio {
        who_you_are: "Frontend Developer per startup tech.".into(),
        value_proposition: "Sviluppo e creo interfacce React veloci.".into(),
        call_to_action: "Contattami per parlarne.".into(),
    };
    let enhanced = analyze_bio_with(&bio, &input, true, &ScoreWeights::ENHANCED);
    let uniform = analyze_bio_with(&bio, &input, true, &ScoreWeights::UNIFORM);
    assert!(!enhanced.clarity);
    assert!(enhanced.has_target && enhanced.has_cta && enhanced.adequate_length);
    assert_eq!(enhanced.warnings, uniform.warnings);
    assert_eq!(enhanced.score, Some(67));
    assert_eq!(uniform.score, Some(72));
}

#[test]
fn session_round_trip() {
    let mut session = BioSession::new(ScoreWeights::default());
    session.update_form(pitchcheck::BioInputPatch {
        role: Some("UX Designer".into()),
        target: Some("startup fintech".into()),
        activity: Some("Progetto esperienze digitali semplici per app di pagamento".into()),
        goal: Some("networking".into()),
    });
    session.generate(&mut StdRng::seed_from_u64(11));
    session.toggle_score();
    let report = session.analysis.as_ref().unwrap();
    assert!(report.score.is_some());
    assert!(report.has_cta);
}

#[test]
fn validators_agree_with_wizard_examples() {
    assert!(validate_role("Digital Marketing Consultant").is_valid);
    assert!(validate_target("PMI digitali").is_valid);
    assert!(validate_activity(
        "Aiuto le PMI a crescere online con strategie di marketing digitale e campagne mirate"
    )
    .is_valid);
    assert!(!validate_role("aaaa bbbb").is_valid);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_goal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("lavoro".to_string()),
        Just("clienti".to_string()),
        Just("networking".to_string()),
        "[a-z]{1,10}",
    ]
}

fn arb_bio_input() -> impl Strategy<Value = BioInput> {
    ("\\PC{0,40}", "\\PC{0,40}", "\\PC{0,120}", arb_goal())
        .prop_map(|(role, target, activity, goal)| BioInput::new(role, target, activity, goal))
}

fn arb_bio() -> impl Strategy<Value = GeneratedBio> {
    ("\\PC{0,200}", "\\PC{0,400}", "\\PC{0,120}").prop_map(|(w, v, c)| GeneratedBio {
        who_you_are: w,
        value_proposition: v,
        call_to_action: c,
    })
}

proptest! {
    #[test]
    fn who_you_are_embeds_role_verbatim(
        role in "[A-Za-zÀ-ú][A-Za-zÀ-ú0-9 ./&+-]{0,40}",
        input in arb_bio_input(),
        seed in any::<u64>(),
    ) {
        let input = BioInput { role: role.clone(), ..input };
        let bio = generate_bio_with(&input, &mut StdRng::seed_from_u64(seed));
        prop_assert!(bio.who_you_are.contains(role.trim()));
        prop_assert!(bio.who_you_are.ends_with('.'));
    }

    #[test]
    fn empty_activity_gives_empty_value_proposition(
        input in arb_bio_input(),
        blank in "[ \\t]{0,5}",
        seed in any::<u64>(),
    ) {
        let input = BioInput { activity: blank, ..input };
        let bio = generate_bio_with(&input, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(bio.value_proposition, "");
    }

    #[test]
    fn bio_score_is_bounded_and_optional(bio in arb_bio(), input in arb_bio_input()) {
        let scored = analyze_bio(&bio, &input, true);
        let score = scored.score.unwrap();
        prop_assert!((0..=100).contains(&score));
        prop_assert_eq!(analyze_bio(&bio, &input, false).score, None);
    }

    #[test]
    fn bio_analysis_is_deterministic(bio in arb_bio(), input in arb_bio_input()) {
        prop_assert_eq!(analyze_bio(&bio, &input, true), analyze_bio(&bio, &input, true));
    }

    #[test]
    fn startup_score_is_bounded(
        problem in "\\PC{0,300}",
        solution in "\\PC{0,300}",
        target_market in "\\PC{0,200}",
        competition in "\\PC{0,200}",
        business_model in "\\PC{0,200}",
    ) {
        let input = StartupInput { problem, solution, target_market, competition, business_model };
        let report = analyze_startup(&input, true);
        prop_assert!((0..=100).contains(&report.overall_score.unwrap()));
        prop_assert_eq!(analyze_startup(&input, false).overall_score, None);
    }

    #[test]
    fn validator_scores_are_bounded(text in "\\PC{0,120}") {
        for result in [validate_role(&text), validate_target(&text), validate_activity(&text)] {
            prop_assert!((0..=100).contains(&result.score));
            prop_assert_eq!(result.is_valid, result.errors.is_empty());
        }
    }
}
