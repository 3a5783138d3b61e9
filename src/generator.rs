//! Bio generation: who-you-are, value proposition and call to action.
//!
//! Generation never fails. A missing field yields an empty section, which
//! the analyzer later reports. Template and verb choices are random, so two
//! calls with the same input may produce different phrasing.

use rand::Rng;
use tracing::debug;

use crate::classifier::{classify, ActivityCategory, RoleCategory};
use crate::lexicon::{self, ACTION_VERB_RE};
use crate::model::{BioInput, GeneratedBio, Goal};
use crate::templates::{self, Slots, TemplateKind};

/// Generate a bio using the thread-local RNG.
pub fn generate_bio(input: &BioInput) -> GeneratedBio {
    generate_bio_with(input, &mut rand::rng())
}

/// Generate a bio drawing every random choice from `rng`.
pub fn generate_bio_with<R: Rng + ?Sized>(input: &BioInput, rng: &mut R) -> GeneratedBio {
    let role = input.role.trim();
    let target = input.target.trim();
    let activity = input.activity.trim();

    let bio = GeneratedBio {
        who_you_are: who_you_are(role, target, rng),
        value_proposition: value_proposition(target, activity, rng),
        call_to_action: call_to_action(&input.goal, target, rng),
    };
    debug!(
        who = bio.who_you_are.len(),
        value = bio.value_proposition.len(),
        cta = bio.call_to_action.len(),
        "generated bio"
    );
    bio
}

fn who_you_are<R: Rng + ?Sized>(role: &str, target: &str, rng: &mut R) -> String {
    if role.is_empty() {
        return String::new();
    }
    let category: RoleCategory = classify(role);
    let template = templates::select(TemplateKind::WhoYouAre(category), !target.is_empty(), rng);
    let filled = templates::fill(
        template,
        &Slots {
            role,
            target,
            activity: "",
        },
    );
    sentence(&filled)
}

fn value_proposition<R: Rng + ?Sized>(target: &str, activity: &str, rng: &mut R) -> String {
    if activity.is_empty() {
        return String::new();
    }
    let category: ActivityCategory = classify(activity);
    let opening = match first_action_verb(activity) {
        Some(verb) => with_leading_verb(activity, &verb),
        None => {
            let phrase = templates::pick(category.verb_phrases(), rng);
            format!("{phrase} {}", lowercase_first(strip_trailing_periods(activity)))
        }
    };
    debug!(?category, "value proposition category");

    let template = templates::select(
        TemplateKind::ValueProposition(category),
        !target.is_empty(),
        rng,
    );
    let filled = templates::fill(
        template,
        &Slots {
            role: "",
            target,
            activity: &opening,
        },
    );
    sentence(&filled)
}

fn call_to_action<R: Rng + ?Sized>(goal: &Goal, target: &str, rng: &mut R) -> String {
    let template = templates::pick(templates::cta_pool(goal), rng);
    if template.is_empty() {
        return String::new();
    }
    let target = if target.is_empty() {
        lexicon::FALLBACK_TARGET
    } else {
        target
    };
    templates::fill(
        template,
        &Slots {
            role: "",
            target,
            activity: "",
        },
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First action verb in text order, lower-cased.
fn first_action_verb(text: &str) -> Option<String> {
    ACTION_VERB_RE
        .find(text)
        .map(|m| m.as_str().to_lowercase())
}

/// Trim trailing periods and, unless the activity already opens with an
/// action verb, put `verb` in front of it.
fn with_leading_verb(activity: &str, verb: &str) -> String {
    let cleaned = strip_trailing_periods(activity);
    if starts_with_action_verb(cleaned) {
        return cleaned.to_string();
    }
    format!("{} {}", capitalize_first(verb), lowercase_first(cleaned))
}

fn starts_with_action_verb(text: &str) -> bool {
    ACTION_VERB_RE
        .find(text)
        .is_some_and(|m| m.start() == 0)
}

fn strip_trailing_periods(text: &str) -> &str {
    text.trim_end().trim_end_matches('.').trim_end()
}

/// Capitalise, drop trailing periods and close with exactly one period.
fn sentence(text: &str) -> String {
    format!("{}.", capitalize_first(strip_trailing_periods(text.trim())))
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn empty_role_gives_empty_who_you_are() {
        let input = BioInput::new("   ", "PMI", "Sviluppo siti web", "clienti");
        let bio = generate_bio_with(&input, &mut rng());
        assert_eq!(bio.who_you_are, "");
    }

    #[test]
    fn who_you_are_embeds_role_and_ends_with_period() {
        let input = BioInput::new("frontend developer", "", "", "");
        let bio = generate_bio_with(&input, &mut rng());
        assert!(bio.who_you_are.contains("frontend developer"));
        assert!(bio.who_you_are.ends_with('.'));
        assert!(!bio.who_you_are.ends_with(".."));
        assert!(bio.who_you_are.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn who_you_are_mentions_target_when_present() {
        let input = BioInput::new("UX Designer", "startup fintech", "", "");
        for seed in 0..16 {
            let bio = generate_bio_with(&input, &mut StdRng::seed_from_u64(seed));
            assert!(bio.who_you_are.contains("startup fintech"), "{}", bio.who_you_are);
        }
    }

    #[test]
    fn activity_with_leading_verb_is_kept() {
        let activity = "Sviluppo interfacce web moderne usando React.";
        assert_eq!(
            with_leading_verb(activity, "sviluppo"),
            "Sviluppo interfacce web moderne usando React"
        );
    }

    #[test]
    fn detected_verb_is_prepended_when_not_leading() {
        let out = with_leading_verb("Interfacce web: le sviluppo con React...", "sviluppo");
        assert_eq!(out, "Sviluppo interfacce web: le sviluppo con React");
    }

    #[test]
    fn activity_without_verb_gets_a_synthesised_one() {
        let input = BioInput::new("", "", "siti web per ristoranti", "");
        let bio = generate_bio_with(&input, &mut rng());
        let verbs = lexicon::distinct_matches(&ACTION_VERB_RE, &bio.value_proposition);
        assert!(!verbs.is_empty(), "{}", bio.value_proposition);
        assert!(bio.value_proposition.contains("siti web per ristoranti"));
        assert!(bio.value_proposition.ends_with('.'));
    }

    #[test]
    fn empty_activity_gives_empty_value_proposition() {
        let input = BioInput::new("Dev", "PMI", "", "clienti");
        let bio = generate_bio_with(&input, &mut rng());
        assert_eq!(bio.value_proposition, "");
    }

    #[test]
    fn cta_uses_fallback_target() {
        let input = BioInput::new("", "", "", "clienti");
        for seed in 0..32 {
            let bio = generate_bio_with(&input, &mut StdRng::seed_from_u64(seed));
            assert!(!bio.call_to_action.contains("{target}"));
            assert!(!bio.call_to_action.is_empty());
        }
    }

    #[test]
    fn unset_goal_gives_empty_cta_and_unknown_goal_falls_back() {
        let unset = generate_bio_with(&BioInput::new("", "", "", ""), &mut rng());
        assert_eq!(unset.call_to_action, "");

        let other = generate_bio_with(&BioInput::new("", "", "", "investitori"), &mut rng());
        assert_eq!(other.call_to_action, "Contattami per saperne di più.");
    }

    #[test]
    fn same_seed_same_bio() {
        let input = BioInput::new(
            "Growth Marketer",
            "e-commerce",
            "Campagne per acquisizione clienti",
            "clienti",
        );
        let a = generate_bio_with(&input, &mut StdRng::seed_from_u64(9));
        let b = generate_bio_with(&input, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn capitalize_handles_accents() {
        assert_eq!(capitalize_first("è vero"), "È vero");
        assert_eq!(capitalize_first(""), "");
    }
}
