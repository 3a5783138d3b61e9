//! Sentence template pools and placeholder filling.
//!
//! Every pool is keyed by a detected category and by whether a target was
//! supplied; the with-target and without-target pools are disjoint. Selection
//! is uniform over the pool and draws from a caller-supplied RNG.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use tracing::trace;

use crate::classifier::{ActivityCategory, RoleCategory};
use crate::model::Goal;

/// Which section a template pool belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    WhoYouAre(RoleCategory),
    ValueProposition(ActivityCategory),
}

/// Values substituted into `{role}`, `{target}` and `{activity}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slots<'a> {
    pub role: &'a str,
    pub target: &'a str,
    pub activity: &'a str,
}

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(role|target|activity)\}").unwrap());

// ---------------------------------------------------------------------------
// Who you are
// ---------------------------------------------------------------------------

// No template opens with {role}: capitalising the sentence must never touch
// the role text.

const WHO_TECH_TARGET: &[&str] = &[
    "Come {role}, progetto soluzioni digitali su misura per {target}",
    "Lavoro come {role} al fianco di {target}",
    "Da {role}, trasformo le idee di {target} in prodotti digitali solidi",
    "In qualità di {role}, costruisco tecnologia affidabile per {target}",
    "Di professione {role}, specializzato nel supportare {target}",
    "Ogni giorno lavoro come {role} per semplificare il lavoro di {target}",
    "Nel ruolo di {role}, aiuto {target} a scegliere e adottare la tecnologia giusta",
    "Come {role}, accompagno {target} dalla prima riga di codice al rilascio",
];

const WHO_TECH: &[&str] = &[
    "Come {role}, progetto soluzioni digitali affidabili e scalabili",
    "Lavoro come {role} e trasformo requisiti complessi in software semplice da usare",
    "Da {role}, costruisco prodotti digitali curando qualità e prestazioni",
    "In qualità di {role}, unisco competenze tecniche e attenzione al prodotto",
    "Di professione {role}, con la passione per il codice pulito",
    "Nel ruolo di {role}, porto ordine e metodo nei progetti tecnologici",
    "Come {role}, affronto ogni progetto tecnologico con un approccio pratico",
    "Lavoro come {role} per far funzionare bene la tecnologia, ogni giorno",
];

const WHO_MARKETING_TARGET: &[&str] = &[
    "Come {role}, costruisco strategie di comunicazione per {target}",
    "Lavoro come {role} e aiuto {target} a farsi trovare dai clienti giusti",
    "Da {role}, racconto il valore di {target} con messaggi chiari",
    "In qualità di {role}, trasformo l'audience di {target} in clienti",
    "Di professione {role}, con focus su {target}",
    "Nel ruolo di {role}, accompagno {target} nella crescita digitale",
    "Come {role}, metto la visibilità di {target} al centro di ogni campagna",
    "Lavoro come {role} al servizio di {target}",
];

const WHO_MARKETING: &[&str] = &[
    "Come {role}, costruisco strategie di comunicazione orientate ai risultati",
    "Lavoro come {role} e trasformo i dati in campagne efficaci",
    "Da {role}, racconto i brand con messaggi chiari e riconoscibili",
    "In qualità di {role}, unisco creatività e analisi",
    "Di professione {role}, con un approccio basato sui dati",
    "Nel ruolo di {role}, faccio crescere la visibilità online dei brand",
    "Come {role}, credo in un marketing concreto e misurabile",
    "Lavoro come {role} per dare voce a prodotti e servizi",
];

const WHO_DESIGN_TARGET: &[&str] = &[
    "Come {role}, disegno esperienze semplici e curate per {target}",
    "Lavoro come {role} e aiuto {target} a comunicare con immagini efficaci",
    "Da {role}, trasformo le esigenze di {target} in interfacce intuitive",
    "In qualità di {role}, progetto identità visive per {target}",
    "Di professione {role}, dedicato a {target}",
    "Nel ruolo di {role}, metto gli utenti di {target} al centro di ogni progetto",
    "Come {role}, affianco {target} dal concept al prodotto finito",
    "Lavoro come {role} al fianco di {target}",
];

const WHO_DESIGN: &[&str] = &[
    "Come {role}, disegno esperienze semplici e curate",
    "Lavoro come {role} e trasformo idee complesse in interfacce intuitive",
    "Da {role}, unisco estetica e usabilità",
    "In qualità di {role}, progetto identità visive riconoscibili",
    "Di professione {role}, con una forte attenzione ai dettagli",
    "Nel ruolo di {role}, metto le persone al centro di ogni progetto",
    "Come {role}, seguo ogni progetto dal concept al prodotto finito",
    "Lavoro come {role} per rendere i prodotti belli e facili da usare",
];

const WHO_BUSINESS_TARGET: &[&str] = &[
    "Come {role}, supporto {target} nelle decisioni che contano",
    "Lavoro come {role} e aiuto {target} a crescere in modo sostenibile",
    "Da {role}, trasformo le sfide di {target} in opportunità",
    "In qualità di {role}, guido {target} verso obiettivi misurabili",
    "Di professione {role}, con focus su {target}",
    "Nel ruolo di {role}, accompagno {target} nei momenti di cambiamento",
    "Come {role}, affianco {target} nella gestione di progetti complessi",
    "Lavoro come {role} al servizio di {target}",
];

const WHO_BUSINESS: &[&str] = &[
    "Come {role}, supporto le organizzazioni nelle decisioni che contano",
    "Lavoro come {role} e aiuto le imprese a crescere in modo sostenibile",
    "Da {role}, trasformo le sfide in opportunità concrete",
    "In qualità di {role}, guido team e progetti verso obiettivi misurabili",
    "Di professione {role}, con una visione orientata ai risultati",
    "Nel ruolo di {role}, accompagno le aziende nei momenti di cambiamento",
    "Come {role}, porto metodo e chiarezza nei progetti complessi",
    "Lavoro come {role} unendo visione strategica e concretezza",
];

const WHO_GENERIC_TARGET: &[&str] = &[
    "Come {role}, lavoro ogni giorno con {target}",
    "Lavoro come {role} e supporto {target} con passione e metodo",
    "Da {role}, trasformo le sfide di {target} in opportunità",
    "In qualità di {role}, offro a {target} un supporto concreto",
    "Di professione {role}, specializzato nel supportare {target}",
    "Nel ruolo di {role}, accompagno {target} nella crescita",
    "Come {role}, dedico attenzione e cura a {target}",
    "Lavoro come {role} con focus su {target}",
];

const WHO_GENERIC: &[&str] = &[
    "Come {role}, lavoro ogni giorno con passione e metodo",
    "Lavoro come {role} con un approccio concreto e orientato alle persone",
    "Da {role}, trasformo le sfide in opportunità",
    "In qualità di {role}, offro un supporto concreto e affidabile",
    "Di professione {role}, con attenzione alla qualità",
    "Nel ruolo di {role}, curo ogni progetto nei dettagli",
    "Come {role}, affronto ogni incarico con serietà",
    "Lavoro come {role} puntando su qualità e affidabilità",
];

// ---------------------------------------------------------------------------
// Value proposition
// ---------------------------------------------------------------------------

const VALUE_DEVELOPMENT_TARGET: &[&str] = &[
    "{activity}, aiutando {target} a raggiungere risultati concreti",
    "{activity}. Il mio obiettivo è dare a {target} prodotti digitali stabili e veloci",
    "{activity}, trasformando le esigenze di {target} in software efficace",
    "{activity}. Lavoro con {target} per creare valore duraturo",
    "{activity}, con soluzioni pensate per crescere insieme a {target}",
    "{activity}, per permettere a {target} di lanciare prima e con meno rischi",
    "{activity}. Per {target} significa meno problemi tecnici e più tempo per il business",
    "{activity}, guidando {target} verso il successo con tecnologie moderne",
];

const VALUE_DEVELOPMENT: &[&str] = &[
    "{activity}, con attenzione a sicurezza e prestazioni",
    "{activity}, scrivendo codice pulito e facile da mantenere",
    "{activity}. Ogni progetto punta a risultati misurabili",
    "{activity}, trasformando requisiti complessi in prodotti semplici",
    "{activity}, con soluzioni pensate per crescere nel tempo",
    "{activity}, riducendo tempi di rilascio e costi di manutenzione",
    "{activity}. Il risultato sono prodotti digitali stabili e veloci",
    "{activity}, portando metodo e qualità in ogni fase del progetto",
];

const VALUE_STRATEGY_TARGET: &[&str] = &[
    "{activity}, aiutando {target} a prendere decisioni più consapevoli",
    "{activity}. Lavoro con {target} per definire obiettivi chiari e raggiungibili",
    "{activity}, trasformando la visione di {target} in piani concreti",
    "{activity}, guidando {target} verso una crescita sostenibile",
    "{activity}, dando a {target} una visione chiara del prossimo passo",
    "{activity}. Per {target} significa meno improvvisazione e più risultati",
    "{activity}, allineando le scelte di {target} agli obiettivi di business",
    "{activity}, supportando {target} nel posizionamento sul mercato",
];

const VALUE_STRATEGY: &[&str] = &[
    "{activity}, con obiettivi chiari e misurabili",
    "{activity}, trasformando la visione in piani concreti",
    "{activity}. Ogni strategia parte dai dati e arriva a risultati misurabili",
    "{activity}, aiutando le organizzazioni a scegliere le priorità giuste",
    "{activity}, allineando scelte operative e obiettivi di business",
    "{activity}, per una crescita sostenibile nel tempo",
    "{activity}. Il risultato è una roadmap chiara da seguire",
    "{activity}, riducendo l'improvvisazione nelle decisioni",
];

const VALUE_GROWTH_TARGET: &[&str] = &[
    "{activity}, aiutando {target} ad aumentare clienti e fatturato",
    "{activity}. Lavoro con {target} per trasformare i contatti in clienti",
    "{activity}, trasformando la visibilità di {target} in risultati concreti",
    "{activity}, guidando {target} verso una crescita misurabile",
    "{activity}, portando {target} a raggiungere nuovi mercati",
    "{activity}. Per {target} significa più lead e meno budget sprecato",
    "{activity}, con campagne costruite attorno agli obiettivi di {target}",
    "{activity}, supportando {target} in ogni fase del funnel",
];

const VALUE_GROWTH: &[&str] = &[
    "{activity}, con l'obiettivo di aumentare clienti e fatturato",
    "{activity}, trasformando la visibilità in risultati concreti",
    "{activity}. Ogni campagna viene misurata e migliorata nel tempo",
    "{activity}, per una crescita misurabile e sostenibile",
    "{activity}, aiutando i brand a raggiungere nuovi mercati",
    "{activity}, riducendo il costo di acquisizione dei clienti",
    "{activity}. Il risultato sono più lead e meno budget sprecato",
    "{activity}, ottimizzando ogni fase del funnel",
];

const VALUE_OPTIMIZATION_TARGET: &[&str] = &[
    "{activity}, aiutando {target} a ridurre costi e sprechi",
    "{activity}. Lavoro con {target} per rendere i processi più efficienti",
    "{activity}, trasformando le inefficienze di {target} in margini",
    "{activity}, guidando {target} verso processi più snelli",
    "{activity}, liberando tempo a {target} per ciò che conta",
    "{activity}. Per {target} significa risparmiare tempo ogni giorno",
    "{activity}, con interventi misurabili sulle performance di {target}",
    "{activity}, supportando {target} nell'automazione delle attività ripetitive",
];

const VALUE_OPTIMIZATION: &[&str] = &[
    "{activity}, con l'obiettivo di ridurre costi e sprechi",
    "{activity}, rendendo i processi più efficienti",
    "{activity}. Ogni intervento è misurato sui risultati",
    "{activity}, trasformando le inefficienze in margini",
    "{activity}, automatizzando le attività ripetitive",
    "{activity}, per risparmiare tempo ogni giorno",
    "{activity}. Il risultato sono processi più snelli e veloci",
    "{activity}, migliorando le performance senza stravolgere il lavoro dei team",
];

const VALUE_CONSULTING_TARGET: &[&str] = &[
    "{activity}, aiutando {target} a raggiungere risultati concreti",
    "{activity}. Lavoro con {target} per trovare soluzioni su misura",
    "{activity}, trasformando i dubbi di {target} in decisioni chiare",
    "{activity}, guidando {target} nei passaggi più delicati",
    "{activity}, offrendo a {target} un punto di riferimento costante",
    "{activity}. Per {target} significa avere risposte rapide e affidabili",
    "{activity}, affiancando {target} dall'analisi all'implementazione",
    "{activity}, supportando {target} con un approccio pratico",
];

const VALUE_CONSULTING: &[&str] = &[
    "{activity}, con soluzioni su misura e orientate ai risultati",
    "{activity}, trasformando i dubbi in decisioni chiare",
    "{activity}. Ogni intervento parte da un'analisi accurata",
    "{activity}, affiancando i clienti dall'analisi all'implementazione",
    "{activity}, con un approccio pratico e trasparente",
    "{activity}, offrendo risposte rapide e affidabili",
    "{activity}. Il risultato sono scelte più consapevoli",
    "{activity}, aiutando le organizzazioni nei passaggi più delicati",
];

const VALUE_TRAINING_TARGET: &[&str] = &[
    "{activity}, aiutando {target} a sviluppare nuove competenze",
    "{activity}. Lavoro con {target} per far crescere le persone",
    "{activity}, trasformando la teoria in pratica per {target}",
    "{activity}, guidando {target} in percorsi di apprendimento concreti",
    "{activity}, accompagnando {target} verso l'autonomia in tempi brevi",
    "{activity}. Per {target} significa team più preparati",
    "{activity}, con percorsi costruiti sulle esigenze di {target}",
    "{activity}, supportando {target} nella crescita professionale",
];

const VALUE_TRAINING: &[&str] = &[
    "{activity}, aiutando le persone a sviluppare nuove competenze",
    "{activity}, trasformando la teoria in pratica",
    "{activity}. Ogni percorso è costruito su casi reali",
    "{activity}, con un metodo pratico e coinvolgente",
    "{activity}, per team più preparati e autonomi",
    "{activity}, rendendo l'apprendimento concreto e misurabile",
    "{activity}. Il risultato sono competenze subito applicabili",
    "{activity}, accompagnando la crescita professionale delle persone",
];

const VALUE_GENERIC_TARGET: &[&str] = &[
    "{activity}, aiutando {target} a raggiungere risultati concreti",
    "{activity}. Il mio obiettivo è supportare {target} in un percorso di crescita concreto",
    "{activity}, trasformando le esigenze di {target} in soluzioni efficaci",
    "{activity}. Lavoro con {target} per creare valore duraturo",
    "{activity}, guidando {target} verso il successo attraverso soluzioni innovative",
    "{activity}, aiutando {target} a concentrarsi sui propri obiettivi",
    "{activity}. Per {target} significa avere un partner affidabile",
    "{activity}, con un servizio costruito attorno a {target}",
];

const VALUE_GENERIC: &[&str] = &[
    "{activity}, con un approccio concreto e orientato ai risultati",
    "{activity}, trasformando le esigenze in soluzioni efficaci",
    "{activity}. Ogni progetto punta a creare valore duraturo",
    "{activity}, con cura e attenzione ai dettagli",
    "{activity}, per risultati misurabili nel tempo",
    "{activity}, offrendo un servizio affidabile e trasparente",
    "{activity}. Il risultato è un lavoro fatto bene, senza sorprese",
    "{activity}, mettendo al centro le esigenze di ogni cliente",
];

// ---------------------------------------------------------------------------
// Call to action
// ---------------------------------------------------------------------------

const CTA_LAVORO: &[&str] = &[
    "Aperto a nuove opportunità che mi permettano di fare la differenza.",
    "In cerca di progetti stimolanti dove poter applicare le mie competenze.",
    "Disponibile per nuove sfide professionali in team dinamici e innovativi.",
    "Aperto a collaborazioni che valorizzino il mio contributo e la mia crescita.",
    "Pronto a entrare in un team che voglia costruire qualcosa di importante.",
    "Disponibile per colloqui conoscitivi: scrivimi per parlarne.",
];

const CTA_CLIENTI: &[&str] = &[
    "Contattami per scoprire come posso aiutare {target} a raggiungere i propri obiettivi.",
    "Scrivimi per una consulenza personalizzata e soluzioni su misura.",
    "Pronto a discutere come possiamo lavorare insieme per ottenere risultati concreti.",
    "Contattami per esplorare come possiamo creare valore insieme.",
    "Cerchi un partner affidabile per {target}? Scrivimi e parliamone.",
    "Contattami per una prima call gratuita e senza impegno.",
    "Disponibile per nuovi progetti con {target}: scrivimi in privato.",
    "Parliamo di come portare {target} al prossimo livello: contattami.",
];

const CTA_NETWORKING: &[&str] = &[
    "Aperto a connessioni significative e collaborazioni che portino valore reciproco.",
    "Sempre interessato a conoscere professionisti con cui condividere idee e progetti.",
    "Connessioni aperte per networking costruttivo e opportunità di crescita.",
    "Pronto a connettermi con chi condivide la passione per l'innovazione e l'eccellenza.",
    "Aperto al confronto con chi lavora nel mio settore: connettiamoci.",
    "Interessato a scambiare idee ed esperienze: scrivimi pure.",
];

const CTA_FALLBACK: &[&str] = &["Contattami per saperne di più."];

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The pool for `kind`, narrowed by whether a target is present.
pub fn pool(kind: TemplateKind, has_target: bool) -> &'static [&'static str] {
    use ActivityCategory as A;
    use RoleCategory as R;

    match (kind, has_target) {
        (TemplateKind::WhoYouAre(R::Tech), true) => WHO_TECH_TARGET,
        (TemplateKind::WhoYouAre(R::Tech), false) => WHO_TECH,
        (TemplateKind::WhoYouAre(R::Marketing), true) => WHO_MARKETING_TARGET,
        (TemplateKind::WhoYouAre(R::Marketing), false) => WHO_MARKETING,
        (TemplateKind::WhoYouAre(R::Design), true) => WHO_DESIGN_TARGET,
        (TemplateKind::WhoYouAre(R::Design), false) => WHO_DESIGN,
        (TemplateKind::WhoYouAre(R::Business), true) => WHO_BUSINESS_TARGET,
        (TemplateKind::WhoYouAre(R::Business), false) => WHO_BUSINESS,
        (TemplateKind::WhoYouAre(R::Generic), true) => WHO_GENERIC_TARGET,
        (TemplateKind::WhoYouAre(R::Generic), false) => WHO_GENERIC,
        (TemplateKind::ValueProposition(A::Development), true) => VALUE_DEVELOPMENT_TARGET,
        (TemplateKind::ValueProposition(A::Development), false) => VALUE_DEVELOPMENT,
        (TemplateKind::ValueProposition(A::Strategy), true) => VALUE_STRATEGY_TARGET,
        (TemplateKind::ValueProposition(A::Strategy), false) => VALUE_STRATEGY,
        (TemplateKind::ValueProposition(A::Growth), true) => VALUE_GROWTH_TARGET,
        (TemplateKind::ValueProposition(A::Growth), false) => VALUE_GROWTH,
        (TemplateKind::ValueProposition(A::Optimization), true) => VALUE_OPTIMIZATION_TARGET,
        (TemplateKind::ValueProposition(A::Optimization), false) => VALUE_OPTIMIZATION,
        (TemplateKind::ValueProposition(A::Consulting), true) => VALUE_CONSULTING_TARGET,
        (TemplateKind::ValueProposition(A::Consulting), false) => VALUE_CONSULTING,
        (TemplateKind::ValueProposition(A::Training), true) => VALUE_TRAINING_TARGET,
        (TemplateKind::ValueProposition(A::Training), false) => VALUE_TRAINING,
        (TemplateKind::ValueProposition(A::Generic), true) => VALUE_GENERIC_TARGET,
        (TemplateKind::ValueProposition(A::Generic), false) => VALUE_GENERIC,
    }
}

/// Canned call-to-action sentences for a goal. Empty for an unset goal.
pub fn cta_pool(goal: &Goal) -> &'static [&'static str] {
    match goal {
        Goal::Unset => &[],
        Goal::Lavoro => CTA_LAVORO,
        Goal::Clienti => CTA_CLIENTI,
        Goal::Networking => CTA_NETWORKING,
        Goal::Other(_) => CTA_FALLBACK,
    }
}

/// Uniform pick from `pool`; an empty pool yields an empty template.
pub fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    if pool.is_empty() {
        return "";
    }
    let idx = rng.random_range(0..pool.len());
    trace!(idx, size = pool.len(), "picked template");
    pool[idx]
}

pub fn select<R: Rng + ?Sized>(kind: TemplateKind, has_target: bool, rng: &mut R) -> &'static str {
    pick(pool(kind, has_target), rng)
}

/// Substitute placeholders in a single pass. Inserted values are never
/// scanned again, so user text containing `{role}` stays literal.
pub fn fill(template: &str, slots: &Slots<'_>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "role" => slots.role.to_string(),
            "target" => slots.target.to_string(),
            _ => slots.activity.to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ROLES: [RoleCategory; 5] = [
        RoleCategory::Tech,
        RoleCategory::Marketing,
        RoleCategory::Design,
        RoleCategory::Business,
        RoleCategory::Generic,
    ];

    const ACTIVITIES: [ActivityCategory; 7] = [
        ActivityCategory::Development,
        ActivityCategory::Strategy,
        ActivityCategory::Growth,
        ActivityCategory::Optimization,
        ActivityCategory::Consulting,
        ActivityCategory::Training,
        ActivityCategory::Generic,
    ];

    fn all_kinds() -> Vec<TemplateKind> {
        ROLES
            .iter()
            .map(|r| TemplateKind::WhoYouAre(*r))
            .chain(ACTIVITIES.iter().map(|a| TemplateKind::ValueProposition(*a)))
            .collect()
    }

    #[test]
    fn pools_have_eight_to_fourteen_templates() {
        for kind in all_kinds() {
            for has_target in [true, false] {
                let n = pool(kind, has_target).len();
                assert!((8..=14).contains(&n), "{kind:?}/{has_target}: {n}");
            }
        }
    }

    #[test]
    fn target_pools_are_disjoint_and_reference_target() {
        for kind in all_kinds() {
            let with = pool(kind, true);
            let without = pool(kind, false);
            for t in with {
                assert!(t.contains("{target}"), "{t}");
                assert!(!without.contains(t));
            }
            for t in without {
                assert!(!t.contains("{target}"), "{t}");
            }
        }
    }

    #[test]
    fn who_you_are_templates_embed_role_but_never_open_with_it() {
        for role in ROLES {
            for has_target in [true, false] {
                for t in pool(TemplateKind::WhoYouAre(role), has_target) {
                    assert!(t.contains("{role}"));
                    assert!(!t.starts_with("{role}"));
                }
            }
        }
    }

    #[test]
    fn value_templates_open_with_activity() {
        for activity in ACTIVITIES {
            for has_target in [true, false] {
                for t in pool(TemplateKind::ValueProposition(activity), has_target) {
                    assert!(t.starts_with("{activity}"), "{t}");
                }
            }
        }
    }

    #[test]
    fn target_is_never_the_subject_of_a_verb() {
        // {target} may be singular or plural, so no verb is conjugated on it.
        const VERBS: [&str; 6] = [" può", " sa ", " ha ", " è ", " possono", " sanno"];
        let ctas = cta_pool(&Goal::Clienti).iter();
        let values = ACTIVITIES
            .into_iter()
            .flat_map(|a| pool(TemplateKind::ValueProposition(a), true).iter());
        for t in values.chain(ctas) {
            assert!(!t.contains("così {target}"), "{t}");
            for verb in VERBS {
                assert!(!t.contains(&format!("{{target}}{verb}")), "{t}");
            }
        }
    }

    #[test]
    fn verb_phrases_do_not_name_a_deliverable() {
        for activity in ACTIVITIES {
            for phrase in activity.verb_phrases() {
                assert!(!phrase.contains("strategie"), "{activity:?}: {phrase}");
            }
        }
    }

    #[test]
    fn every_canned_cta_is_recognised_as_cta() {
        for goal in [
            Goal::Lavoro,
            Goal::Clienti,
            Goal::Networking,
            Goal::Other("x".into()),
        ] {
            let ctas = cta_pool(&goal);
            assert!((1..=14).contains(&ctas.len()));
            for cta in ctas {
                assert!(lexicon::contains_any(cta, lexicon::CTA_INDICATORS), "{cta}");
                assert!(!lexicon::WEAK_CTA_RE.is_match(cta), "{cta}");
            }
        }
        assert!(cta_pool(&Goal::Unset).is_empty());
    }

    #[test]
    fn fill_is_single_pass() {
        let slots = Slots {
            role: "Dev {target}",
            target: "PMI",
            activity: "",
        };
        assert_eq!(fill("Come {role} per {target}", &slots), "Come Dev {target} per PMI");
    }

    #[test]
    fn fill_leaves_unknown_braces_alone() {
        let slots = Slots::default();
        assert_eq!(fill("{altro} {role}!", &slots), "{altro} !");
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let kind = TemplateKind::WhoYouAre(RoleCategory::Tech);
        let a = select(kind, true, &mut StdRng::seed_from_u64(7));
        let b = select(kind, true, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_selection_never_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in all_kinds() {
            for _ in 0..20 {
                assert!(!select(kind, false, &mut rng).is_empty());
            }
        }
    }

    #[test]
    fn pick_from_empty_pool_is_empty() {
        assert_eq!(pick(&[], &mut StdRng::seed_from_u64(0)), "");
    }
}
