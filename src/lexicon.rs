//! Static word lists shared by the generator, the analyzers and the field
//! validators. Everything here is read-only data; the compiled matchers are
//! built once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Bio lexicon
// ---------------------------------------------------------------------------

/// First-person verbs that carry a value proposition.
pub const ACTION_VERBS: &[&str] = &[
    "aiuto",
    "aiutiamo",
    "supporto",
    "supportiamo",
    "risolvo",
    "risolviamo",
    "creo",
    "creiamo",
    "sviluppo",
    "sviluppiamo",
    "costruisco",
    "costruiamo",
    "ottimizzo",
    "ottimizziamo",
    "miglioro",
    "miglioriamo",
    "trasformo",
    "trasformiamo",
    "fornisco",
    "forniamo",
    "offro",
    "offriamo",
    "garantisco",
    "garantiamo",
    "progetto",
    "progettiamo",
    "gestisco",
    "gestiamo",
    "realizzo",
    "realizziamo",
    "definisco",
    "definiamo",
    "guido",
    "guidiamo",
    "accompagno",
    "accompagniamo",
    "formo",
    "formiamo",
    "insegno",
    "pianifico",
    "automatizzo",
    "semplifico",
    "lancio",
];

pub const VAGUE_WORDS: &[&str] = &[
    "esperto",
    "esperta",
    "esperti",
    "esperienza",
    "esperienze",
    "pluriennale",
    "professionista",
    "professionisti",
    "qualificato",
    "qualificata",
    "qualificati",
    "competente",
    "competenti",
    "eccellente",
    "eccellenti",
    "appassionato",
    "appassionata",
    "dinamico",
    "dinamica",
    "motivato",
    "motivata",
];

pub const SELF_REFERENCE_WORDS: &[&str] =
    &["io", "me", "mio", "mia", "miei", "mie", "mi", "sono", "ho"];

/// Language that speaks about outcomes rather than activities.
pub const RESULT_KEYWORDS: &[&str] = &[
    "risultati",
    "risultato",
    "migliorare",
    "aumentare",
    "ridurre",
    "crescita",
    "crescere",
    "ottimizzare",
    "obiettivi",
    "successo",
    "valore",
    "efficienza",
    "velocemente",
    "performance",
    "conversioni",
    "fatturato",
];

/// Substrings that mark a sentence as an invitation to act.
pub const CTA_INDICATORS: &[&str] = &[
    "contattami",
    "scrivimi",
    "connessioni",
    "connettermi",
    "aperto",
    "aperta",
    "disponibile",
    "discutere",
    "parliamo",
    "parliamone",
    "in cerca",
    "interessato",
    "interessata",
    "pronto",
    "pronta",
];

/// Qualifiers that soften a call to action.
pub const WEAK_CTA_WORDS: &[&str] = &["forse", "magari", "eventualmente", "potrei"];

/// Single-word targets too broad to address anyone in particular.
pub const GENERIC_TARGETS: &[&str] = &[
    "aziende",
    "azienda",
    "clienti",
    "persone",
    "tutti",
    "utenti",
    "imprese",
    "professionisti",
    "privati",
];

pub const FALLBACK_TARGET: &str = "la tua azienda";

// ---------------------------------------------------------------------------
// Category keyword tables (declaration order is the tie-break)
// ---------------------------------------------------------------------------

pub const ROLE_TECH: &[&str] = &[
    "developer",
    "sviluppatore",
    "sviluppatrice",
    "programmatore",
    "programmatrice",
    "engineer",
    "ingegnere",
    "frontend",
    "backend",
    "fullstack",
    "full stack",
    "devops",
    "software",
    "data scientist",
    "cloud",
    "architect",
    "sistemista",
];

pub const ROLE_MARKETING: &[&str] = &[
    "marketing",
    "seo",
    "social media",
    "content",
    "copywriter",
    "growth",
    "brand",
    "comunicazione",
    "advertising",
    "pr ",
];

pub const ROLE_DESIGN: &[&str] = &[
    "designer",
    "design",
    "ux",
    "ui/",
    "grafico",
    "grafica",
    "illustratore",
    "illustratrice",
    "art director",
    "creative",
];

pub const ROLE_BUSINESS: &[&str] = &[
    "manager",
    "consulente",
    "consultant",
    "ceo",
    "cto",
    "founder",
    "fondatore",
    "fondatrice",
    "imprenditore",
    "imprenditrice",
    "business",
    "sales",
    "commerciale",
    "analyst",
    "analista",
    "project",
    "product owner",
];

pub const ACTIVITY_DEVELOPMENT: &[&str] = &[
    "svilupp",
    "codice",
    "applicazion",
    "software",
    "programm",
    "react",
    "angular",
    "siti",
    "sito web",
    "interfacce",
    "api",
    "app ",
    "piattaform",
];

pub const ACTIVITY_STRATEGY: &[&str] = &[
    "strategi",
    "pianific",
    "posizionamento",
    "roadmap",
    "visione",
    "business plan",
];

pub const ACTIVITY_GROWTH: &[&str] = &[
    "crescita",
    "lead",
    "vendite",
    "acquisizione",
    "marketing",
    "growth",
    "conversion",
    "campagne",
    "fatturato",
];

pub const ACTIVITY_OPTIMIZATION: &[&str] = &[
    "ottimizz",
    "efficien",
    "performance",
    "automatizz",
    "processi",
    "semplific",
    "riduzione dei costi",
];

pub const ACTIVITY_CONSULTING: &[&str] = &[
    "consulenz",
    "consiglio",
    "affianc",
    "audit",
    "analisi",
    "supporto",
];

pub const ACTIVITY_TRAINING: &[&str] = &[
    "formazione",
    "formo",
    "corsi",
    "insegn",
    "mentoring",
    "coaching",
    "workshop",
    "didattic",
];

// ---------------------------------------------------------------------------
// Verb phrases used when an activity has no action verb of its own
// ---------------------------------------------------------------------------

pub const VERBS_DEVELOPMENT: &[&str] = &["Sviluppo", "Realizzo", "Costruisco", "Progetto e sviluppo"];
pub const VERBS_STRATEGY: &[&str] = &["Definisco", "Pianifico", "Gestisco"];
pub const VERBS_GROWTH: &[&str] = &["Guido la crescita attraverso", "Realizzo", "Gestisco"];
pub const VERBS_OPTIMIZATION: &[&str] = &["Ottimizzo", "Miglioro", "Semplifico"];
pub const VERBS_CONSULTING: &[&str] = &["Offro consulenza per", "Supporto le aziende nella", "Fornisco"];
pub const VERBS_TRAINING: &[&str] = &["Progetto percorsi di", "Insegno", "Offro"];
pub const VERBS_GENERIC: &[&str] = &[
    "Aiuto le aziende attraverso",
    "Offro",
    "Fornisco",
    "Supporto le imprese con",
];

// ---------------------------------------------------------------------------
// Startup lexicon
// ---------------------------------------------------------------------------

pub const PROBLEM_INDICATORS: &[&str] = &[
    "problema",
    "sfida",
    "difficoltà",
    "dolore",
    "pain point",
    "frustrazione",
    "inefficienza",
    "costo",
    "tempo",
    "qualità",
    "accesso",
    "disponibilità",
    "complessità",
    "mancanza",
    "gap",
    "limite",
    "barriera",
];

pub const SOLUTION_INDICATORS: &[&str] = &[
    "soluzione",
    "risolve",
    "migliora",
    "ottimizza",
    "automatizza",
    "semplifica",
    "accelera",
    "riduce",
    "aumenta",
    "fornisce",
    "offre",
    "crea",
    "sviluppa",
    "piattaforma",
    "app",
    "servizio",
    "prodotto",
    "sistema",
    "tool",
];

pub const TARGET_INDICATORS: &[&str] = &[
    "aziende",
    "startup",
    "pmi",
    "professionisti",
    "utenti",
    "clienti",
    "consumatori",
    "mercato",
    "settore",
    "nicchia",
    "segmento",
    "audience",
];

pub const COMPETITION_INDICATORS: &[&str] = &[
    "competitor",
    "concorrenza",
    "concorrenti",
    "alternativa",
    "simile",
    "già esiste",
    "mercato saturo",
    "differenziazione",
    "vantaggio",
    "unicità",
];

pub const BUSINESS_MODEL_INDICATORS: &[&str] = &[
    "ricavi",
    "revenue",
    "prezzo",
    "abbonamento",
    "subscription",
    "freemium",
    "commissione",
    "fee",
    "vendita",
    "licenza",
    "b2b",
    "b2c",
    "monetizzazione",
    "sostenibilità",
    "scalabilità",
    "costi",
    "margine",
];

/// Claims that sound too good to be true.
pub const RED_FLAGS: &[&str] = &[
    "nessun problema",
    "tutti",
    "tutto",
    "facile",
    "semplice",
    "veloce",
    "senza competizione",
    "monopolio",
    "garantito",
    "sicuro al 100%",
    "nessun rischio",
    "soldi facili",
    "get rich quick",
];

pub const COMPETITION_RED_FLAGS: &[&str] = &[
    "nessun competitor",
    "nessuna concorrenza",
    "nessun concorrente",
    "senza competizione",
    "senza concorrenza",
    "non ci sono competitor",
    "non ha concorrenti",
    "monopolio",
];

pub const URGENCY_WORDS: &[&str] = &[
    "urgente",
    "critico",
    "importante",
    "necessario",
    "essenziale",
    "cruciale",
];

pub const PROBLEM_SCALE_WORDS: &[&str] = &[
    "milioni",
    "migliaia",
    "molti",
    "tutti",
    "ampio",
    "grande",
    "vasto",
];

pub const SOLUTION_TECH_WORDS: &[&str] = &[
    "tecnologia",
    "software",
    "app",
    "piattaforma",
    "sistema",
    "algoritmo",
];

pub const SOLUTION_DIFF_WORDS: &[&str] = &[
    "innovativo",
    "unico",
    "diverso",
    "nuovo",
    "rivoluzionario",
    "differente",
];

pub const SOLUTION_SCALE_WORDS: &[&str] = &[
    "scalabile",
    "crescita",
    "espansione",
    "globale",
    "milioni",
    "automatizzato",
];

pub const MARKET_SIZE_WORDS: &[&str] = &[
    "grande",
    "ampio",
    "milioni",
    "migliaia",
    "crescente",
    "in crescita",
];

pub const MARKET_ACCESS_WORDS: &[&str] = &[
    "accessibile",
    "raggiungibile",
    "contattabile",
    "online",
    "digitale",
];

pub const MARKET_GROWTH_WORDS: &[&str] = &[
    "crescita",
    "crescente",
    "in espansione",
    "emergente",
    "nuovo",
];

pub const OVERLY_BROAD_MARKET: &[&str] = &["tutti", "chiunque"];

pub const EASE_CLAIMS: &[&str] = &["facile", "semplice"];

pub const COMPETITION_DIFF_WORDS: &[&str] = &[
    "diverso",
    "meglio",
    "più",
    "migliore",
    "unico",
    "innovativo",
];

pub const COMPETITION_ADVANTAGE_WORDS: &[&str] = &[
    "vantaggio",
    "superiore",
    "migliore",
    "più veloce",
    "più economico",
    "più facile",
];

pub const REVENUE_WORDS: &[&str] = &[
    "ricavi",
    "revenue",
    "prezzo",
    "abbonamento",
    "vendita",
    "commissione",
    "fee",
];

pub const BUSINESS_SCALE_WORDS: &[&str] = &[
    "scalabile",
    "crescita",
    "margine",
    "costi",
    "automatizzato",
];

// ---------------------------------------------------------------------------
// Field validation lexicon
// ---------------------------------------------------------------------------

pub const PROFESSIONAL_TERMS: &[&str] = &[
    "developer",
    "sviluppatore",
    "consulente",
    "manager",
    "designer",
    "marketing",
    "frontend",
    "backend",
    "fullstack",
    "digital",
    "web",
    "mobile",
    "app",
    "startup",
    "azienda",
    "cliente",
    "progetto",
    "soluzione",
    "servizio",
    "esperienza",
    "competenza",
    "skill",
    "tecnologia",
    "piattaforma",
    "sistema",
];

pub const SUSPICIOUS_WORDS: &[&str] = &[
    "asdf", "qwerty", "test", "prova", "ciao", "hello", "abc", "xyz", "123", "aaa", "bbb",
    "ccc", "lorem", "ipsum",
];

// ---------------------------------------------------------------------------
// Compiled matchers
// ---------------------------------------------------------------------------

fn whole_word_regex(words: &[&str]) -> Regex {
    let alt = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({alt})\b")).unwrap()
}

pub static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| whole_word_regex(ACTION_VERBS));

pub static VAGUE_WORD_RE: Lazy<Regex> = Lazy::new(|| whole_word_regex(VAGUE_WORDS));

pub static SELF_REFERENCE_RE: Lazy<Regex> = Lazy::new(|| whole_word_regex(SELF_REFERENCE_WORDS));

pub static RESULT_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| whole_word_regex(RESULT_KEYWORDS));

pub static WEAK_CTA_RE: Lazy<Regex> = Lazy::new(|| whole_word_regex(WEAK_CTA_WORDS));

pub static SUSPICIOUS_WORD_RE: Lazy<Regex> = Lazy::new(|| whole_word_regex(SUSPICIOUS_WORDS));

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Case-insensitive substring test against any entry of `keywords`.
/// Expects `keywords` to be lower-case already.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Distinct lower-cased matches of `re` in `text`, in order of first occurrence.
pub fn distinct_matches(re: &Regex, text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in re.find_iter(text) {
        let word = m.as_str().to_lowercase();
        if !seen.contains(&word) {
            seen.push(word);
        }
    }
    seen
}
