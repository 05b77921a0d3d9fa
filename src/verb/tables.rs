//! Ending tables for each conjugation.
//!
//! Every ending attaches directly to the verb root, which is the present
//! infinitive without its `-are`, `-ere` or `-ire`.

use crate::conjugation::Conjugation;

/// Endings attached to the root of a verb in a given conjugation.
#[derive(Debug)]
pub(super) struct Table {
    pub(super) present_active: [&'static str; 6],
    pub(super) present_passive: [&'static str; 6],
    pub(super) subjunctive_active: [&'static str; 6],
    pub(super) subjunctive_passive: [&'static str; 6],
    pub(super) imperative: [&'static str; 2],
    /// Vowel joining the root to the `-ba-` of the imperfect.
    pub(super) imperfect: &'static str,
    pub(super) future_active: [&'static str; 6],
    pub(super) future_passive: [&'static str; 6],
    pub(super) present_participle: &'static str,
    pub(super) gerundive: &'static str,
    pub(super) passive_infinitive: &'static str,
}

/// The first conjugation table.
pub(super) static FIRST: &Table = &Table {
    present_active: ["o", "as", "at", "amus", "atis", "ant"],
    present_passive: ["or", "aris", "atur", "amur", "amini", "antur"],
    subjunctive_active: ["em", "es", "et", "emus", "etis", "ent"],
    subjunctive_passive: ["er", "eris", "etur", "emur", "emini", "entur"],
    imperative: ["a", "ate"],
    imperfect: "a",
    future_active: ["abo", "abis", "abit", "abimus", "abitis", "abunt"],
    future_passive: ["abor", "aberis", "abitur", "abimur", "abimini", "abuntur"],
    present_participle: "ans",
    gerundive: "andus",
    passive_infinitive: "ari",
};

/// The second conjugation table.
pub(super) static SECOND: &Table = &Table {
    present_active: ["eo", "es", "et", "emus", "etis", "ent"],
    present_passive: ["eor", "eris", "etur", "emur", "emini", "entur"],
    subjunctive_active: ["eam", "eas", "eat", "eamus", "eatis", "eant"],
    subjunctive_passive: ["ear", "earis", "eatur", "eamur", "eamini", "eantur"],
    imperative: ["e", "ete"],
    imperfect: "e",
    future_active: ["ebo", "ebis", "ebit", "ebimus", "ebitis", "ebunt"],
    future_passive: ["ebor", "eberis", "ebitur", "ebimur", "ebimini", "ebuntur"],
    present_participle: "ens",
    gerundive: "endus",
    passive_infinitive: "eri",
};

/// The third conjugation table.
pub(super) static THIRD: &Table = &Table {
    present_active: ["o", "is", "it", "imus", "itis", "unt"],
    present_passive: ["or", "eris", "itur", "imur", "imini", "untur"],
    subjunctive_active: ["am", "as", "at", "amus", "atis", "ant"],
    subjunctive_passive: ["ar", "aris", "atur", "amur", "amini", "antur"],
    imperative: ["e", "ite"],
    imperfect: "e",
    future_active: ["am", "es", "et", "emus", "etis", "ent"],
    future_passive: ["ar", "eris", "etur", "emur", "emini", "entur"],
    present_participle: "ens",
    gerundive: "endus",
    passive_infinitive: "i",
};

/// The third conjugation i-stem table.
pub(super) static THIRD_IO: &Table = &Table {
    present_active: ["io", "is", "it", "imus", "itis", "iunt"],
    present_passive: ["ior", "eris", "itur", "imur", "imini", "iuntur"],
    subjunctive_active: ["iam", "ias", "iat", "iamus", "iatis", "iant"],
    subjunctive_passive: ["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
    imperative: ["e", "ite"],
    imperfect: "ie",
    future_active: ["iam", "ies", "iet", "iemus", "ietis", "ient"],
    future_passive: ["iar", "ieris", "ietur", "iemur", "iemini", "ientur"],
    present_participle: "iens",
    gerundive: "iendus",
    passive_infinitive: "i",
};

/// The fourth conjugation table.
pub(super) static FOURTH: &Table = &Table {
    present_active: ["io", "is", "it", "imus", "itis", "iunt"],
    present_passive: ["ior", "iris", "itur", "imur", "imini", "iuntur"],
    subjunctive_active: ["iam", "ias", "iat", "iamus", "iatis", "iant"],
    subjunctive_passive: ["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
    imperative: ["i", "ite"],
    imperfect: "ie",
    future_active: ["iam", "ies", "iet", "iemus", "ietis", "ient"],
    future_passive: ["iar", "ieris", "ietur", "iemur", "iemini", "ientur"],
    present_participle: "iens",
    gerundive: "iendus",
    passive_infinitive: "iri",
};

impl Table {
    /// Look up the table for a conjugation.
    pub(super) fn of(conjugation: Conjugation) -> &'static Table {
        match conjugation {
            Conjugation::First => FIRST,
            Conjugation::Second => SECOND,
            Conjugation::Third => THIRD,
            Conjugation::ThirdIo => THIRD_IO,
            Conjugation::Fourth => FOURTH,
        }
    }
}

/// Imperfect indicative endings following the joining vowel.
pub(super) const IMPERFECT_ACTIVE: [&str; 6] = ["bam", "bas", "bat", "bamus", "batis", "bant"];
pub(super) const IMPERFECT_PASSIVE: [&str; 6] =
    ["bar", "baris", "batur", "bamur", "bamini", "bantur"];

/// Imperfect subjunctive endings attached to the present infinitive.
pub(super) const IMPERFECT_SUBJUNCTIVE_ACTIVE: [&str; 6] = ["m", "s", "t", "mus", "tis", "nt"];
pub(super) const IMPERFECT_SUBJUNCTIVE_PASSIVE: [&str; 6] =
    ["r", "ris", "tur", "mur", "mini", "ntur"];

// Endings attached to the perfect stem.
pub(super) const PERFECT: [&str; 6] = ["i", "isti", "it", "imus", "istis", "erunt/-ere"];
pub(super) const PERFECT_SUBJUNCTIVE: [&str; 6] =
    ["erim", "eris", "erit", "erimus", "eritis", "erint"];
pub(super) const PLUPERFECT: [&str; 6] = ["eram", "eras", "erat", "eramus", "eratis", "erant"];
pub(super) const PLUPERFECT_SUBJUNCTIVE: [&str; 6] =
    ["issem", "isses", "isset", "issemus", "issetis", "issent"];
pub(super) const FUTURE_PERFECT: [&str; 6] = ["ero", "eris", "erit", "erimus", "eritis", "erint"];

// Forms of `sum` used as the auxiliary of periphrastic passives.
pub(super) const SUM: [&str; 6] = ["sum", "es", "est", "sumus", "estis", "sunt"];
pub(super) const SIM: [&str; 6] = ["sim", "sis", "sit", "simus", "sitis", "sint"];
pub(super) const ERAM: [&str; 6] = ["eram", "eras", "erat", "eramus", "eratis", "erant"];
pub(super) const ESSEM: [&str; 6] = ["essem", "esses", "esset", "essemus", "essetis", "essent"];
pub(super) const ERO: [&str; 6] = ["ero", "eris", "erit", "erimus", "eritis", "erunt"];

/// Participle agreement in citation form, singular then plural.
pub(super) const AGREEMENT: [&str; 2] = ["us, -a, -um", "i, -ae, -a"];
