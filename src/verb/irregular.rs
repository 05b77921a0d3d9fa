/// Verbs with a shortened singular imperative, keyed by the present first
/// singular.
static SHORT_IMPERATIVES: &[(&str, [&str; 2])] = &[
    ("dico", ["dic", "dicite"]),
    ("duco", ["duc", "ducite"]),
    ("facio", ["fac", "facite"]),
];

/// Look up the irregular imperative of a verb, if it has one.
pub(super) fn imperative(present: &str) -> Option<[&'static str; 2]> {
    SHORT_IMPERATIVES
        .iter()
        .find(|(lemma, _)| *lemma == present)
        .map(|(_, forms)| *forms)
}
