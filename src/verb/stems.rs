use crate::concat::form;
use crate::conjugation::Conjugation;
use crate::error::{Error, ErrorKind};
use crate::parts::{Part, PrincipalParts};

/// Auxiliary written after the participle when a semi-deponent verb cites
/// its perfect, as in `gavisus sum`.
const SEMI_DEPONENT_AUXILIARY: &str = " sum";

/// The stems every form of a verb is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stems {
    /// The infinitive without its conjugation ending, which every ending
    /// table attaches to.
    pub(crate) root: String,
    /// Present stem, the root followed by its theme vowel.
    pub(crate) present: String,
    /// Perfect active stem, absent for semi-deponent and incomplete verbs.
    pub(crate) perfect: Option<String>,
    /// Stem of the perfect passive participle and the supine.
    pub(crate) participial: Option<String>,
}

impl Stems {
    /// The present stem, such as `ama` for `amare` or `cap` for `capere`.
    pub fn present(&self) -> &str {
        &self.present
    }

    pub(crate) fn root(&self) -> &str {
        &self.root
    }

    /// The perfect stem, such as `amav` for `amavi`.
    pub fn perfect(&self) -> Option<&str> {
        self.perfect.as_deref()
    }

    /// The participial stem, such as `amat` for `amatus`.
    pub fn participial(&self) -> Option<&str> {
        self.participial.as_deref()
    }
}

/// Extract stems from principal parts classified as the given conjugation.
///
/// Only a missing or mismatched infinitive is an error. Perfect and
/// participle parts which are absent, or which can't be used, leave their
/// stem absent.
pub(crate) fn extract(parts: &PrincipalParts, conjugation: Conjugation) -> Result<Stems, Error> {
    let infinitive = parts
        .get(Part::Infinitive)
        .ok_or(ErrorKind::MissingInfinitive)?;

    let root = infinitive
        .strip_suffix(conjugation.infinitive_suffix())
        .filter(|root| !root.is_empty())
        .ok_or_else(|| ErrorKind::UnknownInfinitive(infinitive.to_owned()))?;

    let mut participle = parts.get(Part::Participle);

    let perfect = match parts.get(Part::Perfect) {
        Some(perfect) => match perfect.strip_suffix(SEMI_DEPONENT_AUXILIARY) {
            Some(semi) => {
                tracing::debug!(perfect, "semi-deponent, no perfect active stem");
                participle = participle.or(Some(semi));
                None
            }
            None => strip(perfect, "i", Part::Perfect),
        },
        None => None,
    };

    let participial = participle.and_then(|participle| strip(participle, "us", Part::Participle));

    Ok(Stems {
        root: root.to_owned(),
        present: form([root, conjugation.theme_vowel()]),
        perfect,
        participial,
    })
}

fn strip(value: &str, suffix: &str, part: Part) -> Option<String> {
    match value.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => Some(stem.to_owned()),
        _ => {
            tracing::warn!(value, %part, "expected ending -{suffix}, treating as absent");
            None
        }
    }
}
