//! Classification of a verb into one of the regular conjugations.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// The conjugation class of a regular verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub enum Conjugation {
    /// First conjugation, `amo, amare`.
    #[serde(rename = "1")]
    First,
    /// Second conjugation, `moneo, monere`.
    #[serde(rename = "2")]
    Second,
    /// Third conjugation, `rego, regere`.
    #[serde(rename = "3")]
    Third,
    /// Third conjugation i-stem, `capio, capere`.
    #[serde(rename = "3io")]
    ThirdIo,
    /// Fourth conjugation, `audio, audire`.
    #[serde(rename = "4")]
    Fourth,
}

impl Conjugation {
    /// The short tag of the conjugation.
    pub fn tag(&self) -> &'static str {
        match self {
            Conjugation::First => "1",
            Conjugation::Second => "2",
            Conjugation::Third => "3",
            Conjugation::ThirdIo => "3io",
            Conjugation::Fourth => "4",
        }
    }

    /// The ending of the present infinitive which is stripped to get the
    /// verb root.
    pub(crate) fn infinitive_suffix(&self) -> &'static str {
        match self {
            Conjugation::First => "are",
            Conjugation::Second | Conjugation::Third | Conjugation::ThirdIo => "ere",
            Conjugation::Fourth => "ire",
        }
    }

    /// The vowel kept at the end of the present stem.
    pub(crate) fn theme_vowel(&self) -> &'static str {
        match self {
            Conjugation::First => "a",
            Conjugation::Second => "e",
            Conjugation::Third | Conjugation::ThirdIo => "",
            Conjugation::Fourth => "i",
        }
    }
}

impl fmt::Display for Conjugation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tag().fmt(f)
    }
}

/// Classify a verb based on its present first singular and present
/// infinitive.
///
/// Only the infinitive is strictly required. The first singular is consulted
/// to tell apart the conjugations sharing the `-ere` infinitive.
///
/// # Examples
///
/// ```
/// use verba::{classify, Conjugation};
///
/// assert_eq!(classify(Some("amo"), Some("amare"))?, Conjugation::First);
/// assert_eq!(classify(Some("capio"), Some("capere"))?, Conjugation::ThirdIo);
/// assert_eq!(classify(None, Some("audire"))?, Conjugation::Fourth);
/// assert!(classify(Some("sum"), Some("esse")).is_err());
/// # Ok::<_, verba::Error>(())
/// ```
pub fn classify(present: Option<&str>, infinitive: Option<&str>) -> Result<Conjugation, Error> {
    let Some(infinitive) = infinitive else {
        return Err(Error::new(ErrorKind::MissingInfinitive));
    };

    let root = |suffix: &str| infinitive.strip_suffix(suffix).filter(|r| !r.is_empty());

    if root("are").is_some() {
        return Ok(Conjugation::First);
    }

    if root("ire").is_some() {
        return Ok(Conjugation::Fourth);
    }

    if root("ere").is_none() {
        return Err(Error::new(ErrorKind::UnknownInfinitive(
            infinitive.to_owned(),
        )));
    }

    // The second and third conjugations share the -ere infinitive
    // so the first singular decides.
    let conjugation = match present {
        Some(p) if p.ends_with("eo") => Conjugation::Second,
        Some(p) if p.ends_with("io") => Conjugation::ThirdIo,
        Some(p) if p.ends_with('o') => Conjugation::Third,
        _ => {
            return Err(Error::new(ErrorKind::AmbiguousInfinitive(
                infinitive.to_owned(),
            )));
        }
    };

    Ok(conjugation)
}
