//! The shapes of generated forms and the selectors used to request them.

use core::fmt;

use fixed_map::Key;
use serde::{Deserialize, Serialize};

/// The text produced in place of a passive imperative, which regular verbs
/// lack.
pub const PASSIVE_IMPERATIVE: &str = "The passive imperative exists mostly in deponent verbs.";

macro_rules! keyword {
    ($vis:vis enum $name:ident { $($(#[doc = $doc:literal])* $variant:ident = $keyword:literal),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
        #[derive(Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        $vis enum $name {
            $($(#[doc = $doc])* $variant,)*
        }

        impl $name {
            /// Every value in canonical order.
            $vis const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The keyword used to name this value.
            $vis fn keyword(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword,)*
                }
            }

            /// Parse a keyword, as produced by [`Self::keyword`].
            $vis fn parse_keyword(input: &str) -> Option<Self> {
                match input {
                    $($keyword => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.keyword().fmt(f)
            }
        }
    }
}

keyword! {
    pub enum Tense {
        Present = "present",
        Imperfect = "imperfect",
        Future = "future",
        Perfect = "perfect",
        Pluperfect = "pluperfect",
        FuturePerfect = "future-perfect",
    }
}

impl Tense {
    /// Moods the tense is inflected in.
    pub fn moods(&self) -> &'static [Mood] {
        match self {
            Tense::Future | Tense::FuturePerfect => &[Mood::Indicative],
            _ => Mood::ALL,
        }
    }

    /// Test if the tense is built on the perfect stem.
    pub fn is_perfect_system(&self) -> bool {
        matches!(self, Tense::Perfect | Tense::Pluperfect | Tense::FuturePerfect)
    }
}

keyword! {
    pub enum Mood {
        Indicative = "indicative",
        Subjunctive = "subjunctive",
    }
}

keyword! {
    pub enum Voice {
        Active = "active",
        Passive = "passive",
    }
}

keyword! {
    pub enum Person {
        First = "first",
        Second = "second",
        Third = "third",
    }
}

keyword! {
    pub enum Number {
        Singular = "singular",
        Plural = "plural",
    }
}

keyword! {
    pub enum Infinitive {
        PresentActive = "present-active",
        PresentPassive = "present-passive",
        PerfectActive = "perfect-active",
        PerfectPassive = "perfect-passive",
        FutureActive = "future-active",
        FuturePassive = "future-passive",
    }
}

keyword! {
    pub enum Participle {
        PresentActive = "present-active",
        PerfectPassive = "perfect-passive",
        FutureActive = "future-active",
        /// The gerundive.
        FuturePassive = "future-passive",
    }
}

/// The six person and number forms of a finite tense.
///
/// Slots are ordered `1sg, 2sg, 3sg, 1pl, 2pl, 3pl`, and a slot is `None`
/// when the principal part it is built from is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Persons {
    slots: [Option<String>; 6],
}

impl Persons {
    pub(crate) fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Option<String>,
    {
        Self {
            slots: std::array::from_fn(f),
        }
    }

    /// All slots absent.
    pub(crate) fn absent() -> Self {
        Self::from_fn(|_| None)
    }

    /// Get the form for the given person and number.
    pub fn get(&self, person: Person, number: Number) -> Option<&str> {
        let index = match number {
            Number::Singular => 0,
            Number::Plural => 3,
        } + match person {
            Person::First => 0,
            Person::Second => 1,
            Person::Third => 2,
        };

        self.slots[index].as_deref()
    }

    /// Iterate over slots in citation order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.slots.iter().map(Option::as_deref)
    }

    /// Test if every slot is absent.
    pub fn is_absent(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Test if every slot is present.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl PartialEq<[&str; 6]> for Persons {
    fn eq(&self, other: &[&str; 6]) -> bool {
        self.iter().zip(other).all(|(a, b)| a == Some(*b))
    }
}

impl PartialEq<[Option<&str>; 6]> for Persons {
    fn eq(&self, other: &[Option<&str>; 6]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

/// The present imperative of a verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Imperative {
    /// Second person singular and plural, serialized as a two element array.
    Forms([String; 2]),
    /// Regular verbs do not form this imperative, and a fixed explanation is
    /// given instead.
    Unattested(&'static str),
}

impl PartialEq<[&str; 2]> for Imperative {
    fn eq(&self, other: &[&str; 2]) -> bool {
        match self {
            Imperative::Forms(forms) => forms[0] == other[0] && forms[1] == other[1],
            Imperative::Unattested(..) => false,
        }
    }
}

impl PartialEq<&str> for Imperative {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Imperative::Unattested(text) if text == other)
    }
}

/// The infinitives of a verb, in the order given by [`Infinitive::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Infinitives {
    slots: [Option<String>; 6],
}

impl Infinitives {
    pub(crate) fn new(slots: [Option<String>; 6]) -> Self {
        Self { slots }
    }

    /// Get the given infinitive.
    pub fn get(&self, infinitive: Infinitive) -> Option<&str> {
        self.slots[infinitive as usize].as_deref()
    }

    /// Iterate over all infinitives.
    pub fn iter(&self) -> impl Iterator<Item = (Infinitive, Option<&str>)> + '_ {
        Infinitive::ALL.iter().map(|&i| (i, self.get(i)))
    }
}

impl PartialEq<[Option<&str>; 6]> for Infinitives {
    fn eq(&self, other: &[Option<&str>; 6]) -> bool {
        self.slots.iter().map(Option::as_deref).eq(other.iter().copied())
    }
}

/// The participles of a verb, in the order given by [`Participle::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participles {
    slots: [Option<String>; 4],
}

impl Participles {
    pub(crate) fn new(slots: [Option<String>; 4]) -> Self {
        Self { slots }
    }

    /// Get the given participle.
    pub fn get(&self, participle: Participle) -> Option<&str> {
        self.slots[participle as usize].as_deref()
    }

    /// Iterate over all participles.
    pub fn iter(&self) -> impl Iterator<Item = (Participle, Option<&str>)> + '_ {
        Participle::ALL.iter().map(|&p| (p, self.get(p)))
    }
}

impl PartialEq<[Option<&str>; 4]> for Participles {
    fn eq(&self, other: &[Option<&str>; 4]) -> bool {
        self.slots.iter().map(Option::as_deref).eq(other.iter().copied())
    }
}
