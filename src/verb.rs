//! Module which performs verb conjugation, based on a verb's conjugation class.

mod irregular;
mod stems;
mod tables;

pub use self::stems::Stems;

use crate::concat::form;
use crate::conjugation::{classify, Conjugation};
use crate::error::{Error, ErrorKind};
use crate::forms::{
    Imperative, Infinitives, Mood, Participles, Persons, Tense, Voice, PASSIVE_IMPERATIVE,
};
use crate::parts::{Part, PrincipalParts};

use self::tables::Table;

/// A regular verb, classified and ready to be conjugated.
///
/// # Examples
///
/// ```
/// use verba::{Conjugation, Mood, PrincipalParts, Verb, Voice};
///
/// let verb = Verb::new(PrincipalParts::new([
///     Some("amo"),
///     Some("amare"),
///     Some("amavi"),
///     Some("amatus"),
/// ]))?;
///
/// assert_eq!(verb.conjugation(), Conjugation::First);
/// assert_eq!(
///     verb.present(Mood::Indicative, Voice::Active),
///     ["amo", "amas", "amat", "amamus", "amatis", "amant"]
/// );
/// # Ok::<_, verba::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Verb {
    parts: PrincipalParts,
    conjugation: Conjugation,
    stems: Stems,
}

impl Verb {
    /// Classify the given principal parts and extract their stems.
    ///
    /// Fails if the verb can't be classified. Every other missing part only
    /// results in absent forms.
    pub fn new(parts: PrincipalParts) -> Result<Self, Error> {
        let conjugation = classify(parts.get(Part::Present), parts.get(Part::Infinitive))?;
        let stems = stems::extract(&parts, conjugation)?;
        tracing::debug!(%parts, %conjugation, ?stems);

        Ok(Self {
            parts,
            conjugation,
            stems,
        })
    }

    /// The principal parts the verb was constructed from.
    pub fn parts(&self) -> &PrincipalParts {
        &self.parts
    }

    /// The conjugation class of the verb.
    pub fn conjugation(&self) -> Conjugation {
        self.conjugation
    }

    /// The stems of the verb.
    pub fn stems(&self) -> &Stems {
        &self.stems
    }

    /// The perfect stem, failing if the verb has none.
    pub fn perfect_stem(&self) -> Result<&str, Error> {
        self.stems
            .perfect()
            .ok_or_else(|| Error::new(ErrorKind::MissingPrincipalPart(Part::Perfect)))
    }

    /// The participial stem, failing if the verb has none.
    pub fn participial_stem(&self) -> Result<&str, Error> {
        self.stems
            .participial()
            .ok_or_else(|| Error::new(ErrorKind::MissingPrincipalPart(Part::Participle)))
    }

    /// Forms of the given tense, or `None` if the tense isn't inflected in
    /// the given mood.
    pub fn finite(&self, tense: Tense, mood: Mood, voice: Voice) -> Option<Persons> {
        let persons = match (tense, mood) {
            (Tense::Present, mood) => self.present(mood, voice),
            (Tense::Imperfect, mood) => self.imperfect(mood, voice),
            (Tense::Future, Mood::Indicative) => self.future(voice),
            (Tense::Perfect, mood) => self.perfect(mood, voice),
            (Tense::Pluperfect, mood) => self.pluperfect(mood, voice),
            (Tense::FuturePerfect, Mood::Indicative) => self.future_perfect(voice),
            (Tense::Future | Tense::FuturePerfect, Mood::Subjunctive) => return None,
        };

        Some(persons)
    }

    /// The present tense.
    pub fn present(&self, mood: Mood, voice: Voice) -> Persons {
        let t = self.table();

        let endings = match (mood, voice) {
            (Mood::Indicative, Voice::Active) => &t.present_active,
            (Mood::Indicative, Voice::Passive) => &t.present_passive,
            (Mood::Subjunctive, Voice::Active) => &t.subjunctive_active,
            (Mood::Subjunctive, Voice::Passive) => &t.subjunctive_passive,
        };

        attach(Some(self.stems.root()), "", endings)
    }

    /// The present imperative, second person singular and plural.
    ///
    /// Regular verbs have no passive imperative, so a fixed explanation is
    /// returned in its place.
    pub fn imperative(&self, voice: Voice) -> Imperative {
        if let Voice::Passive = voice {
            return Imperative::Unattested(PASSIVE_IMPERATIVE);
        }

        if let Some([singular, plural]) = self
            .parts
            .get(Part::Present)
            .and_then(irregular::imperative)
        {
            return Imperative::Forms([singular.to_owned(), plural.to_owned()]);
        }

        let [singular, plural] = self.table().imperative;

        Imperative::Forms([
            form([self.stems.root(), singular]),
            form([self.stems.root(), plural]),
        ])
    }

    /// The imperfect tense.
    pub fn imperfect(&self, mood: Mood, voice: Voice) -> Persons {
        let root = Some(self.stems.root());

        match (mood, voice) {
            (Mood::Indicative, Voice::Active) => {
                attach(root, self.table().imperfect, &tables::IMPERFECT_ACTIVE)
            }
            (Mood::Indicative, Voice::Passive) => {
                attach(root, self.table().imperfect, &tables::IMPERFECT_PASSIVE)
            }
            (Mood::Subjunctive, Voice::Active) => attach(
                root,
                self.conjugation.infinitive_suffix(),
                &tables::IMPERFECT_SUBJUNCTIVE_ACTIVE,
            ),
            (Mood::Subjunctive, Voice::Passive) => attach(
                root,
                self.conjugation.infinitive_suffix(),
                &tables::IMPERFECT_SUBJUNCTIVE_PASSIVE,
            ),
        }
    }

    /// The future tense, which only exists in the indicative.
    pub fn future(&self, voice: Voice) -> Persons {
        let t = self.table();

        let endings = match voice {
            Voice::Active => &t.future_active,
            Voice::Passive => &t.future_passive,
        };

        attach(Some(self.stems.root()), "", endings)
    }

    /// The perfect tense.
    ///
    /// Active forms are absent without a perfect stem, passive forms without
    /// a participial stem.
    pub fn perfect(&self, mood: Mood, voice: Voice) -> Persons {
        match (mood, voice) {
            (Mood::Indicative, Voice::Active) => {
                attach(self.stems.perfect(), "", &tables::PERFECT)
            }
            (Mood::Subjunctive, Voice::Active) => {
                attach(self.stems.perfect(), "", &tables::PERFECT_SUBJUNCTIVE)
            }
            (Mood::Indicative, Voice::Passive) => self.periphrastic(&tables::SUM),
            (Mood::Subjunctive, Voice::Passive) => self.periphrastic(&tables::SIM),
        }
    }

    /// The pluperfect tense.
    pub fn pluperfect(&self, mood: Mood, voice: Voice) -> Persons {
        match (mood, voice) {
            (Mood::Indicative, Voice::Active) => {
                attach(self.stems.perfect(), "", &tables::PLUPERFECT)
            }
            (Mood::Subjunctive, Voice::Active) => {
                attach(self.stems.perfect(), "", &tables::PLUPERFECT_SUBJUNCTIVE)
            }
            (Mood::Indicative, Voice::Passive) => self.periphrastic(&tables::ERAM),
            (Mood::Subjunctive, Voice::Passive) => self.periphrastic(&tables::ESSEM),
        }
    }

    /// The future perfect tense, which only exists in the indicative.
    pub fn future_perfect(&self, voice: Voice) -> Persons {
        match voice {
            Voice::Active => attach(self.stems.perfect(), "", &tables::FUTURE_PERFECT),
            Voice::Passive => self.periphrastic(&tables::ERO),
        }
    }

    /// The infinitives in the order present active, present passive, perfect
    /// active, perfect passive, future active and future passive.
    pub fn infinitives(&self) -> Infinitives {
        let root = self.stems.root();
        let perfect = self.stems.perfect();
        let participial = self.stems.participial();

        Infinitives::new([
            Some(form([root, self.conjugation.infinitive_suffix()])),
            Some(form([root, self.table().passive_infinitive])),
            perfect.map(|s| form([s, "isse"])),
            participial.map(|s| form([s, "us esse"])),
            participial.map(|s| form([s, "urus esse"])),
            participial.map(|s| form([s, "um iri"])),
        ])
    }

    /// The participles in the order present active, perfect passive, future
    /// active and future passive (the gerundive).
    pub fn participles(&self) -> Participles {
        let t = self.table();
        let root = self.stems.root();
        let participial = self.stems.participial();

        Participles::new([
            Some(form([root, t.present_participle, ", -ntis"])),
            participial.map(|s| form([s, "us, -a, -um"])),
            participial.map(|s| form([s, "urus, -a, -um"])),
            Some(form([root, t.gerundive, ", -a, -um"])),
        ])
    }

    fn table(&self) -> &'static Table {
        Table::of(self.conjugation)
    }

    /// Build a periphrastic passive out of the perfect passive participle and
    /// a form of the auxiliary.
    fn periphrastic(&self, auxiliary: &[&str; 6]) -> Persons {
        let Some(participial) = self.stems.participial() else {
            return Persons::absent();
        };

        Persons::from_fn(|i| {
            Some(form([
                participial,
                tables::AGREEMENT[i / 3],
                " ",
                auxiliary[i],
            ]))
        })
    }
}

/// Attach endings to a stem, joined by an infix which may be empty.
fn attach(stem: Option<&str>, infix: &str, endings: &[&str; 6]) -> Persons {
    let Some(stem) = stem else {
        return Persons::absent();
    };

    Persons::from_fn(|i| Some(form([stem, infix, endings[i]])))
}
