use fixed_map::{Map, Set};
use serde::Serialize;

use crate::conjugation::Conjugation;
use crate::forms::{Imperative, Infinitives, Mood, Participles, Persons, Tense, Voice};
use crate::parts::PrincipalParts;
use crate::verb::Verb;

/// One finite tense in one mood and voice.
#[derive(Debug, Clone, Serialize)]
pub struct Finite {
    pub tense: Tense,
    pub mood: Mood,
    pub voice: Voice,
    pub forms: Persons,
}

/// Every generated form of a verb.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct Paradigm {
    pub parts: PrincipalParts,
    pub conjugation: Conjugation,
    /// Finite forms ordered by tense, then mood, then voice.
    pub finite: Vec<Finite>,
    pub imperative: Map<Voice, Imperative>,
    pub infinitives: Infinitives,
    pub participles: Participles,
}

impl Paradigm {
    /// Get the forms of one tense, mood and voice.
    pub fn get(&self, tense: Tense, mood: Mood, voice: Voice) -> Option<&Persons> {
        self.finite
            .iter()
            .find(|f| f.tense == tense && f.mood == mood && f.voice == voice)
            .map(|f| &f.forms)
    }
}

impl Verb {
    /// Generate the full paradigm of the verb.
    pub fn paradigm(&self) -> Paradigm {
        let mut tenses = Set::new();

        for &tense in Tense::ALL {
            tenses.insert(tense);
        }

        self.paradigm_of(&tenses)
    }

    /// Generate the paradigm restricted to the given tenses.
    ///
    /// The imperative is included with the present tense.
    pub fn paradigm_of(&self, tenses: &Set<Tense>) -> Paradigm {
        let mut finite = Vec::new();

        for &tense in Tense::ALL {
            if !tenses.contains(tense) {
                continue;
            }

            for &mood in tense.moods() {
                for &voice in Voice::ALL {
                    if let Some(forms) = self.finite(tense, mood, voice) {
                        finite.push(Finite {
                            tense,
                            mood,
                            voice,
                            forms,
                        });
                    }
                }
            }
        }

        let mut imperative = Map::new();

        if tenses.contains(Tense::Present) {
            for &voice in Voice::ALL {
                imperative.insert(voice, self.imperative(voice));
            }
        }

        Paradigm {
            parts: self.parts().clone(),
            conjugation: self.conjugation(),
            finite,
            imperative,
            infinitives: self.infinitives(),
            participles: self.participles(),
        }
    }
}
