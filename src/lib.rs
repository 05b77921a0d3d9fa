//! Conjugation of regular Latin verbs from their principal parts.
//!
//! A [`Verb`] is classified once when constructed, after which every tense,
//! the imperative, the infinitives and the participles can be generated from
//! it. Principal parts which are missing only cause the forms built from them
//! to be absent.

mod concat;

mod conjugation;
pub use self::conjugation::{classify, Conjugation};

mod error;
pub use self::error::{Error, ErrorKind};

mod forms;
pub use self::forms::{
    Imperative, Infinitive, Infinitives, Mood, Number, Participle, Participles, Person, Persons,
    Tense, Voice, PASSIVE_IMPERATIVE,
};

mod paradigm;
pub use self::paradigm::{Finite, Paradigm};

mod parts;
pub use self::parts::{Part, PrincipalParts};

pub mod verb;
pub use self::verb::{Stems, Verb};
