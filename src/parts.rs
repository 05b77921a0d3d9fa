use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the four principal parts of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    /// Present active indicative, first person singular (`amo`).
    Present,
    /// Present active infinitive (`amare`).
    Infinitive,
    /// Perfect active indicative, first person singular (`amavi`).
    Perfect,
    /// Perfect passive participle (`amatus`).
    Participle,
}

impl Part {
    pub const ALL: [Part; 4] = [
        Part::Present,
        Part::Infinitive,
        Part::Perfect,
        Part::Participle,
    ];

    /// Describe the principal part.
    pub fn describe(&self) -> &'static str {
        match self {
            Part::Present => "present first singular",
            Part::Infinitive => "present infinitive",
            Part::Perfect => "perfect first singular",
            Part::Participle => "perfect passive participle",
        }
    }
}

impl fmt::Display for Part {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe().fmt(f)
    }
}

/// The principal parts of a verb, any of which may be absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalParts {
    present: Option<String>,
    infinitive: Option<String>,
    perfect: Option<String>,
    participle: Option<String>,
}

impl PrincipalParts {
    /// Construct principal parts from a sequence in citation order.
    ///
    /// Parts missing at the end of the sequence are absent, and anything
    /// beyond the fourth part is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use verba::{Part, PrincipalParts};
    ///
    /// let parts = PrincipalParts::new([Some("impero"), Some("imperare")]);
    /// assert_eq!(parts.get(Part::Infinitive), Some("imperare"));
    /// assert_eq!(parts.get(Part::Participle), None);
    /// ```
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut it = parts
            .into_iter()
            .map(|part| part.map(|s| s.as_ref().to_owned()));

        Self {
            present: it.next().flatten(),
            infinitive: it.next().flatten(),
            perfect: it.next().flatten(),
            participle: it.next().flatten(),
        }
    }

    /// Get the given principal part.
    pub fn get(&self, part: Part) -> Option<&str> {
        let value = match part {
            Part::Present => &self.present,
            Part::Infinitive => &self.infinitive,
            Part::Perfect => &self.perfect,
            Part::Participle => &self.participle,
        };

        value.as_deref()
    }

    /// Iterate over all parts in citation order.
    pub fn iter(&self) -> impl Iterator<Item = (Part, Option<&str>)> + '_ {
        Part::ALL.into_iter().map(move |part| (part, self.get(part)))
    }
}

impl fmt::Display for PrincipalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.iter().peekable();

        while let Some((_, value)) = it.next() {
            write!(f, "{}", value.unwrap_or("-"))?;

            if it.peek().is_some() {
                write!(f, ", ")?;
            }
        }

        Ok(())
    }
}
