use crate::parts::Part;

/// An error raised while classifying or inflecting a verb.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// The kind of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Test if the error means that the verb could not be classified, in
    /// which case no form at all can be produced.
    pub fn is_classification(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingInfinitive
                | ErrorKind::UnknownInfinitive(..)
                | ErrorKind::AmbiguousInfinitive(..)
        )
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Missing present infinitive, the verb cannot be classified")]
    MissingInfinitive,
    #[error("Present infinitive `{0}` does not end in -are, -ere or -ire")]
    UnknownInfinitive(String),
    #[error("Present infinitive `{0}` needs a present first singular ending in -o to be classified")]
    AmbiguousInfinitive(String),
    #[error("Missing principal part: {0}")]
    MissingPrincipalPart(Part),
}
