/// A concatenation of multiple borrowed strings with fixed size storage.
///
/// Inflected forms are assembled from a stem and a handful of endings, so the
/// storage never needs to grow beyond a small known bound.
struct Concat<'a, const N: usize> {
    storage: arrayvec::ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Concat<'a, N> {
    /// Concatenate the given strings together into a single composite string.
    ///
    /// # Panics
    ///
    /// Panics if more than `N` fragments are provided.
    fn new<I>(iter: I) -> Concat<'a, N>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Concat {
            storage: iter.into_iter().collect(),
        }
    }

    /// Render into an owned string.
    fn into_string(self) -> String {
        let len = self.storage.iter().map(|s| s.len()).sum();
        let mut out = String::with_capacity(len);

        for s in self.storage {
            out.push_str(s);
        }

        out
    }
}

/// Build an owned form out of fragments.
pub(crate) fn form<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    Concat::<'a, 4>::new(fragments).into_string()
}
