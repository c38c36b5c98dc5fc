/// Source of uniform indices used to pick question variants.
///
/// Implementations return a value in `0..len`; `len` is always at least 1.
/// Callers clamp the result, so an out-of-range pick never produces an
/// invalid session.
pub trait IndexSource {
    fn pick(&mut self, len: usize) -> usize;
}

impl<F> IndexSource for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Deterministic source that always picks the same index (clamped to the
/// last variant).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
