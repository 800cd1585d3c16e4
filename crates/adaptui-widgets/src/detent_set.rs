#![forbid(unsafe_code)]

//! The detent set a surface offers to its host overlay mechanism.
//!
//! Hosts need at least two height detents to allow a drag transition
//! between sizes, so the set always contains the primary/secondary pair;
//! the full-size detent joins only while content exceeds the height limit.

use adaptui_core::Detent;

/// Ordered collection of detents offered for one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetentSet {
    /// The most recently committed best-fit detent.
    pub primary: Detent,
    /// The shadow detent kept one point below the primary.
    pub secondary: Detent,
    /// Whether the full-size detent is part of the offer.
    pub includes_large: bool,
}

impl DetentSet {
    /// Create a detent set.
    #[must_use]
    pub const fn new(primary: Detent, secondary: Detent, includes_large: bool) -> Self {
        Self {
            primary,
            secondary,
            includes_large,
        }
    }

    /// Number of offered detents.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.includes_large { 3 } else { 2 }
    }

    /// A detent set is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `detent` is part of the offer.
    #[must_use]
    pub fn contains(&self, detent: Detent) -> bool {
        detent == self.primary
            || detent == self.secondary
            || (self.includes_large && detent.is_large())
    }

    /// Iterate the offered detents in presentation order: primary, then
    /// secondary, then (when offered) large.
    pub fn iter(&self) -> impl Iterator<Item = Detent> {
        let large = if self.includes_large {
            Some(Detent::Large)
        } else {
            None
        };
        [self.primary, self.secondary]
            .into_iter()
            .chain(large)
    }
}

impl IntoIterator for DetentSet {
    type Item = Detent;
    type IntoIter = std::vec::IntoIter<Detent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}
