//! Client-side tracking core.
//!
//! [`progress`] computes completion ratios for minis and collections of minis, [`cascade`]
//! decides which stages a toggle affects and how their timestamps change, and [`toggle`] runs
//! the optimistic stage-toggle protocol against a host holding the dashboard tree.

pub mod cascade;
pub mod progress;
pub mod toggle;

#[cfg(test)]
pub(crate) mod test_support;
