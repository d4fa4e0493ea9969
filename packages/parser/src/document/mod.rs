//! Document types and structural lookups.
//!
//! A [`DocumentProfile`] says how raw text of one document type is cleaned
//! and which rule forest segments it. [`LegalDocument`] holds the result;
//! the [`Statute`] façades translate citations such as "chapter 2, article
//! 30" into identifiers and look them up in the tree.

mod constitution;
mod consumer_rights;
mod generic;
mod legal;
mod locator;
mod profile;
mod statute;

pub use constitution::Constitution;
pub use consumer_rights::ConsumerRightsAct;
pub use generic::GenericDocument;
pub use legal::LegalDocument;
pub use locator::{Level, Locator};
pub use profile::{
    ConstitutionProfile, ConsumerRightsProfile, CustomProfile, DocumentProfile, ProfileDefinition,
};
pub use statute::Statute;
