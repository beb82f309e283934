//! # Storekit Model
//!
//! Core data model shared by every Storekit crate.
//!
//! A storefront site is a set of [`Page`]s, each an ordered list of
//! [`Block`]s. A block belongs to a [`BlockFamily`] (hero, grid, gallery, …),
//! optionally names a visual `variant` within that family, and carries
//! family-specific [`BlockData`] plus an optional shared [`StyleConfig`].
//!
//! The catalog side of the model ([`ProductVariantOption`],
//! [`ProductVariant`]) backs the combinatorial variant matrix generated by
//! `storekit-catalog`.
//!
//! Everything here is plain serde-serializable data: the persistence
//! collaborator hands these types in as snapshots and receives them back
//! unchanged. No I/O happens in this crate.

mod catalog;
mod errors;
mod id_generator;
mod page;
mod store;
mod style;

pub use catalog::{ProductVariant, ProductVariantOption};
pub use errors::ModelError;
pub use id_generator::IdGenerator;
pub use page::{
    Block, BlockData, BlockFamily, ContactData, FooterData, GalleryData, GridData, HeroData, Page,
    PageKind, PromoData, RichTextData, SectionData, VideoData,
};
pub use store::StoreConfig;
pub use style::{Alignment, Background, Height, ImageFit, MaxWidth, Spacing, StyleConfig};
