//! Pages and their ordered content blocks.
//!
//! `blocks` order is semantically meaningful: render order = list order.
//! Block `id`s are unique within their page; everything else is free-form
//! content owned by the block's family.

use crate::errors::ModelError;
use crate::style::StyleConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of page this is. The home page renders full-bleed; custom
/// pages get a clamped article layout with a title header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Custom,
}

/// A single storefront page: an ordered list of content blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: PageKind,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Page {
    /// Check structural invariants: block ids must be unique within the page.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (i, block) in self.blocks.iter().enumerate() {
            if self.blocks[..i].iter().any(|b| b.id == block.id) {
                return Err(ModelError::DuplicateBlockId(block.id.clone()));
            }
        }
        Ok(())
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }
}

/// The category of a block. Determines which registered variants are valid
/// renderers for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockFamily {
    Hero,
    Grid,
    Gallery,
    RichText,
    Promo,
    Video,
    Contact,
    Footer,
    Section,
}

impl BlockFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockFamily::Hero => "hero",
            BlockFamily::Grid => "grid",
            BlockFamily::Gallery => "gallery",
            BlockFamily::RichText => "rich-text",
            BlockFamily::Promo => "promo",
            BlockFamily::Video => "video",
            BlockFamily::Contact => "contact",
            BlockFamily::Footer => "footer",
            BlockFamily::Section => "section",
        }
    }
}

impl fmt::Display for BlockFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a page's ordered content list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Optional override for the family's default visual variant
    /// (e.g. "impact", "minimal").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
    /// Raw-markup fallback, used only by the `Section` family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub data: BlockData,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl Block {
    pub fn family(&self) -> BlockFamily {
        self.data.family()
    }

    /// Deep copy with a fresh id. Everything else, including derived
    /// sub-fields in `data`, is copied literally.
    pub fn duplicate_as(&self, id: String) -> Block {
        Block {
            id,
            ..self.clone()
        }
    }
}

/// Family-specific block payload, tagged by family on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockData {
    Hero(HeroData),
    Grid(GridData),
    Gallery(GalleryData),
    RichText(RichTextData),
    Promo(PromoData),
    Video(VideoData),
    Contact(ContactData),
    Footer(FooterData),
    Section(SectionData),
}

impl BlockData {
    pub fn family(&self) -> BlockFamily {
        match self {
            BlockData::Hero(_) => BlockFamily::Hero,
            BlockData::Grid(_) => BlockFamily::Grid,
            BlockData::Gallery(_) => BlockFamily::Gallery,
            BlockData::RichText(_) => BlockFamily::RichText,
            BlockData::Promo(_) => BlockFamily::Promo,
            BlockData::Video(_) => BlockFamily::Video,
            BlockData::Contact(_) => BlockFamily::Contact,
            BlockData::Footer(_) => BlockFamily::Footer,
            BlockData::Section(_) => BlockFamily::Section,
        }
    }

    /// The shared structural style sub-object, if the block carries one.
    pub fn style(&self) -> Option<&StyleConfig> {
        match self {
            BlockData::Hero(d) => d.style.as_ref(),
            BlockData::Grid(d) => d.style.as_ref(),
            BlockData::Gallery(d) => d.style.as_ref(),
            BlockData::RichText(d) => d.style.as_ref(),
            BlockData::Promo(d) => d.style.as_ref(),
            BlockData::Video(d) => d.style.as_ref(),
            BlockData::Contact(d) => d.style.as_ref(),
            BlockData::Footer(d) => d.style.as_ref(),
            BlockData::Section(d) => d.style.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroData {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub image: Option<String>,
    pub button_text: Option<String>,
    pub style: Option<StyleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridData {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    /// Collection handle to pull products from; absent = latest.
    pub collection: Option<String>,
    pub style: Option<StyleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryData {
    pub heading: Option<String>,
    pub images: Vec<String>,
    pub style: Option<StyleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichTextData {
    pub body: Option<String>,
    pub style: Option<StyleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromoData {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub button_text: Option<String>,
    pub style: Option<StyleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoData {
    pub url: Option<String>,
    pub caption: Option<String>,
    pub style: Option<StyleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactData {
    pub heading: Option<String>,
    pub email: Option<String>,
    pub style: Option<StyleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterData {
    pub tagline: Option<String>,
    pub style: Option<StyleConfig>,
}

/// Generic raw-markup section. The markup itself lives in `Block.content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionData {
    pub style: Option<StyleConfig>,
}
