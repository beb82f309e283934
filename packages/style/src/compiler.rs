//! The directive compiler itself.
//!
//! One directive per present field, in fixed field order. Two derived
//! cases on top of the one-to-one mapping:
//!
//! - a non-auto `height` also emits [`Directive::FillCenter`], so inner
//!   content fills the fixed frame and centers vertically;
//! - `imageFit: auto` combined with a non-auto `height` resolves to a cover
//!   rule (a fixed-height section must crop, not letterbox). `auto` with an
//!   auto/absent height emits nothing — the renderer decides.

use serde::{Deserialize, Serialize};
use storekit_model::{Alignment, Background, Height, ImageFit, MaxWidth, Spacing, StyleConfig};

/// Overflow policy attached to a fixed-height section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
}

/// Resolved image containment rule. Unlike [`ImageFit`], `auto` never
/// survives compilation: it either resolves or emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFitRule {
    Cover,
    Contain,
    ScaleDown,
}

/// One atomic, resolved rendering instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "directive", rename_all = "kebab-case")]
pub enum Directive {
    PaddingY(Spacing),
    PaddingX(Spacing),
    MaxWidth(MaxWidth),
    Height { value: Height, overflow: Overflow },
    /// Companion to a fixed height: fill the frame, center inner content.
    FillCenter,
    Background(Background),
    TextAlign(Alignment),
    ImageFit(ImageFitRule),
}

impl Directive {
    /// The stable utility-class string a renderer attaches for this
    /// directive. Part of the public contract: tests and differs key on it.
    pub fn class_token(&self) -> &'static str {
        match self {
            Directive::PaddingY(Spacing::None) => "py-0",
            Directive::PaddingY(Spacing::S) => "py-8",
            Directive::PaddingY(Spacing::M) => "py-16",
            Directive::PaddingY(Spacing::L) => "py-24",
            Directive::PaddingY(Spacing::Xl) => "py-32",

            Directive::PaddingX(Spacing::None) => "px-0",
            Directive::PaddingX(Spacing::S) => "px-4",
            Directive::PaddingX(Spacing::M) => "px-6",
            Directive::PaddingX(Spacing::L) => "px-8",
            Directive::PaddingX(Spacing::Xl) => "px-12",

            Directive::MaxWidth(MaxWidth::Sm) => "max-w-screen-sm",
            Directive::MaxWidth(MaxWidth::Md) => "max-w-screen-md",
            Directive::MaxWidth(MaxWidth::Lg) => "max-w-screen-lg",
            Directive::MaxWidth(MaxWidth::Xl) => "max-w-screen-xl",
            Directive::MaxWidth(MaxWidth::Xxl) => "max-w-screen-2xl",
            Directive::MaxWidth(MaxWidth::Full) => "max-w-full",

            Directive::Height {
                value: Height::Auto,
                ..
            } => "h-auto",
            Directive::Height {
                value: Height::Half,
                ..
            } => "h-[50vh] overflow-hidden",
            Directive::Height {
                value: Height::Screen,
                ..
            } => "h-screen overflow-hidden",

            Directive::FillCenter => "flex flex-col justify-center",

            Directive::Background(Background::Base) => "bg-white",
            Directive::Background(Background::Muted) => "bg-neutral-50",
            Directive::Background(Background::Accent) => "bg-brand text-white",
            Directive::Background(Background::Inverted) => "bg-neutral-900 text-white",

            Directive::TextAlign(Alignment::Left) => "text-left",
            Directive::TextAlign(Alignment::Center) => "text-center",
            Directive::TextAlign(Alignment::Right) => "text-right",

            Directive::ImageFit(ImageFitRule::Cover) => "object-cover",
            Directive::ImageFit(ImageFitRule::Contain) => "object-contain",
            Directive::ImageFit(ImageFitRule::ScaleDown) => "object-scale-down",
        }
    }
}

/// Compile a style config into its ordered directive list.
pub fn compile(config: &StyleConfig) -> Vec<Directive> {
    let mut directives = Vec::new();

    if let Some(padding) = config.padding {
        directives.push(Directive::PaddingY(padding));
    }

    if let Some(padding_x) = config.padding_x {
        directives.push(Directive::PaddingX(padding_x));
    }

    if let Some(max_width) = config.max_width {
        directives.push(Directive::MaxWidth(max_width));
    }

    if let Some(height) = config.height {
        match height {
            Height::Auto => directives.push(Directive::Height {
                value: Height::Auto,
                overflow: Overflow::Visible,
            }),
            fixed => {
                directives.push(Directive::Height {
                    value: fixed,
                    overflow: Overflow::Hidden,
                });
                directives.push(Directive::FillCenter);
            }
        }
    }

    if let Some(background) = config.background {
        directives.push(Directive::Background(background));
    }

    if let Some(alignment) = config.alignment {
        directives.push(Directive::TextAlign(alignment));
    }

    if let Some(image_fit) = config.image_fit {
        let fixed_height = matches!(config.height, Some(h) if h != Height::Auto);
        let rule = match image_fit {
            ImageFit::Cover => Some(ImageFitRule::Cover),
            ImageFit::Contain => Some(ImageFitRule::Contain),
            ImageFit::ScaleDown => Some(ImageFitRule::ScaleDown),
            // Auto only resolves when the section has a fixed frame to fill.
            ImageFit::Auto if fixed_height => Some(ImageFitRule::Cover),
            ImageFit::Auto => None,
        };
        if let Some(rule) = rule {
            directives.push(Directive::ImageFit(rule));
        }
    }

    directives
}
