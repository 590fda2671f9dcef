use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::slide::Slide;
use crate::error::CoreError;
use crate::logo::LogoImage;

/// The full set of branding and content inputs submitted for generation.
///
/// Values are passed to the model unchanged; the only structural invariant
/// is that slide ids are unique within `slides`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub company_name: String,
    pub tagline: String,
    pub industry: String,
    pub target_audience: String,
    pub tone: Tone,
    pub brand_colors: BrandColors,
    pub brand_fonts: BrandFonts,
    #[serde(default)]
    pub logo_image: Option<LogoImage>,
    #[serde(default)]
    pub slides: Vec<Slide>,
    pub contact_info: String,
    pub locale: Locale,
}

impl ProfileRequest {
    /// The pre-filled request the form opens with.
    pub fn example() -> Self {
        Self {
            company_name: "Innovate Inc.".to_string(),
            tagline: "Pioneering Tomorrow's Solutions".to_string(),
            industry: "Technology & AI".to_string(),
            target_audience: "B2B enterprise clients".to_string(),
            tone: Tone::Formal,
            brand_colors: BrandColors::default(),
            brand_fonts: BrandFonts::default(),
            logo_image: None,
            slides: vec![
                Slide::new(
                    "About Us",
                    "We are a leading tech company focused on AI-driven solutions.",
                    "A modern office with people collaborating",
                ),
                Slide::new(
                    "Our Mission",
                    "To empower businesses with intelligent technology and drive innovation.",
                    "Abstract representation of neural networks",
                ),
            ],
            contact_info: "123 Tech Lane, Silicon Valley, CA\ncontact@innovate.com\ninnovate-inc.com"
                .to_string(),
            locale: Locale::En,
        }
    }

    /// Check that every slide id appears once.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = std::collections::HashSet::with_capacity(self.slides.len());
        for slide in &self.slides {
            if !seen.insert(slide.id) {
                return Err(CoreError::DuplicateSlideId(slide.id));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#1f2937".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandFonts {
    pub heading: String,
    pub body: String,
}

impl Default for BrandFonts {
    fn default() -> Self {
        Self {
            heading: "Inter".to_string(),
            body: "Roboto".to_string(),
        }
    }
}

/// Writing voice the model should use when rewriting slide text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Friendly,
    Bold,
    Luxury,
    Minimalist,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Formal,
        Tone::Friendly,
        Tone::Bold,
        Tone::Luxury,
        Tone::Minimalist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Bold => "bold",
            Tone::Luxury => "luxury",
            Tone::Minimalist => "minimalist",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Bold => "Bold",
            Tone::Luxury => "Luxury",
            Tone::Minimalist => "Minimalist",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::InvalidTone(s.to_string()))
    }
}

/// Output language of the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
    Tr,
    Es,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Ar, Locale::Es, Locale::Fr, Locale::Tr];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Tr => "tr",
            Locale::Es => "es",
            Locale::Fr => "fr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "Arabic (RTL)",
            Locale::Tr => "Turkish",
            Locale::Es => "Spanish",
            Locale::Fr => "French",
        }
    }

    /// Arabic is the only right-to-left locale.
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| CoreError::InvalidLocale(s.to_string()))
    }
}
