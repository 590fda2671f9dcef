use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One content unit of the profile; becomes one page of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    /// Hint the model uses to draw a placeholder graphic.
    pub image_description: String,
}

impl Slide {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        image_description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            text: text.into(),
            image_description: image_description.into(),
        }
    }

    pub fn empty(id: Uuid) -> Self {
        Self {
            id,
            title: String::new(),
            text: String::new(),
            image_description: String::new(),
        }
    }
}

/// The editable part of a slide, used to overwrite it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub image_description: String,
}

/// A single-field edit to one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SlideUpdate {
    Title(String),
    Text(String),
    ImageDescription(String),
}
