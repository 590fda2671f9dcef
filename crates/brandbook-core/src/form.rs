//! Form state controller.
//!
//! `ProfileForm` owns the profile request being edited and exposes the
//! field-level operations the form issues. No value is validated beyond its
//! type; the model decides whether the inputs make a sensible profile.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::CoreError;
use crate::logo::LogoImage;
use crate::models::profile::{Locale, ProfileRequest, Tone};
use crate::models::slide::{Slide, SlideContent, SlideUpdate};

/// A single-field edit to the request, including nested color and font fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    CompanyName(String),
    Tagline(String),
    Industry(String),
    TargetAudience(String),
    Tone(Tone),
    Locale(Locale),
    PrimaryColor(String),
    SecondaryColor(String),
    HeadingFont(String),
    BodyFont(String),
    ContactInfo(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    request: ProfileRequest,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            request: ProfileRequest::example(),
        }
    }
}

impl ProfileForm {
    pub fn new(request: ProfileRequest) -> Result<Self, CoreError> {
        request.validate()?;
        Ok(Self { request })
    }

    pub fn request(&self) -> &ProfileRequest {
        &self.request
    }

    /// Clone of the current request, as submitted for generation.
    pub fn snapshot(&self) -> ProfileRequest {
        self.request.clone()
    }

    pub fn replace(&mut self, request: ProfileRequest) -> Result<(), CoreError> {
        request.validate()?;
        self.request = request;
        Ok(())
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        let r = &mut self.request;
        match update {
            FieldUpdate::CompanyName(v) => r.company_name = v,
            FieldUpdate::Tagline(v) => r.tagline = v,
            FieldUpdate::Industry(v) => r.industry = v,
            FieldUpdate::TargetAudience(v) => r.target_audience = v,
            FieldUpdate::Tone(v) => r.tone = v,
            FieldUpdate::Locale(v) => r.locale = v,
            FieldUpdate::PrimaryColor(v) => r.brand_colors.primary = v,
            FieldUpdate::SecondaryColor(v) => r.brand_colors.secondary = v,
            FieldUpdate::HeadingFont(v) => r.brand_fonts.heading = v,
            FieldUpdate::BodyFont(v) => r.brand_fonts.body = v,
            FieldUpdate::ContactInfo(v) => r.contact_info = v,
        }
    }

    /// Append an empty slide whose id differs from every existing one.
    pub fn add_slide(&mut self) -> &Slide {
        let mut id = Uuid::new_v4();
        while self.request.slides.iter().any(|s| s.id == id) {
            id = Uuid::new_v4();
        }
        self.request.slides.push(Slide::empty(id));
        debug!(slide_id = %id, count = self.request.slides.len(), "slide added");
        &self.request.slides[self.request.slides.len() - 1]
    }

    pub fn update_slide(&mut self, id: Uuid, update: SlideUpdate) -> Result<&Slide, CoreError> {
        let slide = self.slide_mut(id)?;
        match update {
            SlideUpdate::Title(v) => slide.title = v,
            SlideUpdate::Text(v) => slide.text = v,
            SlideUpdate::ImageDescription(v) => slide.image_description = v,
        }
        Ok(slide)
    }

    /// Overwrite a slide's content, keeping its id and position.
    pub fn replace_slide(&mut self, id: Uuid, content: SlideContent) -> Result<&Slide, CoreError> {
        let slide = self.slide_mut(id)?;
        slide.title = content.title;
        slide.text = content.text;
        slide.image_description = content.image_description;
        Ok(slide)
    }

    pub fn remove_slide(&mut self, id: Uuid) -> Result<Slide, CoreError> {
        let index = self
            .request
            .slides
            .iter()
            .position(|s| s.id == id)
            .ok_or(CoreError::SlideNotFound(id))?;
        let removed = self.request.slides.remove(index);
        debug!(slide_id = %id, count = self.request.slides.len(), "slide removed");
        Ok(removed)
    }

    /// Last write wins; a slow conversion can overwrite a newer logo.
    pub fn set_logo(&mut self, logo: Option<LogoImage>) {
        self.request.logo_image = logo;
    }

    fn slide_mut(&mut self, id: Uuid) -> Result<&mut Slide, CoreError> {
        self.request
            .slides
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CoreError::SlideNotFound(id))
    }
}
