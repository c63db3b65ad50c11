//! Form models for the content admin screens.
//!
//! Drafts hold what an editor typed before it is validated and sent as a
//! multipart form.

use serde::{Deserialize, Serialize};

/// An image file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Build an upload, guessing the content type from the file extension.
    pub fn from_file(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// A new service category with its sub-services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub is_active: bool,
    pub main_image: Option<ImageUpload>,
    pub sub_services: Vec<SubServiceDraft>,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            is_active: true,
            main_image: None,
            sub_services: Vec::new(),
        }
    }
}

/// One sub-service row of a [`ServiceDraft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubServiceDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<ImageUpload>,
}

impl SubServiceDraft {
    /// A row counts as filled once any field or the image is set.
    pub fn is_filled(&self) -> bool {
        [&self.name, &self.slug, &self.description]
            .iter()
            .any(|field| !field.trim().is_empty())
            || self.image.is_some()
    }

    /// Text fields sent in the `subServicesData` JSON array.
    pub fn fields(&self) -> SubServiceFields {
        SubServiceFields {
            name: self.name.trim().to_string(),
            slug: self.slug.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// Wire form of a sub-service's text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubServiceFields {
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// A portfolio project being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioDraft {
    pub category: String,
    pub title: String,
    pub description: String,
    pub project_link: String,
    /// Replacement image; an update without one keeps the stored image.
    pub image: Option<ImageUpload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(ImageUpload::from_file("logo.PNG", vec![]).content_type, "image/png");
        assert_eq!(ImageUpload::from_file("hero.jpeg", vec![]).content_type, "image/jpeg");
        assert_eq!(ImageUpload::from_file("README", vec![]).content_type, "application/octet-stream");
    }

    #[test]
    fn sub_service_is_filled_by_any_field_or_image() {
        assert!(!SubServiceDraft::default().is_filled());
        assert!(
            !SubServiceDraft {
                name: "   ".into(),
                ..SubServiceDraft::default()
            }
            .is_filled()
        );
        assert!(
            SubServiceDraft {
                image: Some(ImageUpload::from_file("a.png", vec![1])),
                ..SubServiceDraft::default()
            }
            .is_filled()
        );
    }
}
