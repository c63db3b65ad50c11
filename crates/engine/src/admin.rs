//! Content administration: services and portfolio projects.
//!
//! Writes go to the same API as the navbar reads from, as multipart forms so
//! images can travel with the text fields. Drafts are validated locally
//! before anything is sent.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use sitenav_api::{FetchError, SiteClient};
use sitenav_types::{ImageUpload, PortfolioDraft, RawCategory, ServiceDraft, SubServiceDraft, SubServiceFields};
use sitenav_util::extract_list_items;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::SiteConfig;

const SERVICES_ROOT: &str = "/services";
const PORTFOLIO_ROOT: &str = "/portfolio";

pub const INCOMPLETE_SERVICE_MESSAGE: &str = "Please fill all required main service fields and upload a main image.";
pub const INCOMPLETE_PORTFOLIO_MESSAGE: &str = "Please fill all required portfolio fields.";

/// Failure of an admin operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The draft failed local validation; nothing was sent.
    #[error("{0}")]
    Invalid(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error(transparent)]
    Request(FetchError),
}

impl AdminError {
    /// Map a request failure, preferring the server's own error text.
    fn from_fetch(error: FetchError, fallback: impl FnOnce(u16) -> String) -> Self {
        match error.status() {
            Some(status) => Self::Rejected {
                status,
                message: error.server_message().unwrap_or_else(|| fallback(status)),
            },
            None => Self::Request(error),
        }
    }
}

/// Confirmation text of a successful admin operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOutcome {
    pub message: String,
}

impl AdminOutcome {
    fn from_body(body: &Value, fallback: &str) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback);
        Self {
            message: message.to_string(),
        }
    }
}

/// Client for the admin write endpoints.
pub struct ContentAdmin {
    client: SiteClient,
    services_path: String,
}

impl ContentAdmin {
    pub fn new(client: SiteClient, services_path: impl Into<String>) -> Self {
        Self {
            client,
            services_path: services_path.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> anyhow::Result<Self> {
        let client = SiteClient::new(&config.api_base, config.timeout())?;
        Ok(Self::new(client, &config.services_path))
    }

    /// Every stored category, inactive ones included.
    pub async fn list_services(&self) -> Result<Vec<RawCategory>, AdminError> {
        let payload = self
            .client
            .get_json(&self.services_path)
            .await
            .map_err(|error| AdminError::from_fetch(error, |status| format!("Failed to fetch services: {status}")))?;

        Ok(extract_list_items(payload)
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<RawCategory>(entry) {
                Ok(category) => Some(category),
                Err(error) => {
                    debug!(%error, "skipping undecodable category entry");
                    None
                }
            })
            .collect())
    }

    pub async fn create_service(&self, draft: &ServiceDraft) -> Result<AdminOutcome, AdminError> {
        let form = service_form(draft)?;
        let path = format!("{SERVICES_ROOT}/create");
        self.client
            .send_form(Method::POST, &path, form)
            .await
            .map_err(|error| AdminError::from_fetch(error, |status| format!("Server error {status}")))?;

        info!(slug = %draft.slug.trim(), "service category created");
        Ok(AdminOutcome {
            message: "Service category created successfully!".to_string(),
        })
    }

    pub async fn delete_service(&self, id: &str) -> Result<AdminOutcome, AdminError> {
        let body = self
            .client
            .delete(&format!("{SERVICES_ROOT}/{id}"))
            .await
            .map_err(|error| AdminError::from_fetch(error, |status| format!("Failed to delete service: {status}")))?;

        info!(%id, "service category deleted");
        Ok(AdminOutcome::from_body(&body, "Service deleted successfully!"))
    }

    /// Create a project, or update the project `id` when one is given.
    pub async fn save_portfolio(&self, id: Option<&str>, draft: &PortfolioDraft) -> Result<AdminOutcome, AdminError> {
        let form = portfolio_form(draft)?;
        let (method, path, verb) = match id {
            Some(id) => (Method::PUT, format!("{PORTFOLIO_ROOT}/{id}"), "update"),
            None => (Method::POST, format!("{PORTFOLIO_ROOT}/create"), "create"),
        };

        let body = self
            .client
            .send_form(method, &path, form)
            .await
            .map_err(|error| AdminError::from_fetch(error, |_| format!("Failed to {verb} portfolio.")))?;

        info!(?id, title = %draft.title.trim(), "portfolio project saved");
        let fallback = if id.is_some() { "Portfolio Updated" } else { "Portfolio Created" };
        Ok(AdminOutcome::from_body(&body, fallback))
    }

    pub async fn delete_portfolio(&self, id: &str) -> Result<AdminOutcome, AdminError> {
        let body = self
            .client
            .delete(&format!("{PORTFOLIO_ROOT}/{id}"))
            .await
            .map_err(|error| AdminError::from_fetch(error, |_| "Failed to delete portfolio item.".to_string()))?;

        info!(%id, "portfolio project deleted");
        Ok(AdminOutcome::from_body(&body, "Portfolio Deleted"))
    }
}

/// Check a service draft and return the sub-service rows that will be sent.
///
/// Blank rows are dropped. A row with any field or image set needs a name,
/// slug and description; rows are numbered from 1 among the filled ones.
pub fn validate_service(draft: &ServiceDraft) -> Result<Vec<&SubServiceDraft>, AdminError> {
    let main_fields = [&draft.name, &draft.slug, &draft.description];
    if main_fields.iter().any(|field| field.trim().is_empty()) || draft.main_image.is_none() {
        return Err(AdminError::Invalid(INCOMPLETE_SERVICE_MESSAGE.to_string()));
    }

    let filled: Vec<&SubServiceDraft> = draft.sub_services.iter().filter(|sub| sub.is_filled()).collect();
    for (index, sub) in filled.iter().enumerate() {
        let fields = [&sub.name, &sub.slug, &sub.description];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(AdminError::Invalid(format!(
                "Sub-service #{} is incomplete. Name, Slug, and Description are required if other fields (like image) are filled.",
                index + 1
            )));
        }
    }
    Ok(filled)
}

/// Check the fields a portfolio project cannot be saved without.
pub fn validate_portfolio(draft: &PortfolioDraft) -> Result<(), AdminError> {
    let required = [&draft.category, &draft.title, &draft.project_link];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(AdminError::Invalid(INCOMPLETE_PORTFOLIO_MESSAGE.to_string()));
    }
    Ok(())
}

fn service_form(draft: &ServiceDraft) -> Result<Form, AdminError> {
    let filled = validate_service(draft)?;

    let metadata: Vec<SubServiceFields> = filled.iter().map(|sub| sub.fields()).collect();
    let metadata = serde_json::to_string(&metadata)
        .map_err(|error| AdminError::Invalid(format!("could not encode sub-services: {error}")))?;

    let mut form = Form::new()
        .text("name", draft.name.trim().to_string())
        .text("slug", draft.slug.trim().to_string())
        .text("description", draft.description.trim().to_string())
        .text("isActive", draft.is_active.to_string())
        .text("subServicesData", metadata);

    if let Some(image) = &draft.main_image {
        form = form.part("mainImage", image_part(image)?);
    }
    for (index, sub) in filled.iter().enumerate() {
        if let Some(image) = &sub.image {
            form = form.part(format!("subServiceImage_{index}"), image_part(image)?);
        }
    }
    Ok(form)
}

fn portfolio_form(draft: &PortfolioDraft) -> Result<Form, AdminError> {
    validate_portfolio(draft)?;

    let mut form = Form::new()
        .text("category", draft.category.trim().to_string())
        .text("title", draft.title.trim().to_string())
        .text("description", draft.description.trim().to_string())
        .text("projectLink", draft.project_link.trim().to_string());
    if let Some(image) = &draft.image {
        form = form.part("image", image_part(image)?);
    }
    Ok(form)
}

fn image_part(image: &ImageUpload) -> Result<Part, AdminError> {
    Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)
        .map_err(|error| {
            warn!(file = %image.file_name, %error, "rejected image content type");
            AdminError::Invalid(format!("Unsupported image type '{}' for {}", image.content_type, image.file_name))
        })
}
