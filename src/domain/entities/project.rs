use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::option_fields::OptionField;

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 1;
const MAX_TITLE_LENGTH: u64 = 120;
const MIN_DESCRIPTION_LENGTH: u64 = 1;
const MAX_DESCRIPTION_LENGTH: u64 = 2000;
const MAX_TECHNOLOGIES: u64 = 20;
const MAX_TECHNOLOGY_LENGTH: usize = 40;
const ID_SUFFIX_LENGTH: usize = 9;

// ───── Enumerations ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectCategory {
    WebDev,
    AppDev,
    Iot,
    Automation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

// ───── Entity ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Builds the stored record out of a validated create request. The store
    /// owns id assignment; `created_at` and `updated_at` start equal.
    pub fn from_request(id: String, data: NewProjectRequest, now: DateTime<Utc>) -> Self {
        Project {
            id,
            title: data.title,
            description: data.description,
            category: data.category,
            status: data.status,
            technologies: data.technologies,
            image_url: data.image_url,
            demo_url: data.demo_url,
            github_url: data.github_url,
            featured: data.featured,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Millisecond timestamp plus a short random suffix, unique enough for a
/// single-process store. Callers that need a hard guarantee re-roll on
/// collision while holding the store's write lock.
pub fn new_project_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LENGTH)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(length(min = MIN_DESCRIPTION_LENGTH, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    pub category: ProjectCategory,

    pub status: ProjectStatus,

    #[validate(
        length(min = 1, message = "At least one technology is required"),
        custom(function = "validate_technologies")
    )]
    pub technologies: Vec<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub image_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub demo_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_optional_title")
    )]
    pub title: OptionField<String>,

    #[validate(length(min = MIN_DESCRIPTION_LENGTH, max = MAX_DESCRIPTION_LENGTH))]
    pub description: OptionField<String>,

    pub category: OptionField<ProjectCategory>,

    pub status: OptionField<ProjectStatus>,

    #[validate(custom(function = "validate_optional_technologies"))]
    pub technologies: OptionField<Vec<String>>,

    #[validate(custom(function = "validate_optional_url_field"))]
    pub image_url: OptionField<String>,

    #[validate(custom(function = "validate_optional_url_field"))]
    pub demo_url: OptionField<String>,

    #[validate(custom(function = "validate_optional_url_field"))]
    pub github_url: OptionField<String>,

    pub featured: OptionField<bool>,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(new_validation_error("title_blank", "Title must not be blank"));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error(
                    "invalid_url_scheme",
                    "URL must start with http:// or https://",
                ))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    validate_url(url)
}

pub fn validate_technologies(technologies: &[String]) -> Result<(), ValidationError> {
    if technologies.len() > MAX_TECHNOLOGIES as usize {
        return Err(new_validation_error("too_many_technologies", "Too many technology tags"));
    }
    for tag in technologies {
        if tag.trim().is_empty() || tag.len() > MAX_TECHNOLOGY_LENGTH {
            return Err(new_validation_error(
                "invalid_technology_length",
                "Technology tag length must be within allowed range",
            ));
        }
    }
    Ok(())
}

pub fn validate_optional_title(value: &OptionField<String>) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(title) = value {
        validate_title(title)?;
    }
    Ok(())
}

pub fn validate_optional_url_field(value: &OptionField<String>) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(url) = value {
        validate_url(url)?;
    }
    Ok(())
}

pub fn validate_optional_technologies(
    value: &OptionField<Vec<String>>,
) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(technologies) = value {
        if technologies.is_empty() {
            return Err(new_validation_error(
                "empty_technologies",
                "At least one technology is required",
            ));
        }
        validate_technologies(technologies)?;
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
