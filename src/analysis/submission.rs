use reqwest::multipart::{Form, Part};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::form_fields;
use crate::core::error::{CredCheckError, Result};

/// One captured field set, sent to the analysis service as one multipart POST.
///
/// The field values are opaque to the rest of the flow; they are forwarded
/// as-is. A submission can be serialized into a form any number of times,
/// so a failed request can be resubmitted without recapturing.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    text: Option<String>,
    media: Option<PathBuf>,
    extra_fields: Vec<(String, String)>,
    label: String,
}

/// Builder for creating `Submission` instances with validation.
#[derive(Debug, Default)]
pub struct SubmissionBuilder {
    text: Option<String>,
    media: Option<PathBuf>,
    extra_fields: Vec<(String, String)>,
    label: Option<String>,
}

impl Submission {
    /// Create a builder for constructing Submission instances.
    pub fn builder() -> SubmissionBuilder {
        SubmissionBuilder::default()
    }

    /// Short human-readable name for this submission, used in progress
    /// and log messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the submitted text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the attached media file path, if any.
    pub fn media(&self) -> Option<&Path> {
        self.media.as_deref()
    }

    /// Serialize this submission into a multipart form.
    ///
    /// The media file is read at serialization time; a file that vanished
    /// since capture surfaces as `FileNotFound` and follows the failure path.
    pub fn to_form(&self) -> Result<Form> {
        let mut form = Form::new();

        if let Some(ref text) = self.text {
            form = form.text(form_fields::TEXT, text.clone());
        }

        if let Some(ref path) = self.media {
            let bytes = fs::read(path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    CredCheckError::FileNotFound(path.display().to_string())
                }
                _ => CredCheckError::Io(e),
            })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());
            form = form.part(form_fields::MEDIA, Part::bytes(bytes).file_name(file_name));
        }

        for (key, value) in &self.extra_fields {
            form = form.text(key.clone(), value.clone());
        }

        Ok(form)
    }
}

impl SubmissionBuilder {
    /// Set the text content for this submission.
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach a media file to this submission.
    pub fn media<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.media = Some(path.into());
        self
    }

    /// Add an opaque extra form field.
    pub fn field<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.extra_fields.push((key.into(), value.into()));
        self
    }

    /// Override the display label for this submission.
    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build the Submission, validating that there is something to analyze
    /// and that an attached media file exists at capture time.
    pub fn build(self) -> Result<Submission> {
        if self.text.is_none() && self.media.is_none() {
            return Err(CredCheckError::Submission(
                "Nothing to analyze. Provide text and/or a media file.".to_string(),
            ));
        }

        if let Some(ref path) = self.media {
            if !path.exists() {
                return Err(CredCheckError::FileNotFound(path.display().to_string()));
            }
        }

        let label = self.label.unwrap_or_else(|| {
            self.media
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "inline text".to_string())
        });

        Ok(Submission {
            text: self.text,
            media: self.media,
            extra_fields: self.extra_fields,
            label,
        })
    }
}

/// Parse a `key=value` CLI argument into an extra form field.
pub fn parse_field(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(CredCheckError::InvalidArgument(format!(
            "Expected field in key=value format, got '{raw}'"
        ))),
    }
}
