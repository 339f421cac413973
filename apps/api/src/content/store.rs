//! The content store: one JSON file holding the whole site document.
//!
//! Every mutation is a whole-file overwrite. There is no lock around the
//! read-modify-write cycle — concurrent writers race and the last writer
//! wins, which is accepted because the admin panel assumes a single editor.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::content::{Document, Item, Profile, Row};

/// Fixed on-disk name for the uploaded resume. Re-uploads overwrite it.
pub const RESUME_FILENAME: &str = "resume.pdf";

/// Path stored in the document and used by pages to link the resume.
/// Relative, so it resolves against the static root from any page.
pub const RESUME_PUBLIC_PATH: &str = "uploads/resume.pdf";

#[derive(Clone)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the seeded default document if the store file does not exist
    /// yet, creating parent directories as needed. Returns `true` when the
    /// file was created.
    pub async fn ensure_seeded(&self) -> Result<bool, AppError> {
        if tokio::fs::metadata(&self.path).await.is_ok() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        self.save(&seeded_document()).await?;
        info!("Seeded content store at {}", self.path.display());
        Ok(true)
    }

    /// Reads and parses the store file, returning the document verbatim as
    /// raw JSON. The service never validates its shape.
    pub async fn read_raw(&self) -> Result<Value, AppError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Overwrites the store file with `value`, pretty-printed.
    pub async fn write_raw(&self, value: &Value) -> Result<(), AppError> {
        let text = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }

    /// Typed load for the renderers. Lenient on missing fields, preserves
    /// unknown ones, and gives legacy rows an id.
    pub async fn load(&self) -> Result<Document, AppError> {
        let mut doc: Document = serde_json::from_value(self.read_raw().await?)?;
        doc.assign_row_ids();
        Ok(doc)
    }

    pub async fn save(&self, doc: &Document) -> Result<(), AppError> {
        self.write_raw(&serde_json::to_value(doc)?).await
    }

    /// Patches `resumeUrl` into the stored document without disturbing any
    /// other field.
    pub async fn set_resume_url(&self, public_path: &str) -> Result<(), AppError> {
        let mut raw = self.read_raw().await?;
        let root = raw
            .as_object_mut()
            .ok_or_else(|| anyhow::anyhow!("content document root is not a JSON object"))?;
        root.insert("resumeUrl".to_string(), Value::String(public_path.to_string()));
        self.write_raw(&raw).await
    }

    /// Persists an uploaded resume at the fixed filename (overwriting any
    /// prior upload), then patches the stored document to point at it.
    /// Returns the public path that went into the document.
    pub async fn save_resume(
        &self,
        upload_dir: &Path,
        bytes: &[u8],
    ) -> Result<&'static str, AppError> {
        tokio::fs::create_dir_all(upload_dir).await?;
        tokio::fs::write(upload_dir.join(RESUME_FILENAME), bytes).await?;
        self.set_resume_url(RESUME_PUBLIC_PATH).await?;
        Ok(RESUME_PUBLIC_PATH)
    }
}

/// The document a fresh install starts from.
pub fn seeded_document() -> Document {
    Document {
        profiles: vec![
            Profile {
                id: 1,
                name: "Recruiter".to_string(),
                avatar: "images/avatar1.png".to_string(),
            },
            Profile {
                id: 2,
                name: "Friend".to_string(),
                avatar: "images/avatar2.png".to_string(),
            },
            Profile {
                id: 3,
                name: "Developer".to_string(),
                avatar: "images/avatar3.png".to_string(),
            },
        ],
        rows: vec![Row {
            id: 4,
            title: "Web Development".to_string(),
            items: vec![
                Item {
                    id: 5,
                    title: "Project A".to_string(),
                    image: "https://via.placeholder.com/300x169".to_string(),
                    ..Item::default()
                },
                Item {
                    id: 6,
                    title: "Project B".to_string(),
                    image: "https://via.placeholder.com/300x169".to_string(),
                    ..Item::default()
                },
            ],
            ..Row::default()
        }],
        ..Document::default()
    }
}
