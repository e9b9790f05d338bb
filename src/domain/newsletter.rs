use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::domain::{Section, SectionId, SectionKind, Sections};
use crate::error::Result;

/// Layout tag every new newsletter starts with
pub const DEFAULT_LAYOUT: &str = "modern";

/// Identifier of a newsletter, assigned at creation and never changed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsletterId(String);

impl NewsletterId {
    pub fn generate() -> Self {
        Self(format!("newsletter-{}", Uuid::new_v4()))
    }
}

impl FromStr for NewsletterId {
    type Err = Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for NewsletterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NewsletterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle status of a newsletter.
/// NOTE: Nothing moves a newsletter to `Sent`, it only exists so stored data can carry it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Scheduled,
    Sent,
}

/// A newsletter record, persisted as part of the saved collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    id: NewsletterId,
    pub subject: String,
    sections: Sections,
    /// Template tag, see `templates::catalog`
    pub layout: String,
    status: Status,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Set exactly when `status` is `Scheduled`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scheduled_for: Option<DateTime<Utc>>,
}

impl Newsletter {
    /// A fresh draft with an empty subject and a single empty content section
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: NewsletterId::generate(),
            subject: String::new(),
            sections: Sections::seeded(),
            layout: DEFAULT_LAYOUT.to_string(),
            status: Status::Draft,
            created_at: now,
            updated_at: Some(now),
            scheduled_for: None,
        }
    }

    pub fn id(&self) -> &NewsletterId {
        &self.id
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn scheduled_for(&self) -> Option<DateTime<Utc>> {
        self.scheduled_for
    }

    pub fn set_subject(&mut self, subject: String) {
        self.subject = subject;
        self.touch();
    }

    pub fn set_layout(&mut self, layout: String) {
        self.layout = layout;
        self.touch();
    }

    pub fn add_section(&mut self, kind: SectionKind) -> Section {
        let section = self.sections.push(kind).clone();
        self.touch();
        section
    }

    pub fn update_section(&mut self, id: &SectionId, content: String) -> Result<()> {
        self.sections.update_content(id, content)?;
        self.touch();
        Ok(())
    }

    pub fn remove_section(&mut self, id: &SectionId) -> Result<Section> {
        let removed = self.sections.remove(id)?;
        self.touch();
        Ok(removed)
    }

    pub fn reorder_sections(&mut self, from: usize, to: usize) -> Result<()> {
        self.sections.move_section(from, to)?;
        self.touch();
        Ok(())
    }

    pub fn mark_draft(&mut self) {
        self.status = Status::Draft;
        self.scheduled_for = None;
        self.touch();
    }

    pub fn schedule(&mut self, at: DateTime<Utc>) {
        self.status = Status::Scheduled;
        self.scheduled_for = Some(at);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Default for Newsletter {
    fn default() -> Self {
        Self::new()
    }
}
