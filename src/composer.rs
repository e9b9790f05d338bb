use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{Newsletter, NewsletterId, Section, SectionId, SectionKind};
use crate::error::{Error, Result};
use crate::repo::{KeyValueStore, NewsletterRepo};
use crate::settings::ComposerSettings;
use crate::templates;

/// Holds the newsletter collection for the running session.
///
/// Every mutation builds a new collection, writes it through storage and only
/// then replaces the in-memory state, so a failed write leaves nothing half-applied.
pub struct Composer {
    store: Box<dyn KeyValueStore>,
    settings: ComposerSettings,
    newsletters: Mutex<Vec<Newsletter>>,
}

impl Composer {
    /// Start a session from whatever collection was saved last
    pub fn load(store: Box<dyn KeyValueStore>, settings: ComposerSettings) -> Self {
        let newsletters = NewsletterRepo::load(store.as_ref());
        tracing::info!("Loaded {} saved newsletters", newsletters.len());

        Self {
            store,
            settings,
            newsletters: Mutex::new(newsletters),
        }
    }

    pub fn list(&self) -> Vec<Newsletter> {
        self.lock().clone()
    }

    pub fn get(&self, id: &NewsletterId) -> Result<Newsletter> {
        self.lock()
            .iter()
            .find(|newsletter| newsletter.id() == id)
            .cloned()
            .ok_or_else(|| Error::NewsletterNotFound(id.clone()))
    }

    #[tracing::instrument(name = "Create a newsletter", skip(self))]
    pub fn create(&self) -> Result<Newsletter> {
        let newsletter = Newsletter::new();

        let mut current = self.lock();
        let mut newsletters = current.clone();
        newsletters.push(newsletter.clone());
        self.commit(&mut current, newsletters)?;

        Ok(newsletter)
    }

    #[tracing::instrument(name = "Update newsletter subject", skip(self))]
    pub fn update_subject(&self, id: &NewsletterId, subject: String) -> Result<Newsletter> {
        self.edit(id, |newsletter| {
            newsletter.set_subject(subject);
            Ok(())
        })
        .map(|(newsletter, _)| newsletter)
    }

    /// Switch the template. Only tags from the template catalog are accepted.
    #[tracing::instrument(name = "Update newsletter layout", skip(self))]
    pub fn update_layout(&self, id: &NewsletterId, layout: String) -> Result<Newsletter> {
        if templates::find(&layout).is_none() {
            return Err(Error::UnknownLayout(layout));
        }

        self.edit(id, |newsletter| {
            newsletter.set_layout(layout);
            Ok(())
        })
        .map(|(newsletter, _)| newsletter)
    }

    #[tracing::instrument(name = "Add a section", skip(self))]
    pub fn add_section(&self, id: &NewsletterId, kind: SectionKind) -> Result<Section> {
        self.edit(id, |newsletter| Ok(newsletter.add_section(kind)))
            .map(|(_, section)| section)
    }

    #[tracing::instrument(name = "Update a section", skip(self, content))]
    pub fn update_section(
        &self,
        id: &NewsletterId,
        section_id: &SectionId,
        content: String,
    ) -> Result<Newsletter> {
        self.edit(id, |newsletter| newsletter.update_section(section_id, content))
            .map(|(newsletter, _)| newsletter)
    }

    #[tracing::instrument(name = "Remove a section", skip(self))]
    pub fn remove_section(&self, id: &NewsletterId, section_id: &SectionId) -> Result<Newsletter> {
        self.edit(id, |newsletter| newsletter.remove_section(section_id))
            .map(|(newsletter, _)| newsletter)
    }

    #[tracing::instrument(name = "Reorder sections", skip(self))]
    pub fn reorder_sections(&self, id: &NewsletterId, from: usize, to: usize) -> Result<Newsletter> {
        self.edit(id, |newsletter| newsletter.reorder_sections(from, to))
            .map(|(newsletter, _)| newsletter)
    }

    #[tracing::instrument(name = "Save newsletter as draft", skip(self))]
    pub fn save_draft(&self, id: &NewsletterId) -> Result<Newsletter> {
        self.edit(id, |newsletter| {
            newsletter.mark_draft();
            Ok(())
        })
        .map(|(newsletter, _)| newsletter)
    }

    /// Schedule a newsletter, by default one schedule delay from now
    #[tracing::instrument(name = "Schedule newsletter", skip(self))]
    pub fn schedule(&self, id: &NewsletterId, at: Option<DateTime<Utc>>) -> Result<Newsletter> {
        let at = match at {
            Some(at) => at,
            None => Utc::now()
                .checked_add_signed(self.settings.schedule_delay())
                .ok_or(Error::ScheduleOutOfRange)?,
        };

        self.edit(id, |newsletter| {
            newsletter.schedule(at);
            Ok(())
        })
        .map(|(newsletter, _)| newsletter)
    }

    /// Render a newsletter with its selected template
    pub fn preview(&self, id: &NewsletterId, date: NaiveDate) -> Result<String> {
        let newsletter = self.get(id)?;
        Ok(templates::render(
            &newsletter.layout,
            &newsletter.subject,
            newsletter.sections(),
            date,
        ))
    }

    /// Apply `change` to a copy of one newsletter and commit the resulting collection
    fn edit<T, F>(&self, id: &NewsletterId, change: F) -> Result<(Newsletter, T)>
    where
        F: FnOnce(&mut Newsletter) -> Result<T>,
    {
        let mut current = self.lock();
        let index = current
            .iter()
            .position(|newsletter| newsletter.id() == id)
            .ok_or_else(|| Error::NewsletterNotFound(id.clone()))?;

        let mut newsletter = current[index].clone();
        let output = change(&mut newsletter)?;

        let mut newsletters = current.clone();
        newsletters[index] = newsletter.clone();
        self.commit(&mut current, newsletters)?;

        Ok((newsletter, output))
    }

    fn commit(&self, current: &mut Vec<Newsletter>, newsletters: Vec<Newsletter>) -> Result<()> {
        NewsletterRepo::save(self.store.as_ref(), &newsletters)?;
        *current = newsletters;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Newsletter>> {
        self.newsletters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
