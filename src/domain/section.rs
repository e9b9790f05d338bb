use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::error::{Error, Result};

/// Identifier of a section within a newsletter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn generate() -> Self {
        Self(format!("section-{}", Uuid::new_v4()))
    }
}

impl FromStr for SectionId {
    type Err = Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Semantic role of a section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    #[default]
    Content,
    Footer,
}

/// A block of newsletter body content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: String,
    /// 1-based rank, always equal to the list position + 1
    order: u32,
}

impl Section {
    fn empty(kind: SectionKind, order: u32) -> Self {
        Self {
            id: SectionId::generate(),
            kind,
            content: String::new(),
            order,
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

/// Ordered list of sections.
///
/// Every mutation reassigns `order` from list position, so the ranks are always
/// the dense sequence `1..=N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Section>")]
pub struct Sections(Vec<Section>);

impl Sections {
    /// The list a fresh newsletter starts with: a single empty content section
    pub fn seeded() -> Self {
        Self(vec![Section::empty(SectionKind::Content, 1)])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.0.iter()
    }

    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.0.iter().find(|section| &section.id == id)
    }

    pub fn position_of(&self, id: &SectionId) -> Option<usize> {
        self.0.iter().position(|section| &section.id == id)
    }

    /// Append an empty section at the end of the list
    pub fn push(&mut self, kind: SectionKind) -> &Section {
        let order = self.0.len() as u32 + 1;
        self.0.push(Section::empty(kind, order));
        &self.0[self.0.len() - 1]
    }

    pub fn update_content(&mut self, id: &SectionId, content: String) -> Result<()> {
        let section = self
            .0
            .iter_mut()
            .find(|section| &section.id == id)
            .ok_or_else(|| Error::SectionNotFound(id.clone()))?;
        section.content = content;
        Ok(())
    }

    /// Remove a section and close the gap it leaves in the ranking.
    /// The last remaining section cannot be removed.
    pub fn remove(&mut self, id: &SectionId) -> Result<Section> {
        let position = self
            .position_of(id)
            .ok_or_else(|| Error::SectionNotFound(id.clone()))?;
        if self.0.len() == 1 {
            return Err(Error::LastSection);
        }

        let removed = self.0.remove(position);
        self.renumber();
        Ok(removed)
    }

    /// Move the section at list position `from` to list position `to`
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.0.len();
        for position in [from, to] {
            if position >= len {
                return Err(Error::PositionOutOfRange { position, len });
            }
        }

        let section = self.0.remove(from);
        self.0.insert(to, section);
        self.renumber();
        Ok(())
    }

    fn renumber(&mut self) {
        for (index, section) in self.0.iter_mut().enumerate() {
            section.order = index as u32 + 1;
        }
    }
}

/// Stored lists are ranked by their `order` field, then renumbered
impl From<Vec<Section>> for Sections {
    fn from(mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|section| section.order);
        let mut sections = Self(sections);
        sections.renumber();
        sections
    }
}
