use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Professional,
    Creative,
    Minimal,
}

/// Catalog entry describing a selectable template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Glyph shown on the template picker
    pub preview: &'static str,
    pub category: Category,
}

static TEMPLATES: [EmailTemplate; 4] = [
    EmailTemplate {
        id: "modern",
        name: "Modern Professional",
        description: "Clean design with header, content sections, and footer",
        preview: "📰",
        category: Category::Professional,
    },
    EmailTemplate {
        id: "simple",
        name: "Simple Text",
        description: "Text-focused layout perfect for updates",
        preview: "📝",
        category: Category::Minimal,
    },
    EmailTemplate {
        id: "newsletter",
        name: "Newsletter Style",
        description: "Traditional newsletter with multiple content blocks",
        preview: "📊",
        category: Category::Professional,
    },
    EmailTemplate {
        id: "creative",
        name: "Creative Design",
        description: "Bold and colorful layout for creative content",
        preview: "🎨",
        category: Category::Creative,
    },
];

/// All templates, default first
pub fn catalog() -> &'static [EmailTemplate] {
    &TEMPLATES
}

pub fn find(tag: &str) -> Option<&'static EmailTemplate> {
    TEMPLATES.iter().find(|template| template.id == tag)
}
