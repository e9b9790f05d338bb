use chrono::NaiveDate;

use crate::domain::{Section, Sections};

const SUBJECT_PLACEHOLDER: &str = "Newsletter Subject";

/// The fixed visual arrangements a newsletter can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Modern,
    Simple,
    Newsletter,
    Creative,
}

impl Layout {
    /// Resolve a layout tag, falling back to `Modern` for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "simple" => Self::Simple,
            "newsletter" => Self::Newsletter,
            "creative" => Self::Creative,
            _ => Self::Modern,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Layout::Modern => "modern",
            Layout::Simple => "simple",
            Layout::Newsletter => "newsletter",
            Layout::Creative => "creative",
        }
    }
}

/// Render a newsletter's subject and sections into an HTML fragment.
///
/// The subject is escaped. Section content is author-written markup and is kept
/// as-is apart from turning line breaks into `<br>`. `date` is only printed by
/// the layouts that show an issue date.
pub fn render(tag: &str, subject: &str, sections: &Sections, date: NaiveDate) -> String {
    let layout = Layout::from_tag(tag);
    let subject = subject_html(subject);

    let (header, divider, footer) = match layout {
        Layout::Modern => (
            format!(
                "<header class=\"header\"><h1>{}</h1><p class=\"tagline\">Professional Newsletter Template</p></header>",
                subject
            ),
            "<hr class=\"divider\">",
            footer_html(
                "<p>© 2025 Newsletter Composer. All rights reserved.</p>",
                &["Unsubscribe", "Manage Preferences", "View Online"],
            ),
        ),
        Layout::Simple => (
            format!(
                "<header class=\"header\"><h1>{}</h1><p class=\"date\">{}</p></header>",
                subject,
                date.format("%A, %B %-d, %Y")
            ),
            "<hr class=\"divider divider-light\">",
            footer_html(
                "<p>Simple Newsletter Template</p>",
                &["Unsubscribe", "Forward"],
            ),
        ),
        Layout::Newsletter => (
            format!(
                "<header class=\"header header-dark\"><h1>{}</h1><p class=\"date\">{}</p></header>",
                subject,
                date.format("%-m/%-d/%Y")
            ),
            "<div class=\"divider divider-dot\"><span></span></div>",
            footer_html(
                "<p class=\"brand\">Newsletter Composer</p><p>Professional insights delivered weekly</p>",
                &["Archive", "Subscribe", "Unsubscribe"],
            ),
        ),
        Layout::Creative => (
            format!(
                "<header class=\"header header-gradient\"><h1>{}</h1><p class=\"tagline\">Creative Newsletter Design</p></header>",
                subject
            ),
            "<div class=\"divider divider-accent\"><span></span><span></span></div>",
            footer_html(
                "<p class=\"brand\">Newsletter Composer</p><p>Bringing creativity to your inbox</p>",
                &["Unsubscribe", "Update Preferences", "Share"],
            ),
        ),
    };

    let mut body = String::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            body.push_str(divider);
        }
        let title = match layout {
            Layout::Newsletter => format!("<h3>Section {}</h3>", section.order()),
            _ => String::new(),
        };
        body.push_str(&format!(
            "<section class=\"section section-{}\">{}<div class=\"content\">{}</div></section>",
            section.order(),
            title,
            section_html(section)
        ));
    }

    format!(
        "<div class=\"newsletter-preview layout-{}\">{}<main class=\"sections\">{}</main>{}</div>",
        layout.as_str(),
        header,
        body,
        footer
    )
}

fn subject_html(subject: &str) -> String {
    if subject.is_empty() {
        SUBJECT_PLACEHOLDER.to_string()
    } else {
        escape(subject)
    }
}

fn section_html(section: &Section) -> String {
    if section.content.is_empty() {
        format!(
            "<em class=\"placeholder\">Section {} content...</em>",
            section.order()
        )
    } else {
        section.content.replace('\n', "<br>")
    }
}

fn footer_html(lead: &str, links: &[&str]) -> String {
    let links = links
        .iter()
        .map(|label| format!("<a href=\"#\">{}</a>", label))
        .collect::<Vec<_>>()
        .join("<span class=\"separator\">•</span>");
    format!(
        "<footer class=\"footer\">{}<nav class=\"links\">{}</nav></footer>",
        lead, links
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
