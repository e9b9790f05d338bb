mod newsletter;
mod section;

pub use newsletter::{Newsletter, NewsletterId, Status};
pub use section::{Section, SectionId, SectionKind, Sections};
