pub mod resume;
pub mod theme;

pub use resume::{ContactKind, ResumeData};
pub use theme::{ThemeId, ThemeMeta, THEMES};
