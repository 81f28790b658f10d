//! One module per theme. Each exposes a pure `render` over `ResumeData`.

pub mod bauhaus;
pub mod bold;
pub mod creative;
pub mod developer;
pub mod elegant;
pub mod linear;
pub mod minimal;
pub mod monochrome;
pub mod professional;
