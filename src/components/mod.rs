//! UI components: the canvas backdrop and the page it sits behind.

pub mod backdrop;
pub mod site;
