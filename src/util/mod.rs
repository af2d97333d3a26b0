//! Pure helpers shared by the theme and animation managers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain arithmetic and string formatting so it can be
//! tested natively; the browser layer only moves the results into the DOM.

pub mod color;
pub mod scroll;
pub mod stylesheet;
