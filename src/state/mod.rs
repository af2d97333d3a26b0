//! Host-independent state for the page effects.
//!
//! DESIGN
//! ======
//! Each manager keeps its decisions here and leaves DOM access to
//! `crate::browser`, so the state machines run under plain `cargo test`.

pub mod entrance;
pub mod theme;
