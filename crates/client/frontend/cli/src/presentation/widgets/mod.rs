//! Panels composed by [`super::ui`].
pub mod battle;
pub mod camp;
pub mod footer;
pub mod header;
pub mod messages;
pub mod vitals;
