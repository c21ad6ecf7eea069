//! Rafiq frontend library: landing page, auth screens, theme context.

pub mod app;
pub mod content;
pub mod screens;
pub mod storage;
pub mod theme;
pub mod widgets;
