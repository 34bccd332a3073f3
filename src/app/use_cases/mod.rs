//! Use-Cases der Application-Layer-Orchestrierung.

pub mod animation;
pub mod dragging;
pub mod picking;
pub mod viewport;
