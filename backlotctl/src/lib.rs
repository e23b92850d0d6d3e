//! Backlot admin console.
//!
//! Staff-facing terminal console for curating movies, carousel
//! banners, display advertisements and video advertisements against
//! the Backlot admin API. The `workflow` module implements the one
//! generic administration pattern every screen instantiates: fetch an
//! authenticated collection, page through it locally, edit lifecycle
//! status through a bounded transition, and create resources via
//! multipart submission, refetching the whole collection after any
//! mutation.

pub mod cli;
pub mod screens;
pub mod shell;
pub mod workflow;
