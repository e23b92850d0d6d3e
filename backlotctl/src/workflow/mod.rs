//! The generic resource administration workflow.
//!
//! Every screen is an instantiation of the same four pieces: a pure
//! pagination projection ([`pager::Pager`]), a three-state collection
//! holder ([`list::ResourceList`]), a declarative form draft with
//! per-field synchronous validation ([`form::FormDraft`]), and the
//! field rules themselves ([`validation`]).

pub mod form;
pub mod list;
pub mod pager;
pub mod validation;

pub use form::{AttachmentSlot, FieldRule, FieldSpec, FormDraft};
pub use list::ResourceList;
pub use pager::Pager;
