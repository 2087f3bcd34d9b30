//! List, view, create and edit the issues of one GitHub repository.
//!
//! `create` and `edit` round-trip the editable fields through the user's
//! `$EDITOR` using the plain-text form in [`form`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod github;
pub mod shared;
