//! Domain models for the to-do list.
//!
//! - [`TodoItem`]: one entry (task, email, [`Priority`]).
//! - [`SubmitForm`]: the raw `/submit` body; [`SubmitForm::validate`] is the
//!   only way a submission becomes a [`TodoItem`].

mod todo;

pub use todo::*;
