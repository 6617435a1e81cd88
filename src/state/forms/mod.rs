//! Form state module

mod application;
mod field;
mod form_state;
mod registration;
mod survey;

pub use application::*;
pub use field::*;
pub use form_state::*;
pub use registration::*;
pub use survey::*;
