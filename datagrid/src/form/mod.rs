//! Form fields used by the filter editors.

mod choice;
mod input;

pub use choice::{Choice, ChoiceId};
pub use input::{TextInput, TextInputId};
