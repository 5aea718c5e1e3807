//! Local note state: the collection store and the search/filter engine.

mod collection;
mod filter;

pub use collection::NoteCollection;
pub use filter::{SearchState, filter_notes};
