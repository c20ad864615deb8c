mod note;
mod seed;

pub use note::{Note, NoteOrigin, TIMESTAMP_FORMAT};
pub use seed::{demo_notes, DEMO_NOTES};
