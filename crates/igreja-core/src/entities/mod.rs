//! Domain entities - core business objects

mod course;
mod enrollment;
mod identity;
mod member;
mod ministry;
mod note;

pub use course::Course;
pub use enrollment::Enrollment;
pub use identity::{Identity, Role};
pub use member::Member;
pub use ministry::Ministry;
pub use note::Note;
