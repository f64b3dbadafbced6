//! Course entity - a class members enroll in

/// Course entity
///
/// The flag is `active`, not `is_active`; the courses table predates the
/// naming convention and the model keeps its column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Assigned by the store on insert
    pub id: i64,
    pub name: String,
    pub active: bool,
}

impl Course {
    /// Create a new active course
    pub fn new(name: String) -> Self {
        Self {
            id: 0,
            name,
            active: true,
        }
    }
}
