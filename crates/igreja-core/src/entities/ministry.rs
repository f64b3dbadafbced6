//! Ministry entity - a serving area members can belong to

/// Ministry entity
///
/// Leader references are weak: they point at members but removal of the
/// member nulls them rather than removing the ministry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ministry {
    /// Assigned by the store on insert
    pub id: i64,
    pub name: String,
    pub leader_id: Option<i64>,
    pub co_leader_id: Option<i64>,
    pub is_active: bool,
}

impl Ministry {
    /// Create a new active ministry with no leadership assigned
    pub fn new(name: String) -> Self {
        Self {
            id: 0,
            name,
            leader_id: None,
            co_leader_id: None,
            is_active: true,
        }
    }
}
