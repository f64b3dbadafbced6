//! Member entity - a person in the congregation

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{LoveLanguage, MaritalStatus, PersonalityTrait};

/// Member entity, the record all associations hang off
///
/// Only `name` is required; the edit form fills the rest in over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Assigned by the store on insert
    pub id: i64,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub marital_status: MaritalStatus,
    pub spouse_name: Option<String>,
    pub marriage_date: Option<NaiveDate>,
    pub baptized: bool,
    pub baptism_date: Option<NaiveDate>,
    pub church_of_baptism: Option<String>,
    pub love_language: Vec<LoveLanguage>,
    pub personality_test: Vec<PersonalityTrait>,
    pub is_pastor: bool,
    pub is_leader: bool,
    pub is_co_leader: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member with required fields; everything else defaulted
    pub fn new(name: String) -> Self {
        Self {
            id: 0,
            name,
            date_of_birth: None,
            phone_number: None,
            address: None,
            rg: None,
            cpf: None,
            marital_status: MaritalStatus::default(),
            spouse_name: None,
            marriage_date: None,
            baptized: false,
            baptism_date: None,
            church_of_baptism: None,
            love_language: Vec::new(),
            personality_test: Vec::new(),
            is_pastor: false,
            is_leader: false,
            is_co_leader: false,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Whether this member can be offered as a ministry leader or co-leader
    ///
    /// Choice lists filter on this; stored leader references are not
    /// constrained by it.
    #[inline]
    pub fn is_eligible_leader(&self) -> bool {
        self.is_active && self.baptized
    }
}
