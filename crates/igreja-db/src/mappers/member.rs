//! Member entity <-> model mapper

use chrono::NaiveDate;

use igreja_core::entities::Member;
use igreja_core::value_objects::{LoveLanguage, MaritalStatus, PersonalityTrait};

use crate::models::MemberModel;

/// Convert MemberModel to Member entity
///
/// Unknown profile tag tokens are dropped during decoding.
impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            name: model.name,
            date_of_birth: model.date_of_birth,
            phone_number: model.phone_number,
            address: model.address,
            rg: model.rg,
            cpf: model.cpf,
            marital_status: MaritalStatus::from_db_str(&model.marital_status),
            spouse_name: model.spouse_name,
            marriage_date: model.marriage_date,
            baptized: model.baptized,
            baptism_date: model.baptism_date,
            church_of_baptism: model.church_of_baptism,
            love_language: LoveLanguage::decode_all(&model.love_language),
            personality_test: PersonalityTrait::decode_all(&model.personality_test),
            is_pastor: model.is_pastor,
            is_leader: model.is_leader,
            is_co_leader: model.is_co_leader,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

/// Convert Member entity reference to values for database insertion
///
/// Tag vectors are re-encoded to their TEXT[] tokens, so those fields are
/// owned rather than borrowed.
pub struct MemberInsert<'a> {
    pub name: &'a str,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub rg: Option<&'a str>,
    pub cpf: Option<&'a str>,
    pub marital_status: &'static str,
    pub spouse_name: Option<&'a str>,
    pub marriage_date: Option<NaiveDate>,
    pub baptized: bool,
    pub baptism_date: Option<NaiveDate>,
    pub church_of_baptism: Option<&'a str>,
    pub love_language: Vec<String>,
    pub personality_test: Vec<String>,
    pub is_pastor: bool,
    pub is_leader: bool,
    pub is_co_leader: bool,
    pub is_active: bool,
}

impl<'a> MemberInsert<'a> {
    pub fn new(member: &'a Member) -> Self {
        Self {
            name: &member.name,
            date_of_birth: member.date_of_birth,
            phone_number: member.phone_number.as_deref(),
            address: member.address.as_deref(),
            rg: member.rg.as_deref(),
            cpf: member.cpf.as_deref(),
            marital_status: member.marital_status.as_db_str(),
            spouse_name: member.spouse_name.as_deref(),
            marriage_date: member.marriage_date,
            baptized: member.baptized,
            baptism_date: member.baptism_date,
            church_of_baptism: member.church_of_baptism.as_deref(),
            love_language: LoveLanguage::encode_all(&member.love_language),
            personality_test: PersonalityTrait::encode_all(&member.personality_test),
            is_pastor: member.is_pastor,
            is_leader: member.is_leader,
            is_co_leader: member.is_co_leader,
            is_active: member.is_active,
        }
    }
}

/// Convert Member entity reference to values for database update
pub struct MemberUpdate<'a> {
    pub id: i64,
    pub values: MemberInsert<'a>,
}

impl<'a> MemberUpdate<'a> {
    pub fn new(member: &'a Member) -> Self {
        Self {
            id: member.id,
            values: MemberInsert::new(member),
        }
    }
}
