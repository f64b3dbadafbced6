//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs,
//! and from the member form into a domain entity.

use igreja_core::entities::{Course, Enrollment, Identity, Member, Ministry, Note};

use super::requests::MemberForm;
use super::responses::{
    AccountResponse, CourseResponse, EnrollmentResponse, MemberResponse, MinistryResponse,
    NoteResponse, RoleResponse,
};

// ============================================================================
// Account Mappers
// ============================================================================

impl From<&Identity> for AccountResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            role: identity.role.as_ref().map(|role| RoleResponse {
                id: role.id,
                name: role.role_name,
            }),
        }
    }
}

impl From<Identity> for AccountResponse {
    fn from(identity: Identity) -> Self {
        Self::from(&identity)
    }
}

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            date_of_birth: member.date_of_birth,
            phone_number: member.phone_number.clone(),
            address: member.address.clone(),
            rg: member.rg.clone(),
            cpf: member.cpf.clone(),
            marital_status: member.marital_status,
            spouse_name: member.spouse_name.clone(),
            marriage_date: member.marriage_date,
            baptized: member.baptized,
            baptism_date: member.baptism_date,
            church_of_baptism: member.church_of_baptism.clone(),
            love_language: member.love_language.clone(),
            personality_test: member.personality_test.clone(),
            is_pastor: member.is_pastor,
            is_leader: member.is_leader,
            is_co_leader: member.is_co_leader,
            is_active: member.is_active,
            created_at: member.created_at,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

impl From<MemberForm> for Member {
    fn from(form: MemberForm) -> Self {
        let mut member = Member::new(form.name.trim().to_string());
        member.date_of_birth = form.date_of_birth;
        member.phone_number = form.phone_number;
        member.address = form.address;
        member.rg = form.rg;
        member.cpf = form.cpf;
        member.marital_status = form.marital_status;
        member.spouse_name = form.spouse_name;
        member.marriage_date = form.marriage_date;
        member.baptized = form.baptized;
        member.baptism_date = form.baptism_date;
        member.church_of_baptism = form.church_of_baptism;
        member.love_language = form.love_language;
        member.personality_test = form.personality_test;
        member.is_pastor = form.is_pastor;
        member.is_leader = form.is_leader;
        member.is_co_leader = form.is_co_leader;
        member.is_active = form.is_active;
        member
    }
}

// ============================================================================
// Ministry Mappers
// ============================================================================

impl From<&Ministry> for MinistryResponse {
    fn from(ministry: &Ministry) -> Self {
        Self {
            id: ministry.id,
            name: ministry.name.clone(),
            leader_id: ministry.leader_id,
            leader_name: None, // Must be resolved separately
            co_leader_id: ministry.co_leader_id,
            co_leader_name: None,
            is_active: ministry.is_active,
        }
    }
}

impl From<Ministry> for MinistryResponse {
    fn from(ministry: Ministry) -> Self {
        Self::from(&ministry)
    }
}

/// Helper struct for creating MinistryResponse with resolved leader names
pub struct MinistryWithLeaders {
    pub ministry: Ministry,
    pub leader: Option<Member>,
    pub co_leader: Option<Member>,
}

impl From<MinistryWithLeaders> for MinistryResponse {
    fn from(mwl: MinistryWithLeaders) -> Self {
        Self {
            id: mwl.ministry.id,
            name: mwl.ministry.name,
            leader_id: mwl.ministry.leader_id,
            leader_name: mwl.leader.map(|m| m.name),
            co_leader_id: mwl.ministry.co_leader_id,
            co_leader_name: mwl.co_leader.map(|m| m.name),
            is_active: mwl.ministry.is_active,
        }
    }
}

// ============================================================================
// Course Mappers
// ============================================================================

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            name: course.name.clone(),
            active: course.active,
        }
    }
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self::from(&course)
    }
}

impl From<&Enrollment> for EnrollmentResponse {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            id: enrollment.id,
            member_id: enrollment.member_id,
            course_id: enrollment.course_id,
            enrollment_date: enrollment.enrollment_date,
            status: enrollment.status,
            completion_date: enrollment.completion_date,
        }
    }
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self::from(&enrollment)
    }
}

// ============================================================================
// Note Mappers
// ============================================================================

impl From<&Note> for NoteResponse {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            member_id: note.member_id,
            user_id: note.user_id,
            text: note.text.clone(),
            date: note.date,
        }
    }
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self::from(&note)
    }
}
