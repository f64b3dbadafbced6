//! Test fixtures and data generators
//!
//! Provides reusable seed data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use igreja_core::entities::{Course, Identity, Ministry, Role};
use igreja_core::value_objects::{MaritalStatus, RoleName};
use igreja_service::dto::{CreateAccountRequest, MemberForm, SignInRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A unique email under example.com
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}{}@example.com", unique_suffix())
}

/// Password accepted by the strength check, shared across tests
pub const TEST_PASSWORD: &str = "senha-segura-123";

/// Account creation request with a unique email
pub fn account_request(role_id: Option<i64>) -> CreateAccountRequest {
    CreateAccountRequest {
        email: unique_email("conta"),
        password: TEST_PASSWORD.to_string(),
        role_id,
    }
}

/// Sign-in request for an already created account
pub fn sign_in_request(email: &str, password: &str) -> SignInRequest {
    SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// An identity carrying the catalog role for `role_name`
pub fn identity_with_role(id: i64, role_name: RoleName) -> Identity {
    Identity::with_role(id, unique_email("staff"), Role::of(role_name))
}

/// Member form with only the name filled in, active and baptized
///
/// Baptized so the member also shows up in leader choice lists.
pub fn member_form(name: &str) -> MemberForm {
    MemberForm {
        name: name.to_string(),
        date_of_birth: None,
        phone_number: None,
        address: None,
        rg: None,
        cpf: None,
        marital_status: MaritalStatus::default(),
        spouse_name: None,
        marriage_date: None,
        baptized: true,
        baptism_date: None,
        church_of_baptism: None,
        love_language: Vec::new(),
        personality_test: Vec::new(),
        is_pastor: false,
        is_leader: false,
        is_co_leader: false,
        is_active: true,
    }
}

/// Catalog ministry with a fixed id, no leadership assigned
pub fn ministry(id: i64, name: &str) -> Ministry {
    Ministry {
        id,
        name: name.to_string(),
        leader_id: None,
        co_leader_id: None,
        is_active: true,
    }
}

/// Catalog course with a fixed id
pub fn course(id: i64, name: &str) -> Course {
    Course {
        id,
        name: name.to_string(),
        active: true,
    }
}
