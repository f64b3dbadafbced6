//! Test helpers for integration tests
//!
//! In-memory repository doubles backing a full `ServiceContext`. Rows live
//! in vectors behind mutexes, and the mutating doubles count their calls so
//! tests can assert exactly how many store operations a service issued.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use igreja_core::entities::{Course, Enrollment, Identity, Member, Ministry, Note, Role};
use igreja_core::traits::{
    AccountPatch, AccountRepository, CourseRepository, EnrollmentRepository, MemberRepository,
    MinistryRepository, NoteRepository, RepoResult, SessionStore, SessionStoreError,
};
use igreja_core::value_objects::{EnrollmentStatus, RoleName};
use igreja_core::DomainError;
use igreja_service::{ServiceContext, ServiceContextBuilder};
use igreja_session::MemorySessionStore;

// ============================================================================
// Accounts
// ============================================================================

struct AccountRow {
    id: i64,
    email: String,
    password_hash: String,
    role_id: Option<i64>,
}

impl AccountRow {
    fn to_identity(&self) -> Identity {
        let role = self
            .role_id
            .and_then(|id| RoleName::from_id(id).map(|role_name| Role { id, role_name }));
        match role {
            Some(role) => Identity::with_role(self.id, self.email.clone(), role),
            None => Identity::new(self.id, self.email.clone()),
        }
    }
}

/// In-memory account store
///
/// Counts every trait call, so a test can assert that an operation made no
/// account lookups at all. Account-row updates are counted separately so a
/// role-only change can be shown to skip the row entirely.
#[derive(Default)]
pub struct MemoryAccountRepository {
    rows: Mutex<Vec<AccountRow>>,
    next_id: AtomicI64,
    calls: AtomicU64,
    update_calls: AtomicU64,
}

impl MemoryAccountRepository {
    /// Total trait calls made so far
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Account-row updates issued so far
    pub fn updates_issued(&self) -> u64 {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Identity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == id).map(AccountRow::to_identity))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Identity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.email == email)
            .map(AccountRow::to_identity))
    }

    async fn list(&self) -> RepoResult<Vec<Identity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        let mut identities: Vec<Identity> = rows.iter().map(AccountRow::to_identity).collect();
        identities.sort_by_key(|i| i.id);
        Ok(identities)
    }

    async fn create(&self, email: &str, password_hash: &str) -> RepoResult<Identity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.email == email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = AccountRow {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role_id: None,
        };
        let identity = row.to_identity();
        rows.push(row);
        Ok(identity)
    }

    async fn update(&self, id: i64, patch: AccountPatch) -> RepoResult<Identity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if let Some(email) = &patch.email {
            if rows.iter().any(|r| r.email == *email && r.id != id) {
                return Err(DomainError::EmailAlreadyExists);
            }
        }

        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::AccountNotFound(id))?;
        if let Some(email) = patch.email {
            row.email = email;
        }
        if let Some(hash) = patch.password_hash {
            row.password_hash = hash;
        }
        Ok(row.to_identity())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(DomainError::AccountNotFound(id));
        }
        Ok(())
    }

    async fn password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.password_hash.clone()))
    }

    async fn insert_role_assignment(&self, user_id: i64, role_id: i64) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if RoleName::from_id(role_id).is_none() {
            return Err(DomainError::RoleNotFound(role_id));
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == user_id)
            .ok_or(DomainError::AccountNotFound(user_id))?;
        if row.role_id.is_some() {
            return Err(DomainError::RoleAlreadyAssigned(user_id));
        }
        row.role_id = Some(role_id);
        Ok(())
    }

    async fn upsert_role_assignment(&self, user_id: i64, role_id: i64) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if RoleName::from_id(role_id).is_none() {
            return Err(DomainError::RoleNotFound(role_id));
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == user_id)
            .ok_or(DomainError::AccountNotFound(user_id))?;
        row.role_id = Some(role_id);
        Ok(())
    }
}

// ============================================================================
// Members
// ============================================================================

/// In-memory member store
#[derive(Default)]
pub struct MemoryMemberRepository {
    rows: Mutex<Vec<Member>>,
    next_id: AtomicI64,
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|m| m.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let rows = self.rows.lock().unwrap();
        let mut members = rows.clone();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    async fn find_eligible_leaders(&self) -> RepoResult<Vec<Member>> {
        let rows = self.rows.lock().unwrap();
        let mut members: Vec<Member> = rows
            .iter()
            .filter(|m| m.is_eligible_leader())
            .cloned()
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    async fn create(&self, member: &Member) -> RepoResult<Member> {
        let mut rows = self.rows.lock().unwrap();
        let mut created = member.clone();
        created.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, member: &Member) -> RepoResult<Member> {
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or(DomainError::MemberNotFound(member.id))?;

        // The store keeps the creation timestamp on update
        let mut updated = member.clone();
        updated.created_at = existing.created_at;
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(DomainError::MemberNotFound(id));
        }
        Ok(())
    }
}

// ============================================================================
// Ministries
// ============================================================================

/// In-memory ministry store with its link table
///
/// Linking enforces that the ministry exists, the way the foreign key does
/// in the real store.
#[derive(Default)]
pub struct MemoryMinistryRepository {
    ministries: Mutex<Vec<Ministry>>,
    links: Mutex<Vec<(i64, i64)>>,
    link_calls: AtomicU64,
    unlink_calls: AtomicU64,
}

impl MemoryMinistryRepository {
    pub fn with_ministries(ministries: Vec<Ministry>) -> Self {
        Self {
            ministries: Mutex::new(ministries),
            ..Self::default()
        }
    }

    /// Link inserts issued so far
    pub fn links_issued(&self) -> u64 {
        self.link_calls.load(Ordering::SeqCst)
    }

    /// Delete-all calls issued so far
    pub fn unlinks_issued(&self) -> u64 {
        self.unlink_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MinistryRepository for MemoryMinistryRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Ministry>> {
        let ministries = self.ministries.lock().unwrap();
        Ok(ministries.iter().find(|m| m.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Ministry>> {
        let ministries = self.ministries.lock().unwrap();
        let mut all = ministries.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_active(&self) -> RepoResult<Vec<Ministry>> {
        let ministries = self.ministries.lock().unwrap();
        let mut active: Vec<Ministry> =
            ministries.iter().filter(|m| m.is_active).cloned().collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(active)
    }

    async fn link_member(&self, member_id: i64, ministry_id: i64) -> RepoResult<()> {
        self.link_calls.fetch_add(1, Ordering::SeqCst);
        {
            let ministries = self.ministries.lock().unwrap();
            if !ministries.iter().any(|m| m.id == ministry_id) {
                return Err(DomainError::MinistryNotFound(ministry_id));
            }
        }

        let mut links = self.links.lock().unwrap();
        if links.contains(&(member_id, ministry_id)) {
            return Err(DomainError::AlreadyInMinistry {
                member_id,
                ministry_id,
            });
        }
        links.push((member_id, ministry_id));
        Ok(())
    }

    async fn unlink_member(&self, member_id: i64) -> RepoResult<u64> {
        self.unlink_calls.fetch_add(1, Ordering::SeqCst);
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|(m, _)| *m != member_id);
        Ok((before - links.len()) as u64)
    }

    async fn ministry_ids_for_member(&self, member_id: i64) -> RepoResult<Vec<i64>> {
        let links = self.links.lock().unwrap();
        let mut ids: Vec<i64> = links
            .iter()
            .filter(|(m, _)| *m == member_id)
            .map(|(_, ministry)| *ministry)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

// ============================================================================
// Courses
// ============================================================================

/// In-memory course catalog
#[derive(Default)]
pub struct MemoryCourseRepository {
    courses: Mutex<Vec<Course>>,
}

impl MemoryCourseRepository {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(courses),
        }
    }
}

#[async_trait]
impl CourseRepository for MemoryCourseRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Course>> {
        let courses = self.courses.lock().unwrap();
        Ok(courses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Course>> {
        let courses = self.courses.lock().unwrap();
        let mut all = courses.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

// ============================================================================
// Enrollments
// ============================================================================

/// In-memory enrollment store
///
/// Enrolling checks the course against the known catalog ids, the way the
/// foreign key does in the real store.
#[derive(Default)]
pub struct MemoryEnrollmentRepository {
    rows: Mutex<Vec<Enrollment>>,
    known_courses: Mutex<HashSet<i64>>,
    next_id: AtomicI64,
    enroll_calls: AtomicU64,
    remove_calls: AtomicU64,
}

impl MemoryEnrollmentRepository {
    pub fn with_courses(course_ids: &[i64]) -> Self {
        Self {
            known_courses: Mutex::new(course_ids.iter().copied().collect()),
            ..Self::default()
        }
    }

    /// Enroll inserts issued so far
    pub fn enrolls_issued(&self) -> u64 {
        self.enroll_calls.load(Ordering::SeqCst)
    }

    /// Row deletes issued so far
    pub fn removes_issued(&self) -> u64 {
        self.remove_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnrollmentRepository for MemoryEnrollmentRepository {
    async fn enroll(
        &self,
        member_id: i64,
        course_id: i64,
        enrolled_at: DateTime<Utc>,
    ) -> RepoResult<Enrollment> {
        self.enroll_calls.fetch_add(1, Ordering::SeqCst);
        {
            let known = self.known_courses.lock().unwrap();
            if !known.contains(&course_id) {
                return Err(DomainError::CourseNotFound(course_id));
            }
        }

        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|e| e.member_id == member_id && e.course_id == course_id)
        {
            return Err(DomainError::AlreadyEnrolled {
                member_id,
                course_id,
            });
        }

        let mut enrollment = Enrollment::new(member_id, course_id, enrolled_at);
        enrollment.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        rows.push(enrollment.clone());
        Ok(enrollment)
    }

    async fn remove(&self, member_id: i64, course_id: i64) -> RepoResult<()> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| !(e.member_id == member_id && e.course_id == course_id));
        if rows.len() == before {
            return Err(DomainError::EnrollmentNotFound {
                member_id,
                course_id,
            });
        }
        Ok(())
    }

    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Enrollment>> {
        let rows = self.rows.lock().unwrap();
        let mut enrollments: Vec<Enrollment> = rows
            .iter()
            .filter(|e| e.member_id == member_id)
            .cloned()
            .collect();
        enrollments.sort_by_key(|e| e.course_id);
        Ok(enrollments)
    }

    async fn find_by_member_and_status(
        &self,
        member_id: i64,
        status: EnrollmentStatus,
    ) -> RepoResult<Vec<Enrollment>> {
        let rows = self.rows.lock().unwrap();
        let mut enrollments: Vec<Enrollment> = rows
            .iter()
            .filter(|e| e.member_id == member_id && e.status == status)
            .cloned()
            .collect();
        enrollments.sort_by_key(|e| e.course_id);
        Ok(enrollments)
    }

    async fn find_by_course(&self, course_id: i64) -> RepoResult<Vec<Enrollment>> {
        let rows = self.rows.lock().unwrap();
        let mut enrollments: Vec<Enrollment> = rows
            .iter()
            .filter(|e| e.course_id == course_id)
            .cloned()
            .collect();
        enrollments.sort_by_key(|e| e.member_id);
        Ok(enrollments)
    }

    async fn update_status(
        &self,
        member_id: i64,
        course_id: i64,
        status: EnrollmentStatus,
        completion_date: Option<DateTime<Utc>>,
    ) -> RepoResult<Enrollment> {
        let mut rows = self.rows.lock().unwrap();
        let enrollment = rows
            .iter_mut()
            .find(|e| e.member_id == member_id && e.course_id == course_id)
            .ok_or(DomainError::EnrollmentNotFound {
                member_id,
                course_id,
            })?;
        enrollment.status = status;
        enrollment.completion_date = completion_date;
        Ok(enrollment.clone())
    }
}

// ============================================================================
// Notes
// ============================================================================

/// In-memory note store
#[derive(Default)]
pub struct MemoryNoteRepository {
    rows: Mutex<Vec<Note>>,
    next_id: AtomicI64,
    create_calls: AtomicU64,
}

impl MemoryNoteRepository {
    /// Note inserts issued so far
    pub fn creates_issued(&self) -> u64 {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn create(&self, member_id: i64, user_id: i64, text: &str) -> RepoResult<Note> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let mut note = Note::new(member_id, user_id, text.to_string());
        note.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        rows.push(note.clone());
        Ok(note)
    }

    async fn find_by_member_and_author(
        &self,
        member_id: i64,
        user_id: i64,
    ) -> RepoResult<Vec<Note>> {
        let rows = self.rows.lock().unwrap();
        let mut notes: Vec<Note> = rows
            .iter()
            .filter(|n| n.member_id == member_id && n.user_id == user_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(notes)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|n| n.id != id);
        if rows.len() == before {
            return Err(DomainError::NoteNotFound(id));
        }
        Ok(())
    }
}

// ============================================================================
// Session store
// ============================================================================

/// Session store whose operations can be told to fail
///
/// Wraps the in-memory slot; each flag turns the corresponding operation
/// into an I/O error until switched back off.
#[derive(Default)]
pub struct UnreliableSessionStore {
    inner: MemorySessionStore,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
    fail_clears: AtomicBool,
}

impl UnreliableSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `save` fail until turned off
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make every `load` fail until turned off
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make every `clear` fail until turned off
    pub fn fail_clears(&self, fail: bool) {
        self.fail_clears.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SessionStore for UnreliableSessionStore {
    async fn load(&self) -> Result<Option<Identity>, SessionStoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(SessionStoreError::Io("disk unavailable".to_string()));
        }
        self.inner.load().await
    }

    async fn save(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SessionStoreError::Io("disk unavailable".to_string()));
        }
        self.inner.save(identity).await
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        if self.fail_clears.load(Ordering::SeqCst) {
            return Err(SessionStoreError::Io("disk unavailable".to_string()));
        }
        self.inner.clear().await
    }
}

// ============================================================================
// Context harness
// ============================================================================

/// A full service context over in-memory doubles, with handles kept on
/// each double so tests can seed rows and read call counters
pub struct TestContext {
    pub ctx: ServiceContext,
    pub accounts: Arc<MemoryAccountRepository>,
    pub members: Arc<MemoryMemberRepository>,
    pub ministries: Arc<MemoryMinistryRepository>,
    pub courses: Arc<MemoryCourseRepository>,
    pub enrollments: Arc<MemoryEnrollmentRepository>,
    pub notes: Arc<MemoryNoteRepository>,
    pub session: Arc<dyn SessionStore>,
}

impl TestContext {
    /// Empty context
    pub fn new() -> Self {
        Self::with_catalog(Vec::new(), Vec::new())
    }

    /// Context seeded with a ministry and course catalog
    pub fn with_catalog(ministries: Vec<Ministry>, courses: Vec<Course>) -> Self {
        Self::build(ministries, courses, Arc::new(MemorySessionStore::new()))
    }

    /// Empty context over the given session store
    pub fn with_session_store(session: Arc<dyn SessionStore>) -> Self {
        Self::build(Vec::new(), Vec::new(), session)
    }

    fn build(
        ministries: Vec<Ministry>,
        courses: Vec<Course>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let course_ids: Vec<i64> = courses.iter().map(|c| c.id).collect();

        let accounts = Arc::new(MemoryAccountRepository::default());
        let members = Arc::new(MemoryMemberRepository::default());
        let ministries = Arc::new(MemoryMinistryRepository::with_ministries(ministries));
        let courses = Arc::new(MemoryCourseRepository::with_courses(courses));
        let enrollments = Arc::new(MemoryEnrollmentRepository::with_courses(&course_ids));
        let notes = Arc::new(MemoryNoteRepository::default());

        let ctx = ServiceContextBuilder::new()
            .account_repo(accounts.clone())
            .member_repo(members.clone())
            .ministry_repo(ministries.clone())
            .course_repo(courses.clone())
            .enrollment_repo(enrollments.clone())
            .note_repo(notes.clone())
            .session_store(session.clone())
            .build()
            .expect("all dependencies provided");

        Self {
            ctx,
            accounts,
            members,
            ministries,
            courses,
            enrollments,
            notes,
            session,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
