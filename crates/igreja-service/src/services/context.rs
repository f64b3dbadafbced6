//! Service context - dependency container for services
//!
//! Holds the repositories, the durable session store and the in-process
//! session slot shared by all services.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use igreja_common::{AppConfig, AppError};
use igreja_core::entities::Identity;
use igreja_core::traits::{
    AccountRepository, CourseRepository, EnrollmentRepository, MemberRepository,
    MinistryRepository, NoteRepository, SessionStore,
};
use igreja_db::{
    create_pool, run_migrations, PgAccountRepository, PgCourseRepository, PgEnrollmentRepository,
    PgMemberRepository, PgMinistryRepository, PgNoteRepository,
};
use igreja_session::FileSessionStore;

/// In-process slot holding the identity signed in right now
///
/// One slot per context; `None` means anonymous. The durable record in the
/// session store is written and cleared alongside it, but only through the
/// auth service, never here.
#[derive(Clone, Default)]
pub struct CurrentSession {
    slot: Arc<RwLock<Option<Identity>>>,
}

impl CurrentSession {
    /// The signed-in identity, if any
    pub async fn get(&self) -> Option<Identity> {
        self.slot.read().await.clone()
    }

    /// Whether anyone is signed in
    pub async fn is_signed_in(&self) -> bool {
        self.slot.read().await.is_some()
    }

    pub(crate) async fn set(&self, identity: Identity) {
        *self.slot.write().await = Some(identity);
    }

    pub(crate) async fn clear(&self) {
        *self.slot.write().await = None;
    }
}

impl std::fmt::Debug for CurrentSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentSession").finish_non_exhaustive()
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The durable session store
/// - The in-process session slot
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    account_repo: Arc<dyn AccountRepository>,
    member_repo: Arc<dyn MemberRepository>,
    ministry_repo: Arc<dyn MinistryRepository>,
    course_repo: Arc<dyn CourseRepository>,
    enrollment_repo: Arc<dyn EnrollmentRepository>,
    note_repo: Arc<dyn NoteRepository>,

    // Session persistence
    session_store: Arc<dyn SessionStore>,

    // Runtime state
    current: CurrentSession,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        member_repo: Arc<dyn MemberRepository>,
        ministry_repo: Arc<dyn MinistryRepository>,
        course_repo: Arc<dyn CourseRepository>,
        enrollment_repo: Arc<dyn EnrollmentRepository>,
        note_repo: Arc<dyn NoteRepository>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            account_repo,
            member_repo,
            ministry_repo,
            course_repo,
            enrollment_repo,
            note_repo,
            session_store,
            current: CurrentSession::default(),
        }
    }

    /// Create a context backed by PostgreSQL repositories
    pub fn with_postgres(pool: igreja_db::PgPool, session_store: Arc<dyn SessionStore>) -> Self {
        Self::new(
            Arc::new(PgAccountRepository::new(pool.clone())),
            Arc::new(PgMemberRepository::new(pool.clone())),
            Arc::new(PgMinistryRepository::new(pool.clone())),
            Arc::new(PgCourseRepository::new(pool.clone())),
            Arc::new(PgEnrollmentRepository::new(pool.clone())),
            Arc::new(PgNoteRepository::new(pool)),
            session_store,
        )
    }

    /// Connect to the database and build the full production context
    ///
    /// Creates the pool, applies pending migrations and wires the file
    /// session store configured in `config`.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        info!("Connecting to PostgreSQL...");
        let db_config = igreja_db::DatabaseConfig {
            url: config.database.url.clone(),
            max_connections: config.database.max_connections,
            min_connections: config.database.min_connections,
            ..Default::default()
        };
        let pool = create_pool(&db_config)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("PostgreSQL connection established");

        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Schema migrations applied");

        let session_store = Arc::new(FileSessionStore::from_config(&config.session));

        Ok(Self::with_postgres(pool, session_store))
    }

    // === Repositories ===

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the ministry repository
    pub fn ministry_repo(&self) -> &dyn MinistryRepository {
        self.ministry_repo.as_ref()
    }

    /// Get the course repository
    pub fn course_repo(&self) -> &dyn CourseRepository {
        self.course_repo.as_ref()
    }

    /// Get the enrollment repository
    pub fn enrollment_repo(&self) -> &dyn EnrollmentRepository {
        self.enrollment_repo.as_ref()
    }

    /// Get the note repository
    pub fn note_repo(&self) -> &dyn NoteRepository {
        self.note_repo.as_ref()
    }

    // === Session ===

    /// Get the durable session store
    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    /// Get the in-process session slot
    pub fn current(&self) -> &CurrentSession {
        &self.current
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_store", &"...")
            .field("current", &self.current)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom dependencies
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    ministry_repo: Option<Arc<dyn MinistryRepository>>,
    course_repo: Option<Arc<dyn CourseRepository>>,
    enrollment_repo: Option<Arc<dyn EnrollmentRepository>>,
    note_repo: Option<Arc<dyn NoteRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            account_repo: None,
            member_repo: None,
            ministry_repo: None,
            course_repo: None,
            enrollment_repo: None,
            note_repo: None,
            session_store: None,
        }
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn ministry_repo(mut self, repo: Arc<dyn MinistryRepository>) -> Self {
        self.ministry_repo = Some(repo);
        self
    }

    pub fn course_repo(mut self, repo: Arc<dyn CourseRepository>) -> Self {
        self.course_repo = Some(repo);
        self
    }

    pub fn enrollment_repo(mut self, repo: Arc<dyn EnrollmentRepository>) -> Self {
        self.enrollment_repo = Some(repo);
        self
    }

    pub fn note_repo(mut self, repo: Arc<dyn NoteRepository>) -> Self {
        self.note_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.account_repo
                .ok_or_else(|| super::error::ServiceError::validation("account_repo is required"))?,
            self.member_repo
                .ok_or_else(|| super::error::ServiceError::validation("member_repo is required"))?,
            self.ministry_repo
                .ok_or_else(|| super::error::ServiceError::validation("ministry_repo is required"))?,
            self.course_repo
                .ok_or_else(|| super::error::ServiceError::validation("course_repo is required"))?,
            self.enrollment_repo
                .ok_or_else(|| {
                    super::error::ServiceError::validation("enrollment_repo is required")
                })?,
            self.note_repo
                .ok_or_else(|| super::error::ServiceError::validation("note_repo is required"))?,
            self.session_store
                .ok_or_else(|| super::error::ServiceError::validation("session_store is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
