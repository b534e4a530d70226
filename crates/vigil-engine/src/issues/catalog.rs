//! Issue catalog: id → static issue metadata.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use std::time::Instant;

use rustc_hash::FxHashMap;

use super::builtin::builtin_issues;
use super::issue::{Issue, IssueId};

/// Mapping from issue id to issue metadata, plus the instant report
/// timestamps are measured from.
///
/// `init` is guarded by a `OnceLock`, so concurrent first calls are safe;
/// callers must still finish `init` before relying on built-in lookups.
#[derive(Debug, Default)]
pub struct IssueCatalog {
    issues: RwLock<FxHashMap<IssueId, Arc<Issue>>>,
    started: OnceLock<Instant>,
}

impl IssueCatalog {
    /// An empty catalog. Call [`IssueCatalog::init`] to load built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start instant and load the built-in issues.
    /// Subsequent calls are no-ops.
    pub fn init(&self) {
        self.started.get_or_init(|| {
            for issue in builtin_issues() {
                self.register(issue);
            }
            tracing::debug!(issues = self.len(), "issue catalog initialized");
            Instant::now()
        });
    }

    pub fn is_initialized(&self) -> bool {
        self.started.get().is_some()
    }

    /// Instant report timestamps are relative to. Initializes the catalog
    /// when nobody has yet.
    pub fn start_instant(&self) -> Instant {
        self.init();
        *self.started.get_or_init(Instant::now)
    }

    /// Register an issue.
    ///
    /// # Panics
    ///
    /// Panics if an issue with the same id is already registered.
    pub fn register(&self, issue: Issue) -> Arc<Issue> {
        let mut issues = self.issues.write().unwrap_or_else(PoisonError::into_inner);
        let id = issue.id();
        assert!(
            !issues.contains_key(&id),
            "issue {id} already registered"
        );
        let issue = Arc::new(issue);
        issues.insert(id, Arc::clone(&issue));
        issue
    }

    pub fn lookup(&self, id: IssueId) -> Option<Arc<Issue>> {
        self.issues
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.issues.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
