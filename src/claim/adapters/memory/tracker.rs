//! In-memory issue tracker for workflow tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::claim::{
    domain::{Issue, IssueComment, IssueReference, IssueState},
    ports::{IssueTracker, Page, PageRequest, TrackerError, TrackerResult},
};

/// Tracker operation, used for call logs and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerOperation {
    /// [`IssueTracker::fetch_issue`].
    FetchIssue,
    /// [`IssueTracker::list_comments_page`].
    ListComments,
    /// [`IssueTracker::list_assignees_page`].
    ListAssignees,
    /// [`IssueTracker::add_label`].
    AddLabel,
    /// [`IssueTracker::remove_label`].
    RemoveLabel,
    /// [`IssueTracker::add_comment`].
    AddComment,
    /// [`IssueTracker::add_assignees`].
    AddAssignees,
    /// [`IssueTracker::remove_assignees`].
    RemoveAssignees,
}

/// Thread-safe in-memory issue tracker.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueTracker {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    issues: HashMap<IssueReference, StoredIssue>,
    failures: HashMap<(IssueReference, TrackerOperation), TrackerError>,
    calls: Vec<(TrackerOperation, IssueReference)>,
    next_comment_id: u64,
}

#[derive(Debug, Clone)]
struct StoredIssue {
    state: IssueState,
    labels: Vec<String>,
    assignees: Vec<String>,
    comments: Vec<IssueComment>,
}

impl StoredIssue {
    fn snapshot(&self, reference: &IssueReference) -> Issue {
        Issue::new(
            format!(
                "https://tracker.invalid/repos/{}/{}/issues/{}",
                reference.org(),
                reference.repo(),
                reference.number()
            ),
            self.state,
        )
        .with_labels(self.labels.clone())
        .with_assignees(self.assignees.clone())
    }
}

fn lock_error(err: impl ToString) -> TrackerError {
    TrackerError::transport(std::io::Error::other(err.to_string()))
}

fn missing(reference: &IssueReference) -> TrackerError {
    TrackerError::NotFound(format!("issue {reference}"))
}

fn page_of<T: Clone>(items: &[T], page: PageRequest) -> Page<T> {
    let start = page.offset().min(items.len());
    let end = start.saturating_add(page.per_page() as usize).min(items.len());
    let slice = items.get(start..end).unwrap_or_default().to_vec();
    if end < items.len() {
        Page::with_next(slice)
    } else {
        Page::last(slice)
    }
}

impl InMemoryIssueTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an open issue with no labels, assignees, or comments.
    ///
    /// Replaces any issue already stored under `reference`.
    pub fn insert_open(&self, reference: &IssueReference) {
        self.insert(reference, IssueState::Open, Vec::new(), Vec::new());
    }

    /// Adds an issue in the given state.
    ///
    /// Replaces any issue already stored under `reference`.
    pub fn insert(
        &self,
        reference: &IssueReference,
        state: IssueState,
        labels: Vec<String>,
        assignees: Vec<String>,
    ) {
        if let Ok(mut guard) = self.state.write() {
            guard.issues.insert(
                reference.clone(),
                StoredIssue {
                    state,
                    labels,
                    assignees,
                    comments: Vec::new(),
                },
            );
        }
    }

    /// Appends an existing comment to a stored issue.
    pub fn seed_comment(&self, reference: &IssueReference, body: &str) {
        if let Ok(mut guard) = self.state.write() {
            guard.next_comment_id += 1;
            let id = guard.next_comment_id;
            if let Some(issue) = guard.issues.get_mut(reference) {
                issue.comments.push(IssueComment::new(id, body));
            }
        }
    }

    /// Makes every future `operation` on `reference` fail with `error`.
    pub fn fail_on(
        &self,
        reference: &IssueReference,
        operation: TrackerOperation,
        error: TrackerError,
    ) {
        if let Ok(mut guard) = self.state.write() {
            guard
                .failures
                .insert((reference.clone(), operation), error);
        }
    }

    /// Returns the current snapshot of a stored issue.
    #[must_use]
    pub fn issue(&self, reference: &IssueReference) -> Option<Issue> {
        let guard = self.state.read().ok()?;
        guard
            .issues
            .get(reference)
            .map(|stored| stored.snapshot(reference))
    }

    /// Returns the comments posted on an issue, oldest first.
    #[must_use]
    pub fn comments(&self, reference: &IssueReference) -> Vec<IssueComment> {
        self.state
            .read()
            .ok()
            .and_then(|guard| guard.issues.get(reference).map(|issue| issue.comments.clone()))
            .unwrap_or_default()
    }

    /// Returns every operation attempted so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<(TrackerOperation, IssueReference)> {
        self.state
            .read()
            .map(|guard| guard.calls.clone())
            .unwrap_or_default()
    }

    /// Records the call and applies any injected failure, then runs `apply`
    /// against the stored issue.
    fn with_issue<R>(
        &self,
        reference: &IssueReference,
        operation: TrackerOperation,
        apply: impl FnOnce(&mut StoredIssue, &mut u64) -> TrackerResult<R>,
    ) -> TrackerResult<R> {
        let mut guard = self.state.write().map_err(lock_error)?;
        let state = &mut *guard;
        state.calls.push((operation, reference.clone()));
        if let Some(error) = state.failures.get(&(reference.clone(), operation)) {
            return Err(error.clone());
        }
        let issue = state
            .issues
            .get_mut(reference)
            .ok_or_else(|| missing(reference))?;
        apply(issue, &mut state.next_comment_id)
    }
}

#[async_trait]
impl IssueTracker for InMemoryIssueTracker {
    async fn fetch_issue(&self, reference: &IssueReference) -> TrackerResult<Issue> {
        self.with_issue(reference, TrackerOperation::FetchIssue, |issue, _| {
            Ok(issue.snapshot(reference))
        })
    }

    async fn list_comments_page(
        &self,
        reference: &IssueReference,
        page: PageRequest,
    ) -> TrackerResult<Page<IssueComment>> {
        self.with_issue(reference, TrackerOperation::ListComments, |issue, _| {
            Ok(page_of(&issue.comments, page))
        })
    }

    async fn list_assignees_page(
        &self,
        reference: &IssueReference,
        page: PageRequest,
    ) -> TrackerResult<Page<String>> {
        self.with_issue(reference, TrackerOperation::ListAssignees, |issue, _| {
            Ok(page_of(&issue.assignees, page))
        })
    }

    async fn add_label(&self, reference: &IssueReference, label: &str) -> TrackerResult<()> {
        self.with_issue(reference, TrackerOperation::AddLabel, |issue, _| {
            if !issue.labels.iter().any(|existing| existing == label) {
                issue.labels.push(label.to_owned());
            }
            Ok(())
        })
    }

    async fn remove_label(&self, reference: &IssueReference, label: &str) -> TrackerResult<()> {
        self.with_issue(reference, TrackerOperation::RemoveLabel, |issue, _| {
            let before = issue.labels.len();
            issue.labels.retain(|existing| existing != label);
            if issue.labels.len() == before {
                return Err(TrackerError::NotFound(format!(
                    "label '{label}' on issue {reference}"
                )));
            }
            Ok(())
        })
    }

    async fn add_comment(
        &self,
        reference: &IssueReference,
        body: &str,
    ) -> TrackerResult<IssueComment> {
        self.with_issue(reference, TrackerOperation::AddComment, |issue, next_id| {
            *next_id += 1;
            let comment = IssueComment::new(*next_id, body);
            issue.comments.push(comment.clone());
            Ok(comment)
        })
    }

    async fn add_assignees(
        &self,
        reference: &IssueReference,
        logins: &[String],
    ) -> TrackerResult<()> {
        self.with_issue(reference, TrackerOperation::AddAssignees, |issue, _| {
            for login in logins {
                if !issue.assignees.contains(login) {
                    issue.assignees.push(login.clone());
                }
            }
            Ok(())
        })
    }

    async fn remove_assignees(
        &self,
        reference: &IssueReference,
        logins: &[String],
    ) -> TrackerResult<()> {
        self.with_issue(reference, TrackerOperation::RemoveAssignees, |issue, _| {
            issue.assignees.retain(|assignee| !logins.contains(assignee));
            Ok(())
        })
    }
}
