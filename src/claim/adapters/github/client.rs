//! `reqwest`-backed [`IssueTracker`] for the GitHub REST API.

use super::config::GitHubConfig;
use super::models::{
    AssigneesBody, CommentBody, GitHubComment, GitHubErrorBody, GitHubIssue, GitHubUser,
    LabelsBody,
};
use crate::claim::{
    domain::{Issue, IssueComment, IssueReference},
    ports::{
        IdentityError, IdentityResolver, IdentityResult, IssueTracker, Page, PageRequest,
        TrackerError, TrackerResult,
    },
};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, LINK};
use reqwest::{RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

/// GitHub issue tracker and identity resolver.
#[derive(Debug)]
pub struct GitHubIssueTracker {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl GitHubIssueTracker {
    /// Builds the HTTP client for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Transport`] when the client cannot be built.
    pub fn new(config: GitHubConfig) -> TrackerResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .build()
            .map_err(TrackerError::transport)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            token: config.token,
        })
    }

    fn issue_url(&self, reference: &IssueReference, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}{suffix}",
            self.base_url,
            urlencoding::encode(reference.org()),
            urlencoding::encode(reference.repo()),
            urlencoding::encode(reference.number()),
        )
    }

    async fn send(&self, request: RequestBuilder) -> TrackerResult<Response> {
        let response = request
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(TrackerError::transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GitHubErrorBody>(&body)
            .map(|error| error.message)
            .unwrap_or(body);
        debug!(%url, status = status.as_u16(), %message, "GitHub request failed");

        if status == StatusCode::NOT_FOUND {
            return Err(TrackerError::NotFound(format!("{url}: {message}")));
        }
        Err(TrackerError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> TrackerResult<T> {
        let response = self.send(request).await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> TrackerResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| TrackerError::Decode(err.to_string()))
}

fn has_next_page(response: &Response) -> bool {
    response
        .headers()
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|links| links.split(',').any(|link| link.contains("rel=\"next\"")))
}

#[async_trait]
impl IssueTracker for GitHubIssueTracker {
    async fn fetch_issue(&self, reference: &IssueReference) -> TrackerResult<Issue> {
        let issue: GitHubIssue = self
            .send_json(self.http.get(self.issue_url(reference, "")))
            .await?;
        Issue::try_from(issue)
    }

    async fn list_comments_page(
        &self,
        reference: &IssueReference,
        page: PageRequest,
    ) -> TrackerResult<Page<IssueComment>> {
        let request = self
            .http
            .get(self.issue_url(reference, "/comments"))
            .query(&[("per_page", page.per_page()), ("page", page.number())]);
        let response = self.send(request).await?;
        let has_next = has_next_page(&response);
        let comments: Vec<GitHubComment> = decode(response).await?;
        Ok(Page {
            items: comments.into_iter().map(IssueComment::from).collect(),
            has_next,
        })
    }

    async fn list_assignees_page(
        &self,
        reference: &IssueReference,
        page: PageRequest,
    ) -> TrackerResult<Page<String>> {
        // The issue payload carries the full assignee list, so there is only
        // ever one page.
        if page.number() > 1 {
            return Ok(Page::last(Vec::new()));
        }
        let issue = self.fetch_issue(reference).await?;
        Ok(Page::last(issue.assignees().to_vec()))
    }

    async fn add_label(&self, reference: &IssueReference, label: &str) -> TrackerResult<()> {
        let request = self
            .http
            .post(self.issue_url(reference, "/labels"))
            .json(&LabelsBody { labels: [label] });
        self.send(request).await.map(|_| ())
    }

    async fn remove_label(&self, reference: &IssueReference, label: &str) -> TrackerResult<()> {
        let suffix = format!("/labels/{}", urlencoding::encode(label));
        self.send(self.http.delete(self.issue_url(reference, &suffix)))
            .await
            .map(|_| ())
    }

    async fn add_comment(
        &self,
        reference: &IssueReference,
        body: &str,
    ) -> TrackerResult<IssueComment> {
        let request = self
            .http
            .post(self.issue_url(reference, "/comments"))
            .json(&CommentBody { body });
        let comment: GitHubComment = self.send_json(request).await?;
        Ok(comment.into())
    }

    async fn add_assignees(
        &self,
        reference: &IssueReference,
        logins: &[String],
    ) -> TrackerResult<()> {
        let request = self
            .http
            .post(self.issue_url(reference, "/assignees"))
            .json(&AssigneesBody { assignees: logins });
        self.send(request).await.map(|_| ())
    }

    async fn remove_assignees(
        &self,
        reference: &IssueReference,
        logins: &[String],
    ) -> TrackerResult<()> {
        let request = self
            .http
            .delete(self.issue_url(reference, "/assignees"))
            .json(&AssigneesBody { assignees: logins });
        self.send(request).await.map(|_| ())
    }
}

#[async_trait]
impl IdentityResolver for GitHubIssueTracker {
    async fn resolve_login(&self) -> IdentityResult<String> {
        let url = format!("{}/user", self.base_url);
        let user: GitHubUser = self
            .send_json(self.http.get(url))
            .await
            .map_err(IdentityError::lookup)?;
        Ok(user.login)
    }
}
