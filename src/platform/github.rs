//! GitHub platform service implementation

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::platform::PullRequestPlatform;
use crate::types::{
    MergeInput, MergeableState, PullRequestLocator, PullRequestSnapshot, PullRequestState,
    ReviewState,
};

// GraphQL response types

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestQueryData {
    repository: Option<RepositoryNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    pull_request: Option<PullRequestNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestNode {
    id: String,
    title: String,
    mergeable: MergeableState,
    merged: bool,
    state: PullRequestState,
    commits: CommitConnection,
    reviews: ReviewConnection,
}

#[derive(Deserialize)]
struct CommitConnection {
    edges: Vec<CommitEdge>,
}

#[derive(Deserialize)]
struct CommitEdge {
    node: CommitNode,
}

#[derive(Deserialize)]
struct CommitNode {
    commit: CommitDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitDetails {
    author: Option<CommitAuthor>,
    message: String,
    message_headline: String,
}

#[derive(Deserialize)]
struct CommitAuthor {
    name: Option<String>,
}

#[derive(Deserialize)]
struct ReviewConnection {
    edges: Vec<ReviewEdge>,
}

#[derive(Deserialize)]
struct ReviewEdge {
    node: ReviewNode,
}

#[derive(Deserialize)]
struct ReviewNode {
    state: ReviewState,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MergeMutationData {
    merge_pull_request: MergeMutationPayload,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MergeMutationPayload {
    pull_request: Option<MergedFlag>,
}

#[derive(Deserialize)]
struct MergedFlag {
    merged: bool,
}

impl From<PullRequestNode> for PullRequestSnapshot {
    fn from(node: PullRequestNode) -> Self {
        let commit = node.commits.edges.into_iter().next().map(|edge| edge.node.commit);
        let latest_review_state = node.reviews.edges.into_iter().next().map(|edge| edge.node.state);

        Self {
            id: node.id,
            title: node.title,
            mergeable: node.mergeable,
            merged: node.merged,
            state: node.state,
            last_commit_author_name: commit
                .as_ref()
                .and_then(|c| c.author.as_ref())
                .and_then(|author| author.name.clone()),
            last_commit_message: commit.as_ref().map(|c| c.message.clone()).unwrap_or_default(),
            last_commit_headline: commit.map(|c| c.message_headline).unwrap_or_default(),
            latest_review_state,
        }
    }
}

/// GitHub service using octocrab
pub struct GitHubPlatform {
    client: Octocrab,
}

impl GitHubPlatform {
    /// Create a platform client from a personal access token
    pub fn new(token: &str) -> Result<Self> {
        Self::with_host(token, None)
    }

    /// Create a platform client against a GitHub Enterprise host
    pub fn with_host(token: &str, host: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(host) = host {
            let base_url = format!("https://{host}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::Platform(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::Platform(e.to_string()))?;

        Ok(Self { client })
    }
}

fn collect_errors(errors: Vec<GraphQlError>) -> Error {
    let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
    Error::Platform(format!("GraphQL error: {}", messages.join(", ")))
}

#[async_trait]
impl PullRequestPlatform for GitHubPlatform {
    async fn fetch_pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Option<PullRequestSnapshot>> {
        debug!(
            owner = %locator.owner,
            repo = %locator.name,
            pr_number = locator.number,
            "fetching pull request state"
        );

        let response: GraphQlResponse<PullRequestQueryData> = self
            .client
            .graphql(&serde_json::json!({
                "query": r"
                    query PullRequestMergeState(
                        $repositoryOwner: String!,
                        $repositoryName: String!,
                        $pullRequestNumber: Int!
                    ) {
                        repository(owner: $repositoryOwner, name: $repositoryName) {
                            pullRequest(number: $pullRequestNumber) {
                                id
                                title
                                mergeable
                                merged
                                state
                                commits(last: 1) {
                                    edges {
                                        node {
                                            commit {
                                                author { name }
                                                message
                                                messageHeadline
                                            }
                                        }
                                    }
                                }
                                reviews(last: 1) {
                                    edges { node { state } }
                                }
                            }
                        }
                    }
                ",
                "variables": {
                    "repositoryOwner": locator.owner,
                    "repositoryName": locator.name,
                    "pullRequestNumber": locator.number,
                }
            }))
            .await
            .map_err(|e| Error::Platform(format!("GraphQL query failed: {e}")))?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            return Err(collect_errors(errors));
        }

        let snapshot = response
            .data
            .and_then(|data| data.repository)
            .and_then(|repository| repository.pull_request)
            .map(PullRequestSnapshot::from);

        if let Some(ref snapshot) = snapshot {
            debug!(pr_id = %snapshot.id, "fetched pull request state");
        } else {
            debug!(pr_number = locator.number, "pull request not found");
        }
        Ok(snapshot)
    }

    async fn merge_pull_request(&self, input: &MergeInput) -> Result<()> {
        debug!(
            pr_id = %input.pull_request_id,
            method = %input.merge_method,
            "merging pull request"
        );

        let response: GraphQlResponse<MergeMutationData> = self
            .client
            .graphql(&serde_json::json!({
                "query": r"
                    mutation MergePullRequest(
                        $pullRequestId: ID!,
                        $commitHeadline: String!,
                        $mergeMethod: PullRequestMergeMethod!
                    ) {
                        mergePullRequest(input: {
                            pullRequestId: $pullRequestId,
                            commitHeadline: $commitHeadline,
                            mergeMethod: $mergeMethod
                        }) {
                            pullRequest { merged }
                        }
                    }
                ",
                "variables": {
                    "pullRequestId": input.pull_request_id,
                    "commitHeadline": input.commit_headline,
                    "mergeMethod": input.merge_method,
                }
            }))
            .await
            .map_err(|e| Error::Platform(format!("GraphQL mutation failed: {e}")))?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            return Err(collect_errors(errors));
        }

        let merged = response
            .data
            .and_then(|data| data.merge_pull_request.pull_request)
            .is_some_and(|pr| pr.merged);

        if !merged {
            return Err(Error::Platform(
                "merge mutation did not merge the pull request".to_string(),
            ));
        }

        debug!(pr_id = %input.pull_request_id, "merged pull request");
        Ok(())
    }
}
