//! Annict GraphQL response models
//!
//! Every field is optional: the API returns `null` for missing sub-records and
//! the mapper decides what a missing value means.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

/// GraphQL response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Generic `{ nodes: [...] }` connection; null entries are kept as `None`
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    pub nodes: Option<Vec<Option<T>>>,
}

impl<T> Connection<T> {
    /// Present nodes only, in response order
    pub fn into_present_nodes(self) -> impl Iterator<Item = T> {
        self.nodes.unwrap_or_default().into_iter().flatten()
    }
}

// =============================================================================
// SHARED NODES
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkNode {
    pub title: Option<String>,
    pub official_site_url: Option<String>,
    pub image: Option<WorkImageNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkImageNode {
    pub recommended_image_url: Option<String>,
    pub facebook_og_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeNode {
    pub number: Option<i64>,
    pub number_text: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelNode {
    pub name: Option<String>,
}

// =============================================================================
// PROGRAMS
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GetProgramsData {
    pub viewer: Option<ProgramsViewer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgramsViewer {
    pub programs: Option<Connection<ProgramNode>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramNode {
    pub started_at: Option<String>,
    pub channel: Option<ChannelNode>,
    pub episode: Option<EpisodeNode>,
    pub work: Option<WorkNode>,
}

// =============================================================================
// LIBRARY ENTRIES
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GetLibraryEntriesData {
    pub viewer: Option<LibraryEntriesViewer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntriesViewer {
    pub library_entries: Option<Connection<LibraryEntryNode>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntryNode {
    pub work: Option<WorkNode>,
    pub next_episode: Option<EpisodeNode>,
    pub next_program: Option<NextProgramNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextProgramNode {
    pub started_at: Option<String>,
    pub channel: Option<ChannelNode>,
}
