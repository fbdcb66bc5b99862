//! Dispatch URL construction.

use memolink_cipher::to_transport_safe;
use memolink_schema::ActionType;
use serde::{Deserialize, Serialize};

/// Server path, including the query key, that receives each action.
pub fn endpoint(action: ActionType) -> &'static str {
    match action {
        ActionType::IssueNote => "/qlik/issue/detail/?search=",
        ActionType::Reliability => "/qlik/reliability/detail/?search=",
        ActionType::QCostCreate => "/qlik/memo/create?search=",
        ActionType::QCostUpdate => "/qlik/memo/modify?search=",
    }
}

/// Final popup address: server, endpoint, and the encrypted token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispatchUrl(String);

impl DispatchUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DispatchUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Joins `server_address`, the action endpoint, and the transport-safe form
/// of `cipher_text`.
///
/// The server address is used verbatim.
pub fn build_url(server_address: &str, action: ActionType, cipher_text: &str) -> DispatchUrl {
    let token = to_transport_safe(cipher_text);
    let endpoint = endpoint(action);
    let mut url = String::with_capacity(server_address.len() + endpoint.len() + token.len());
    url.push_str(server_address);
    url.push_str(endpoint);
    url.push_str(&token);
    DispatchUrl(url)
}
