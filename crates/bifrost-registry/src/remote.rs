//! Remote registry fetch and repository verification

use crate::entry::RegistryEntry;
use crate::{REGISTRY_BRANCH, REGISTRY_FILE, REGISTRY_REPO};
use bifrost_core::StackReference;
use serde::Deserialize;
use tracing::{debug, warn};

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_RAW_URL: &str = "https://raw.githubusercontent.com";

/// GitHub requires a User-Agent on every API request
fn user_agent() -> String {
    format!("bifrost-cli/{}", env!("CARGO_PKG_VERSION"))
}

fn client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(user_agent()).build()
}

/// Fetch the current contents of the shared registry
///
/// A fetch failure or non-success response is treated as an empty registry,
/// not an error: a first submission against an uninitialized registry must
/// still succeed.
pub async fn fetch_registry() -> Vec<RegistryEntry> {
    let url = format!("{GITHUB_RAW_URL}/{REGISTRY_REPO}/{REGISTRY_BRANCH}/{REGISTRY_FILE}");
    debug!("Fetching registry from: {}", url);

    let response = match client() {
        Ok(client) => client.get(&url).send().await,
        Err(e) => {
            warn!("Failed to build HTTP client: {}. Treating registry as empty", e);
            return Vec::new();
        }
    };

    match response {
        Ok(response) if response.status().is_success() => {
            match response.json::<Vec<RegistryEntry>>().await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Registry contents unreadable: {}. Treating as empty", e);
                    Vec::new()
                }
            }
        }
        Ok(response) => {
            debug!(
                "Registry fetch returned {}. Treating as empty",
                response.status()
            );
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to fetch registry: {}. Treating as empty", e);
            Vec::new()
        }
    }
}

#[derive(Debug, Deserialize)]
struct RepoMetadata {
    #[serde(default)]
    private: bool,
}

/// Check whether a repository is publicly reachable
///
/// An unauthenticated metadata lookup: any network failure, non-success
/// response, or `private: true` answer counts as not public. Published
/// templates must be cloneable by others, so this gates submission.
pub async fn verify_public_repo(reference: &StackReference) -> bool {
    let url = format!(
        "{GITHUB_API_URL}/repos/{}/{}",
        reference.owner, reference.repo
    );
    debug!("Verifying repository visibility: {}", url);

    let Ok(client) = client() else {
        return false;
    };

    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            match response.json::<RepoMetadata>().await {
                Ok(metadata) => !metadata.private,
                Err(_) => false,
            }
        }
        _ => false,
    }
}
