use anyhow::anyhow;
use serde::Deserialize;
use std::path::Path;

///
/// Subset of a Google service account JSON key
///
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    pub token_uri: String,
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            anyhow!(
                "cannot read service account file {}: {err}",
                path.display()
            )
        })?;
        let key = serde_json::from_str(&content)
            .map_err(|err| anyhow!("invalid service account file {}: {err}", path.display()))?;

        Ok(key)
    }
}
