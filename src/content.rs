//! Branch directory and outbound links shown under the report.

use serde::Deserialize;

use crate::error::{AppError, Result};

const CONTENT_JSON: &str = include_str!("../assets/content.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BranchRegion {
    pub name: String,
    pub branches: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StaticContent {
    pub deposit_tip: String,
    pub regions: Vec<BranchRegion>,
    pub bank_locators: Vec<ExternalLink>,
    pub charities: Vec<ExternalLink>,
}

impl StaticContent {
    pub fn parse(raw: &str) -> Result<Self> {
        let content: StaticContent = serde_json::from_str(raw)?;
        for link in content.bank_locators.iter().chain(content.charities.iter()) {
            if !link.url.starts_with("https://") {
                return Err(AppError::InsecureLink {
                    name: link.name.clone(),
                    url: link.url.clone(),
                });
            }
        }
        Ok(content)
    }
}

/// The embedded content, or empty lists if it fails to load.
pub fn load_content() -> StaticContent {
    match StaticContent::parse(CONTENT_JSON) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(%err, "failed to load branch and charity content");
            StaticContent::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = StaticContent::parse(CONTENT_JSON).unwrap();
        assert_eq!(content.regions.len(), 3);
        assert_eq!(content.bank_locators.len(), 6);
        assert_eq!(content.charities.len(), 7);
        assert!(content.deposit_tip.contains("$20"));
    }

    #[test]
    fn rejects_plain_http_links() {
        let raw = r#"{
            "deposit_tip": "",
            "regions": [],
            "bank_locators": [],
            "charities": [{ "name": "Example", "url": "http://example.org" }]
        }"#;
        let err = StaticContent::parse(raw).unwrap_err();
        assert!(matches!(err, AppError::InsecureLink { ref name, .. } if name == "Example"));
    }

    #[test]
    fn rejects_malformed_documents() {
        let err = StaticContent::parse("{ \"regions\": 3 }").unwrap_err();
        assert!(matches!(err, AppError::ContentDecode(_)));
    }
}
