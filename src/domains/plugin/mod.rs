//! Plugin discovery domain.
//!
//! Serves the static `/.well-known/ai-plugin.json` manifest that lets agent
//! platforms discover this server.

use serde::{Deserialize, Serialize};

/// Path the manifest is served at.
pub const MANIFEST_PATH: &str = "/.well-known/ai-plugin.json";

/// AI plugin manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub schema_version: String,
    pub name_for_human: String,
    pub name_for_model: String,
    pub description_for_human: String,
    pub description_for_model: String,
    pub api: PluginApi,
}

/// API section of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginApi {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self {
            schema_version: "v1".to_string(),
            name_for_human: "Tavily Search MCP".to_string(),
            name_for_model: "tavily_search".to_string(),
            description_for_human: "Server for interacting with the Tavily Search API.".to_string(),
            description_for_model: "This server provides tools to search the web using the Tavily AI search engine. Use it to find current information.".to_string(),
            api: PluginApi {
                kind: "open_api".to_string(),
                url: "/openapi.yaml".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_shape() {
        let value = serde_json::to_value(PluginManifest::default()).unwrap();
        assert_eq!(value["schema_version"], "v1");
        assert_eq!(value["name_for_model"], "tavily_search");
        assert_eq!(value["api"]["type"], "open_api");
        assert_eq!(value["api"]["url"], "/openapi.yaml");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }
}
