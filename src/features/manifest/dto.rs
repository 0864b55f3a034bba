use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct PluginManifest {
    pub openapi: String,
    pub info: ManifestInfo,
    pub servers: Vec<ServerEntry>,
    #[serde(rename = "x-mb")]
    pub extension: AssistantExtension,
    pub paths: BTreeMap<String, PathItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerEntry {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantExtension {
    #[serde(rename = "account-id")]
    pub account_id: String,
    pub assistant: AssistantDescriptor,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantDescriptor {
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub tools: Vec<ToolReference>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolReference {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathItem {
    pub get: OperationObject,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationObject {
    pub summary: String,
    pub description: String,
    #[serde(rename = "operationId")]
    pub operation_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterObject>,
    pub responses: BTreeMap<String, ResponseObject>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterObject {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    pub schema: Value,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseObject {
    pub description: String,
    pub content: BTreeMap<String, MediaTypeObject>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaTypeObject {
    pub schema: Value,
}
