use std::collections::BTreeMap;

use crate::config::AppConfig;
use crate::core::route_spec::{QueryParameter, ResponseSpec, RouteSpec};
use crate::features::manifest::dto::{
    AssistantDescriptor, AssistantExtension, ManifestInfo, MediaTypeObject, OperationObject,
    ParameterObject, PathItem, PluginManifest, ResponseObject, ServerEntry, ToolReference,
};

pub const MANIFEST_ROUTE_PATH: &str = "/api/ai-plugin";

const OPENAPI_VERSION: &str = "3.0.0";
const JSON_MEDIA_TYPE: &str = "application/json";
const SERVICE_TITLE: &str = "Odds Assistant API";
const SERVICE_DESCRIPTION: &str =
    "Sports odds lookups plus a handful of NEAR and social helper tools";
const ASSISTANT_NAME: &str = "Odds Assistant";
const ASSISTANT_DESCRIPTION: &str =
    "An assistant that answers with sports odds and blockchain information";
const ASSISTANT_INSTRUCTIONS: &str = "You answer questions about upcoming games and their \
    bookmaker odds. Use get-odds with a sport key and optionally a team name to look up games. \
    Use the other tools for blockchain information, NEAR transfer payloads, coin flips and \
    sharing results on Twitter.";

/// Renders the plugin manifest. The assistant's tool list is derived from the
/// same routes that populate `paths`, so every advertised tool has a route.
pub fn build_manifest(config: &AppConfig, routes: &[RouteSpec]) -> PluginManifest {
    let tools = routes
        .iter()
        .map(|route| ToolReference {
            kind: route.operation_id.to_string(),
        })
        .collect();

    let paths = routes
        .iter()
        .map(|route| {
            (
                route.path.to_string(),
                PathItem {
                    get: render_operation(route),
                },
            )
        })
        .collect();

    PluginManifest {
        openapi: OPENAPI_VERSION.to_string(),
        info: ManifestInfo {
            title: SERVICE_TITLE.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        servers: vec![ServerEntry {
            url: config.public_url.clone(),
        }],
        extension: AssistantExtension {
            account_id: config.account_id_or_empty().to_string(),
            assistant: AssistantDescriptor {
                name: ASSISTANT_NAME.to_string(),
                description: ASSISTANT_DESCRIPTION.to_string(),
                instructions: ASSISTANT_INSTRUCTIONS.to_string(),
                tools,
            },
        },
        paths,
    }
}

fn render_operation(route: &RouteSpec) -> OperationObject {
    OperationObject {
        summary: route.summary.to_string(),
        description: route.description.to_string(),
        operation_id: route.operation_id.to_string(),
        parameters: route.parameters.iter().map(render_parameter).collect(),
        responses: route
            .responses
            .iter()
            .map(|response| (response.status.to_string(), render_response(response)))
            .collect(),
    }
}

fn render_parameter(parameter: &QueryParameter) -> ParameterObject {
    ParameterObject {
        name: parameter.name.to_string(),
        location: "query".to_string(),
        required: parameter.required,
        schema: parameter.schema(),
        description: parameter.description.to_string(),
    }
}

fn render_response(response: &ResponseSpec) -> ResponseObject {
    let mut content = BTreeMap::new();
    content.insert(
        JSON_MEDIA_TYPE.to_string(),
        MediaTypeObject {
            schema: response.schema.clone(),
        },
    );

    ResponseObject {
        description: response.description.to_string(),
        content,
    }
}
