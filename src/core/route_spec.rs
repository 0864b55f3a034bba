//! Per-route contract declarations.
//!
//! A [`RouteSpec`] is declared once per tool route. The manifest renders it into
//! an OpenAPI operation, and handlers read their parameter defaults from the
//! same table, so the advertised contract and the runtime behaviour share a
//! single source.

use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    DateTime,
    Boolean,
}

/// Where a recognised query parameter ends up when a request is proxied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forwarding {
    /// Handled locally and never sent upstream.
    Local,
    /// Selects the upstream path segment.
    PathSegment,
    /// Sent upstream as a query parameter of the same name.
    Query,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryParameter {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParameterKind,
    pub required: bool,
    pub default: Option<&'static str>,
    pub forwarding: Forwarding,
}

impl QueryParameter {
    pub const fn local(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: ParameterKind::String,
            required: false,
            default: None,
            forwarding: Forwarding::Local,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn forwarded(
        name: &'static str,
        description: &'static str,
        kind: ParameterKind,
        default: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            default,
            forwarding: Forwarding::Query,
        }
    }

    pub const fn with_forwarding(mut self, forwarding: Forwarding) -> Self {
        self.forwarding = forwarding;
        self
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Renders the OpenAPI `schema` object. Boolean defaults are emitted as JSON
    /// booleans even though they are forwarded as literal strings.
    pub fn schema(&self) -> Value {
        let mut schema = match self.kind {
            ParameterKind::String => json!({ "type": "string" }),
            ParameterKind::DateTime => json!({ "type": "string", "format": "date-time" }),
            ParameterKind::Boolean => json!({ "type": "boolean" }),
        };

        if let Some(default) = self.default {
            let rendered = match self.kind {
                ParameterKind::Boolean => default
                    .parse::<bool>()
                    .map(Value::Bool)
                    .unwrap_or_else(|_| Value::String(default.to_string())),
                _ => Value::String(default.to_string()),
            };
            schema["default"] = rendered;
        }

        schema
    }
}

#[derive(Debug, Clone)]
pub struct ResponseSpec {
    pub status: u16,
    pub description: &'static str,
    pub schema: Value,
}

impl ResponseSpec {
    pub fn new(status: u16, description: &'static str, schema: Value) -> Self {
        Self {
            status,
            description,
            schema,
        }
    }

    pub fn error(status: u16, description: &'static str) -> Self {
        Self::new(
            status,
            description,
            json!({
                "type": "object",
                "properties": {
                    "error": { "type": "string", "description": "Error message" }
                }
            }),
        )
    }
}

#[derive(Debug, Clone)]
pub struct RouteSpec {
    pub path: &'static str,
    pub operation_id: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub parameters: &'static [QueryParameter],
    pub responses: Vec<ResponseSpec>,
}

impl RouteSpec {
    pub fn response(&self, status: u16) -> Option<&ResponseSpec> {
        self.responses.iter().find(|response| response.status == status)
    }
}
