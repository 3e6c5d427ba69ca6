//! Tool catalog and handlers (4 tools).
//!
//! Contains the business logic for: get-template, lint-code, search-docs,
//! and generate-reducer. Dispatch is an exhaustive match over [`ToolName`];
//! names outside the enum fail with [`TcaMcpError::UnknownTool`].

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use rmcp::model::{JsonObject, Tool};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::catalog::{self, TemplateKind};
use crate::config::schema::TcaMcpConfig;
use crate::error::{Result, TcaMcpError};
use crate::lint::{self, Linter};
use crate::scaffold;

use super::resources::doc_uri;

// ---------------------------------------------------------------------------
// Tool names
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetTemplate,
    LintCode,
    SearchDocs,
    GenerateReducer,
}

impl ToolName {
    pub const ALL: [ToolName; 4] = [
        Self::GetTemplate,
        Self::LintCode,
        Self::SearchDocs,
        Self::GenerateReducer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetTemplate => "get-template",
            Self::LintCode => "lint-code",
            Self::SearchDocs => "search-docs",
            Self::GenerateReducer => "generate-reducer",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = TcaMcpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TcaMcpError::UnknownTool(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tool parameter structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GetTemplateParams {
    pub template: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct LintCodeParams {
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SearchDocsParams {
    pub query: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GenerateReducerParams {
    pub name: String,
    #[serde(rename = "hasEffects", default)]
    pub has_effects: bool,
}

fn parse_args<T: DeserializeOwned>(tool: ToolName, arguments: Option<JsonObject>) -> Result<T> {
    let value = serde_json::Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(value).map_err(|e| TcaMcpError::InvalidArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tool descriptors
// ---------------------------------------------------------------------------

static TOOL_CATALOG: LazyLock<Vec<Tool>> = LazyLock::new(build_catalog);

/// The fixed tool descriptors, identical on every call.
pub fn tool_catalog() -> Vec<Tool> {
    TOOL_CATALOG.clone()
}

fn object_schema(properties: serde_json::Value, required: &[&str]) -> Arc<JsonObject> {
    let mut schema = JsonObject::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), properties);
    schema.insert("required".into(), json!(required));
    schema.insert("additionalProperties".into(), json!(false));
    Arc::new(schema)
}

fn build_catalog() -> Vec<Tool> {
    let template_names: Vec<&str> = TemplateKind::ALL.iter().map(|k| k.as_str()).collect();
    ToolName::ALL
        .into_iter()
        .map(|tool| match tool {
            ToolName::GetTemplate => Tool::new(
                tool.as_str(),
                "Get a complete Composable Architecture feature template: counter, \
                 api-call (dependency client + loading state), list (IdentifiedArray with \
                 add/delete) or timer (cancellable clock effect).",
                object_schema(
                    json!({
                        "template": {
                            "type": "string",
                            "enum": template_names,
                            "description": "Template name",
                        }
                    }),
                    &["template"],
                ),
            ),
            ToolName::LintCode => Tool::new(
                tool.as_str(),
                "Check Swift code for common Composable Architecture mistakes: missing \
                 @Reducer, non-Equatable State, deprecated ViewStore, state mutation inside \
                 effects, unstructured Task/DispatchQueue, direct URLSession calls, \
                 uncontrolled Date()/UUID() and long-running effects without cancellation.",
                object_schema(
                    json!({
                        "code": {
                            "type": "string",
                            "description": "Swift source code to analyze",
                        }
                    }),
                    &["code"],
                ),
            ),
            ToolName::SearchDocs => Tool::new(
                tool.as_str(),
                "Search the Composable Architecture documentation. Case-insensitive match \
                 on topic key, title and description; returns links to tca://docs resources.",
                object_schema(
                    json!({
                        "query": {
                            "type": "string",
                            "description": "Search term, e.g. 'effects' or 'TestStore'",
                        }
                    }),
                    &["query"],
                ),
            ),
            ToolName::GenerateReducer => Tool::new(
                tool.as_str(),
                "Generate a @Reducer feature skeleton named <name>Feature with State, \
                 Action and body. Set hasEffects to add a clock dependency and a .run effect.",
                object_schema(
                    json!({
                        "name": {
                            "type": "string",
                            "description": "Feature name without the 'Feature' suffix, e.g. 'Counter'",
                        },
                        "hasEffects": {
                            "type": "boolean",
                            "description": "Include a dependency and an effect (default false)",
                        }
                    }),
                    &["name"],
                ),
            ),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Routes `call_tool` requests to the handlers below.
pub struct ToolDispatcher {
    linter: Linter,
}

impl ToolDispatcher {
    pub fn new(config: &TcaMcpConfig) -> Self {
        Self {
            linter: Linter::from_config(config),
        }
    }

    /// Run a tool by name. Only unknown tool names and malformed arguments
    /// are errors; every other outcome is reported in the returned text.
    pub fn call(&self, name: &str, arguments: Option<JsonObject>) -> Result<String> {
        let tool: ToolName = name.parse()?;
        let text = match tool {
            ToolName::GetTemplate => {
                let p: GetTemplateParams = parse_args(tool, arguments)?;
                handle_get_template(&p.template)
            }
            ToolName::LintCode => {
                let p: LintCodeParams = parse_args(tool, arguments)?;
                handle_lint_code(&self.linter, &p.code)
            }
            ToolName::SearchDocs => {
                let p: SearchDocsParams = parse_args(tool, arguments)?;
                handle_search_docs(&p.query)
            }
            ToolName::GenerateReducer => {
                let p: GenerateReducerParams = parse_args(tool, arguments)?;
                handle_generate_reducer(&p.name, p.has_effects)
            }
        };
        Ok(text)
    }
}

impl Default for ToolDispatcher {
    fn default() -> Self {
        Self::new(&TcaMcpConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

// get-template
pub fn handle_get_template(template: &str) -> String {
    match scaffold::template_source(template) {
        Ok(code) => code.to_string(),
        Err(_) => format!(
            "Unknown template \"{}\". Available templates: {}.",
            template,
            TemplateKind::ALL.map(|k| k.as_str()).join(", ")
        ),
    }
}

// lint-code
pub fn handle_lint_code(linter: &Linter, code: &str) -> String {
    lint::format_findings(&linter.lint(code))
}

// search-docs
pub fn handle_search_docs(query: &str) -> String {
    let hits = catalog::search_docs(query);
    if hits.is_empty() {
        return format!("No documentation found for \"{query}\".");
    }
    let mut out = format!("Documentation matching \"{query}\":\n\n");
    for doc in hits {
        out.push_str(&format!(
            "- [{}]({}): {}\n",
            doc.title,
            doc_uri(doc.key),
            doc.description
        ));
    }
    out
}

// generate-reducer
pub fn handle_generate_reducer(name: &str, has_effects: bool) -> String {
    scaffold::generate_reducer(name, has_effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[test]
    fn tool_names_roundtrip() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
        }
    }

    #[test]
    fn unknown_tool_name_is_error() {
        let err = "not-a-real-tool".parse::<ToolName>().unwrap_err();
        assert!(matches!(err, TcaMcpError::UnknownTool(ref n) if n == "not-a-real-tool"));
    }

    #[test]
    fn catalog_has_four_tools_in_order() {
        let names: Vec<_> = tool_catalog().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(
            names,
            vec!["get-template", "lint-code", "search-docs", "generate-reducer"]
        );
    }

    #[test]
    fn catalog_is_identical_across_calls() {
        let a = serde_json::to_string(&tool_catalog()).unwrap();
        let b = serde_json::to_string(&tool_catalog()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn get_template_schema_enumerates_names() {
        let tools = tool_catalog();
        let schema = &tools[0].input_schema;
        assert_eq!(
            schema["properties"]["template"]["enum"],
            json!(["counter", "api-call", "list", "timer"])
        );
        assert_eq!(schema["required"], json!(["template"]));
    }

    #[test]
    fn generate_reducer_schema_marks_has_effects_optional() {
        let tools = tool_catalog();
        let schema = &tools[3].input_schema;
        assert_eq!(schema["properties"]["hasEffects"]["type"], json!("boolean"));
        assert_eq!(schema["required"], json!(["name"]));
    }

    #[test]
    fn all_schemas_are_closed_objects() {
        for tool in tool_catalog() {
            let schema = &tool.input_schema;
            assert_eq!(schema["type"], json!("object"), "{}", tool.name);
            assert_eq!(schema["additionalProperties"], json!(false), "{}", tool.name);
            let props = schema["properties"].as_object().unwrap();
            for req in schema["required"].as_array().unwrap() {
                assert!(props.contains_key(req.as_str().unwrap()), "{}", tool.name);
            }
        }
    }

    #[test]
    fn get_template_returns_code_verbatim() {
        let d = ToolDispatcher::default();
        let text = d
            .call("get-template", args(json!({"template": "counter"})))
            .unwrap();
        assert_eq!(text, catalog::get_template("counter").unwrap().code);
    }

    #[test]
    fn get_template_unknown_is_soft_failure() {
        let d = ToolDispatcher::default();
        let text = d
            .call("get-template", args(json!({"template": "nonexistent"})))
            .unwrap();
        assert_eq!(
            text,
            "Unknown template \"nonexistent\". Available templates: counter, api-call, list, timer."
        );
    }

    #[test]
    fn lint_code_reports_findings_or_no_issues() {
        let d = ToolDispatcher::default();
        let clean = d.call("lint-code", args(json!({"code": ""}))).unwrap();
        assert_eq!(clean, "No issues found.");

        let dirty = d
            .call("lint-code", args(json!({"code": "let s = URLSession.shared"})))
            .unwrap();
        assert!(dirty.starts_with("Found 1 issue(s):"));
        assert!(dirty.contains("[error] line 1"));
    }

    #[test]
    fn lint_code_respects_disabled_rules() {
        let mut config = TcaMcpConfig::default();
        config.lint.disabled_rules.push("direct-network-call".into());
        let d = ToolDispatcher::new(&config);
        let text = d
            .call("lint-code", args(json!({"code": "let s = URLSession.shared"})))
            .unwrap();
        assert_eq!(text, "No issues found.");
    }

    #[test]
    fn search_docs_lists_links() {
        let text = handle_search_docs("effects");
        assert!(text.starts_with("Documentation matching \"effects\":"));
        assert!(text.contains("- [Effects](tca://docs/effects): "));
    }

    #[test]
    fn search_docs_no_match_message() {
        assert_eq!(
            handle_search_docs("zzz-nonexistent"),
            "No documentation found for \"zzz-nonexistent\"."
        );
    }

    #[test]
    fn generate_reducer_defaults_has_effects_to_false() {
        let d = ToolDispatcher::default();
        let text = d
            .call("generate-reducer", args(json!({"name": "Counter"})))
            .unwrap();
        assert_eq!(text, scaffold::generate_reducer("Counter", false));

        let with = d
            .call(
                "generate-reducer",
                args(json!({"name": "Counter", "hasEffects": true})),
            )
            .unwrap();
        assert!(with.contains("@Dependency("));
    }

    #[test]
    fn missing_required_argument_is_invalid() {
        let d = ToolDispatcher::default();
        let err = d.call("search-docs", None).unwrap_err();
        assert!(matches!(err, TcaMcpError::InvalidArguments { ref tool, .. } if tool == "search-docs"));
    }

    #[test]
    fn wrong_argument_type_is_invalid() {
        let d = ToolDispatcher::default();
        let err = d
            .call("generate-reducer", args(json!({"name": "X", "hasEffects": "yes"})))
            .unwrap_err();
        assert!(matches!(err, TcaMcpError::InvalidArguments { .. }));
    }

    #[test]
    fn unknown_tool_call_fails() {
        let d = ToolDispatcher::default();
        let err = d.call("not-a-real-tool", None).unwrap_err();
        assert!(matches!(err, TcaMcpError::UnknownTool(_)));
    }
}
