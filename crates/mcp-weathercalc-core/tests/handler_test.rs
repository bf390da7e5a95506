use std::collections::HashMap;

use mcp_weathercalc_core::protocol::{
    CallToolRequestParams, CallToolResult, CallToolResultContentItem, GetPromptRequestParams,
    ListResourcesRequestParams, PromptMessageContent, ReadResourceRequestParams,
    ReadResourceResultContentsItem, RpcError,
};
use mcp_weathercalc_core::{CoreHandler, Error, ServerConfig};
use serde_json::{Value, json};

fn extract_text_content(result: &CallToolResult) -> String {
    match &result.content[0] {
        CallToolResultContentItem::TextContent(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}

fn call(handler: &CoreHandler, name: &str, arguments: Value) -> CallToolResult {
    handler.call_tool(CallToolRequestParams {
        name: name.to_string(),
        arguments: arguments.as_object().cloned(),
    })
}

fn read(handler: &CoreHandler, uri: &str) -> Result<(String, Option<String>), Error> {
    let result = handler.read_resource(ReadResourceRequestParams {
        uri: uri.to_string(),
    })?;
    assert_eq!(result.contents.len(), 1);
    match &result.contents[0] {
        ReadResourceResultContentsItem::TextResourceContents(text) => {
            assert_eq!(text.uri, uri);
            Ok((text.text.clone(), text.mime_type.clone()))
        }
        _ => panic!("Expected text resource contents"),
    }
}

fn prompt_text(handler: &CoreHandler, name: &str, arguments: Option<HashMap<String, String>>) -> String {
    let result = handler
        .get_prompt(GetPromptRequestParams {
            arguments,
            name: name.to_string(),
        })
        .unwrap();
    assert!(result.description.is_some());
    assert_eq!(result.messages.len(), 1);
    match &result.messages[0].content {
        PromptMessageContent::TextContent(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}

#[test]
fn test_list_tools_is_fixed() {
    let handler = CoreHandler::new();
    for _ in 0..2 {
        let result = handler.list_tools();
        let names: Vec<&str> = result.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["weather", "calculator"]);
        assert!(result.tools.iter().all(|t| t.description.is_some()));
        assert!(result.next_cursor.is_none());
    }
}

#[test]
fn test_list_tools_advertises_units_default() {
    let handler = CoreHandler::new();
    let weather = &handler.list_tools().tools[0];
    let schema = serde_json::to_value(&weather.input_schema).unwrap();

    assert_eq!(schema["properties"]["units"]["default"], "metric");
    assert_eq!(schema["required"], json!(["location"]));
}

#[test]
fn test_weather_metric_default() {
    let handler = CoreHandler::new();
    let result = call(&handler, "weather", json!({ "location": "Lisbon" }));
    let output = extract_text_content(&result);

    assert_eq!(result.is_error, Some(false));
    assert!(output.contains("Lisbon"));
    assert!(output.contains("24.0°C"));
    assert!(output.contains("16.0 km/h"));
    assert!(output.contains("65%"));
}

#[test]
fn test_weather_imperial() {
    let handler = CoreHandler::new();
    let result = call(
        &handler,
        "weather",
        json!({ "location": "Boston", "units": "imperial" }),
    );
    let output = extract_text_content(&result);

    assert_eq!(result.is_error, Some(false));
    assert!(output.contains("75.0°F"));
    assert!(output.contains("10.0 mph"));
    assert!(!output.contains("°C"));
}

#[test]
fn test_weather_unrecognized_units_fall_back_to_metric() {
    let handler = CoreHandler::new();
    let output = extract_text_content(&call(
        &handler,
        "weather",
        json!({ "location": "Oslo", "units": "kelvin" }),
    ));
    assert!(output.contains("24.0°C"));
    assert!(output.contains("16.0 km/h"));
}

#[test]
fn test_weather_without_arguments() {
    let handler = CoreHandler::new();
    let result = handler.call_tool(CallToolRequestParams {
        name: "weather".to_string(),
        arguments: None,
    });
    assert_eq!(result.is_error, Some(false));
    assert!(extract_text_content(&result).contains("Weather for unknown"));
}

#[test]
fn test_calculator_success() {
    let handler = CoreHandler::new();
    let result = call(&handler, "calculator", json!({ "expression": "7 * 6" }));
    assert_eq!(result.is_error, Some(false));
    assert_eq!(extract_text_content(&result), "Result: 7 * 6 = 42.0");
}

#[test]
fn test_calculator_exponent_result() {
    let handler = CoreHandler::new();
    let result = call(&handler, "calculator", json!({ "expression": "0.00001*1" }));
    assert_eq!(result.is_error, Some(false));
    assert_eq!(extract_text_content(&result), "Result: 0.00001*1 = 1e-05");
}

#[test]
fn test_calculator_division_by_zero_is_in_band() {
    let handler = CoreHandler::new();
    let result = call(&handler, "calculator", json!({ "expression": "4/0" }));
    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        extract_text_content(&result),
        "Result: 4/0 = Calculation error: invalid expression"
    );
}

#[test]
fn test_calculator_missing_expression() {
    let handler = CoreHandler::new();
    for arguments in [json!({}), json!({ "expression": 12 })] {
        let result = call(&handler, "calculator", arguments);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            extract_text_content(&result),
            "Error: expression parameter not found"
        );
    }
}

#[test]
fn test_unknown_tool_is_in_band() {
    let handler = CoreHandler::new();
    let result = call(&handler, "translate", json!({ "text": "hola" }));
    assert_eq!(result.is_error, Some(true));
    assert_eq!(extract_text_content(&result), "Error: unknown tool 'translate'");
}

#[test]
fn test_list_resources_ignores_cursor() {
    let handler = CoreHandler::new();
    let first = handler.list_resources(None);
    let paged = handler.list_resources(Some(ListResourcesRequestParams {
        cursor: Some("page-7".to_string()),
    }));

    for result in [first, paged] {
        let uris: Vec<&str> = result.resources.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(
            uris,
            ["resource://knowledge-base/articles", "resource://system/status"]
        );
        assert!(result.next_cursor.is_none());
    }
}

#[test]
fn test_read_knowledge_base() {
    let handler = CoreHandler::new();
    let (text, mime_type) = read(&handler, "resource://knowledge-base/articles").unwrap();
    assert!(text.contains("# Knowledge Base"));
    assert!(text.contains("## Troubleshooting"));
    assert_eq!(mime_type, None);
}

#[test]
fn test_read_system_status() {
    let handler = CoreHandler::new();
    let (text, mime_type) = read(&handler, "resource://system/status").unwrap();
    assert_eq!(mime_type.as_deref(), Some("application/json"));

    let status: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(status["status"], "normal");
    for component in ["database", "api", "model"] {
        assert_eq!(status["components"][component], "running");
    }
    let timestamp = status["lastUpdated"].as_str().unwrap();
    assert_eq!(timestamp.len(), 19);
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[10..11], " ");
    assert_eq!(&timestamp[13..14], ":");
}

#[test]
fn test_read_unknown_resource_is_a_fault() {
    let handler = CoreHandler::new();
    let err = read(&handler, "resource://weather/forecast").unwrap_err();
    assert!(matches!(err, Error::UnknownResource { .. }));

    let rpc = RpcError::from(err);
    assert_eq!(rpc.code, RpcError::invalid_params().code);
    assert!(rpc.message.contains("resource://weather/forecast"));
}

#[test]
fn test_list_prompts_is_fixed() {
    let handler = CoreHandler::new();
    let result = handler.list_prompts();
    let names: Vec<&str> = result.prompts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["weather-report", "calculation-help"]);
    assert_eq!(result.prompts[0].arguments.len(), 2);
    assert!(result.prompts[1].arguments.is_empty());
}

#[test]
fn test_weather_report_prompt_defaults() {
    let handler = CoreHandler::new();
    for arguments in [None, Some(HashMap::new())] {
        let text = prompt_text(&handler, "weather-report", arguments);
        assert!(text.contains("Tokyo"));
        assert!(text.contains("Units to use: metric"));
    }
}

#[test]
fn test_weather_report_prompt_arguments() {
    let handler = CoreHandler::new();
    let arguments = HashMap::from([("location".to_string(), "Nairobi".to_string())]);
    let text = prompt_text(&handler, "weather-report", Some(arguments));
    assert!(text.contains("Nairobi"));
    assert!(text.contains("Units to use: metric"));
}

#[test]
fn test_calculation_help_prompt() {
    let handler = CoreHandler::new();
    let text = prompt_text(&handler, "calculation-help", None);
    assert!(text.contains("Supported operators"));
}

#[test]
fn test_unknown_prompt_is_a_fault() {
    let handler = CoreHandler::new();
    let err = handler
        .get_prompt(GetPromptRequestParams {
            arguments: None,
            name: "sonnet".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::UnknownPrompt { ref name } if name == "sonnet"));
    assert_eq!(RpcError::from(err).code, RpcError::invalid_params().code);
}

#[test]
fn test_custom_config_is_carried() {
    let handler = CoreHandler::with_config(ServerConfig::new("demo", "2.0.0"));
    let details = handler.config().server_details();
    assert_eq!(details.server_info.name, "demo");
    assert_eq!(details.server_info.version, "2.0.0");
}

#[tokio::test]
async fn test_self_test_passes() {
    mcp_weathercalc_core::self_test().await.unwrap();
}
