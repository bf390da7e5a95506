use anyhow::Result;
use mcp_weathercalc_core::{CoreHandler, ServerTools};
use tabled::settings::{Alignment, Modify, Style, object::Columns};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "URI")]
    uri: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MIME Type")]
    mime_type: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct PromptRow {
    #[tabled(rename = "Prompt")]
    name: String,
    #[tabled(rename = "Arguments")]
    arguments: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn render<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::modern())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string()
}

pub fn show_tools(name: &str) {
    for tool in ServerTools::catalog() {
        println!("mcp__{}__{}", name, tool.name);
    }
}

pub fn show_resources(handler: &CoreHandler) {
    let rows: Vec<ResourceRow> = handler
        .list_resources(None)
        .resources
        .into_iter()
        .map(|resource| ResourceRow {
            uri: resource.uri,
            name: resource.name,
            mime_type: resource.mime_type.unwrap_or_else(|| "-".to_string()),
            description: resource.description.unwrap_or_default(),
        })
        .collect();

    println!("{}", render(&rows));
}

pub fn show_prompts(handler: &CoreHandler) {
    let rows: Vec<PromptRow> = handler
        .list_prompts()
        .prompts
        .into_iter()
        .map(|prompt| PromptRow {
            arguments: if prompt.arguments.is_empty() {
                "-".to_string()
            } else {
                prompt
                    .arguments
                    .iter()
                    .map(|arg| arg.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            },
            name: prompt.name,
            description: prompt.description.unwrap_or_default(),
        })
        .collect();

    println!("{}", render(&rows));
}

pub fn show_schema(tool_name: &str) -> Result<()> {
    let tool = ServerTools::catalog()
        .into_iter()
        .find(|tool| tool.name == tool_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", tool_name))?;

    println!("{}", serde_json::to_string_pretty(&tool.input_schema)?);
    Ok(())
}
