use std::collections::HashMap;

use rust_mcp_schema::{
    GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageContent, Role, TextContent,
};

use crate::error::{Error, Result};

pub const DEFAULT_PROMPT_LOCATION: &str = "Tokyo";
pub const DEFAULT_PROMPT_UNITS: &str = "metric";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerPrompt {
    WeatherReport,
    CalculationHelp,
}

impl ServerPrompt {
    pub const ALL: [ServerPrompt; 2] = [ServerPrompt::WeatherReport, ServerPrompt::CalculationHelp];

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|prompt| prompt.name() == name)
            .ok_or_else(|| Error::unknown_prompt(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            ServerPrompt::WeatherReport => "weather-report",
            ServerPrompt::CalculationHelp => "calculation-help",
        }
    }

    pub fn descriptor(self) -> Prompt {
        match self {
            ServerPrompt::WeatherReport => Prompt {
                arguments: vec![
                    argument("location", "City to report on (default: Tokyo)"),
                    argument("units", "metric or imperial (default: metric)"),
                ],
                description: Some(
                    "Generates a detailed weather report for the given location".to_string(),
                ),
                name: self.name().to_string(),
            },
            ServerPrompt::CalculationHelp => Prompt {
                arguments: vec![],
                description: Some("Explains how to use the calculator".to_string()),
                name: self.name().to_string(),
            },
        }
    }

    /// Fill in the template. Unknown argument keys are ignored.
    pub fn render(self, arguments: Option<&HashMap<String, String>>) -> GetPromptResult {
        let arg = |key: &str, default: &'static str| -> String {
            arguments
                .and_then(|args| args.get(key))
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let (description, text) = match self {
            ServerPrompt::WeatherReport => {
                let location = arg("location", DEFAULT_PROMPT_LOCATION);
                let units = arg("units", DEFAULT_PROMPT_UNITS);
                (
                    "Detailed weather report prompt",
                    format!(
                        "Please write a detailed weather report for {location}.\n\
                         \n\
                         Include the following information:\n\
                         - Current temperature and how it feels\n\
                         - Weather conditions\n\
                         - Humidity level\n\
                         - Wind conditions\n\
                         - Outlook for today\n\
                         - Clothing advice\n\
                         \n\
                         Units to use: {units}"
                    ),
                )
            }
            ServerPrompt::CalculationHelp => (
                "Calculator help",
                "Please explain how to use the calculator.\n\
                 \n\
                 Cover the following points:\n\
                 - Supported operators\n\
                 - How to write an expression\n\
                 - Usage examples\n\
                 - What to do when an error occurs"
                    .to_string(),
            ),
        };

        GetPromptResult {
            description: Some(description.to_string()),
            messages: vec![PromptMessage {
                content: PromptMessageContent::TextContent(TextContent::new(text, None)),
                role: Role::User,
            }],
            meta: None,
        }
    }
}

fn argument(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        description: Some(description.to_string()),
        name: name.to_string(),
        required: Some(false),
    }
}

pub fn prompts() -> Vec<Prompt> {
    ServerPrompt::ALL.into_iter().map(ServerPrompt::descriptor).collect()
}
