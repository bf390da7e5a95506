use rust_mcp_schema::CallToolResult;
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use serde::{Deserialize, Serialize};

use super::calculator::format_number;
use super::text_result;
use crate::arguments::Arguments;

pub const DEFAULT_LOCATION: &str = "unknown";
pub const DEFAULT_UNITS: &str = "metric";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Only "imperial" selects imperial units; anything else reads as metric.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "imperial" => Units::Imperial,
            _ => Units::Metric,
        }
    }

    pub fn temperature_symbol(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn speed_symbol(self) -> &'static str {
        match self {
            Units::Metric => "km/h",
            Units::Imperial => "mph",
        }
    }
}

/// Mock observation; no weather service is consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub conditions: String,
    pub humidity: u8,
    pub wind_speed: f64,
}

impl WeatherReading {
    pub fn current(units: Units) -> Self {
        let (temperature, wind_speed) = match units {
            Units::Metric => (24.0, 16.0),
            Units::Imperial => (75.0, 10.0),
        };
        Self {
            temperature,
            conditions: "Sunny".to_string(),
            humidity: 65,
            wind_speed,
        }
    }

    pub fn report(&self, location: &str, units: Units) -> String {
        format!(
            "🌤️ Weather for {location}:\n\
             Temperature: {}{}\n\
             Conditions: {}\n\
             Humidity: {}%\n\
             Wind speed: {} {}",
            format_number(self.temperature),
            units.temperature_symbol(),
            self.conditions,
            self.humidity,
            format_number(self.wind_speed),
            units.speed_symbol(),
        )
    }
}

#[mcp_tool(
    name = "weather",
    description = "Gets the current weather for a location"
)]
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct WeatherTool {
    /// City name or coordinates
    pub location: String,
    /// Units of measurement: 'metric' or 'imperial' (default: metric)
    pub units: Option<String>,
}

impl WeatherTool {
    pub fn from_arguments(args: &Arguments) -> Self {
        Self {
            location: args.str_or("location", DEFAULT_LOCATION).to_string(),
            units: args.get_str("units").map(str::to_string),
        }
    }

    pub fn call(self) -> CallToolResult {
        let units = Units::from_arg(self.units.as_deref().unwrap_or(DEFAULT_UNITS));
        let reading = WeatherReading::current(units);
        text_result(reading.report(&self.location, units), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::ArgValue;

    #[test]
    fn test_units_selection() {
        assert_eq!(Units::from_arg("imperial"), Units::Imperial);
        assert_eq!(Units::from_arg("metric"), Units::Metric);
        assert_eq!(Units::from_arg("kelvin"), Units::Metric);
        assert_eq!(Units::from_arg("Imperial"), Units::Metric);
    }

    #[test]
    fn test_readings() {
        let metric = WeatherReading::current(Units::Metric);
        assert_eq!(metric.temperature, 24.0);
        assert_eq!(metric.wind_speed, 16.0);

        let imperial = WeatherReading::current(Units::Imperial);
        assert_eq!(imperial.temperature, 75.0);
        assert_eq!(imperial.wind_speed, 10.0);
        assert_eq!(imperial.humidity, 65);
    }

    #[test]
    fn test_report_text() {
        let report = WeatherReading::current(Units::Imperial).report("Denver", Units::Imperial);
        assert!(report.contains("Denver"));
        assert!(report.contains("Temperature: 75.0°F"));
        assert!(report.contains("Wind speed: 10.0 mph"));
        assert!(report.contains("Humidity: 65%"));
        assert_eq!(report.lines().count(), 5);
    }

    #[test]
    fn test_defaults_from_empty_arguments() {
        let tool = WeatherTool::from_arguments(&Arguments::new());
        assert_eq!(tool.location, DEFAULT_LOCATION);
        assert_eq!(tool.units, None);

        let tool = WeatherTool::from_arguments(
            &Arguments::new().with("location", ArgValue::Bool(true)),
        );
        assert_eq!(tool.location, DEFAULT_LOCATION);
    }
}
