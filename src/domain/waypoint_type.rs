use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WaypointType {
    Scenic,
    Historic,
    Both,
    /// Anything else the model came up with, kept verbatim.
    Other(String),
}

impl From<String> for WaypointType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "scenic" => WaypointType::Scenic,
            "historic" => WaypointType::Historic,
            "both" => WaypointType::Both,
            _ => WaypointType::Other(value),
        }
    }
}

impl From<WaypointType> for String {
    fn from(value: WaypointType) -> Self {
        value.to_string()
    }
}

impl Display for WaypointType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WaypointType::Scenic => write!(f, "scenic"),
            WaypointType::Historic => write!(f, "historic"),
            WaypointType::Both => write!(f, "both"),
            WaypointType::Other(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(r#""scenic""#, WaypointType::Scenic)]
    #[case(r#""historic""#, WaypointType::Historic)]
    #[case(r#""both""#, WaypointType::Both)]
    #[case(r#""culinary""#, WaypointType::Other("culinary".to_string()))]
    fn deserializes_a_waypoint_type(#[case] json: &str, #[case] expected: WaypointType) -> Result<(), serde_json::Error> {
        let result: WaypointType = serde_json::from_str(json)?;

        assert_eq!(result, expected);
        Ok(())
    }

    #[test]
    fn serializes_unknown_types_verbatim() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&WaypointType::Other("Scenic ".to_string()))?;

        assert_eq!(json, r#""Scenic ""#);
        Ok(())
    }
}
