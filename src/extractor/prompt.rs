use crate::openai::domain::{ChatRequest, Message, ResponseFormat};

const SYSTEM_INSTRUCTION: &str = "You are a travel expert. Given a trip description, extract the start and end locations, \
and suggest scenic and historic stops along the way. Include approximate coordinates for all locations. \
Return the response as a structured JSON object.";

const COORDINATES_SCHEMA: &str = "coordinates: {
        latitude: number (in decimal degrees),
        longitude: number (in decimal degrees)
    }";

pub fn extraction_request(model: &str, trip_description: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![Message::system(SYSTEM_INSTRUCTION), Message::user(user_prompt(trip_description))],
        response_format: Some(ResponseFormat::JsonObject),
        temperature: None,
    }
}

fn user_prompt(trip_description: &str) -> String {
    format!(
        r#"For this trip: "{trip_description}", provide a JSON response with:
- start_location: {{
    name: string,
    {COORDINATES_SCHEMA}
}}
- end_location: {{
    name: string,
    {COORDINATES_SCHEMA}
}}
- waypoints: array of {{
    name: string,
    description: string (2-3 sentences),
    type: string ("scenic", "historic", or "both"),
    {COORDINATES_SCHEMA}
}}"#
    )
}
