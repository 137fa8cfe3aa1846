use crate::domain::{Location, Waypoint};
use crate::openai::domain::{ChatRequest, Message};

pub struct NarrationInput<'a> {
    pub start_location: &'a Location,
    pub end_location: &'a Location,
    pub waypoints: &'a [Waypoint],
    pub trip_description: &'a str,
}

impl NarrationInput<'_> {
    fn stops(&self) -> String {
        self.waypoints.iter().map(|waypoint| waypoint.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

pub fn narration_request(model: &str, temperature: f32, input: &NarrationInput) -> ChatRequest {
    let system = format!(
        "You are a friendly tour guide who is giving a podcast style narration about a journey from {} to {}. \
        The route includes these stops: {}. The original trip description is: {}. \
        DO NOT INCLUDE ANY OTHER TEXT THAN THE NARRATION.",
        input.start_location.name,
        input.end_location.name,
        input.stops(),
        input.trip_description
    );

    ChatRequest {
        model: model.to_string(),
        messages: vec![Message::system(system), Message::user(narration_prompt(input))],
        response_format: None,
        temperature: Some(temperature),
    }
}

fn narration_prompt(input: &NarrationInput) -> String {
    format!(
        "Create an engaging and entertaining podcast-style narration about a journey from {} to {}.
Include interesting facts about:
- Local history and culture
- Notable attractions and landmarks
- Traditional food and customs
- Interesting historical events
- Local people and their way of life
- Architecture and monuments

The route includes these stops: {}.

Original trip description: {}

Make it conversational and entertaining, like a friendly tour guide sharing fascinating stories about the region.",
        input.start_location.name,
        input.end_location.name,
        input.stops(),
        input.trip_description
    )
}
