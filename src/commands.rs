use reqwest::Client;
use roadtrip::app_config::AppConfig;
use roadtrip::domain::{MarkerCategory, Trip};
use roadtrip::history::{FileStore, HistoryStore};
use roadtrip::planner::{Planner, PlannerApi};
use roadtrip::route::{CameraFit, MapState};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

fn history_store(config: &AppConfig) -> HistoryStore {
    let store = Arc::new(FileStore::new(config.client().history_directory()));
    HistoryStore::new(store, config.client().history_capacity())
}

pub async fn plan(config: &AppConfig, prompt: &str, geojson: Option<&Path>, narration: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let api = PlannerApi::new(Client::new(), config.client().server_url());
    let mut planner = Planner::new(api, history_store(config));

    let map = planner.generate_route(prompt).await?.clone();
    if let Some(trip) = &planner.state().trip {
        print_trip(trip);
    }
    if map.route.is_empty() {
        println!("No coordinates to draw a route");
    }
    print_camera(map.camera.as_ref());

    if let Some(path) = geojson {
        write_geojson(&map, path).await?;
    }

    if let Some(path) = narration {
        let session = planner.generate_narration().await?;
        fs::write(path, session.audio()).await?;
        info!("🎧 Wrote narration to {}", path.display());
    }

    Ok(())
}

pub async fn list_history(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let history = history_store(config).load().await?;
    if history.entries().is_empty() {
        println!("No past prompts");
    }

    for entry in history.entries() {
        println!("{}  {}  {}", entry.formatted_date(), entry.id, entry.prompt);
    }
    Ok(())
}

pub async fn delete_history(config: &AppConfig, id: &str) -> Result<(), Box<dyn Error>> {
    if history_store(config).delete(id).await? {
        println!("Deleted {}", id);
    } else {
        println!("No prompt with id {}", id);
    }
    Ok(())
}

fn print_trip(trip: &Trip) {
    println!("{} → {}", trip.start_location.name, trip.end_location.name);
    println!("  ● {} (starting point)", trip.start_location.name);
    for (index, waypoint) in trip.waypoints.iter().enumerate() {
        let category = MarkerCategory::from(&waypoint.r#type);
        println!("  {}. {} ({}, {})", index + 1, waypoint.name, waypoint.r#type, category.color());
        if !waypoint.description.is_empty() {
            println!("     {}", waypoint.description);
        }
    }
    println!("  ● {} (destination)", trip.end_location.name);
}

fn print_camera(camera: Option<&CameraFit>) {
    match camera {
        Some(camera) => println!(
            "Camera: center [{:.4}, {:.4}], zoom {}, bearing {:.1}°, pitch {}°",
            camera.center.longitude(),
            camera.center.latitude(),
            camera.zoom,
            camera.bearing,
            camera.pitch
        ),
        None => println!("Camera: no coordinates to frame"),
    }
}

async fn write_geojson(map: &MapState, path: &Path) -> Result<(), Box<dyn Error>> {
    let content = serde_json::to_string_pretty(&map.to_feature_collection())?;
    fs::write(path, content).await?;
    info!("🗺️ Wrote route to {}", path.display());
    Ok(())
}
