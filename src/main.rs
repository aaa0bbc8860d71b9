use std::io::Read;
use std::process::ExitCode;

use thiserror::Error;
use tracing::{error, info};
use validator::Validate;

use midway_algo::config::Settings;
use midway_algo::core::privacy::fuzz_location;
use midway_algo::core::{haversine_distance, GeometryEngine};
use midway_algo::models::responses::{MeetingAreaResponse, ParticipantDistance};
use midway_algo::models::{ComputeAreaRequest, ErrorResponse, GeoPoint, Participant, VenueCandidate};

/// Errors surfaced by the CLI wrapper around the geometry engine
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No participants after validation")]
    EmptyInput,
}

fn read_request(path: Option<&str>) -> Result<ComputeAreaRequest, CliError> {
    let raw = match path {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request: ComputeAreaRequest = serde_json::from_str(&raw)?;
    request.validate()?;
    Ok(request)
}

fn run() -> Result<(), CliError> {
    let settings = Settings::load()?;

    let path = std::env::args().nth(1);
    let request = read_request(path.as_deref())?;

    // Request multiplier overrides the configured default
    let mut tunables = settings.geometry.tunables();
    tunables.radius_multiplier = request.radius_multiplier;
    let engine = GeometryEngine::new(tunables);

    let participants: Vec<Participant> = request
        .participants
        .iter()
        .map(|input| {
            let location = input.location();
            let fuzzy_location = request
                .blur_locations
                .then(|| fuzz_location(&location, settings.privacy.fuzz_radius_m));
            Participant {
                id: uuid::Uuid::new_v4().to_string(),
                name: input.name.clone(),
                address: input.address.clone(),
                location,
                fuzzy_location,
            }
        })
        .collect();

    let locations: Vec<GeoPoint> = participants.iter().map(|p| p.location).collect();

    let area = engine
        .compute_meeting_area(&locations)
        .ok_or(CliError::EmptyInput)?;

    let candidates: Vec<VenueCandidate> = request
        .candidates
        .iter()
        .map(|input| VenueCandidate {
            place_id: input.place_id.clone(),
            name: input.name.clone(),
            location: input.location(),
        })
        .collect();
    let classified = engine.classify_candidates(&area.circle, candidates);

    let participant_distances: Vec<ParticipantDistance> = participants
        .iter()
        .map(|participant| {
            let distance = haversine_distance(&participant.location, &area.circle.center);
            ParticipantDistance::from_participant(participant, distance)
        })
        .collect();

    info!(
        participants = participants.len(),
        candidates = classified.len(),
        search_radius_m = area.search_radius_m,
        "meeting area ready"
    );

    let response = MeetingAreaResponse {
        computation_id: uuid::Uuid::new_v4().to_string(),
        centroid: area.centroid,
        circle: area.circle,
        search_radius_m: area.search_radius_m,
        participants: participant_distances,
        candidates: classified,
        computed_at: chrono::Utc::now(),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let body = ErrorResponse {
                error: error_kind(&e).to_string(),
                message: e.to_string(),
            };
            eprintln!("{}", serde_json::to_string(&body).unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}

fn error_kind(error: &CliError) -> &'static str {
    match error {
        CliError::Io(_) => "io",
        CliError::Json(_) => "invalid_json",
        CliError::Validation(_) => "invalid_request",
        CliError::Config(_) => "config",
        CliError::EmptyInput => "empty_input",
    }
}
