// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod catalog_file;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use royal_gold::RoomNumberSource;
use royal_gold_api::{
    ApiError, BookingConfirmationResponse, BookingFormResponse, BookingHistoryResponse,
    CancelBookingResponse, ListRoomsResponse, RandomRoomNumbers, RoomDetailsResponse,
    SubmitBookingRequest, booking_history, cancel_booking, list_rooms, prepare_booking_form,
    purge_expired_bookings, room_details, submit_booking,
};
use royal_gold_domain::{
    BookingRules, DEFAULT_MAX_GUESTS_OVERALL, DEFAULT_RETENTION, RoomCatalog,
};
use royal_gold_persistence::{
    BookingLedger, DEFAULT_STORAGE_KEY, LedgerConfig, SqliteSlotStore,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info};

/// Longest accepted retention window: one year.
const MAX_RETENTION_HOURS: i64 = 24 * 366;

/// Royal Gold Server - HTTP server for the Royal Gold Hotel booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// JSON file with the room catalog. If not provided, uses the built-in catalog.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Maximum guests per booking, whatever the room
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_GUESTS_OVERALL,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_guests: u32,

    /// Hours a booking is kept after submission (1 to 8784)
    #[arg(
        long,
        default_value_t = DEFAULT_RETENTION.whole_hours(),
        value_parser = clap::value_parser!(i64).range(1..=MAX_RETENTION_HOURS)
    )]
    retention_hours: i64,

    /// Storage slot holding the booking ledger
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,
}

impl Args {
    /// Booking rules built from the validated flags.
    fn booking_rules(&self) -> BookingRules {
        BookingRules {
            max_guests_overall: self.max_guests,
            retention: Duration::hours(self.retention_hours),
            ..BookingRules::default()
        }
    }
}

type SharedRoomNumbers = Arc<Mutex<Box<dyn RoomNumberSource + Send>>>;

/// Application state shared across handlers.
///
/// The ledger sits behind a Mutex so handlers in this process take turns.
/// Another process writing the same database is not coordinated with.
#[derive(Clone)]
struct AppState {
    /// The booking ledger.
    ledger: Arc<Mutex<BookingLedger<SqliteSlotStore>>>,
    /// Room types on offer.
    catalog: Arc<RoomCatalog>,
    /// Active booking rules.
    rules: Arc<BookingRules>,
    /// Source of display room numbers.
    room_numbers: SharedRoomNumbers,
}

/// Error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Always true.
    error: bool,
    /// A human-readable message.
    message: String,
}

/// An error ready to be turned into an HTTP response.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/rooms` endpoint.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListRoomsResponse> {
    info!("Handling list_rooms request");
    Json(list_rooms(&app_state.catalog))
}

/// Handler for GET `/rooms/{key}` endpoint.
async fn handle_room_details(
    AxumState(app_state): AxumState<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RoomDetailsResponse>, HttpError> {
    info!(room_type = %key, "Handling room_details request");
    Ok(Json(room_details(&app_state.catalog, &key)?))
}

/// Handler for GET `/rooms/{key}/booking_form` endpoint.
async fn handle_booking_form(
    AxumState(app_state): AxumState<AppState>,
    Path(key): Path<String>,
) -> Result<Json<BookingFormResponse>, HttpError> {
    info!(room_type = %key, "Handling booking_form request");
    Ok(Json(prepare_booking_form(
        &app_state.catalog,
        &app_state.rules,
        &key,
    )?))
}

/// Handler for POST `/bookings` endpoint.
///
/// Validates the submitted form and stores the booking.
async fn handle_submit_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmitBookingRequest>,
) -> Result<Json<BookingConfirmationResponse>, HttpError> {
    info!(
        room_type = %req.room_type,
        check_in = %req.check_in,
        check_out = %req.check_out,
        guests = %req.guests,
        "Handling submit_booking request"
    );

    let mut room_numbers = app_state.room_numbers.lock().await;
    let mut ledger = app_state.ledger.lock().await;
    let response: BookingConfirmationResponse = submit_booking(
        &mut *ledger,
        &app_state.catalog,
        &app_state.rules,
        &req,
        OffsetDateTime::now_utc(),
        &mut **room_numbers,
    )?;
    drop(ledger);
    drop(room_numbers);

    info!(
        id = %response.id,
        room_number = %response.room_number,
        "Booking stored"
    );

    Ok(Json(response))
}

/// Handler for GET `/bookings` endpoint.
///
/// Purges expired bookings, then lists the rest newest first.
async fn handle_booking_history(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<BookingHistoryResponse>, HttpError> {
    info!("Handling booking_history request");

    let mut ledger = app_state.ledger.lock().await;
    let response: BookingHistoryResponse =
        booking_history(&mut *ledger, &app_state.rules, OffsetDateTime::now_utc())?;
    drop(ledger);

    Ok(Json(response))
}

/// Handler for DELETE `/bookings/{id}` endpoint.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CancelBookingResponse>, HttpError> {
    info!(id = %id, "Handling cancel_booking request");

    let mut ledger = app_state.ledger.lock().await;
    let response: CancelBookingResponse = cancel_booking(&mut *ledger, &id)?;
    drop(ledger);

    Ok(Json(response))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/rooms", get(handle_list_rooms))
        .route("/rooms/{key}", get(handle_room_details))
        .route("/rooms/{key}/booking_form", get(handle_booking_form))
        .route(
            "/bookings",
            get(handle_booking_history).post(handle_submit_booking),
        )
        .route(
            "/bookings/{id}",
            axum::routing::delete(handle_cancel_booking),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Royal Gold Server");

    let catalog: RoomCatalog = if let Some(catalog_path) = &args.catalog {
        info!("Loading room catalog from: {}", catalog_path.display());
        catalog_file::load_catalog(catalog_path)?
    } else {
        RoomCatalog::royal_gold()
    };
    info!(room_types = catalog.len(), "Room catalog ready");

    let rules: BookingRules = args.booking_rules();

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let store: SqliteSlotStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteSlotStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteSlotStore::new_in_memory()?
    };
    let mut ledger: BookingLedger<SqliteSlotStore> = BookingLedger::new(
        store,
        LedgerConfig {
            storage_key: args.storage_key,
        },
    );

    let purged: usize = purge_expired_bookings(&mut ledger, &rules, OffsetDateTime::now_utc())?;
    info!(purged, "Startup purge of expired bookings complete");

    let app_state: AppState = AppState {
        ledger: Arc::new(Mutex::new(ledger)),
        catalog: Arc::new(catalog),
        rules: Arc::new(rules),
        room_numbers: Arc::new(Mutex::new(Box::new(RandomRoomNumbers))),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
