//! Booking route handlers

use askama::Template;
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::Property;
use crate::AppState;

use super::calculators::format_money;
use super::dates::{self, DateRange};
use super::quote::BookingQuote;
use super::requests::{AvailabilityRequest, CalendarQuery, QuoteRequest};
use super::responses::{AvailabilityResponse, CalendarResponse, QuoteResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/properties", get(list_properties))
        .route("/api/properties/:id/calendar", get(calendar))
        .route("/api/booking/availability", post(availability))
        .route("/api/booking/quote", post(quote))
        .route("/booking/summary", get(summary))
}

/// Property listing
async fn list_properties(State(state): State<AppState>) -> Result<Json<Vec<Property>>> {
    Ok(Json(state.store.list_properties().await?))
}

/// Per-day availability for a property
async fn calendar(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<CalendarQuery>,
) -> Result<Json<CalendarResponse>> {
    let span = DateRange::new(query.from, query.to)?;
    let days =
        services::property_calendar(state.store.as_ref(), &state.cache, id, span, dates::today())
            .await?;

    Ok(Json(CalendarResponse {
        property_id: id,
        from: span.from(),
        to: span.to(),
        days,
    }))
}

/// Single-day availability check
async fn availability(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>> {
    let reason = services::check_date(
        state.store.as_ref(),
        &state.cache,
        req.property_id,
        req.date,
        dates::today(),
    )
    .await?;

    Ok(Json(AvailabilityResponse {
        property_id: req.property_id,
        date: req.date,
        available: reason.is_available(),
        reason,
    }))
}

/// Quote the current booking form selection
async fn quote(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let quote = quote_for(&state, &req).await?;
    Ok(Json(quote.into()))
}

/// One rendered row of the summary table
struct SummaryLine {
    label: String,
    display: String,
}

/// Booking summary panel
#[derive(Template)]
#[template(path = "booking/summary.html")]
struct BookingSummaryTemplate {
    has_property: bool,
    property_name: String,
    property_location: String,
    has_customer: bool,
    customer_name: String,
    has_breakdown: bool,
    lines: Vec<SummaryLine>,
    total_display: String,
    nights: u32,
    has_conflicts: bool,
    conflict_count: usize,
}

impl From<&BookingQuote> for BookingSummaryTemplate {
    fn from(quote: &BookingQuote) -> Self {
        let (property_name, property_location) = quote
            .selected_property
            .as_ref()
            .map(|p| (p.name.clone(), p.location.clone()))
            .unwrap_or_default();
        let customer_name = quote
            .selected_customer
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default();

        Self {
            has_property: quote.selected_property.is_some(),
            property_name,
            property_location,
            has_customer: quote.selected_customer.is_some(),
            customer_name,
            has_breakdown: !quote.price.is_empty(),
            lines: quote
                .price
                .line_items()
                .iter()
                .map(|item| SummaryLine {
                    label: item.label.clone(),
                    display: format_money(item.amount),
                })
                .collect(),
            total_display: format_money(quote.total_amount),
            nights: quote.total_nights,
            has_conflicts: !quote.conflicts.is_empty(),
            conflict_count: quote.conflicts.len(),
        }
    }
}

/// Booking summary panel for the current selection
async fn summary(
    State(state): State<AppState>,
    ApiQuery(req): ApiQuery<QuoteRequest>,
) -> Result<Html<String>> {
    let quote = quote_for(&state, &req).await?;
    let template = BookingSummaryTemplate::from(&quote);
    Ok(Html(template.render()?))
}

async fn quote_for(state: &AppState, req: &QuoteRequest) -> Result<BookingQuote> {
    services::quote_booking(
        state.store.as_ref(),
        &state.cache,
        &state.fee_rates,
        req,
        dates::today(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::FeeRates;
    use crate::cache::AppCache;
    use crate::db::{MemoryStore, SeedData};
    use crate::models::{Booking, BookingStatus, Customer, Property};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::{Days, NaiveDate};
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct Fixture {
        state: AppState,
        property_id: Uuid,
        customer_id: Uuid,
    }

    fn days_from_today(n: u64) -> NaiveDate {
        dates::today().checked_add_days(Days::new(n)).unwrap()
    }

    // Dates are relative to today so "past" never catches the fixture
    fn fixture() -> Fixture {
        let property_id = Uuid::new_v4();
        let customer_id = Uuid::new_v4();
        let seed = SeedData {
            properties: vec![Property {
                id: property_id,
                name: "Seaside Cottage".to_string(),
                location: "Cape Cod, MA".to_string(),
                max_guests: 4,
                nightly_price: dec!(200),
                available_from: dates::today(),
                available_to: days_from_today(120),
            }],
            customers: vec![Customer {
                id: customer_id,
                name: "Jordan Lee".to_string(),
                email: "jordan@example.com".to_string(),
                phone: None,
            }],
            bookings: vec![Booking {
                id: Uuid::new_v4(),
                property_id,
                customer_id,
                check_in: days_from_today(20),
                check_out: days_from_today(22),
                status: BookingStatus::Confirmed,
            }],
        };

        Fixture {
            state: AppState {
                store: Arc::new(MemoryStore::new(seed)),
                cache: AppCache::new(),
                fee_rates: FeeRates::default(),
            },
            property_id,
            customer_id,
        }
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, String) {
        let response = crate::app(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let f = fixture();
        let (status, body) = send(f.state, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_properties() {
        let f = fixture();
        let (status, body) = send(f.state, get_request("/api/properties")).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["nightly_price"], "200");
        assert_eq!(json[0]["name"], "Seaside Cottage");
        assert_eq!(json[0]["available_from"], dates::today().to_string());
    }

    #[tokio::test]
    async fn test_quote_priced() {
        let f = fixture();
        let body = json!({
            "property_id": f.property_id,
            "customer_id": f.customer_id,
            "start_date": days_from_today(30),
            "end_date": days_from_today(33),
        });

        let (status, body) = send(f.state, post_json("/api/booking/quote", body)).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "priced");
        assert_eq!(json["total_nights"], 3);
        assert_eq!(json["total_amount"], "678.00");
        assert_eq!(json["bookable"], true);

        let lines = json["breakdown"]["line_items"].as_array().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["label"], "3 nights × $200.00");
        assert_eq!(lines[1]["amount"]["display"], "$30.00");
        assert_eq!(lines[2]["amount"]["display"], "$48.00");
        assert_eq!(json["breakdown"]["total"]["display"], "$678.00");
    }

    #[tokio::test]
    async fn test_quote_nothing_selected() {
        let f = fixture();
        let (status, body) = send(f.state, post_json("/api/booking/quote", json!({}))).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "empty");
        assert_eq!(json["total_nights"], 0);
        assert_eq!(json["total_amount"], "0.00");
        assert!(json["breakdown"].is_null());
        assert_eq!(json["bookable"], false);
    }

    #[tokio::test]
    async fn test_quote_overlapping_booking_is_not_bookable() {
        let f = fixture();
        let body = json!({
            "property_id": f.property_id,
            "customer_id": f.customer_id,
            "start_date": days_from_today(19),
            "end_date": days_from_today(23),
        });

        let (_, body) = send(f.state, post_json("/api/booking/quote", body)).await;
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "priced");
        assert_eq!(json["conflicts"].as_array().unwrap().len(), 3);
        assert_eq!(json["conflicts"][0]["availability"], "booked");
        assert_eq!(json["bookable"], false);
    }

    #[tokio::test]
    async fn test_quote_unknown_property() {
        let f = fixture();
        let body = json!({ "property_id": Uuid::new_v4() });
        let (status, body) = send(f.state, post_json("/api/booking/quote", body)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error_type"], "unknown_property");
    }

    #[tokio::test]
    async fn test_availability_check() {
        let f = fixture();
        let booked = json!({ "property_id": f.property_id, "date": days_from_today(21) });
        let (status, body) = send(f.state.clone(), post_json("/api/booking/availability", booked)).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["available"], false);
        assert_eq!(json["reason"], "booked");

        let past = json!({ "property_id": f.property_id, "date": dates::today().pred_opt().unwrap() });
        let (_, body) = send(f.state.clone(), post_json("/api/booking/availability", past)).await;
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["reason"], "past");

        let free = json!({ "property_id": f.property_id, "date": days_from_today(5) });
        let (_, body) = send(f.state, post_json("/api/booking/availability", free)).await;
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["available"], true);
    }

    #[tokio::test]
    async fn test_calendar() {
        let f = fixture();
        let uri = format!(
            "/api/properties/{}/calendar?from={}&to={}",
            f.property_id,
            days_from_today(19),
            days_from_today(23)
        );
        let (status, body) = send(f.state.clone(), get_request(&uri)).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        let days: Vec<&str> = json["days"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["availability"].as_str().unwrap())
            .collect();
        assert_eq!(days, vec!["available", "booked", "booked", "booked", "available"]);

        let inverted = format!(
            "/api/properties/{}/calendar?from={}&to={}",
            f.property_id,
            days_from_today(23),
            days_from_today(19)
        );
        let (status, body) = send(f.state, get_request(&inverted)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error_type"], "inverted_range");
    }

    #[tokio::test]
    async fn test_quote_rejects_overlong_stay() {
        let f = fixture();
        let body = json!({
            "property_id": f.property_id,
            "start_date": "1000-01-01",
            "end_date": "9999-12-31",
        });
        let (status, body) = send(f.state, post_json("/api/booking/quote", body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error_type"], "stay_too_long");
    }

    #[tokio::test]
    async fn test_malformed_date_gets_json_error() {
        let f = fixture();
        let request = post_json("/api/booking/quote", json!({ "start_date": "next tuesday" }));
        let response = crate::app(f.state.clone()).oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error_type"], "invalid_body");
        assert!(json["message"].as_str().unwrap().contains("start_date"));

        let (status, body) = send(
            f.state.clone(),
            get_request("/booking/summary?start_date=next-tuesday"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error_type"], "invalid_query");

        let (status, body) = send(
            f.state,
            get_request("/api/properties/not-a-uuid/calendar?from=2026-01-01&to=2026-01-02"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error_type"], "invalid_path");
    }

    #[tokio::test]
    async fn test_summary_placeholder_without_property() {
        let f = fixture();
        let (status, body) = send(f.state, get_request("/booking/summary?property_id=&start_date=")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Select a property"));
        assert!(!body.contains("$0.00"));
    }

    #[tokio::test]
    async fn test_summary_placeholder_without_dates() {
        let f = fixture();
        let uri = format!("/booking/summary?property_id={}", f.property_id);
        let (status, body) = send(f.state, get_request(&uri)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Seaside Cottage"));
        assert!(body.contains("Select check-in and check-out dates"));
        assert!(!body.contains("$0.00"));
    }

    #[tokio::test]
    async fn test_summary_breakdown() {
        let f = fixture();
        let uri = format!(
            "/booking/summary?property_id={}&customer_id={}&start_date={}&end_date={}",
            f.property_id,
            f.customer_id,
            days_from_today(30),
            days_from_today(33)
        );
        let (status, body) = send(f.state, get_request(&uri)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Guest: Jordan Lee"));
        assert!(body.contains("$600.00"));
        assert!(body.contains("$678.00"));
        assert!(!body.contains("unavailable"));
    }
}
