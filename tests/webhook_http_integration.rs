//! Integration tests for the webhook endpoint.
//!
//! Drives the full router with signed and unsigned deliveries:
//! 1. Correctly signed, fresh events are acknowledged
//! 2. Wrong secrets, stale timestamps and tampered bodies are rejected with a bare 400
//! 3. Unrecognized event types are acknowledged without side effects
//! 4. Handler failures surface as 500 so Stripe redelivers

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use tower::ServiceExt;

use checkout_relay::adapters::{app_router, with_middleware, AppState, MockPaymentProvider};
use checkout_relay::domain::checkout::{CheckoutMode, CheckoutSessionRequest, LineItem};
use checkout_relay::domain::webhook::{
    sign_payload, EventHandler, EventHandlerRegistry, HandlerError, StripeWebhookVerifier,
    VerifiedEvent,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const SECRET: &str = "whsec_integration_secret";

/// Counts events it receives, optionally failing each one.
#[derive(Default)]
struct CountingHandler {
    calls: AtomicU32,
    fail: bool,
}

impl CountingHandler {
    fn failing() -> Self {
        Self {
            calls: AtomicU32::new(0),
            fail: true,
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventHandler for CountingHandler {
    async fn handle(&self, _event: &VerifiedEvent) -> Result<(), HandlerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(HandlerError::new("downstream unavailable"));
        }
        Ok(())
    }
}

fn app(verifier: StripeWebhookVerifier, registry: EventHandlerRegistry) -> Router {
    let state = AppState::new(
        verifier,
        registry,
        Arc::new(MockPaymentProvider::new()),
        CheckoutSessionRequest::single(
            LineItem::new("price_integration", 1),
            CheckoutMode::Payment,
            "http://localhost:3000/success",
            "http://localhost:3000/cancel",
        ),
        "pk_test_integration",
    );
    with_middleware(app_router(state), Duration::from_secs(5))
}

fn verifier() -> StripeWebhookVerifier {
    StripeWebhookVerifier::new(SecretString::new(SECRET.to_string()))
}

fn event_body(event_type: &str, livemode: bool) -> String {
    format!(
        r#"{{
  "id": "evt_integration_1",
  "object": "event",
  "type": "{}",
  "created": 1700000000,
  "livemode": {},
  "data": {{"object": {{"id": "obj_1", "object": "checkout.session"}}}}
}}"#,
        event_type, livemode
    )
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

fn webhook_request(body: impl Into<Vec<u8>>, signature: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .header("stripe-signature", signature)
        .body(Body::from(body.into()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

// =============================================================================
// Verification
// =============================================================================

#[tokio::test]
async fn signed_event_reaches_registered_handler() {
    let handler = Arc::new(CountingHandler::default());
    let app = app(
        verifier(),
        EventHandlerRegistry::new().register("checkout.session.completed", handler.clone()),
    );
    let body = event_body("checkout.session.completed", false);
    let signature = sign_payload(SECRET, now(), body.as_bytes()).unwrap();

    let (status, text) = send(app, webhook_request(body, &signature)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "success");
    assert_eq!(handler.calls(), 1);
}

#[tokio::test]
async fn different_secret_is_rejected() {
    let handler = Arc::new(CountingHandler::default());
    let app = app(
        verifier(),
        EventHandlerRegistry::new().register("checkout.session.completed", handler.clone()),
    );
    let body = event_body("checkout.session.completed", false);
    let signature = sign_payload("whsec_not_the_secret", now(), body.as_bytes()).unwrap();

    let (status, text) = send(app, webhook_request(body, &signature)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text.is_empty());
    assert_eq!(handler.calls(), 0);
}

#[tokio::test]
async fn six_hour_old_signature_is_rejected() {
    let app = app(verifier(), EventHandlerRegistry::new());
    let body = event_body("checkout.session.completed", false);
    let signature = sign_payload(SECRET, now() - 6 * 60 * 60, body.as_bytes()).unwrap();

    let (status, text) = send(app, webhook_request(body, &signature)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text.is_empty());
}

#[tokio::test]
async fn tampered_body_is_rejected() {
    let app = app(verifier(), EventHandlerRegistry::new());
    let body = event_body("checkout.session.completed", false);
    let signature = sign_payload(SECRET, now(), body.as_bytes()).unwrap();
    let tampered = body.replace("obj_1", "obj_2");

    let (status, _) = send(app, webhook_request(tampered, &signature)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn whitespace_change_breaks_signature() {
    let app = app(verifier(), EventHandlerRegistry::new());
    let body = event_body("checkout.session.completed", false);
    let signature = sign_payload(SECRET, now(), body.as_bytes()).unwrap();
    let reformatted = format!("{}\n", body);

    let (status, _) = send(app, webhook_request(reformatted, &signature)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rotated_secret_header_with_two_signatures_is_accepted() {
    let app = app(verifier(), EventHandlerRegistry::new());
    let body = event_body("checkout.session.completed", false);
    let t = now();
    let old = sign_payload("whsec_previous", t, body.as_bytes()).unwrap();
    let current = sign_payload(SECRET, t, body.as_bytes()).unwrap();
    let current_v1 = current.split_once(",v1=").unwrap().1;
    let header = format!("{},v1={}", old, current_v1);

    let (status, _) = send(app, webhook_request(body, &header)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_mode_event_rejected_when_livemode_required() {
    let app = app(
        verifier().with_require_livemode(true),
        EventHandlerRegistry::new(),
    );
    let test_body = event_body("checkout.session.completed", false);
    let test_sig = sign_payload(SECRET, now(), test_body.as_bytes()).unwrap();

    let (status, _) = send(app.clone(), webhook_request(test_body, &test_sig)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let live_body = event_body("checkout.session.completed", true);
    let live_sig = sign_payload(SECRET, now(), live_body.as_bytes()).unwrap();

    let (status, _) = send(app, webhook_request(live_body, &live_sig)).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Dispatch
// =============================================================================

#[tokio::test]
async fn unknown_event_type_is_acknowledged() {
    let handler = Arc::new(CountingHandler::default());
    let app = app(
        verifier(),
        EventHandlerRegistry::new().register("checkout.session.completed", handler.clone()),
    );
    let body = event_body("payment_intent.created", false);
    let signature = sign_payload(SECRET, now(), body.as_bytes()).unwrap();

    let (status, text) = send(app, webhook_request(body, &signature)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "success");
    assert_eq!(handler.calls(), 0);
}

#[tokio::test]
async fn unknown_event_delivered_twice_gets_same_response() {
    let handler = Arc::new(CountingHandler::default());
    let app = app(
        verifier(),
        EventHandlerRegistry::new().register("checkout.session.completed", handler.clone()),
    );
    let body = event_body("payment_intent.created", false);
    let signature = sign_payload(SECRET, now(), body.as_bytes()).unwrap();

    let first = send(app.clone(), webhook_request(body.clone(), &signature)).await;
    let second = send(app, webhook_request(body, &signature)).await;

    assert_eq!(first, second);
    assert_eq!(first, (StatusCode::OK, "success".to_string()));
    assert_eq!(handler.calls(), 0);
}

#[tokio::test]
async fn handler_failure_is_server_error() {
    let handler = Arc::new(CountingHandler::failing());
    let app = app(
        verifier(),
        EventHandlerRegistry::new().register("customer.subscription.deleted", handler.clone()),
    );
    let body = event_body("customer.subscription.deleted", false);
    let signature = sign_payload(SECRET, now(), body.as_bytes()).unwrap();

    let (status, text) = send(app, webhook_request(body, &signature)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!text.contains("downstream unavailable"));
    assert_eq!(handler.calls(), 1);
}
