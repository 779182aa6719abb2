use chrono::Utc;
use eventbook_core::{
    admission::{self, Admission},
    config::BookingConfig,
    errors::BookingError,
    models::booking::{BookingDecision, BookingRequest},
};
use eventbook_db::models::DbBooking;
use eventbook_db::repositories::booking::{ReserveOutcome, SlotAvailability};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{sample_event, sample_slot, TestContext};

// Exercises the admission flow against the mock repositories: validation
// order, reference checks, decision tiers, and the checkout redirect. The
// mocks panic on any call without an expectation, so a test that sets none
// also proves that no storage access happened.
async fn request_booking_with_mocks(
    ctx: &TestContext,
    config: &BookingConfig,
    request: BookingRequest,
) -> Result<BookingDecision, BookingError> {
    admission::validate_quantity(request.quantity)?;

    let slot = ctx
        .time_slot_repo
        .get_time_slot_by_id(request.time_slot_id)
        .await
        .map_err(BookingError::Storage)?
        .ok_or_else(|| {
            BookingError::InvalidReference(format!(
                "Time slot with ID {} not found",
                request.time_slot_id
            ))
        })?;

    if slot.event_id != request.event_id {
        return Err(BookingError::InvalidReference(format!(
            "Time slot {} does not belong to event {}",
            slot.id, request.event_id
        )));
    }

    let event = ctx
        .event_repo
        .get_event_by_id(request.event_id)
        .await
        .map_err(BookingError::Storage)?
        .ok_or_else(|| {
            BookingError::InvalidReference(format!("Event with ID {} not found", request.event_id))
        })?;

    let unit_price = admission::effective_unit_price(slot.override_price, event.base_price);

    let availability = ctx
        .booking_repo
        .slot_availability(slot.id)
        .await
        .map_err(BookingError::Storage)?
        .ok_or_else(|| {
            BookingError::InvalidReference(format!("Time slot with ID {} not found", slot.id))
        })?;

    match admission::admit(availability.free, request.quantity) {
        Admission::Granted => {
            let submitted_at = request.submitted_at.unwrap_or_else(Utc::now);
            let outcome = ctx
                .booking_repo
                .create_booking(event.id, slot.id, request.quantity, unit_price, submitted_at)
                .await
                .map_err(BookingError::Storage)?;

            match outcome {
                ReserveOutcome::Created(booking) => Ok(BookingDecision::Accepted {
                    checkout_url: config.checkout_url(booking.id, "test-token"),
                    booking_id: booking.id,
                    token: "test-token".to_string(),
                }),
                ReserveOutcome::CapacityExceeded { capacity, booked } => {
                    Err(BookingError::CapacityExceeded(format!(
                        "slot {}: booked sum {} exceeds capacity {}",
                        slot.id, booked, capacity
                    )))
                }
            }
        }
        Admission::PartiallyUnavailable => Ok(BookingDecision::PartiallyUnavailable {
            message: config.messages.not_enough_slots.clone(),
        }),
        Admission::FullyBooked => Ok(BookingDecision::FullyBooked {
            message: config.messages.booked_out.clone(),
        }),
    }
}

fn request(event_id: Uuid, time_slot_id: Uuid, quantity: i32) -> BookingRequest {
    BookingRequest {
        event_id,
        time_slot_id,
        quantity,
        submitted_at: None,
    }
}

fn availability(capacity: i32, booked: i64) -> SlotAvailability {
    let free = (i64::from(capacity) - booked).max(0);
    SlotAvailability {
        capacity,
        booked,
        free,
    }
}

#[tokio::test]
async fn non_positive_quantity_never_touches_storage() {
    // No expectations are set: any repository call would panic the test
    let ctx = TestContext::new();
    let config = BookingConfig::default();

    for quantity in [0, -4] {
        let result =
            request_booking_with_mocks(&ctx, &config, request(Uuid::new_v4(), Uuid::new_v4(), quantity))
                .await;

        match result {
            Err(BookingError::InvalidQuantity(q)) => assert_eq!(q, quantity),
            other => panic!("Expected InvalidQuantity, got: {:?}", other),
        }
    }
}

#[tokio::test]
async fn unknown_time_slot_is_an_invalid_reference() {
    let mut ctx = TestContext::new();
    let config = BookingConfig::default();

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(|_| Ok(None));

    let result =
        request_booking_with_mocks(&ctx, &config, request(Uuid::new_v4(), Uuid::new_v4(), 2)).await;

    match result {
        Err(BookingError::InvalidReference(_)) => {}
        other => panic!("Expected InvalidReference, got: {:?}", other),
    }
}

#[tokio::test]
async fn slot_must_belong_to_the_requested_event() {
    let mut ctx = TestContext::new();
    let config = BookingConfig::default();
    let slot_id = Uuid::new_v4();
    let other_event_id = Uuid::new_v4();

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(sample_slot(id, other_event_id, 10, None))));

    let result =
        request_booking_with_mocks(&ctx, &config, request(Uuid::new_v4(), slot_id, 2)).await;

    match result {
        Err(BookingError::InvalidReference(message)) => {
            assert!(message.contains("does not belong"), "message was: {message}");
        }
        other => panic!("Expected InvalidReference, got: {:?}", other),
    }
}

#[tokio::test]
async fn accepted_booking_charges_the_override_price() {
    let mut ctx = TestContext::new();
    let config = BookingConfig::default();
    let event_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();
    let booking_id = Uuid::new_v4();

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(sample_slot(id, event_id, 10, Some(15.0)))));
    ctx.event_repo
        .expect_get_event_by_id()
        .returning(move |id| Ok(Some(sample_event(id, 20.0))));
    ctx.booking_repo
        .expect_slot_availability()
        .returning(|_| Ok(Some(availability(10, 0))));
    ctx.booking_repo
        .expect_create_booking()
        .withf(move |_, _, quantity, unit_price, _| *quantity == 3 && *unit_price == 15.0)
        .returning(move |event_id, time_slot_id, quantity, unit_price, submitted_at| {
            Ok(ReserveOutcome::Created(DbBooking {
                id: booking_id,
                event_id,
                time_slot_id,
                quantity,
                unit_price,
                created_at: submitted_at,
            }))
        });

    let result = request_booking_with_mocks(&ctx, &config, request(event_id, slot_id, 3)).await;

    match result {
        Ok(BookingDecision::Accepted {
            booking_id: id,
            checkout_url,
            token,
        }) => {
            assert_eq!(id, booking_id);
            assert!(checkout_url.contains(&booking_id.to_string()));
            assert!(checkout_url.contains(&token));
        }
        other => panic!("Expected Accepted, got: {:?}", other),
    }
}

#[tokio::test]
async fn accepted_booking_falls_back_to_the_base_price() {
    let mut ctx = TestContext::new();
    let config = BookingConfig::default();
    let event_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(sample_slot(id, event_id, 10, None))));
    ctx.event_repo
        .expect_get_event_by_id()
        .returning(move |id| Ok(Some(sample_event(id, 20.0))));
    ctx.booking_repo
        .expect_slot_availability()
        .returning(|_| Ok(Some(availability(10, 0))));
    ctx.booking_repo
        .expect_create_booking()
        .withf(|_, _, _, unit_price, _| *unit_price == 20.0)
        .returning(|event_id, time_slot_id, quantity, unit_price, submitted_at| {
            Ok(ReserveOutcome::Created(DbBooking {
                id: Uuid::new_v4(),
                event_id,
                time_slot_id,
                quantity,
                unit_price,
                created_at: submitted_at,
            }))
        });

    let result = request_booking_with_mocks(&ctx, &config, request(event_id, slot_id, 1)).await;
    assert!(matches!(result, Ok(BookingDecision::Accepted { .. })));
}

#[tokio::test]
async fn exact_fit_request_is_accepted() {
    let mut ctx = TestContext::new();
    let config = BookingConfig::default();
    let event_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(sample_slot(id, event_id, 10, None))));
    ctx.event_repo
        .expect_get_event_by_id()
        .returning(move |id| Ok(Some(sample_event(id, 20.0))));
    ctx.booking_repo
        .expect_slot_availability()
        .returning(|_| Ok(Some(availability(10, 0))));
    ctx.booking_repo
        .expect_create_booking()
        .withf(|_, _, quantity, _, _| *quantity == 10)
        .returning(|event_id, time_slot_id, quantity, unit_price, submitted_at| {
            Ok(ReserveOutcome::Created(DbBooking {
                id: Uuid::new_v4(),
                event_id,
                time_slot_id,
                quantity,
                unit_price,
                created_at: submitted_at,
            }))
        });

    let result = request_booking_with_mocks(&ctx, &config, request(event_id, slot_id, 10)).await;
    assert!(matches!(result, Ok(BookingDecision::Accepted { .. })));
}

#[tokio::test]
async fn partial_shortfall_rejects_without_persisting() {
    let mut ctx = TestContext::new();
    let config = BookingConfig::default();
    let event_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(sample_slot(id, event_id, 10, None))));
    ctx.event_repo
        .expect_get_event_by_id()
        .returning(move |id| Ok(Some(sample_event(id, 20.0))));
    // capacity 10 with 7 booked leaves 3 free; no create_booking expectation,
    // so persisting anything would panic
    ctx.booking_repo
        .expect_slot_availability()
        .returning(|_| Ok(Some(availability(10, 7))));

    let result = request_booking_with_mocks(&ctx, &config, request(event_id, slot_id, 5)).await;

    match result {
        Ok(BookingDecision::PartiallyUnavailable { message }) => {
            assert_eq!(message, "There are not enough free slots for your selection.");
        }
        other => panic!("Expected PartiallyUnavailable, got: {:?}", other),
    }
}

#[tokio::test]
async fn drained_slot_reports_fully_booked() {
    let mut ctx = TestContext::new();
    let config = BookingConfig::default();
    let event_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(sample_slot(id, event_id, 10, None))));
    ctx.event_repo
        .expect_get_event_by_id()
        .returning(move |id| Ok(Some(sample_event(id, 20.0))));
    ctx.booking_repo
        .expect_slot_availability()
        .returning(|_| Ok(Some(availability(10, 10))));

    let result = request_booking_with_mocks(&ctx, &config, request(event_id, slot_id, 1)).await;

    match result {
        Ok(BookingDecision::FullyBooked { message }) => {
            assert_eq!(message, "This is now booked out.");
        }
        other => panic!("Expected FullyBooked, got: {:?}", other),
    }
}

#[tokio::test]
async fn bypassed_serialization_surfaces_as_capacity_exceeded() {
    let mut ctx = TestContext::new();
    let config = BookingConfig::default();
    let event_id = Uuid::new_v4();
    let slot_id = Uuid::new_v4();

    ctx.time_slot_repo
        .expect_get_time_slot_by_id()
        .returning(move |id| Ok(Some(sample_slot(id, event_id, 10, None))));
    ctx.event_repo
        .expect_get_event_by_id()
        .returning(move |id| Ok(Some(sample_event(id, 20.0))));
    ctx.booking_repo
        .expect_slot_availability()
        .returning(|_| Ok(Some(availability(10, 0))));
    ctx.booking_repo
        .expect_create_booking()
        .returning(|_, _, _, _, _| {
            Ok(ReserveOutcome::CapacityExceeded {
                capacity: 10,
                booked: 12,
            })
        });

    let result = request_booking_with_mocks(&ctx, &config, request(event_id, slot_id, 2)).await;

    match result {
        Err(BookingError::CapacityExceeded(_)) => {}
        other => panic!("Expected CapacityExceeded, got: {:?}", other),
    }
}
