#![cfg(test)]

use super::utils::*;
use crate::{CustodyAction, CustodyError, MedicationValidatedEvent};
use soroban_sdk::{testutils::Events, IntoVal, Symbol, Val, Vec};

#[test]
fn test_owner_validates_medication() {
    let ctx = setup_with_actors();
    let id = ctx.register_medication("med123");

    ctx.client.validate_medication(&ctx.owner, &id);

    let medication = ctx.client.get_medication(&id);
    assert!(medication.is_validated);
    assert_eq!(medication.current_holder, Some(ctx.manufacturer.clone()));
}

#[test]
fn test_non_owner_cannot_validate() {
    let ctx = setup_with_actors();
    let id = ctx.register_medication("med123");

    for caller in [&ctx.manufacturer, &ctx.distributor, &ctx.pharmacy, &ctx.outsider] {
        let result = ctx.client.try_validate_medication(caller, &id);
        assert_eq!(result, Err(Ok(CustodyError::Unauthorized)));
    }

    assert!(!ctx.client.get_medication(&id).is_validated);
}

#[test]
fn test_validate_unknown_medication() {
    let ctx = setup_with_actors();

    let result = ctx
        .client
        .try_validate_medication(&ctx.owner, &ctx.id("missing"));
    assert_eq!(result, Err(Ok(CustodyError::NotFound)));
}

#[test]
fn test_authorization_checked_before_existence() {
    let ctx = setup_with_actors();

    let result = ctx
        .client
        .try_validate_medication(&ctx.manufacturer, &ctx.id("missing"));
    assert_eq!(result, Err(Ok(CustodyError::Unauthorized)));
}

#[test]
fn test_validation_is_idempotent() {
    let ctx = setup_with_actors();
    let id = ctx.register_medication("med123");

    ctx.client.validate_medication(&ctx.owner, &id);
    ctx.client.validate_medication(&ctx.owner, &id);

    assert!(ctx.client.get_medication(&id).is_validated);

    let history = ctx.client.get_custody_history(&id, &0, &10);
    assert_eq!(history.len(), 2);
    assert_eq!(history.get(1).unwrap().action, CustodyAction::Validated);
}

#[test]
fn test_validation_after_sale() {
    let ctx = setup_with_actors();
    let id = ctx.register_medication("med123");
    ctx.deliver_to_pharmacy(&id);
    ctx.client.sell_medication(&ctx.pharmacy, &id);

    ctx.client.validate_medication(&ctx.owner, &id);

    let medication = ctx.client.get_medication(&id);
    assert!(medication.is_validated);
    assert_eq!(medication.current_holder, None);
}

#[test]
fn test_validation_survives_transfers() {
    let ctx = setup_with_actors();
    let id = ctx.register_medication("med123");
    ctx.client.validate_medication(&ctx.owner, &id);

    ctx.deliver_to_pharmacy(&id);
    ctx.client.sell_medication(&ctx.pharmacy, &id);

    assert!(ctx.client.verify_medication(&id).is_validated);
}

#[test]
fn test_validate_emits_event() {
    let ctx = setup_with_actors();
    let id = ctx.register_medication("med123");
    ctx.client.validate_medication(&ctx.owner, &id);

    let (_, topics, data) = ctx.env.events().all().last().unwrap();
    let expected: Vec<Val> =
        (Symbol::new(&ctx.env, "medication_validated"), id.clone()).into_val(&ctx.env);
    assert_eq!(topics, expected);

    let event: MedicationValidatedEvent = data.into_val(&ctx.env);
    assert_eq!(event.validator, ctx.owner);
}

#[test]
fn test_verify_medication() {
    let ctx = setup_with_actors();
    let id = ctx.register_medication("med123");

    let result = ctx.client.verify_medication(&id);
    assert_eq!(result.registered_by, ctx.manufacturer);
    assert_eq!(result.details_hash, ctx.details_hash("details"));
    assert!(!result.is_validated);
}

#[test]
fn test_verify_unknown_medication() {
    let ctx = setup_with_actors();

    let result = ctx.client.try_verify_medication(&ctx.id("nonRegisteredMedID"));
    assert_eq!(result, Err(Ok(CustodyError::NotFound)));
}

#[test]
fn test_verify_does_not_require_initialization() {
    let ctx = setup();

    let result = ctx.client.try_verify_medication(&ctx.id("med123"));
    assert_eq!(result, Err(Ok(CustodyError::NotFound)));
}
