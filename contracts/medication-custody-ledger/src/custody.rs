use crate::error::CustodyError;
use crate::events::*;
use crate::registry;
use crate::storage;
use crate::types::{CustodyAction, CustodyRecord, Medication, MedicationVerification, Role};
use soroban_sdk::{log, Address, BytesN, Env, String, Vec};

pub fn register_medication(
    env: &Env,
    caller: &Address,
    id: String,
    details_hash: BytesN<32>,
) -> Result<(), CustodyError> {
    // Any registered role may register a medication.
    if !registry::is_registered(env, caller) {
        return Err(CustodyError::NotRegisteredActor);
    }

    if storage::has_medication(env, &id) {
        return Err(CustodyError::DuplicateMedication);
    }

    let timestamp = env.ledger().timestamp();
    let medication = Medication {
        id: id.clone(),
        details_hash: details_hash.clone(),
        registered_by: caller.clone(),
        current_holder: Some(caller.clone()),
        is_validated: false,
    };

    storage::set_medication(env, &medication);
    storage::add_registrant_medication(env, caller, &id);
    storage::add_custody_record(
        env,
        &id,
        CustodyRecord {
            action: CustodyAction::Registered,
            actor: caller.clone(),
            from: None,
            to: Some(caller.clone()),
            timestamp,
        },
    );
    log!(env, "medication registered: {} by {}", id.clone(), caller.clone());

    emit_medication_registered(env, id, caller.clone(), details_hash, timestamp);
    Ok(())
}

pub fn transfer_medication(
    env: &Env,
    caller: &Address,
    id: String,
    to: Address,
) -> Result<(), CustodyError> {
    let mut medication = get_medication(env, &id)?;

    if medication.current_holder.as_ref() != Some(caller) {
        return Err(CustodyError::NotHolder);
    }

    // Handing a unit to its current holder changes nothing.
    if to == *caller {
        return Ok(());
    }

    let timestamp = env.ledger().timestamp();
    medication.current_holder = Some(to.clone());
    storage::set_medication(env, &medication);
    storage::add_custody_record(
        env,
        &id,
        CustodyRecord {
            action: CustodyAction::Transferred,
            actor: caller.clone(),
            from: Some(caller.clone()),
            to: Some(to.clone()),
            timestamp,
        },
    );
    log!(env, "medication transferred: {} to {}", id.clone(), to.clone());

    emit_medication_transferred(env, id, caller.clone(), to, timestamp);
    Ok(())
}

pub fn sell_medication(env: &Env, caller: &Address, id: String) -> Result<(), CustodyError> {
    let mut medication = get_medication(env, &id)?;

    // A sold unit has no holder, so it fails the possession half here too.
    let holds = medication.current_holder.as_ref() == Some(caller);
    if !holds || !registry::has_role(env, caller, Role::Pharmacy) {
        return Err(CustodyError::NotPharmacyHolder);
    }

    let timestamp = env.ledger().timestamp();
    medication.current_holder = None;
    storage::set_medication(env, &medication);
    storage::add_custody_record(
        env,
        &id,
        CustodyRecord {
            action: CustodyAction::Sold,
            actor: caller.clone(),
            from: Some(caller.clone()),
            to: None,
            timestamp,
        },
    );
    log!(env, "medication sold: {} by {}", id.clone(), caller.clone());

    emit_medication_sold(env, id, caller.clone(), timestamp);
    Ok(())
}

pub fn validate_medication(env: &Env, caller: &Address, id: String) -> Result<(), CustodyError> {
    registry::require_owner(env, caller)?;

    let mut medication = get_medication(env, &id)?;
    if medication.is_validated {
        return Ok(());
    }

    let timestamp = env.ledger().timestamp();
    medication.is_validated = true;
    storage::set_medication(env, &medication);
    storage::add_custody_record(
        env,
        &id,
        CustodyRecord {
            action: CustodyAction::Validated,
            actor: caller.clone(),
            from: medication.current_holder.clone(),
            to: medication.current_holder.clone(),
            timestamp,
        },
    );
    log!(env, "medication validated: {}", id.clone());

    emit_medication_validated(env, id, caller.clone(), timestamp);
    Ok(())
}

pub fn get_medication(env: &Env, id: &String) -> Result<Medication, CustodyError> {
    storage::get_medication(env, id).ok_or(CustodyError::NotFound)
}

pub fn verify_medication(env: &Env, id: &String) -> Result<MedicationVerification, CustodyError> {
    let medication = get_medication(env, id)?;
    Ok(MedicationVerification {
        registered_by: medication.registered_by,
        details_hash: medication.details_hash,
        is_validated: medication.is_validated,
    })
}

pub fn get_custody_history(
    env: &Env,
    id: &String,
    offset: u32,
    limit: u32,
) -> Result<Vec<CustodyRecord>, CustodyError> {
    if !storage::has_medication(env, id) {
        return Err(CustodyError::NotFound);
    }

    let mut records = Vec::new(env);
    let end = offset
        .saturating_add(limit)
        .min(storage::get_custody_count(env, id));

    for index in offset..end {
        if let Some(record) = storage::get_custody_record(env, id, index) {
            records.push_back(record);
        }
    }

    Ok(records)
}

pub fn get_registrant_medications(
    env: &Env,
    registrant: &Address,
    offset: u32,
    limit: u32,
) -> Vec<String> {
    let mut ids = Vec::new(env);
    let end = offset
        .saturating_add(limit)
        .min(storage::get_registrant_count(env, registrant));

    for index in offset..end {
        if let Some(id) = storage::get_registrant_medication(env, registrant, index) {
            ids.push_back(id);
        }
    }

    ids
}
