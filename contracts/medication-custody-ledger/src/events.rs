use crate::types::Role;
use soroban_sdk::{contracttype, Address, BytesN, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerInitializedEvent {
    pub owner: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActorRegisteredEvent {
    pub address: Address,
    pub name: String,
    pub role: Role,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicationRegisteredEvent {
    pub id: String,
    pub registered_by: Address,
    pub details_hash: BytesN<32>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicationTransferredEvent {
    pub id: String,
    pub from: Address,
    pub to: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicationSoldEvent {
    pub id: String,
    pub pharmacy: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicationValidatedEvent {
    pub id: String,
    pub validator: Address,
    pub timestamp: u64,
}

pub fn emit_ledger_initialized(env: &Env, owner: Address, timestamp: u64) {
    let event = LedgerInitializedEvent { owner, timestamp };
    env.events()
        .publish((Symbol::new(env, "ledger_initialized"),), event);
}

pub fn emit_actor_registered(
    env: &Env,
    address: Address,
    name: String,
    role: Role,
    timestamp: u64,
) {
    let event = ActorRegisteredEvent {
        address: address.clone(),
        name,
        role,
        timestamp,
    };
    env.events()
        .publish((Symbol::new(env, "actor_registered"), address), event);
}

pub fn emit_medication_registered(
    env: &Env,
    id: String,
    registered_by: Address,
    details_hash: BytesN<32>,
    timestamp: u64,
) {
    let event = MedicationRegisteredEvent {
        id: id.clone(),
        registered_by,
        details_hash,
        timestamp,
    };
    env.events()
        .publish((Symbol::new(env, "medication_registered"), id), event);
}

pub fn emit_medication_transferred(
    env: &Env,
    id: String,
    from: Address,
    to: Address,
    timestamp: u64,
) {
    let event = MedicationTransferredEvent {
        id: id.clone(),
        from,
        to,
        timestamp,
    };
    env.events()
        .publish((Symbol::new(env, "medication_transferred"), id), event);
}

pub fn emit_medication_sold(env: &Env, id: String, pharmacy: Address, timestamp: u64) {
    let event = MedicationSoldEvent {
        id: id.clone(),
        pharmacy,
        timestamp,
    };
    env.events()
        .publish((Symbol::new(env, "medication_sold"), id), event);
}

pub fn emit_medication_validated(env: &Env, id: String, validator: Address, timestamp: u64) {
    let event = MedicationValidatedEvent {
        id: id.clone(),
        validator,
        timestamp,
    };
    env.events()
        .publish((Symbol::new(env, "medication_validated"), id), event);
}
