use crate::types::{Actor, CustodyRecord, Medication};
use soroban_sdk::{contracttype, Address, Env, String};

// Persistent entries are bumped on every write so registry state outlives
// the default entry TTL.
const DAY_IN_LEDGERS: u32 = 17_280;
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 60 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_EXTEND_TO - 7 * DAY_IN_LEDGERS;

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,                              // instance: ledger owner
    Actor(Address),                     // actor address -> Actor
    Medication(String),                 // medication id -> Medication
    CustodyCount(String),               // medication id -> number of custody records
    CustodyRecord(String, u32),         // (medication id, index) -> CustodyRecord
    RegistrantCount(Address),           // registrant -> number of registered ids
    RegistrantMedication(Address, u32), // (registrant, index) -> medication id
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

// Owner storage functions
pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

// Actor storage functions
pub fn get_actor(env: &Env, address: &Address) -> Option<Actor> {
    env.storage()
        .persistent()
        .get(&DataKey::Actor(address.clone()))
}

pub fn has_actor(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Actor(address.clone()))
}

pub fn set_actor(env: &Env, actor: &Actor) {
    let key = DataKey::Actor(actor.address.clone());
    env.storage().persistent().set(&key, actor);
    bump(env, &key);
}

// Medication storage functions
pub fn get_medication(env: &Env, id: &String) -> Option<Medication> {
    env.storage()
        .persistent()
        .get(&DataKey::Medication(id.clone()))
}

pub fn has_medication(env: &Env, id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Medication(id.clone()))
}

pub fn set_medication(env: &Env, medication: &Medication) {
    let key = DataKey::Medication(medication.id.clone());
    env.storage().persistent().set(&key, medication);
    bump(env, &key);
}

// Custody history storage functions
//
// Each record sits under its own key; appending never rewrites earlier ones.
pub fn get_custody_count(env: &Env, id: &String) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::CustodyCount(id.clone()))
        .unwrap_or(0)
}

pub fn get_custody_record(env: &Env, id: &String, index: u32) -> Option<CustodyRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::CustodyRecord(id.clone(), index))
}

pub fn add_custody_record(env: &Env, id: &String, record: CustodyRecord) {
    let index = get_custody_count(env, id);

    let record_key = DataKey::CustodyRecord(id.clone(), index);
    env.storage().persistent().set(&record_key, &record);
    bump(env, &record_key);

    let count_key = DataKey::CustodyCount(id.clone());
    env.storage().persistent().set(&count_key, &(index + 1));
    bump(env, &count_key);
}

// Registrant index storage functions
pub fn get_registrant_count(env: &Env, registrant: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::RegistrantCount(registrant.clone()))
        .unwrap_or(0)
}

pub fn get_registrant_medication(env: &Env, registrant: &Address, index: u32) -> Option<String> {
    env.storage()
        .persistent()
        .get(&DataKey::RegistrantMedication(registrant.clone(), index))
}

pub fn add_registrant_medication(env: &Env, registrant: &Address, id: &String) {
    let index = get_registrant_count(env, registrant);

    let entry_key = DataKey::RegistrantMedication(registrant.clone(), index);
    env.storage().persistent().set(&entry_key, id);
    bump(env, &entry_key);

    let count_key = DataKey::RegistrantCount(registrant.clone());
    env.storage().persistent().set(&count_key, &(index + 1));
    bump(env, &count_key);
}
