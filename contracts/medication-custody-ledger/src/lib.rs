#![no_std]

mod custody;
mod error;
mod events;
mod registry;
mod storage;
mod types;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use types::*;

#[contract]
pub struct MedicationCustodyLedger;

#[contractimpl]
impl MedicationCustodyLedger {
    /// Initialize the ledger with its owner. The owner never changes afterwards.
    pub fn initialize(env: Env, owner: Address) -> Result<(), CustodyError> {
        owner.require_auth();
        registry::initialize(&env, &owner)
    }

    pub fn get_owner(env: Env) -> Result<Address, CustodyError> {
        registry::get_owner(&env)
    }

    // Actor registry

    /// Register a supply-chain actor. Owner only; an address registers once.
    pub fn register_actor(
        env: Env,
        caller: Address,
        address: Address,
        name: String,
        role: Role,
    ) -> Result<(), CustodyError> {
        caller.require_auth();
        registry::register_actor(&env, &caller, address, name, role)
    }

    pub fn get_actor(env: Env, address: Address) -> Result<Actor, CustodyError> {
        registry::get_actor(&env, &address)
    }

    pub fn is_registered(env: Env, address: Address) -> bool {
        registry::is_registered(&env, &address)
    }

    // Medication custody

    /// Register a medication under a caller-chosen id. The caller becomes
    /// both registrant and first holder.
    pub fn register_medication(
        env: Env,
        caller: Address,
        id: String,
        details_hash: BytesN<32>,
    ) -> Result<(), CustodyError> {
        caller.require_auth();
        custody::register_medication(&env, &caller, id, details_hash)
    }

    /// Hand a medication to `to`. Only the current holder may transfer.
    pub fn transfer_medication(
        env: Env,
        caller: Address,
        id: String,
        to: Address,
    ) -> Result<(), CustodyError> {
        caller.require_auth();
        custody::transfer_medication(&env, &caller, id, to)
    }

    /// Sell a medication to the end customer, clearing its holder for good.
    /// The caller must hold the unit and be registered as a pharmacy.
    pub fn sell_medication(env: Env, caller: Address, id: String) -> Result<(), CustodyError> {
        caller.require_auth();
        custody::sell_medication(&env, &caller, id)
    }

    /// Mark a medication as authentic. Owner only, irreversible.
    pub fn validate_medication(env: Env, caller: Address, id: String) -> Result<(), CustodyError> {
        caller.require_auth();
        custody::validate_medication(&env, &caller, id)
    }

    /// Read-only verification of a medication's origin and validation flag.
    pub fn verify_medication(env: Env, id: String) -> Result<MedicationVerification, CustodyError> {
        custody::verify_medication(&env, &id)
    }

    pub fn get_medication(env: Env, id: String) -> Result<Medication, CustodyError> {
        custody::get_medication(&env, &id)
    }

    /// Page through the custody trail of a medication, oldest first.
    pub fn get_custody_history(
        env: Env,
        id: String,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<CustodyRecord>, CustodyError> {
        custody::get_custody_history(&env, &id, offset, limit)
    }

    /// Medication ids registered by `registrant`, in registration order.
    pub fn get_registrant_medications(
        env: Env,
        registrant: Address,
        offset: u32,
        limit: u32,
    ) -> Vec<String> {
        custody::get_registrant_medications(&env, &registrant, offset, limit)
    }
}
