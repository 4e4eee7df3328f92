use crate::error::CustodyError;
use crate::events::*;
use crate::storage;
use crate::types::{Actor, Role};
use soroban_sdk::{log, Address, Env, String};

pub fn initialize(env: &Env, owner: &Address) -> Result<(), CustodyError> {
    if storage::has_owner(env) {
        return Err(CustodyError::AlreadyInitialized);
    }

    storage::set_owner(env, owner);
    log!(env, "custody ledger initialized, owner: {}", owner.clone());

    emit_ledger_initialized(env, owner.clone(), env.ledger().timestamp());
    Ok(())
}

pub fn get_owner(env: &Env) -> Result<Address, CustodyError> {
    storage::get_owner(env).ok_or(CustodyError::NotInitialized)
}

/// Fails with `Unauthorized` unless `caller` is the ledger owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), CustodyError> {
    let owner = get_owner(env)?;
    if owner != *caller {
        return Err(CustodyError::Unauthorized);
    }
    Ok(())
}

pub fn register_actor(
    env: &Env,
    caller: &Address,
    address: Address,
    name: String,
    role: Role,
) -> Result<(), CustodyError> {
    require_owner(env, caller)?;

    if storage::has_actor(env, &address) {
        return Err(CustodyError::AlreadyRegistered);
    }

    let actor = Actor {
        address: address.clone(),
        name: name.clone(),
        role,
        is_registered: true,
    };
    storage::set_actor(env, &actor);
    log!(env, "actor registered: {}", address.clone());

    emit_actor_registered(env, address, name, role, env.ledger().timestamp());
    Ok(())
}

pub fn get_actor(env: &Env, address: &Address) -> Result<Actor, CustodyError> {
    storage::get_actor(env, address).ok_or(CustodyError::ActorNotFound)
}

pub fn is_registered(env: &Env, address: &Address) -> bool {
    storage::get_actor(env, address)
        .map(|actor| actor.is_registered)
        .unwrap_or(false)
}

pub fn has_role(env: &Env, address: &Address, role: Role) -> bool {
    matches!(
        storage::get_actor(env, address),
        Some(actor) if actor.is_registered && actor.role == role
    )
}
