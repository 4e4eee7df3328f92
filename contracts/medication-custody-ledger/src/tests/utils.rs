#![cfg(test)]

use crate::{MedicationCustodyLedger, MedicationCustodyLedgerClient, Role};
use soroban_sdk::{testutils::Address as _, Address, Bytes, BytesN, Env, String};

/// Test environment setup
pub struct TestContext {
    pub env: Env,
    pub client: MedicationCustodyLedgerClient<'static>,
    pub owner: Address,
    pub manufacturer: Address,
    pub distributor: Address,
    pub pharmacy: Address,
    pub outsider: Address,
}

/// Contract registered but not yet initialized.
pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicationCustodyLedger, ());
    let client = MedicationCustodyLedgerClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let manufacturer = Address::generate(&env);
    let distributor = Address::generate(&env);
    let pharmacy = Address::generate(&env);
    let outsider = Address::generate(&env);

    TestContext {
        env,
        client,
        owner,
        manufacturer,
        distributor,
        pharmacy,
        outsider,
    }
}

/// Initialized ledger with one actor per role registered by the owner.
pub fn setup_with_actors() -> TestContext {
    let ctx = setup();
    ctx.client.initialize(&ctx.owner);

    ctx.client.register_actor(
        &ctx.owner,
        &ctx.manufacturer,
        &String::from_str(&ctx.env, "Manufacturer"),
        &Role::Manufacturer,
    );
    ctx.client.register_actor(
        &ctx.owner,
        &ctx.distributor,
        &String::from_str(&ctx.env, "Distributor"),
        &Role::Distributor,
    );
    ctx.client.register_actor(
        &ctx.owner,
        &ctx.pharmacy,
        &String::from_str(&ctx.env, "Pharmacy"),
        &Role::Pharmacy,
    );

    ctx
}

impl TestContext {
    pub fn id(&self, id: &str) -> String {
        String::from_str(&self.env, id)
    }

    pub fn details_hash(&self, details: &str) -> BytesN<32> {
        hash_details(&self.env, details)
    }

    /// Registers `id` from the manufacturer and returns it.
    pub fn register_medication(&self, id: &str) -> String {
        let id = self.id(id);
        self.client
            .register_medication(&self.manufacturer, &id, &self.details_hash("details"));
        id
    }

    /// Moves a freshly registered medication manufacturer -> distributor -> pharmacy.
    pub fn deliver_to_pharmacy(&self, id: &String) {
        self.client
            .transfer_medication(&self.manufacturer, id, &self.distributor);
        self.client
            .transfer_medication(&self.distributor, id, &self.pharmacy);
    }
}

pub fn hash_details(env: &Env, details: &str) -> BytesN<32> {
    env.crypto()
        .sha256(&Bytes::from_slice(env, details.as_bytes()))
        .to_bytes()
}
