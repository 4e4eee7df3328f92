use soroban_sdk::{contracttype, Address, BytesN, String};

/// Supply-chain role of a registered actor. Discriminants are part of the
/// contract interface (0 = manufacturer, 1 = distributor, 2 = pharmacy).
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Manufacturer = 0,
    Distributor = 1,
    Pharmacy = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Actor {
    pub address: Address,
    pub name: String,
    pub role: Role,
    pub is_registered: bool,
}

/// A tracked medication unit.
///
/// `current_holder` is `None` once the unit has been sold; that state is
/// terminal for possession.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Medication {
    pub id: String,
    pub details_hash: BytesN<32>,
    pub registered_by: Address,
    pub current_holder: Option<Address>,
    pub is_validated: bool,
}

/// Result of `verify_medication`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicationVerification {
    pub registered_by: Address,
    pub details_hash: BytesN<32>,
    pub is_validated: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CustodyAction {
    Registered,
    Transferred,
    Sold,
    Validated,
}

/// One entry of a medication's custody trail.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyRecord {
    pub action: CustodyAction,
    pub actor: Address,
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub timestamp: u64,
}
