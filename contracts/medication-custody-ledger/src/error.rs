use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CustodyError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,

    // Actor registry errors
    AlreadyRegistered = 4,
    NotRegisteredActor = 5,

    // Medication registry errors
    DuplicateMedication = 6,
    NotFound = 7,

    // Custody errors
    NotHolder = 8,
    NotPharmacyHolder = 9,

    // Lookup errors
    ActorNotFound = 10,
}
