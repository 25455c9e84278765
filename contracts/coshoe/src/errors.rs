use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum RegistryError {
    InvalidPayment(String),
    AlreadySold(String),
    NotFound(String),
    Unauthorized(String),
    InvalidInput(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPayment(msg) => write!(f, "Invalid payment: {}", msg),
            Self::AlreadySold(msg) => write!(f, "Already sold: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl RegistryError {
    pub fn shoe_not_found(index: u32) -> Self {
        Self::NotFound(format!("Shoe {} does not exist", index))
    }
    pub fn already_sold(index: u32) -> Self {
        Self::AlreadySold(format!("Shoe {} is already sold", index))
    }
    pub fn sold_out() -> Self {
        Self::AlreadySold("All shoes are sold".into())
    }
    pub fn wrong_price(expected: u128, got: u128) -> Self {
        Self::InvalidPayment(format!(
            "Attached deposit must equal the shoe price: expected {}, got {}",
            expected, got
        ))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
