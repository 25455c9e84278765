//! CoShoe collectible registry. Mints a fixed supply of 100 shoe records at
//! deployment, sells each once at a fixed price of 0.5 NEAR, and answers
//! ownership and enumeration queries.

use near_sdk::store::Vector;
use near_sdk::{env, near, AccountId, BorshStorageKey, PanicOnDefault, require};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod shoe;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::RegistryError;
pub use shoe::types::{RegistryMetadata, Shoe, ShoeView};

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    Shoes,
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/co-shoe/coshoe-contracts",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub metadata: RegistryMetadata,
    // Supply invariant: length is fixed at SHOE_SUPPLY after init; entries are
    // mutated at most once, on purchase.
    pub shoes: Vector<Shoe>,
    // Counter invariant: equals the number of sold entries at all times;
    // mutated only inside the purchase transition.
    pub shoes_sold: u32,
}

#[near]
impl Contract {
    /// Mints the full fixed supply of unsold shoes to the registry.
    /// `name` and `symbol` are stored verbatim and echoed by the metadata views.
    #[init]
    pub fn new(name: String, symbol: String) -> Self {
        require!(!name.is_empty(), "Token name cannot be empty");
        require!(!symbol.is_empty(), "Token symbol cannot be empty");

        let mut shoes = Vector::new(StorageKey::Shoes);
        for _ in 0..SHOE_SUPPLY {
            shoes.push(Shoe {
                owner_id: None,
                name: String::new(),
                image: String::new(),
                sold: false,
            });
        }

        let token_ids: Vec<String> = (0..SHOE_SUPPLY).map(|id| id.to_string()).collect();
        events::nep171::emit_mint(
            env::current_account_id().as_str(),
            &token_ids,
            Some("Initial mint"),
        );

        Self {
            metadata: RegistryMetadata {
                spec: REGISTRY_METADATA_SPEC.to_string(),
                name,
                symbol,
            },
            shoes,
            shoes_sold: 0,
        }
    }
}
