use near_sdk::near;
use near_sdk::AccountId;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct RegistryMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
}

/// Storage record for one shoe. The shoe's id is its index in the registry
/// vector; `owner_id` is set exactly once, when `sold` flips to true.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Shoe {
    pub owner_id: Option<AccountId>,
    pub name: String,
    pub image: String,
    pub sold: bool,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct ShoeView {
    pub id: u32,
    pub owner_id: Option<AccountId>,
    pub name: String,
    pub image: String,
    pub sold: bool,
}
