use near_sdk::NearToken;

pub const SHOE_SUPPLY: u32 = 100;
pub const SHOE_PRICE: NearToken = NearToken::from_millinear(500); // 0.5 NEAR
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const MAX_SHOE_NAME_LEN: usize = 256;
pub const MAX_IMAGE_URL_LEN: usize = 2_048;

pub const REGISTRY_METADATA_SPEC: &str = "coshoe-1.0.0";
