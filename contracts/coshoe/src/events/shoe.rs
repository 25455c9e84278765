use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::SHOE;

pub fn emit_shoe_purchase(buyer_id: &AccountId, index: u32, price: u128) {
    EventBuilder::new(SHOE, "purchase", buyer_id)
        .field("buyer_id", buyer_id)
        .field("index", index)
        .field("price", U128(price))
        .emit();
}
