use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    pub fn name(&self) -> String {
        self.metadata.name.clone()
    }

    pub fn symbol(&self) -> String {
        self.metadata.symbol.clone()
    }

    pub fn registry_metadata(&self) -> RegistryMetadata {
        self.metadata.clone()
    }

    pub fn total_supply(&self) -> U128 {
        U128(self.shoes.len() as u128)
    }

    pub fn get_number_of_registered_shoes(&self) -> u32 {
        self.shoes.len()
    }

    pub fn get_price(&self) -> U128 {
        U128(SHOE_PRICE.as_yoctonear())
    }

    pub fn get_num_shoes_sold(&self) -> u32 {
        self.shoes_sold
    }

    /// `true` at index i iff shoe i is owned by `account_id`. Always
    /// `SHOE_SUPPLY` entries.
    pub fn check_purchases(&self, account_id: AccountId) -> Vec<bool> {
        self.shoes
            .iter()
            .map(|shoe| shoe.owner_id.as_ref() == Some(&account_id))
            .collect()
    }

    /// `None` when `index` is out of range.
    pub fn shoe(&self, index: u32) -> Option<ShoeView> {
        self.shoes.get(index).map(|shoe| ShoeView {
            id: index,
            owner_id: shoe.owner_id.clone(),
            name: shoe.name.clone(),
            image: shoe.image.clone(),
            sold: shoe.sold,
        })
    }

    pub fn shoes(&self, from_index: Option<u32>, limit: Option<u64>) -> Vec<ShoeView> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.shoes
            .iter()
            .enumerate()
            .skip(start)
            .take(limit)
            .map(|(i, shoe)| ShoeView {
                id: i as u32,
                owner_id: shoe.owner_id.clone(),
                name: shoe.name.clone(),
                image: shoe.image.clone(),
                sold: shoe.sold,
            })
            .collect()
    }

    pub fn shoe_supply_for_owner(&self, account_id: AccountId) -> u32 {
        self.shoes
            .iter()
            .filter(|shoe| shoe.owner_id.as_ref() == Some(&account_id))
            .count() as u32
    }
}
