use crate::*;

#[near]
impl Contract {
    /// Buys one shoe for exactly `SHOE_PRICE`, attaching the given name and
    /// image to it. `index = None` selects the lowest-index unsold shoe.
    /// Returns the purchased index.
    #[payable]
    #[handle_result]
    pub fn buy_shoe(
        &mut self,
        name: String,
        image: String,
        index: Option<u32>,
    ) -> Result<u32, RegistryError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.purchase(&buyer_id, name, image, deposit, index)
    }
}

impl Contract {
    pub(crate) fn purchase(
        &mut self,
        buyer_id: &AccountId,
        name: String,
        image: String,
        deposit: u128,
        index: Option<u32>,
    ) -> Result<u32, RegistryError> {
        validation::validate_shoe_metadata(&name, &image)?;

        // Payment invariant: the deposit must match the price exactly;
        // overpayment is rejected rather than refunded.
        let price = SHOE_PRICE.as_yoctonear();
        if deposit != price {
            return Err(RegistryError::wrong_price(price, deposit));
        }

        let target = match index {
            Some(i) => {
                let shoe = self
                    .shoes
                    .get(i)
                    .ok_or_else(|| RegistryError::shoe_not_found(i))?;
                if shoe.sold {
                    return Err(RegistryError::already_sold(i));
                }
                i
            }
            None => self.next_available().ok_or_else(RegistryError::sold_out)?,
        };

        let shoe = self
            .shoes
            .get_mut(target)
            .ok_or_else(|| RegistryError::shoe_not_found(target))?;
        shoe.owner_id = Some(buyer_id.clone());
        shoe.name = name;
        shoe.image = image;
        shoe.sold = true;

        self.shoes_sold = self
            .shoes_sold
            .checked_add(1)
            .ok_or_else(|| RegistryError::InternalError("Sold counter overflow".into()))?;

        events::emit_shoe_purchase(buyer_id, target, price);
        let token_id = target.to_string();
        events::nep171::emit_transfer(
            env::current_account_id().as_str(),
            buyer_id.as_str(),
            &[token_id.as_str()],
            None,
            None,
        );

        Ok(target)
    }

    // Selection policy: lowest-index unsold shoe.
    pub(crate) fn next_available(&self) -> Option<u32> {
        self.shoes
            .iter()
            .position(|shoe| !shoe.sold)
            .map(|i| i as u32)
    }
}
