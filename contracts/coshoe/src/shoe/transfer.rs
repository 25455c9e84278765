use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Transfers a sold shoe to `receiver_id`. Caller must be the current
    /// owner and attach exactly 1 yoctoNEAR. `sold` stays true and the sold
    /// counter is untouched.
    #[payable]
    #[handle_result]
    pub fn transfer_shoe(
        &mut self,
        receiver_id: AccountId,
        index: u32,
    ) -> Result<(), RegistryError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        {
            let shoe = self
                .shoes
                .get(index)
                .ok_or_else(|| RegistryError::shoe_not_found(index))?;
            if !shoe.sold {
                return Err(RegistryError::InvalidState(
                    "Cannot transfer a shoe that has not been sold".into(),
                ));
            }
            if shoe.owner_id.as_ref() != Some(&sender_id) {
                return Err(RegistryError::only_owner("the shoe owner"));
            }
        }
        if receiver_id == sender_id {
            return Err(RegistryError::InvalidInput(
                "Receiver must differ from the current owner".into(),
            ));
        }

        let shoe = self
            .shoes
            .get_mut(index)
            .ok_or_else(|| RegistryError::shoe_not_found(index))?;
        shoe.owner_id = Some(receiver_id.clone());

        let token_id = index.to_string();
        events::nep171::emit_transfer(
            sender_id.as_str(),
            receiver_id.as_str(),
            &[token_id.as_str()],
            None,
            None,
        );

        Ok(())
    }
}
