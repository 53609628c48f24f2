use crate::domain::{Account, AccountNumber, Error, Money, Passcode};

pub trait AccountRepository {
    fn create(&mut self, number: AccountNumber, passcode: Passcode) -> Result<&Account, Error>;

    fn find(&self, number: AccountNumber) -> Option<&Account>;

    fn find_mut(&mut self, number: AccountNumber) -> Option<&mut Account>;

    fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Money,
    ) -> Result<Money, Error>;

    fn authenticate(&self, number: AccountNumber, passcode: Passcode) -> Option<&Account> {
        self.find(number)
            .filter(|account| account.validate_passcode(passcode))
    }
}
