use crate::domain::{Error, Money};

pub type AccountNumber = i32;
pub type Passcode = i32;

#[derive(Debug)]
pub struct Account {
    number: AccountNumber, // fixed at creation
    passcode: Passcode,
    balance: Money, // changed only by deposit, withdraw and transfer
}

impl Account {
    pub fn new(number: AccountNumber, passcode: Passcode) -> Self {
        Self {
            number,
            passcode,
            balance: Money::zero(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn validate_passcode(&self, input: Passcode) -> bool {
        self.passcode == input
    }

    /// Credits `amount` and returns the new balance. Positivity is checked by the caller.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, Error> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::AmountOverflow)?;
        Ok(self.balance)
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<Money, Error> {
        self.balance = self.debited(amount)?;
        Ok(self.balance)
    }

    /// Moves `amount` to `recipient`. Neither balance changes unless both legs succeed.
    pub fn transfer(&mut self, amount: Money, recipient: &mut Account) -> Result<Money, Error> {
        let sender_balance = self.debited(amount)?;
        let recipient_balance = recipient
            .balance
            .checked_add(amount)
            .ok_or(Error::AmountOverflow)?;

        self.balance = sender_balance;
        recipient.balance = recipient_balance;
        Ok(self.balance)
    }

    pub fn change_passcode(&mut self, new_passcode: Passcode) {
        self.passcode = new_passcode;
    }

    fn debited(&self, amount: Money) -> Result<Money, Error> {
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                balance: self.balance,
            });
        }
        self.balance
            .checked_sub(amount)
            .ok_or(Error::AmountOverflow)
    }
}
