use crate::domain::{Account, AccountNumber, AccountRepository, Error, Money, Passcode};

/// Accounts kept in creation order for the lifetime of the process.
#[derive(Default, Debug)]
pub struct InMemoryRegistry {
    accounts: Vec<Account>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    pub fn seeded(seeds: &[(AccountNumber, Passcode)]) -> Result<Self, Error> {
        let mut registry = Self::new();
        for &(number, passcode) in seeds {
            registry.create(number, passcode)?;
        }
        Ok(registry)
    }

    fn position(&self, number: AccountNumber) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.number() == number)
    }
}

impl AccountRepository for InMemoryRegistry {
    fn create(&mut self, number: AccountNumber, passcode: Passcode) -> Result<&Account, Error> {
        if self.position(number).is_some() {
            return Err(Error::DuplicateAccount(number));
        }

        self.accounts.push(Account::new(number, passcode));
        tracing::debug!(account = number, "account created");

        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    fn find(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.number() == number)
    }

    fn find_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Money,
    ) -> Result<Money, Error> {
        let sender = self.position(from).ok_or(Error::AccountNotFound(from))?;
        let recipient = self.position(to).ok_or(Error::UnknownRecipient(to))?;
        if sender == recipient {
            return Err(Error::SelfTransfer);
        }

        let (sender, recipient) = pair_mut(&mut self.accounts, sender, recipient);
        sender.transfer(amount, recipient)
    }
}

// `a` and `b` must be distinct indices.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    fn demo() -> InMemoryRegistry {
        InMemoryRegistry::seeded(&[(123, 123), (456, 456)]).unwrap()
    }

    #[test]
    fn create_rejects_duplicate_numbers() {
        let mut registry = demo();

        assert!(registry.create(789, 1).is_ok());
        assert!(matches!(
            registry.create(789, 2),
            Err(Error::DuplicateAccount(789))
        ));
        assert!(matches!(
            registry.create(123, 5),
            Err(Error::DuplicateAccount(123))
        ));
        assert!(registry.find(789).unwrap().validate_passcode(1));
    }

    #[test]
    fn seeding_with_duplicates_fails() {
        assert!(InMemoryRegistry::seeded(&[(1, 1), (1, 2)]).is_err());
    }

    #[test]
    fn accounts_keep_creation_order() {
        let mut registry = demo();
        registry.create(5, 5).unwrap();
        let numbers: Vec<_> = registry.accounts.iter().map(Account::number).collect();
        assert_eq!(numbers, vec![123, 456, 5]);
    }

    #[test]
    fn authenticate_requires_both_fields() {
        let registry = demo();

        assert!(registry.authenticate(123, 123).is_some());
        assert!(registry.authenticate(123, 456).is_none());
        assert!(registry.authenticate(999, 123).is_none());
    }

    #[test]
    fn transfer_moves_funds_between_accounts() {
        let mut registry = demo();
        registry.find_mut(123).unwrap().deposit(money("100")).unwrap();

        let remaining = registry.transfer(123, 456, money("40")).unwrap();

        assert_eq!(remaining, money("60"));
        assert_eq!(registry.find(456).unwrap().balance(), money("40"));
    }

    #[test]
    fn transfer_works_towards_earlier_accounts() {
        let mut registry = demo();
        registry.find_mut(456).unwrap().deposit(money("10")).unwrap();

        registry.transfer(456, 123, money("7.5")).unwrap();

        assert_eq!(registry.find(123).unwrap().balance(), money("7.5"));
        assert_eq!(registry.find(456).unwrap().balance(), money("2.5"));
    }

    #[test]
    fn transfer_rejects_self_and_unknown_recipient() {
        let mut registry = demo();
        registry.find_mut(123).unwrap().deposit(money("10")).unwrap();

        assert!(matches!(
            registry.transfer(123, 123, money("1")),
            Err(Error::SelfTransfer)
        ));
        assert!(matches!(
            registry.transfer(123, 999, money("1")),
            Err(Error::UnknownRecipient(999))
        ));
        assert!(matches!(
            registry.transfer(999, 123, money("1")),
            Err(Error::AccountNotFound(999))
        ));
        assert_eq!(registry.find(123).unwrap().balance(), money("10"));
    }

    #[test]
    fn passcode_change_is_seen_by_authenticate() {
        let mut registry = demo();
        registry.find_mut(123).unwrap().change_passcode(999);

        assert!(registry.authenticate(123, 123).is_none());
        assert!(registry.authenticate(123, 999).is_some());
    }
}
