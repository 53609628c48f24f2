use crate::domain::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    CreateAccount,
    Login,
    Exit,
}

impl MainMenuOption {
    pub const ALL: [MainMenuOption; 3] = [Self::CreateAccount, Self::Login, Self::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateAccount => "Create a new account",
            Self::Login => "Access existing account",
            Self::Exit => "Exit",
        }
    }
}

impl TryFrom<i32> for MainMenuOption {
    type Error = Error;

    fn try_from(choice: i32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Self::CreateAccount),
            2 => Ok(Self::Login),
            3 => Ok(Self::Exit),
            other => Err(Error::InvalidOption(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMenuOption {
    CheckBalance,
    Deposit,
    Withdraw,
    Transfer,
    ChangePasscode,
    Logout,
}

impl AccountMenuOption {
    pub const ALL: [AccountMenuOption; 6] = [
        Self::CheckBalance,
        Self::Deposit,
        Self::Withdraw,
        Self::Transfer,
        Self::ChangePasscode,
        Self::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CheckBalance => "Check balance",
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Transfer => "Transfer",
            Self::ChangePasscode => "Change passcode",
            Self::Logout => "Logout",
        }
    }
}

impl TryFrom<i32> for AccountMenuOption {
    type Error = Error;

    fn try_from(choice: i32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Self::CheckBalance),
            2 => Ok(Self::Deposit),
            3 => Ok(Self::Withdraw),
            4 => Ok(Self::Transfer),
            5 => Ok(Self::ChangePasscode),
            6 => Ok(Self::Logout),
            other => Err(Error::InvalidOption(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_follow_listing_order() {
        for (index, option) in MainMenuOption::ALL.iter().enumerate() {
            assert_eq!(MainMenuOption::try_from(index as i32 + 1).unwrap(), *option);
        }
        for (index, option) in AccountMenuOption::ALL.iter().enumerate() {
            assert_eq!(AccountMenuOption::try_from(index as i32 + 1).unwrap(), *option);
        }
    }

    #[test]
    fn out_of_range_choices_are_rejected() {
        assert!(matches!(
            MainMenuOption::try_from(4),
            Err(Error::InvalidOption(4))
        ));
        assert!(matches!(
            AccountMenuOption::try_from(0),
            Err(Error::InvalidOption(0))
        ));
        assert!(AccountMenuOption::try_from(-6).is_err());
    }
}
