use crate::domain::{AccountNumber, Money};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("The account number {0} is already in use. Please try a different number.")]
    DuplicateAccount(AccountNumber),

    #[error("Account {0} does not exist. Please try again.")]
    AccountNotFound(AccountNumber),

    #[error("Invalid recipient account number. Please try again.")]
    UnknownRecipient(AccountNumber),

    #[error("Invalid amount. Please try again.\nYour balance is: ${balance}")]
    InsufficientFunds { balance: Money },

    #[error("You cannot transfer money to yourself. Please select a different recipient.")]
    SelfTransfer,

    #[error("Invalid {operation} amount. Please enter a positive value.")]
    NonPositiveAmount { operation: &'static str },

    #[error("Invalid {operation} amount. Please enter at most two decimal places.")]
    SubCentAmount { operation: &'static str },

    #[error("The amount exceeds what this account can hold.")]
    AmountOverflow,

    #[error("Invalid option {0}. Please try again.")]
    InvalidOption(i32),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Session interrupted")]
    Interrupted,
}
