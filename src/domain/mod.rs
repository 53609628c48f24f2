pub mod account;
pub mod error;
pub mod menu;
pub mod money;
pub mod traits;

pub use account::{Account, AccountNumber, Passcode};
pub use error::Error;
pub use menu::{AccountMenuOption, MainMenuOption};
pub use money::Money;
pub use traits::AccountRepository;
