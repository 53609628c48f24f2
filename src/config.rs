use std::time::Duration;

use crate::domain::{AccountNumber, Passcode};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Malformed inputs tolerated before the lockout pause.
    pub max_invalid_inputs: u32,
    pub lockout: Duration,
    /// Accounts present when the session starts, as `(number, passcode)`.
    pub seed_accounts: Vec<(AccountNumber, Passcode)>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_invalid_inputs: 3,
            lockout: Duration::from_secs(10),
            seed_accounts: vec![(123, 123), (456, 456)],
        }
    }
}
