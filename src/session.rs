use std::io::Write;

use crate::config::SessionConfig;
use crate::domain::{
    Account, AccountMenuOption, AccountNumber, AccountRepository, Error, MainMenuOption, Money,
};
use crate::input::{Token, TokenReader};
use crate::lockout::InvalidInputCounter;

const BANNER: &str = "**********************************";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    LoggedIn(AccountNumber),
    Terminated,
}

/// Menu-driven ATM session over a token input and a text output.
pub struct Session<W, A>
where
    W: Write,
    A: AccountRepository,
{
    input: TokenReader,
    out: W,
    accounts: A,
    invalid_inputs: InvalidInputCounter,
    config: SessionConfig,
}

impl<W, A> Session<W, A>
where
    W: Write,
    A: AccountRepository,
{
    pub fn new(input: TokenReader, out: W, accounts: A, config: SessionConfig) -> Self {
        Self {
            input,
            out,
            accounts,
            invalid_inputs: InvalidInputCounter::new(config.max_invalid_inputs),
            config,
        }
    }

    /// Drives the state machine until the user exits or the input ends.
    pub async fn run(&mut self) -> Result<(), Error> {
        let mut state = State::MainMenu;

        loop {
            state = match self.step(state).await {
                Ok(State::Terminated) => break,
                Ok(next) => next,
                Err(Error::InputClosed) => {
                    tracing::info!("input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            };
        }

        self.out.flush()?;
        Ok(())
    }

    async fn step(&mut self, state: State) -> Result<State, Error> {
        match state {
            State::MainMenu => self.main_menu().await,
            State::LoggedIn(number) => self.account_menu(number).await,
            State::Terminated => Ok(State::Terminated),
        }
    }

    async fn main_menu(&mut self) -> Result<State, Error> {
        let labels = MainMenuOption::ALL.map(|option| option.label());
        self.print_menu("   ", &labels)?;

        let Some(choice) = self.read_int(None).await? else {
            return Ok(State::MainMenu);
        };

        match MainMenuOption::try_from(choice) {
            Ok(MainMenuOption::CreateAccount) => self.create_account().await,
            Ok(MainMenuOption::Login) => self.login().await,
            Ok(MainMenuOption::Exit) => {
                writeln!(self.out, "Exiting the program...\n")?;
                tracing::info!("session terminated by user");
                Ok(State::Terminated)
            }
            Err(e) => {
                writeln!(self.out, "{e}")?;
                Ok(State::MainMenu)
            }
        }
    }

    async fn create_account(&mut self) -> Result<State, Error> {
        let Some(number) = self.read_int(Some("Enter a new account number: ")).await? else {
            return Ok(State::MainMenu);
        };
        let Some(passcode) = self.read_int(Some("Enter a new passcode: ")).await? else {
            return Ok(State::MainMenu);
        };

        match self.accounts.create(number, passcode) {
            Ok(_) => {
                tracing::info!(account = number, "new account opened");
                writeln!(self.out, "New account created successfully!\n")?;
            }
            Err(e) => writeln!(self.out, "{e}\n")?,
        }
        Ok(State::MainMenu)
    }

    async fn login(&mut self) -> Result<State, Error> {
        let Some(number) = self.read_int(Some("Enter your account number: ")).await? else {
            return Ok(State::MainMenu);
        };
        let Some(passcode) = self.read_int(Some("Enter your passcode: ")).await? else {
            return Ok(State::MainMenu);
        };

        if self.accounts.authenticate(number, passcode).is_none() {
            tracing::warn!(account = number, "login rejected");
            writeln!(
                self.out,
                "The account number or passcode is incorrect. Please try again.\n"
            )?;
            return Ok(State::MainMenu);
        }

        tracing::info!(account = number, "logged in");
        writeln!(self.out, "You have successfully logged in!\n")?;
        Ok(State::LoggedIn(number))
    }

    async fn account_menu(&mut self, number: AccountNumber) -> Result<State, Error> {
        let labels = AccountMenuOption::ALL.map(|option| option.label());
        self.print_menu("     ", &labels)?;

        let Some(choice) = self.read_int(None).await? else {
            return Ok(State::LoggedIn(number));
        };

        let option = match AccountMenuOption::try_from(choice) {
            Ok(option) => option,
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(State::LoggedIn(number));
            }
        };

        match option {
            AccountMenuOption::CheckBalance => {
                let balance = self.account_balance(number)?;
                writeln!(self.out, "Your balance is: ${balance}\n")?;
            }
            AccountMenuOption::Deposit => self.deposit(number).await?,
            AccountMenuOption::Withdraw => self.withdraw(number).await?,
            AccountMenuOption::Transfer => self.transfer(number).await?,
            AccountMenuOption::ChangePasscode => self.change_passcode(number).await?,
            AccountMenuOption::Logout => {
                tracing::info!(account = number, "logged out");
                writeln!(self.out, "Logging out...\n")?;
                return Ok(State::MainMenu);
            }
        }

        Ok(State::LoggedIn(number))
    }

    async fn deposit(&mut self, number: AccountNumber) -> Result<(), Error> {
        let Some(amount) = self
            .read_positive_amount("Enter deposit amount: ", "deposit")
            .await?
        else {
            return Ok(());
        };

        let outcome = self.account_mut(number)?.deposit(amount);
        match outcome {
            Ok(balance) => {
                writeln!(self.out, "You have deposited ${amount} to your account.")?;
                writeln!(self.out, "Your balance is: ${balance}\n")?;
            }
            Err(e) => writeln!(self.out, "{e}\n")?,
        }
        Ok(())
    }

    async fn withdraw(&mut self, number: AccountNumber) -> Result<(), Error> {
        let Some(amount) = self
            .read_positive_amount("Enter withdrawal amount: ", "withdrawal")
            .await?
        else {
            return Ok(());
        };

        let outcome = self.account_mut(number)?.withdraw(amount);
        match outcome {
            Ok(balance) => {
                writeln!(self.out, "You have withdrawn ${amount} from your account.")?;
                writeln!(self.out, "Your balance is: ${balance}\n")?;
            }
            Err(e) => writeln!(self.out, "{e}\n")?,
        }
        Ok(())
    }

    async fn transfer(&mut self, number: AccountNumber) -> Result<(), Error> {
        let Some(recipient) = self
            .read_int(Some("Enter recipient's account number: "))
            .await?
        else {
            return Ok(());
        };

        if self.accounts.find(recipient).is_none() {
            tracing::debug!(from = number, to = recipient, "unknown transfer recipient");
            writeln!(self.out, "{}\n", Error::UnknownRecipient(recipient))?;
            return Ok(());
        }
        if recipient == number {
            writeln!(self.out, "{}\n", Error::SelfTransfer)?;
            return Ok(());
        }

        let Some(amount) = self
            .read_positive_amount("Enter transfer amount: ", "transfer")
            .await?
        else {
            return Ok(());
        };

        match self.accounts.transfer(number, recipient, amount) {
            Ok(balance) => {
                tracing::info!(from = number, to = recipient, %amount, "transfer completed");
                writeln!(
                    self.out,
                    "You have transferred ${amount} to account {recipient}."
                )?;
                writeln!(self.out, "Your balance is: ${balance}\n")?;
            }
            Err(e) => writeln!(self.out, "{e}\n")?,
        }
        Ok(())
    }

    async fn change_passcode(&mut self, number: AccountNumber) -> Result<(), Error> {
        let Some(passcode) = self.read_int(Some("Enter new passcode: ")).await? else {
            return Ok(());
        };

        self.account_mut(number)?.change_passcode(passcode);
        tracing::info!(account = number, "passcode changed");
        writeln!(self.out, "Passcode changed successfully!\n")?;
        Ok(())
    }

    fn account_balance(&self, number: AccountNumber) -> Result<Money, Error> {
        self.accounts
            .find(number)
            .map(|account| account.balance())
            .ok_or(Error::AccountNotFound(number))
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, Error> {
        self.accounts
            .find_mut(number)
            .ok_or(Error::AccountNotFound(number))
    }

    fn print_menu(&mut self, indent: &str, labels: &[&str]) -> Result<(), Error> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "{indent}Please select an option:")?;
        for (index, label) in labels.iter().enumerate() {
            writeln!(self.out, "{indent}{}. {label}", index + 1)?;
        }
        writeln!(self.out, "{BANNER}")?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: Option<&str>) -> Result<(), Error> {
        if let Some(text) = text {
            write!(self.out, "{text}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Reads an integer. `None` means the input was malformed and already handled.
    async fn read_int(&mut self, prompt: Option<&str>) -> Result<Option<i32>, Error> {
        self.prompt(prompt)?;
        let token = self.input.next_int().await?;
        // menu choices ask for one value, sub-prompts for values
        let expected = if prompt.is_some() {
            "valid numeric values"
        } else {
            "a valid numeric value"
        };
        self.accept(token, expected).await
    }

    /// Reads an amount that must be strictly positive. `None` means it was rejected.
    async fn read_positive_amount(
        &mut self,
        prompt: &str,
        operation: &'static str,
    ) -> Result<Option<Money>, Error> {
        self.prompt(Some(prompt))?;
        let token = self.input.next_amount().await?;
        let Some(amount) = self.accept(token, "valid numeric values").await? else {
            return Ok(None);
        };

        if !amount.is_positive() {
            writeln!(self.out, "{}", Error::NonPositiveAmount { operation })?;
            return Ok(None);
        }
        if amount.has_sub_cent_digits() {
            writeln!(self.out, "{}", Error::SubCentAmount { operation })?;
            return Ok(None);
        }
        Ok(Some(amount))
    }

    async fn accept<T>(&mut self, token: Token<T>, expected: &str) -> Result<Option<T>, Error> {
        match token {
            Token::Value(value) => Ok(Some(value)),
            Token::Malformed(raw) => {
                writeln!(
                    self.out,
                    "Invalid input. Please enter {expected}."
                )?;
                self.record_invalid_input(&raw).await?;
                Ok(None)
            }
        }
    }

    async fn record_invalid_input(&mut self, raw: &str) -> Result<(), Error> {
        let tripped = self.invalid_inputs.record();
        tracing::debug!(
            token = raw,
            count = self.invalid_inputs.count(),
            "malformed input discarded"
        );
        if !tripped {
            return Ok(());
        }

        tracing::warn!(
            seconds = self.config.lockout.as_secs(),
            "too many invalid inputs, pausing"
        );
        writeln!(
            self.out,
            "Too many invalid inputs. Please wait for {} seconds before trying again.\n",
            self.config.lockout.as_secs()
        )?;
        self.out.flush()?;

        tokio::time::sleep(self.config.lockout).await;
        self.invalid_inputs.reset();
        Ok(())
    }
}
