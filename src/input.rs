use std::collections::VecDeque;
use std::io;
use std::pin::Pin;

use futures::stream::{self, Stream, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::domain::{Error, Money};

type LineStream = Pin<Box<dyn Stream<Item = io::Result<String>> + Send>>;

/// Outcome of reading one token where a number was expected.
#[derive(Debug, PartialEq, Eq)]
pub enum Token<T> {
    Value(T),
    /// The token did not parse; it and the rest of its line were discarded.
    Malformed(String),
}

/// Whitespace-delimited reader over a line stream.
///
/// Tokens on the same line are handed out one at a time, so several answers
/// can be typed on a single line.
pub struct TokenReader {
    lines: LineStream,
    pending: VecDeque<String>,
}

impl TokenReader {
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        // Own the `Lines` inside the stream so the reader is 'static.
        let lines = stream::unfold(reader.lines(), |mut lines| async move {
            match lines.next_line().await {
                Ok(Some(line)) => Some((Ok(line), lines)),
                Ok(None) => None,
                Err(e) => Some((Err(e), lines)),
            }
        });

        Self {
            lines: Box::pin(lines),
            pending: VecDeque::new(),
        }
    }

    pub async fn next_int(&mut self) -> Result<Token<i32>, Error> {
        self.next_parsed(|token| token.parse().ok()).await
    }

    pub async fn next_amount(&mut self) -> Result<Token<Money>, Error> {
        self.next_parsed(Money::parse).await
    }

    async fn next_parsed<T>(
        &mut self,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Token<T>, Error> {
        let token = self.next_token().await?;
        match parse(&token) {
            Some(value) => Ok(Token::Value(value)),
            None => {
                self.pending.clear();
                Ok(Token::Malformed(token))
            }
        }
    }

    async fn next_token(&mut self) -> Result<String, Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            match self.lines.next().await {
                Some(line) => self
                    .pending
                    .extend(line?.split_whitespace().map(str::to_owned)),
                None => return Err(Error::InputClosed),
            }
        }
    }
}
