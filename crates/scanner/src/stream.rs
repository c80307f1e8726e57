use std::thread::JoinHandle;

use crossbeam::channel::{self, Receiver, Sender};
use rdb_sql::TokenKind;

use crate::{Scanner, ScannerOptions, StreamError, Token};

/// Consumer side of a scan running on its own thread.
///
/// Tokens arrive in source order and the stream always ends with a
/// [`TokenKind::EndOfInput`] token. Dropping the stream is the only way to
/// stop the producer early: its next send fails and it returns.
pub struct TokenStream {
    receiver: Receiver<Token>,
    producer: Option<JoinHandle<()>>,
    finished: bool,
}

impl TokenStream {
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn spawn(source: String, options: ScannerOptions) -> TokenStream {
        let (sender, receiver) = match options.channel_capacity {
            Some(capacity) => channel::bounded(capacity),
            None => channel::unbounded(),
        };

        let producer = std::thread::spawn(move || produce(&source, options, &sender));

        TokenStream {
            receiver,
            producer: Some(producer),
            finished: false,
        }
    }

    /// Next token, or `None` once the end-of-input token has been delivered.
    pub fn recv(&mut self) -> Result<Option<Token>, StreamError> {
        if self.finished {
            return Ok(None);
        }

        match self.receiver.recv() {
            Ok(token) => {
                self.finished = token.is_eof();
                Ok(Some(token))
            }
            Err(_) => {
                self.finished = true;
                if let Some(producer) = self.producer.take() {
                    producer.join().ok();
                }
                Err(StreamError::ProducerPanicked)
            }
        }
    }

    /// Drains the remaining tokens and waits for the producer.
    pub fn finish(mut self) -> Result<Vec<Token>, StreamError> {
        let mut tokens = vec![];

        while let Some(token) = self.recv()? {
            tokens.push(token);
        }
        self.join_producer()?;

        Ok(tokens)
    }

    fn join_producer(&mut self) -> Result<(), StreamError> {
        match self.producer.take().map(JoinHandle::join) {
            Some(Err(_)) => Err(StreamError::ProducerPanicked),
            _ => Ok(()),
        }
    }
}

impl Iterator for TokenStream {
    type Item = Result<Token, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv().transpose()
    }
}

fn produce(source: &str, options: ScannerOptions, sender: &Sender<Token>) {
    tracing::debug!("scanner thread started");
    let mut scanner = Scanner::with_options(source, options);

    loop {
        let mut token = scanner.scan();

        if token.kind == TokenKind::Illegal && scanner.options().bail_on_illegal {
            tracing::debug!(offset = token.offset, "illegal token, dumping the rest");
            token = scanner.dump();
        }

        let done = token.is_eof();
        if sender.send(token).is_err() {
            tracing::debug!(position = scanner.position(), "consumer dropped the stream");
            return;
        }

        if done {
            break;
        }
    }

    tracing::debug!("scanner thread finished");
}
