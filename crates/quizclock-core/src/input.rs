//! Background line listener for interactive input.
//!
//! Blocking reads from a terminal cannot be cancelled, so they run on a
//! dedicated thread that is never joined. The engine asks for one line at a
//! time; every request carries its own one-shot reply channel, so a line read
//! for a request that was abandoned at the deadline has nowhere to go and is
//! dropped instead of leaking into the next problem.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::traits::AnswerSource;

type Reply = oneshot::Sender<io::Result<Option<String>>>;

/// An [`AnswerSource`] backed by a background reader thread.
pub struct LineListener {
    requests: mpsc::Sender<Reply>,
}

impl LineListener {
    /// Spawn the listener thread over `reader`.
    ///
    /// The thread reads only when asked to, so at most one read is in flight.
    /// It exits once the listener is dropped and any pending read returns.
    pub fn spawn<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (requests, inbox) = mpsc::channel::<Reply>();
        thread::Builder::new()
            .name("quizclock-input".into())
            .spawn(move || listen(reader, inbox))?;
        Ok(Self { requests })
    }

    /// Listen on the process's standard input.
    pub fn stdin() -> io::Result<Self> {
        Self::spawn(io::BufReader::new(io::stdin()))
    }
}

#[async_trait]
impl AnswerSource for LineListener {
    async fn next_answer(&mut self) -> io::Result<Option<String>> {
        let (reply, answer) = oneshot::channel();
        self.requests.send(reply).map_err(|_| listener_gone())?;
        answer.await.map_err(|_| listener_gone())?
    }
}

fn listen<R: BufRead>(mut reader: R, inbox: mpsc::Receiver<Reply>) {
    while let Ok(reply) = inbox.recv() {
        let line = read_line(&mut reader);
        if reply.send(line).is_err() {
            tracing::debug!("answer arrived after the deadline, discarded");
        }
    }
    tracing::trace!("input listener stopped");
}

/// Read one line and strip its `\n` or `\r\n` terminator.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn listener_gone() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "input listener stopped")
}
