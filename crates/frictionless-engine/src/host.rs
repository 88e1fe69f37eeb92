//! Serialized access to a session from many threads.
//!
//! [`SessionHost`] moves a [`GameSession`] onto a dedicated thread.
//! Callers hold cheap [`SessionHandle`] clones and submit commands
//! through a bounded crossbeam channel; each request carries its own
//! one-shot reply channel. The session thread applies requests one at
//! a time in arrival order, so concurrent input cannot interleave
//! inside a move.
//!
//! ```text
//! caller threads                    session thread
//!     |                                  |
//!     |--submit(cmd)-------------------->| rx.recv()
//!     |   [tx: bounded(64)]              | session.apply(cmd)
//!     |<--outcome via reply (bounded(1))-|
//!     |                                  |
//!     |--shutdown()--------------------->| break, return session
//!     |<--join() -> GameSession----------|
//! ```

use std::error::Error;
use std::fmt;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TrySendError};

use frictionless_core::{Cell, CommandError, PieceId};

use crate::command::{Command, CommandOutcome};
use crate::session::GameSession;

const QUEUE_CAPACITY: usize = 64;

// ── Error types ──────────────────────────────────────────────────

/// Errors from talking to a hosted session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The session rejected the command.
    Command(CommandError),
    /// The request queue is full (back-pressure).
    ChannelFull,
    /// The session thread has stopped.
    ShutDown,
    /// The session thread could not be started.
    SpawnFailed {
        /// The OS error.
        reason: String,
    },
    /// The session thread panicked; the session is lost.
    ThreadPanicked,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(e) => write!(f, "command rejected: {e}"),
            Self::ChannelFull => write!(f, "session request queue is full"),
            Self::ShutDown => write!(f, "session thread has shut down"),
            Self::SpawnFailed { reason } => write!(f, "session thread spawn failed: {reason}"),
            Self::ThreadPanicked => write!(f, "session thread panicked"),
        }
    }
}

impl Error for HostError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Command(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CommandError> for HostError {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ── SessionSnapshot ──────────────────────────────────────────────

/// A copy of the observable session state, for renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Piece positions in configuration order.
    pub positions: Vec<(PieceId, Cell)>,
    /// The active piece.
    pub active: PieceId,
    /// Moves made so far.
    pub move_count: u64,
}

impl SessionSnapshot {
    /// Cell of `piece` at snapshot time.
    pub fn position_of(&self, piece: &str) -> Option<Cell> {
        self.positions
            .iter()
            .find(|(id, _)| id.as_str() == piece)
            .map(|&(_, cell)| cell)
    }
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            positions: session
                .pieces()
                .iter()
                .map(|(id, cell)| (id.clone(), cell))
                .collect(),
            active: session.active_piece().clone(),
            move_count: session.move_count(),
        }
    }
}

// ── Requests ─────────────────────────────────────────────────────

enum Request {
    Apply {
        command: Command,
        reply: Sender<Result<CommandOutcome, CommandError>>,
    },
    Snapshot {
        reply: Sender<SessionSnapshot>,
    },
    Shutdown,
}

fn run(mut session: GameSession, rx: Receiver<Request>) -> GameSession {
    while let Ok(request) = rx.recv() {
        match request {
            Request::Apply { command, reply } => {
                // The caller may have stopped waiting.
                let _ = reply.send(session.apply(command));
            }
            Request::Snapshot { reply } => {
                let _ = reply.send(SessionSnapshot::from(&session));
            }
            Request::Shutdown => break,
        }
    }
    log::debug!(
        "session thread exiting after {} moves",
        session.move_count()
    );
    session
}

// ── SessionHandle ────────────────────────────────────────────────

/// A cloneable sender of requests to a hosted session.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    tx: Sender<Request>,
}

impl SessionHandle {
    fn send(&self, request: Request) -> Result<(), HostError> {
        self.tx.try_send(request).map_err(|e| match e {
            TrySendError::Full(_) => HostError::ChannelFull,
            TrySendError::Disconnected(_) => HostError::ShutDown,
        })
    }

    /// Apply `command` and wait for its outcome.
    ///
    /// # Errors
    ///
    /// [`HostError::Command`] if the session rejected the command,
    /// otherwise a transport error.
    pub fn submit(&self, command: Command) -> Result<CommandOutcome, HostError> {
        let (reply, reply_rx) = crossbeam_channel::bounded(1);
        self.send(Request::Apply { command, reply })?;
        let outcome = reply_rx.recv().map_err(|_| HostError::ShutDown)?;
        Ok(outcome?)
    }

    /// Copy the current positions, selection and move count.
    pub fn snapshot(&self) -> Result<SessionSnapshot, HostError> {
        let (reply, reply_rx) = crossbeam_channel::bounded(1);
        self.send(Request::Snapshot { reply })?;
        reply_rx.recv().map_err(|_| HostError::ShutDown)
    }
}

// ── SessionHost ──────────────────────────────────────────────────

/// Owner of the session thread.
///
/// Dropping the host stops the thread and discards the session; call
/// [`shutdown`](Self::shutdown) to get it back.
#[derive(Debug)]
pub struct SessionHost {
    handle: SessionHandle,
    thread: Option<JoinHandle<GameSession>>,
}

impl SessionHost {
    /// Move `session` onto a new thread.
    pub fn spawn(session: GameSession) -> Result<Self, HostError> {
        let (tx, rx) = crossbeam_channel::bounded(QUEUE_CAPACITY);
        let thread = thread::Builder::new()
            .name("frictionless-session".into())
            .spawn(move || run(session, rx))
            .map_err(|e| HostError::SpawnFailed {
                reason: e.to_string(),
            })?;
        log::debug!("session thread started");
        Ok(Self {
            handle: SessionHandle { tx },
            thread: Some(thread),
        })
    }

    /// A new handle to the hosted session.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Shorthand for `self.handle().submit(command)`.
    pub fn submit(&self, command: Command) -> Result<CommandOutcome, HostError> {
        self.handle.submit(command)
    }

    /// Shorthand for `self.handle().snapshot()`.
    pub fn snapshot(&self) -> Result<SessionSnapshot, HostError> {
        self.handle.snapshot()
    }

    /// Stop the thread once queued requests are handled and return the
    /// session. Outstanding handles fail with [`HostError::ShutDown`]
    /// afterwards.
    pub fn shutdown(mut self) -> Result<GameSession, HostError> {
        let thread = self.thread.take().ok_or(HostError::ShutDown)?;
        // A full queue still drains; wait for room rather than fail.
        self.handle
            .tx
            .send(Request::Shutdown)
            .map_err(|_| HostError::ShutDown)?;
        thread.join().map_err(|_| HostError::ThreadPanicked)
    }
}

impl Drop for SessionHost {
    fn drop(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = self.handle.tx.send(Request::Shutdown);
            let _ = thread.join();
        }
    }
}
