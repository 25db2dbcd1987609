//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the sent text so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Stop the chain; `text` was sent as the reply.
    Reply(String),
}
