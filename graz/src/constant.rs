//! Keys and marker values shared with the rest of the connection manager.

/// Session-storage key the manager reads on page reload to decide whether to
/// reconnect the last wallet automatically.
pub const RECONNECT_SESSION_KEY: &str = "reconnect-session";

/// Value written under [`RECONNECT_SESSION_KEY`] while a session is live.
pub const RECONNECT_SESSION_ACTIVE: &str = "Active";
