// Domain layer modules
pub mod echo_message;

// Re-exports
pub use echo_message::EchoMessage;
