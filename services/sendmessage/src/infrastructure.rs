// Infrastructure layer modules
pub mod logging;
pub mod websocket_sender;

// Re-exports
pub use logging::init_logging;
pub use websocket_sender::{
    ApiGatewayWebSocketSender, ApiGatewayWebSocketSenderFactory, SendError, WebSocketSender,
    WebSocketSenderFactory,
};
