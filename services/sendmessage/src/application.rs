// アプリケーション層モジュール
pub mod message_parser;
pub mod send_message_handler;

// 再エクスポート
pub use message_parser::{MessageParser, ParseError};
pub use send_message_handler::{SendMessageHandler, SendMessageHandlerError};
