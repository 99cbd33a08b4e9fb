/// 受信メッセージボディのパーサー
///
/// sendmessageルートのbody文字列をJSONとしてパースし、
/// "message"フィールドを取り出す
use serde_json::Value;
use thiserror::Error;

/// メッセージパースエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// JSONパースに失敗
    #[error("failed to parse JSON")]
    InvalidJson,
}

/// 受信ボディパーサー
pub struct MessageParser;

impl MessageParser {
    /// body文字列をパースしてmessageフィールドを取り出す
    ///
    /// messageフィールドは省略可能で、欠落時は空文字列を返す。
    /// フィールドの型検証は行わず、文字列以外の値も欠落として扱う。
    ///
    /// # 引数
    /// * `body` - パースするJSON文字列
    ///
    /// # 戻り値
    /// * `Ok(String)` - messageフィールドの値（欠落時は空文字列）
    /// * `Err(ParseError)` - パース失敗時
    ///
    /// # 例
    /// ```
    /// use sendmessage::application::MessageParser;
    ///
    /// let result = MessageParser::parse(r#"{"message": "hello"}"#);
    /// assert_eq!(result.unwrap(), "hello");
    /// ```
    pub fn parse(body: &str) -> Result<String, ParseError> {
        // JSONとしてパース
        let value: Value = serde_json::from_str(body).map_err(|_| ParseError::InvalidJson)?;

        // messageフィールドを取得（欠落・文字列以外は空文字列）
        let message = value
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        Ok(message.to_string())
    }
}
