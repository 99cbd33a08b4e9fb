/// sendmessageハンドラー
///
/// sendmessageルートでLambdaが呼び出された際の処理を実行する
use serde_json::Value;

use crate::application::{MessageParser, ParseError};
use crate::domain::EchoMessage;
use crate::infrastructure::{WebSocketSender, WebSocketSenderFactory};

/// sendmessageハンドラーのエラー型
#[derive(Debug, Clone, PartialEq)]
pub enum SendMessageHandlerError {
    /// requestContextが欠落
    MissingRequestContext,
    /// 必須フィールド（connectionId）が欠落
    MissingConnectionId,
    /// 必須フィールド（domainName）が欠落
    MissingDomainName,
    /// 必須フィールド（stage）が欠落
    MissingStage,
    /// bodyがJSONとしてパースできない
    InvalidBody(ParseError),
    /// WebSocket送信エラー
    SendError(String),
}

impl From<ParseError> for SendMessageHandlerError {
    fn from(err: ParseError) -> Self {
        SendMessageHandlerError::InvalidBody(err)
    }
}

impl std::fmt::Display for SendMessageHandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendMessageHandlerError::MissingRequestContext => {
                write!(f, "Missing requestContext in event")
            }
            SendMessageHandlerError::MissingConnectionId => {
                write!(f, "Missing connectionId in request context")
            }
            SendMessageHandlerError::MissingDomainName => {
                write!(f, "Missing domainName in request context")
            }
            SendMessageHandlerError::MissingStage => {
                write!(f, "Missing stage in request context")
            }
            SendMessageHandlerError::InvalidBody(err) => {
                write!(f, "Invalid body: {}", err)
            }
            SendMessageHandlerError::SendError(msg) => {
                write!(f, "Send error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SendMessageHandlerError {}

/// WebSocketメッセージをエコーバックするハンドラー
///
/// API Gateway WebSocketのsendmessageルートで呼び出され、
/// 受信ボディのmessageフィールドを同じ接続に送り返す
pub struct SendMessageHandler<F>
where
    F: WebSocketSenderFactory,
{
    /// WebSocket送信ファクトリー
    sender_factory: F,
}

impl<F> SendMessageHandler<F>
where
    F: WebSocketSenderFactory,
{
    /// 新しいSendMessageHandlerを作成
    pub fn new(sender_factory: F) -> Self {
        Self { sender_factory }
    }

    /// WebSocketメッセージを処理
    ///
    /// # 処理フロー
    /// 1. イベントからrequestContextを取得
    /// 2. connectionId、domainName、stageを抽出
    /// 3. エンドポイントURLを構築
    /// 4. bodyをパースしてmessageフィールドを取り出す（欠落時は空のJSONオブジェクト）
    /// 5. エコーペイロードを構築し、受信元の接続に送信
    ///
    /// 送信はパース完了後にのみ行う。パースに失敗した場合、
    /// 外部への送信は一切発生しない。
    ///
    /// # 引数
    /// * `event` - API Gateway WebSocketイベント
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(SendMessageHandlerError)`
    pub async fn handle(&self, event: &Value) -> Result<(), SendMessageHandlerError> {
        // requestContextを取得
        let request_context = event
            .get("requestContext")
            .ok_or(SendMessageHandlerError::MissingRequestContext)?;

        // connectionIdを取得
        let connection_id = request_context
            .get("connectionId")
            .and_then(|v| v.as_str())
            .ok_or(SendMessageHandlerError::MissingConnectionId)?;

        // domainNameを取得
        let domain_name = request_context
            .get("domainName")
            .and_then(|v| v.as_str())
            .ok_or(SendMessageHandlerError::MissingDomainName)?;

        // stageを取得
        let stage = request_context
            .get("stage")
            .and_then(|v| v.as_str())
            .ok_or(SendMessageHandlerError::MissingStage)?;

        // エンドポイントURLを構築
        let endpoint_url = format!("https://{}/{}", domain_name, stage);

        // bodyを取得（欠落時は空のJSONオブジェクトとして扱う）
        let body = event.get("body").and_then(|v| v.as_str()).unwrap_or("{}");

        // messageフィールドを取り出す
        let message = MessageParser::parse(body)?;

        // エコーペイロードを構築
        let payload = EchoMessage::new(message).to_json();

        // 受信元の接続に送信
        let sender = self.sender_factory.create(&endpoint_url).await;
        sender
            .send(connection_id, &payload)
            .await
            .map_err(|err| SendMessageHandlerError::SendError(err.to_string()))?;

        Ok(())
    }
}
