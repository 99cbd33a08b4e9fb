/// WebSocket sendmessage ルートハンドラー
///
/// API Gateway WebSocketのsendmessageリクエストを処理し、
/// 受信ボディのmessageフィールドを同じ接続にエコーバックする。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use sendmessage::application::{SendMessageHandler, SendMessageHandlerError};
use sendmessage::infrastructure::{init_logging, ApiGatewayWebSocketSenderFactory};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. アクセスログを出力
/// 2. SendMessageHandlerでメッセージをエコーバック
/// 3. 成功時は200、ボディ不正時は400、それ以外は500を返却
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    // requestContextから情報を取得
    let request_context = event.payload.get("requestContext");

    // 接続IDを取得（ログ用）
    let connection_id = request_context
        .and_then(|ctx| ctx.get("connectionId"))
        .and_then(|id| id.as_str())
        .unwrap_or("unknown");

    // アクセスログ情報を取得
    let source_ip = request_context
        .and_then(|ctx| ctx.get("identity"))
        .and_then(|identity| identity.get("sourceIp"))
        .and_then(|ip| ip.as_str())
        .unwrap_or("unknown");

    let user_agent = request_context
        .and_then(|ctx| ctx.get("identity"))
        .and_then(|identity| identity.get("userAgent"))
        .and_then(|ua| ua.as_str())
        .unwrap_or("unknown");

    let request_time = request_context
        .and_then(|ctx| ctx.get("requestTimeEpoch"))
        .and_then(|time| time.as_i64())
        .unwrap_or(0);

    // メッセージボディを取得（ログ用）
    let body = event
        .payload
        .get("body")
        .and_then(|b| b.as_str())
        .unwrap_or("(empty)");

    // アクセスログ出力
    info!(
        connection_id = connection_id,
        source_ip = source_ip,
        user_agent = user_agent,
        request_time = request_time,
        event_type = "sendmessage",
        body = body,
        "WebSocketメッセージ受信"
    );

    // ハンドラーを作成してメッセージを処理
    let send_message_handler = SendMessageHandler::new(ApiGatewayWebSocketSenderFactory::new());

    match send_message_handler.handle(&event.payload).await {
        Ok(()) => {
            // 成功時は200を返却
            info!(connection_id = connection_id, "エコーバック完了");
            Ok(serde_json::json!({
                "statusCode": 200
            }))
        }
        Err(err @ SendMessageHandlerError::InvalidBody(_)) => {
            // ボディ不正時はログ出力して400を返却
            error!(
                connection_id = connection_id,
                error = %err,
                "メッセージボディのパース失敗"
            );
            Ok(serde_json::json!({
                "statusCode": 400,
                "body": "Invalid message body"
            }))
        }
        Err(err) => {
            // それ以外のエラーはログ出力して500を返却
            error!(
                connection_id = connection_id,
                error = %err,
                "メッセージ送信エラー"
            );
            Ok(serde_json::json!({
                "statusCode": 500,
                "body": "Internal server error"
            }))
        }
    }
}
