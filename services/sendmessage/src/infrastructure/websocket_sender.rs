/// API Gateway Management APIを使用したWebSocketメッセージ送信
use async_trait::async_trait;
use aws_sdk_apigatewaymanagement::{primitives::Blob, Client as ApiGatewayManagementClient};
use thiserror::Error;

/// WebSocket送信操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SendError {
    /// 接続が切断された（API Gatewayからの410 GONE）
    #[error("Connection is gone")]
    ConnectionGone,

    /// ネットワークまたはサービスエラー
    #[error("Network error: {0}")]
    NetworkError(String),
}

/// WebSocketメッセージ送信用トレイト
///
/// WebSocket送信機能を抽象化し、異なる実装を可能にする
/// （実際のAPI Gatewayクライアント、テスト用モック）。
#[async_trait]
pub trait WebSocketSender: Send + Sync {
    /// 特定の接続にメッセージを送信
    ///
    /// # 引数
    /// * `connection_id` - API Gateway接続ID
    /// * `message` - 送信するメッセージ（JSON文字列）
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 接続が存在しない場合は`Err(SendError::ConnectionGone)`
    /// * その他のネットワーク障害は`Err(SendError::NetworkError)`
    async fn send(&self, connection_id: &str, message: &str) -> Result<(), SendError>;
}

/// WebSocket送信実装を生成するファクトリートレイト
///
/// エンドポイントURLはイベントごとにrequestContextから導出されるため、
/// 送信実装もイベントごとに生成する。ハンドラーにはこのファクトリーを
/// 注入し、テストではモック実装に差し替える。
#[async_trait]
pub trait WebSocketSenderFactory: Send + Sync {
    /// このファクトリーが生成する送信実装
    type Sender: WebSocketSender;

    /// エンドポイントURLに紐づく送信実装を生成
    async fn create(&self, endpoint_url: &str) -> Self::Sender;
}

/// API Gateway Management API WebSocket送信実装
///
/// WebSocketSenderトレイトを実装し、AWS API Gateway
/// Management APIを使用してWebSocket接続にメッセージを送信する。
#[derive(Debug, Clone)]
pub struct ApiGatewayWebSocketSender {
    /// API Gateway Management APIクライアント
    client: ApiGatewayManagementClient,
}

impl ApiGatewayWebSocketSender {
    /// 指定されたエンドポイントURLで新しいApiGatewayWebSocketSenderを作成
    ///
    /// # 引数
    /// * `endpoint_url` - API Gateway Management APIエンドポイントURL
    ///   (例: "https://{api-id}.execute-api.{region}.amazonaws.com/{stage}")
    pub async fn new(endpoint_url: &str) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = ApiGatewayManagementClient::from_conf(
            aws_sdk_apigatewaymanagement::config::Builder::from(&aws_config)
                .endpoint_url(endpoint_url)
                .build(),
        );
        Self { client }
    }

    /// 事前設定されたクライアントで新しいApiGatewayWebSocketSenderを作成
    pub fn with_client(client: ApiGatewayManagementClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebSocketSender for ApiGatewayWebSocketSender {
    async fn send(&self, connection_id: &str, message: &str) -> Result<(), SendError> {
        let data = Blob::new(message.as_bytes().to_vec());

        match self
            .client
            .post_to_connection()
            .connection_id(connection_id)
            .data(data)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                let service_error = err.into_service_error();

                // エラーが410 GONE（接続切断）かチェック
                if service_error.is_gone_exception() {
                    return Err(SendError::ConnectionGone);
                }

                // その他のエラーはネットワークエラー
                Err(SendError::NetworkError(service_error.to_string()))
            }
        }
    }
}

/// API Gateway Management API送信のファクトリー実装
///
/// 呼び出しごとに新しいApiGatewayWebSocketSenderを生成する。
#[derive(Debug, Clone, Default)]
pub struct ApiGatewayWebSocketSenderFactory;

impl ApiGatewayWebSocketSenderFactory {
    /// 新しいApiGatewayWebSocketSenderFactoryを作成
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WebSocketSenderFactory for ApiGatewayWebSocketSenderFactory {
    type Sender = ApiGatewayWebSocketSender;

    async fn create(&self, endpoint_url: &str) -> ApiGatewayWebSocketSender {
        ApiGatewayWebSocketSender::new(endpoint_url).await
    }
}
