//! MongoDB 연결
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social_network_dev"
//! ```
//!
//! 리포지토리는 [`Database::get_database`]로 받은 핸들에서 컬렉션을 엽니다.
//!
//! ```rust,ignore
//! let database = Database::new().await?;
//! let container = ServiceContainer::with_mongo(&database).await?;
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "social_network_dev";
const APP_NAME: &str = "social_network_backend";

/// 클라이언트(내부 커넥션 풀)와 사용할 데이터베이스 이름
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// `MONGODB_URI`, `DATABASE_NAME` 환경 변수로 연결합니다.
    pub async fn new() -> Result<Self, mongodb::error::Error> {
        let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
        let name = std::env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Self::connect(&uri, &name).await
    }

    /// 연결 후 `ping`으로 서버 응답을 확인합니다.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)?;
        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
