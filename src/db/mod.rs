//! MongoDB 연결
//!
//! `STORAGE_BACKEND=mongodb`일 때만 사용됩니다. 사용자(`users`)와
//! 팔로우 관계(`follows`) 컬렉션이 이 데이터베이스에 있습니다.

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::errors::{AppResult, ErrorContext};

/// 계정 데이터베이스 핸들
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// `MONGODB_URI`/`DATABASE_NAME`으로 접속하고 `ping`으로 확인합니다.
    pub async fn new() -> AppResult<Self> {
        let database_name = DatabaseConfig::database_name();

        let mut options = ClientOptions::parse(&DatabaseConfig::uri())
            .await
            .context("MONGODB_URI 파싱 실패")?;
        options.app_name = Some("sns_accounts".to_string());

        let client = Client::with_options(options).context("MongoDB 클라이언트 생성 실패")?;
        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB ping 실패")?;

        info!("🍃 계정 데이터베이스 준비: {}", database_name);
        Ok(Self { client, database_name })
    }

    /// 컬렉션 접근용 `mongodb::Database`
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
