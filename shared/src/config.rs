use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub access_control: AccessControlConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: std::env::var("REDIS_HOST")?,
            port: std::env::var("REDIS_PORT")?.parse()?,
        };
        let access_control = AccessControlConfig {
            base_url: std::env::var("ACCESS_CONTROL_BASE_URL")?,
            private_key: std::env::var("ACCESS_CONTROL_PRIVATE_KEY")?,
            timeout_secs: std::env::var("ACCESS_CONTROL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_retries: std::env::var("ACCESS_CONTROL_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
        };
        Ok(Self {
            database,
            redis,
            access_control,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AccessControlConfig {
    pub base_url: String,
    pub private_key: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}
