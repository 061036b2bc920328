use std::env;

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    /// Secret the session-cookie signing key is derived from. At least 32
    /// bytes. When unset, a volatile key is generated at startup and every
    /// session dies with the process.
    pub session_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let session_key = env::var("SESSION_KEY").ok();
        if let Some(key) = &session_key {
            assert!(
                key.len() >= 32,
                "SESSION_KEY must be at least 32 bytes long"
            );
        }
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            session_key,
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
