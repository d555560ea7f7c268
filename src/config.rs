use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub sqlite_path: String,
    pub database_url: Option<String>,
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server_port = ["SERVER_PORT", "PORT"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find_map(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(3000);

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let sqlite_path = env::var("SQLITE_PATH").unwrap_or_else(|_| "starwars_blog.db".to_string());
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let seed_sample_data = env::var("SEED_SAMPLE_DATA")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            server_host,
            server_port,
            sqlite_path,
            database_url,
            seed_sample_data,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.trim().to_string();
        }

        let path = self.sqlite_path.trim();
        if path.starts_with("sqlite:") || path.starts_with("file:") {
            return path.to_string();
        }
        format!("sqlite://{}", path)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
