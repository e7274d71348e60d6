/// Dashboard service configuration loaded from environment variables.
#[derive(Debug)]
pub struct DashboardConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3117). Env var: `DASHBOARD_PORT`.
    pub dashboard_port: u16,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            dashboard_port: std::env::var("DASHBOARD_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3117),
        }
    }
}
