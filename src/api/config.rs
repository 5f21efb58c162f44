use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(name = "budget-back-end", about = "Budget statistics REST service")]
pub struct ApiConfig {
    #[clap(long, env, default_value = "0.0.0.0")]
    pub host: String,
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,
    #[clap(long, env)]
    pub database_url: Option<String>,
    #[clap(long, env, default_value_t = 10)]
    pub db_pool_size: u32,
    /// Keep all data in process memory instead of Postgres
    #[clap(long, env)]
    pub in_memory: bool,
}

impl ApiConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
