// 运行配置
//
// 从环境变量读取（启动时先由 dotenv 加载 .env）。

use std::net::SocketAddr;

/// 应用配置
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// 搜索接口默认每页条数
    pub default_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_page_size: 20,
        }
    }
}

impl AppConfig {
    /// 最大每页条数
    pub const MAX_PAGE_SIZE: u32 = 100;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意查找函数构建配置，无法解析的数值回退到默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_or_default(&lookup, "PORT", defaults.port);
        let default_page_size = parse_or_default(&lookup, "SEARCH_DEFAULT_LIMIT", defaults.default_page_size)
            .clamp(1, Self::MAX_PAGE_SIZE);

        Self {
            host,
            port,
            default_page_size,
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("环境变量 {}={} 无法解析，使用默认值 {}", key, raw, default);
            default
        }),
        None => default,
    }
}
