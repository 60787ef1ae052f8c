//! 后端接口实例
//!
//! 配置在编译期通过环境变量注入，未设置时使用同源相对路径。

use crate::web::WebHttpClient;
use campus_match::config::{ENV_API_URL, ENV_AUTH_URL, ENV_SWIPE_DELAY_MS};
use campus_match::{CampusMatchApi, ClientConfig};

pub type WebApi = CampusMatchApi<WebHttpClient>;

pub fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| {
        let value = match key {
            ENV_API_URL => option_env!("CAMPUS_MATCH_API_URL"),
            ENV_AUTH_URL => option_env!("CAMPUS_MATCH_AUTH_URL"),
            ENV_SWIPE_DELAY_MS => option_env!("CAMPUS_MATCH_SWIPE_DELAY_MS"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

pub fn web_api() -> WebApi {
    CampusMatchApi::new(WebHttpClient, client_config())
}
