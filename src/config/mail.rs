use crate::utils::error::{CheckError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 對應 config.json 的頂層結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailSettings {
    pub email: MailConfig,
}

/// SMTP 郵件通知所需的連線與帳號設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// 寄件者與收件者共用同一個信箱
    pub mail: String,
}

impl MailConfig {
    /// 從 JSON 檔案載入郵件配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CheckError::ConfigError {
            message: format!("cannot read mail configuration {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&content)
    }

    /// 從 JSON 字串解析配置
    pub fn from_json_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let settings: MailSettings =
            serde_json::from_str(&processed_content).map_err(|e| CheckError::ConfigError {
                message: format!("malformed mail configuration: {}", e),
            })?;
        Ok(settings.email)
    }

    /// 替換環境變數 (例如 ${SMTP_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("email.host", &self.host)?;
        crate::utils::validation::validate_range("email.port", self.port, 1, 65535)?;
        crate::utils::validation::validate_non_empty_string("email.username", &self.username)?;
        crate::utils::validation::validate_non_empty_string("email.mail", &self.mail)?;
        Ok(())
    }
}

/// 取得預設配置路徑 (執行檔同目錄下的 config.json)
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("config.json")))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

impl Validate for MailConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
