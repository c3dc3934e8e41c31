use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, FolioResult};
use crate::models::{ContentData, PortfolioContent};
use crate::settings::Settings;

/// 内置内容（编译进二进制，启动时与用户文件走同一套解析和校验）
pub const BUILTIN_CONTENT: &str = include_str!("../assets/content.toml");

/// TOML 配置文件结构
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    settings: Settings,
    content: Option<ContentData>,
}

/// 校验后的配置
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub content: PortfolioContent,
    /// 内容来源，None 表示内置内容
    pub source: Option<PathBuf>,
}

/// 解析内置内容
pub fn builtin_content() -> FolioResult<PortfolioContent> {
    let data: ContentData = toml::from_str(BUILTIN_CONTENT).map_err(|source| FolioError::Parse {
        path: PathBuf::from("<builtin>"),
        source,
    })?;
    Ok(PortfolioContent::from_data(data)?)
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> FolioResult<Config> {
    let file = if path.exists() {
        let text = fs::read_to_string(path)?;
        toml::from_str::<ConfigFile>(&text).map_err(|source| FolioError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        ConfigFile::default()
    };

    file.settings.validate()?;

    let (content, source) = match file.content {
        Some(data) => (PortfolioContent::from_data(data)?, Some(path.to_path_buf())),
        None => (builtin_content()?, None),
    };

    Ok(Config {
        settings: file.settings,
        content,
        source,
    })
}
