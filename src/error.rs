//! 错误类型
//!
//! 启动阶段的配置/内容错误与终端 I/O 错误

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::SectionKey;

/// 内容校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("catalog is missing section `{0}`")]
    MissingSection(SectionKey),

    #[error("section `{0}` has no items")]
    EmptySection(SectionKey),

    #[error("decorative snippet pool is empty")]
    EmptySnippetPool,

    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

/// 应用错误
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("configuration error: {0}")]
    Content(#[from] ContentError),
}

pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_name_the_offending_section() {
        let err = FolioError::from(ContentError::MissingSection(SectionKey::Enterprise));
        assert_eq!(
            err.to_string(),
            "configuration error: catalog is missing section `enterprise`"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: FolioError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
