use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// 装饰行纵向位置范围（百分比，左闭右开）
pub const TOP_MIN: f32 = 15.0;
pub const TOP_MAX: f32 = 85.0;

/// 分区键（固定的三个类别，按声明顺序排列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    ChefsTasting,
    Enterprise,
    Specialties,
}

impl SectionKey {
    pub const ALL: [SectionKey; 3] = [
        SectionKey::ChefsTasting,
        SectionKey::Enterprise,
        SectionKey::Specialties,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::ChefsTasting => "chefs-tasting",
            SectionKey::Enterprise => "enterprise",
            SectionKey::Specialties => "specialties",
        }
    }

    pub fn index(self) -> usize {
        match self {
            SectionKey::ChefsTasting => 0,
            SectionKey::Enterprise => 1,
            SectionKey::Specialties => 2,
        }
    }

    /// 标签页显示文本，如 "CHEFS TASTING"
    pub fn label(self) -> String {
        self.as_str().replace('-', " ").to_uppercase()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 数字键 '1'..'3' 映射到分区
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 作品条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub details: String,
}

/// 分区
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub items: Vec<MenuItem>,
}

/// 分区目录（只能通过校验构建，保证每个键都有非空分区）
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    sections: [MenuSection; 3],
}

impl MenuCatalog {
    pub fn from_map(mut map: BTreeMap<SectionKey, MenuSection>) -> Result<Self, ContentError> {
        let mut take = |key: SectionKey| -> Result<MenuSection, ContentError> {
            let section = map.remove(&key).ok_or(ContentError::MissingSection(key))?;
            if section.items.is_empty() {
                return Err(ContentError::EmptySection(key));
            }
            Ok(section)
        };

        Ok(Self {
            sections: [
                take(SectionKey::ChefsTasting)?,
                take(SectionKey::Enterprise)?,
                take(SectionKey::Specialties)?,
            ],
        })
    }

    pub fn section(&self, key: SectionKey) -> &MenuSection {
        &self.sections[key.index()]
    }

    pub fn first_key(&self) -> SectionKey {
        SectionKey::ALL[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &MenuSection)> {
        SectionKey::ALL.into_iter().zip(self.sections.iter())
    }
}

/// 个人信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub heading: String,
    /// `$ connect --<handle>` 提示符
    pub handle: String,
}

/// 联系方式（原样渲染，不做校验）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub email: String,
    pub resume: String,
    pub github: String,
    pub linkedin: String,
}

/// 右侧终端窗口中的一段 "$ 命令 + 输出"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalBlock {
    pub command: String,
    pub lines: Vec<String>,
}

/// TOML 中的内容结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentData {
    pub profile: Profile,
    pub contact: ContactLinks,
    #[serde(default)]
    pub terminal: Vec<TerminalBlock>,
    pub snippets: Vec<String>,
    pub sections: BTreeMap<SectionKey, MenuSection>,
}

/// 运行时内容（启动后不可变）
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub contact: ContactLinks,
    pub terminal: Vec<TerminalBlock>,
    pub snippets: Vec<String>,
    pub catalog: MenuCatalog,
}

impl PortfolioContent {
    pub fn from_data(data: ContentData) -> Result<Self, ContentError> {
        if data.snippets.is_empty() {
            return Err(ContentError::EmptySnippetPool);
        }

        Ok(Self {
            profile: data.profile,
            contact: data.contact,
            terminal: data.terminal,
            snippets: data.snippets,
            catalog: MenuCatalog::from_map(data.sections)?,
        })
    }
}

/// 背景中滚动的装饰代码行
#[derive(Debug, Clone, PartialEq)]
pub struct DecorativeLine {
    pub id: i64,
    pub text: String,
    /// 纵向位置，[15, 85) 百分比
    pub top: f32,
    pub spawned: Instant,
}

/// 装饰行生成器
pub struct SnippetFeed {
    pool: Vec<String>,
    rng: StdRng,
    last_id: i64,
}

impl SnippetFeed {
    pub fn new(pool: Vec<String>) -> Result<Self, ContentError> {
        Self::with_rng(pool, StdRng::from_entropy())
    }

    pub fn with_rng(pool: Vec<String>, rng: StdRng) -> Result<Self, ContentError> {
        if pool.is_empty() {
            return Err(ContentError::EmptySnippetPool);
        }
        Ok(Self {
            pool,
            rng,
            last_id: i64::MIN,
        })
    }

    /// 生成一行：毫秒时间戳作为 id（时钟未前进时递增），随机文本和位置
    pub fn next_line(&mut self, spawned: Instant) -> DecorativeLine {
        let id = Local::now()
            .timestamp_millis()
            .max(self.last_id.saturating_add(1));
        self.last_id = id;

        let text = self.pool[self.rng.gen_range(0..self.pool.len())].clone();
        let top = self.rng.gen_range(TOP_MIN..TOP_MAX);

        DecorativeLine {
            id,
            text,
            top,
            spawned,
        }
    }
}
