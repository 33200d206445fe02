//! User-facing status messages in English and Simplified Chinese.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    ZhCn,
}

impl Locale {
    /// Any `zh*` tag selects Chinese; everything else falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("zh") {
            Locale::ZhCn
        } else {
            Locale::En
        }
    }

    /// `--locale` wins over `LANG`.
    pub fn resolve(explicit: Option<&str>) -> Self {
        match explicit {
            Some(tag) => Self::from_tag(tag),
            None => std::env::var("LANG")
                .map(|lang| Self::from_tag(&lang))
                .unwrap_or(Locale::En),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ConfirmSort,
    NoCssProperties,
    SortSuccess,
    NoChanges,
    ReplaceFailed,
    OpenFileFirst,
    Cancelled,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Message::ConfirmSort => {
                    "Are you sure you want to sort the CSS properties in the whole file?"
                }
                Message::NoCssProperties => "No sortable CSS properties in selection",
                Message::SortSuccess => "CSS properties sorted successfully",
                Message::NoChanges => "CSS properties sorted successfully (no changes)",
                Message::ReplaceFailed => "Failed to replace content",
                Message::OpenFileFirst => "Please open a file first",
                Message::Cancelled => "Sort cancelled",
            },
            Locale::ZhCn => match self {
                Message::ConfirmSort => "确定要对整个文件的 CSS 属性进行排序吗？",
                Message::NoCssProperties => "选区中没有可处理的 CSS 属性",
                Message::SortSuccess => "CSS 属性排序成功",
                Message::NoChanges => "CSS 属性排序成功（无变化）",
                Message::ReplaceFailed => "替换内容失败",
                Message::OpenFileFirst => "请先打开一个文件",
                Message::Cancelled => "已取消排序",
            },
        }
    }
}
