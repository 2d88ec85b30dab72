//! UI strings for each locale.
//!
//! The catalog is two `static` records selected by an exhaustive match, so
//! a lookup can never miss.

use std::fmt;

use crate::locale::Locale;

/// UI chrome text for one locale.
#[derive(Clone, Copy)]
pub struct UiStrings {
    /// Short label for the language switcher.
    pub lang_label: &'static str,
    /// Full language name.
    pub lang_name: &'static str,
    /// Navigation link to the post list.
    pub posts: &'static str,
    /// Navigation link to the tag index.
    pub tags: &'static str,
    /// Navigation link to the about page.
    pub about: &'static str,
    /// Navigation link to the archives.
    pub archives: &'static str,
    /// Navigation link to search.
    pub search: &'static str,
    /// Heading of the post list page.
    pub all_posts: &'static str,
    /// Description of the post list page.
    pub all_posts_desc: &'static str,
    /// Heading of the recent posts section.
    pub recent_posts: &'static str,
    /// Heading of the featured posts section.
    pub featured: &'static str,
    /// Title prefix on a single tag page.
    pub tag_prefix: &'static str,
    /// Description of the archives page.
    pub archives_desc: &'static str,
    /// Description of the search page.
    pub search_desc: &'static str,
    /// Accessibility link that jumps past the header.
    pub skip_to_content: &'static str,
    /// Label of the social links group.
    pub social_links: &'static str,
    /// Accessible label of the mobile menu open button.
    pub open_menu: &'static str,
    /// Accessible label of the mobile menu close button.
    pub close_menu: &'static str,
    tag_desc: fn(&str) -> String,
    reading_time: fn(u32) -> String,
}

impl UiStrings {
    /// Description of a tag page.
    pub fn tag_desc(&self, tag: &str) -> String {
        (self.tag_desc)(tag)
    }

    /// "N min read" phrase.
    pub fn reading_time(&self, minutes: u32) -> String {
        (self.reading_time)(minutes)
    }

    /// Every plain string field, paired with its name.
    pub fn labels(&self) -> [(&'static str, &'static str); 18] {
        [
            ("lang_label", self.lang_label),
            ("lang_name", self.lang_name),
            ("posts", self.posts),
            ("tags", self.tags),
            ("about", self.about),
            ("archives", self.archives),
            ("search", self.search),
            ("all_posts", self.all_posts),
            ("all_posts_desc", self.all_posts_desc),
            ("recent_posts", self.recent_posts),
            ("featured", self.featured),
            ("tag_prefix", self.tag_prefix),
            ("archives_desc", self.archives_desc),
            ("search_desc", self.search_desc),
            ("skip_to_content", self.skip_to_content),
            ("social_links", self.social_links),
            ("open_menu", self.open_menu),
            ("close_menu", self.close_menu),
        ]
    }
}

impl fmt::Debug for UiStrings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiStrings")
            .field("lang_label", &self.lang_label)
            .field("lang_name", &self.lang_name)
            .finish_non_exhaustive()
    }
}

fn en_tag_desc(tag: &str) -> String {
    format!("All the articles with the tag \"{tag}\".")
}

fn en_reading_time(minutes: u32) -> String {
    format!("{minutes} min read")
}

fn zh_tag_desc(tag: &str) -> String {
    format!("所有包含「{tag}」标签的文章。")
}

fn zh_reading_time(minutes: u32) -> String {
    format!("{minutes} 分钟阅读")
}

static EN: UiStrings = UiStrings {
    lang_label: "EN",
    lang_name: "English",
    posts: "Posts",
    tags: "Tags",
    about: "About",
    archives: "Archives",
    search: "Search",
    all_posts: "All Posts",
    all_posts_desc: "All the articles I've posted.",
    recent_posts: "Recent Posts",
    featured: "Featured",
    tag_prefix: "Tag:",
    archives_desc: "All the articles I've archived.",
    search_desc: "Search any article ...",
    skip_to_content: "Skip to content",
    social_links: "Social Links:",
    open_menu: "Open Menu",
    close_menu: "Close Menu",
    tag_desc: en_tag_desc,
    reading_time: en_reading_time,
};

static ZH: UiStrings = UiStrings {
    lang_label: "中文",
    lang_name: "中文",
    posts: "文章",
    tags: "标签",
    about: "关于",
    archives: "归档",
    search: "搜索",
    all_posts: "所有文章",
    all_posts_desc: "我发布过的所有文章。",
    recent_posts: "最新文章",
    featured: "精选",
    tag_prefix: "标签：",
    archives_desc: "所有归档文章。",
    search_desc: "搜索文章……",
    skip_to_content: "跳到内容",
    social_links: "社交链接：",
    open_menu: "打开菜单",
    close_menu: "关闭菜单",
    tag_desc: zh_tag_desc,
    reading_time: zh_reading_time,
};

/// UI strings for `locale`.
pub fn t(locale: Locale) -> &'static UiStrings {
    match locale {
        Locale::En => &EN,
        Locale::Zh => &ZH,
    }
}
