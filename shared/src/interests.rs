//! 兴趣标签目录
//!
//! 注册与资料编辑共用同一份目录，标签总是按目录顺序输出。

/// 可选兴趣标签
pub const INTEREST_CATALOG: [&str; 50] = [
    "Gaming",
    "Coding",
    "AI",
    "Traveling",
    "Reading",
    "Movies",
    "Music",
    "Photography",
    "Cooking",
    "Hiking",
    "Art",
    "Sports",
    "Fitness",
    "Dancing",
    "Writing",
    "Anime",
    "Startups",
    "Volunteering",
    "Fashion",
    "Yoga",
    "Podcasts",
    "Concerts",
    "Theater",
    "Board Games",
    "Investing",
    "Politics",
    "History",
    "Science",
    "Nature",
    "Coffee",
    "Tea",
    "Foodie",
    "DIY Projects",
    "Cars",
    "Pets",
    "Meditation",
    "Running",
    "Swimming",
    "Cycling",
    "Entrepreneurship",
    "Debate",
    "Stand-up Comedy",
    "Netflix",
    "YouTube",
    "Social Media",
    "Memes",
    "Technology",
    "Space",
    "Philosophy",
    "Psychology",
];

/// 注册时至少选择的兴趣数
pub const MIN_REGISTRATION_INTERESTS: usize = 3;
/// 编辑资料时最多可同时选择的兴趣数
pub const MAX_PROFILE_INTERESTS: usize = 5;
/// 发现页卡片上最多展示的兴趣数
pub const MAX_CARD_INTERESTS: usize = 5;

pub fn is_catalog_interest(tag: &str) -> bool {
    INTEREST_CATALOG.contains(&tag)
}

/// 拆分后端保存的逗号分隔兴趣串，去掉空白与空项
pub fn split_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_interests<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_and_drops_empty_entries() {
        assert_eq!(
            split_interests(" Art, Coding ,,AI,"),
            vec!["Art".to_string(), "Coding".to_string(), "AI".to_string()]
        );
        assert!(split_interests("").is_empty());
    }

    #[test]
    fn catalog_has_no_duplicates() {
        let mut tags = INTEREST_CATALOG.to_vec();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), INTEREST_CATALOG.len());
    }
}
