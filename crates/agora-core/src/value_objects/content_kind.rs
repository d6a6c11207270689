//! Content kind - the closed set of reactable target types
//!
//! Every reactable entity in the platform is addressed by a (kind, id) pair.
//! The wire tags are the camelCase strings the client already sends.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Kind of content item a reaction targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Post,
    Comment,
    Reply,
    Article,
    ArticleComment,
    Video,
    VideoComment,
    VideoReply,
    PersonalStory,
    PersonalStoryComment,
    PersonalStoryReply,
    Answer,
    AnswerComment,
}

impl ContentKind {
    /// All content kinds, in display order
    pub const ALL: [ContentKind; 13] = [
        ContentKind::Post,
        ContentKind::Comment,
        ContentKind::Reply,
        ContentKind::Article,
        ContentKind::ArticleComment,
        ContentKind::Video,
        ContentKind::VideoComment,
        ContentKind::VideoReply,
        ContentKind::PersonalStory,
        ContentKind::PersonalStoryComment,
        ContentKind::PersonalStoryReply,
        ContentKind::Answer,
        ContentKind::AnswerComment,
    ];

    /// Wire tag for this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Comment => "comment",
            ContentKind::Reply => "reply",
            ContentKind::Article => "article",
            ContentKind::ArticleComment => "articleComment",
            ContentKind::Video => "video",
            ContentKind::VideoComment => "videoComment",
            ContentKind::VideoReply => "videoReply",
            ContentKind::PersonalStory => "personalStory",
            ContentKind::PersonalStoryComment => "personalStoryComment",
            ContentKind::PersonalStoryReply => "personalStoryReply",
            ContentKind::Answer => "answer",
            ContentKind::AnswerComment => "answerComment",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::InvalidContentType(s.to_string()))
    }
}
