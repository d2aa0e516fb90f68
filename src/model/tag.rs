use resource_framework::patch::{self, Patch};
use resource_framework::{ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub tag_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Created by an admin rather than by the system.
    pub user_defined: bool,
    pub tag_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub user_defined: bool,
    pub tag_html: Option<String>,
}

impl CreateTagDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            user_defined: true,
            tag_html: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTagDto {
    pub tag_id: Uuid,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub name: Patch<String>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub description: Patch<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Patch::is_keep",
        deserialize_with = "patch::clearable"
    )]
    pub tag_html: Patch<Option<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagFilterKind {
    UserDefined,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagsFilter {
    pub filter: Option<TagFilterKind>,
}

impl ResourceFilter<TagDto> for TagsFilter {
    fn matches(&self, dto: &TagDto) -> bool {
        match self.filter {
            None => true,
            Some(TagFilterKind::UserDefined) => dto.user_defined,
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self.filter {
            Some(TagFilterKind::UserDefined) => vec![("filter", "UserDefined".to_string())],
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagsOrder {
    NameAsc,
    NameDesc,
}

impl SortOrder<TagDto> for TagsOrder {
    fn compare(&self, a: &TagDto, b: &TagDto) -> Ordering {
        match self {
            Self::NameAsc => a.name.cmp(&b.name),
            Self::NameDesc => b.name.cmp(&a.name),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::NameAsc => "NameAsc",
            Self::NameDesc => "NameDesc",
        }
    }
}
