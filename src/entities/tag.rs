use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub tag_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub user_defined: bool,
    pub tag_html: Option<String>,
}
