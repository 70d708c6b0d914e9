use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_PEOPLE_SEARCH_LIMIT: u32 = 100;
const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct PeopleSearchRequest {
    pub query: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload<'a> {
    pub query: TextQuery<'a>,
    pub identity_type: &'static str,
    pub limit: u32,
    pub offset: u32,
    pub meta: bool,
    pub excluding: Vec<String>,
    pub excluded_people: Vec<String>,
    pub exclude_contacts: bool,
    pub strict_mode: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextQuery<'a> {
    pub term: &'a str,
    #[serde(rename = "type")]
    pub query_type: &'static str,
}

impl<'a> SearchPayload<'a> {
    pub fn text(term: &'a str, limit: u32, offset: u32) -> Self {
        Self {
            query: TextQuery {
                term,
                query_type: "text",
            },
            identity_type: "person",
            limit,
            offset,
            meta: true,
            excluding: Vec::new(),
            excluded_people: Vec::new(),
            exclude_contacts: false,
            strict_mode: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSearchPayload<'a> {
    pub query: &'a str,
    pub identity_type: &'static str,
    pub limit: u32,
    pub meta: bool,
    pub excluding: Vec<String>,
    pub excluded_people: Vec<String>,
    pub exclude_contacts: bool,
}

impl<'a> StreamSearchPayload<'a> {
    pub fn new(query: &'a str, limit: u32) -> Self {
        Self {
            query,
            identity_type: "person",
            limit,
            meta: true,
            excluding: Vec::new(),
            excluded_people: Vec::new(),
            exclude_contacts: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResult {
    pub id: String,
    pub name: String,
    pub professional_headline: Option<String>,
    pub picture: Option<String>,
    pub username: Option<String>,
}

impl PersonResult {
    /// Parses one line of the stream. Lines without both `ggId` and `name` are
    /// not person results.
    pub fn from_stream_line(line: &str) -> Option<Self> {
        let node: Value = serde_json::from_str(line).ok()?;
        let text = |key: &str| match node.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        };

        Some(Self {
            id: text("ggId")?,
            name: text("name")?,
            professional_headline: text("professionalHeadline"),
            picture: text("imageUrl"),
            username: text("username"),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total: u32,
    pub current_page: u32,
    pub page_size: u32,
    pub total_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleSearchResponse {
    pub results: Vec<PersonResult>,
    pub pagination: PaginationInfo,
}

impl From<Vec<PersonResult>> for PeopleSearchResponse {
    fn from(results: Vec<PersonResult>) -> Self {
        let total = results.len() as u32;
        Self {
            results,
            pagination: PaginationInfo {
                total,
                current_page: 1,
                page_size: PAGE_SIZE,
                total_results: total,
            },
        }
    }
}
