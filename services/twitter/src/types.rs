use serde::Deserialize;

/// A Twitter user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Numeric id, as a string.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Screen name without `@`.
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub data: User,
}

/// A tweet with the default fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tweet {
    /// Tweet id.
    pub id: String,
    /// Tweet text.
    #[serde(default)]
    pub text: String,
}

/// Pagination metadata of a tweet listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Meta {
    /// Number of tweets in this page.
    #[serde(default)]
    pub result_count: u64,
    /// Id of the newest tweet in this page.
    pub newest_id: Option<String>,
    /// Id of the oldest tweet in this page.
    pub oldest_id: Option<String>,
    /// Token for the next page, absent on the last one.
    pub next_token: Option<String>,
}

/// One page of tweets.
///
/// The api omits `data` when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TweetPage {
    /// Tweets in this page.
    #[serde(default)]
    pub data: Vec<Tweet>,
    /// Pagination metadata, only present on listings.
    pub meta: Option<Meta>,
}

impl TweetPage {
    /// Token for the next page.
    pub fn next_token(&self) -> Option<&str> {
        self.meta.as_ref()?.next_token.as_deref()
    }
}
