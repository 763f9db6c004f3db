// Env values used by the twitter client.
pub const TWITTER_ACCOUNT_ID: &str = "TWITTER_ACCOUNT_ID";
pub const TWITTER_API_ENDPOINT: &str = "TWITTER_API_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "https://api.twitter.com/2";

/// Page size asked for when listing a user's tweets.
pub const USER_TWEETS_PAGE_SIZE: &str = "20";
