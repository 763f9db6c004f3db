//! Twitter v2 engagement client for engage.
//!
//! Looks up users, lists their tweets, and retweets or likes as the account
//! whose OAuth 1.0a credential signs the requests.
//!
//! ```no_run
//! use engage_core::{Context, OsEnv, Result};
//! use engage_http_send_reqwest::ReqwestHttpSend;
//! use engage_oauth1::{Credential, RequestSigner};
//! use engage_twitter::TwitterService;
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! let signer = RequestSigner::new(Credential::new("ck", "cs", "at", "as"));
//! let svc = TwitterService::new(ctx, signer, "2244994945");
//!
//! let user_id = svc.get_user_id("TwitterDev").await?;
//! let page = svc.get_user_tweets(&user_id, None, None).await?;
//! for tweet in &page.data {
//!     svc.like(&tweet.id).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod types;
pub use types::{Meta, Tweet, TweetPage, User};

mod service;
pub use service::TwitterService;
