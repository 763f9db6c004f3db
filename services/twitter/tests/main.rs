use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use engage_core::time::from_unix_millis;
use engage_core::{Context, ErrorKind, HttpSend, Result, StaticEnv};
use engage_oauth1::{Credential, RequestSigner};
use engage_twitter::{Config, Tweet, TwitterService};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;

/// Records every request and answers with a canned response.
#[derive(Debug, Clone)]
struct MockHttpSend {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Arc::default(),
        }
    }

    fn last_request(&self) -> http::Request<Bytes> {
        self.requests
            .lock()
            .unwrap()
            .pop()
            .expect("a request must be sent")
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);

        let mut resp = http::Response::new(Bytes::from_static(self.body.as_bytes()));
        *resp.status_mut() = self.status;
        Ok(resp)
    }
}

fn service(mock: &MockHttpSend) -> TwitterService {
    let _ = env_logger::builder().is_test(true).try_init();

    let signer = RequestSigner::new(Credential::new("ck", "cs", "at", "as"))
        .with_time(from_unix_millis(1_700_000_000_000).expect("must be valid time"))
        .with_nonce("N");
    TwitterService::new(
        Context::new().with_http_send(mock.clone()),
        signer,
        "12",
    )
}

#[tokio::test]
async fn test_get_user_id() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{"data":{"id":"2244994945","name":"Twitter Dev","username":"TwitterDev"}}"#,
    );

    let id = service(&mock).get_user_id("TwitterDev").await?;
    assert_eq!(id, "2244994945");

    let req = mock.last_request();
    assert_eq!(req.method(), Method::GET);
    assert_eq!(
        req.uri(),
        "https://api.twitter.com/2/users/by/username/TwitterDev"
    );
    assert!(req.headers()[AUTHORIZATION]
        .to_str()?
        .starts_with("OAuth oauth_consumer_key=\"ck\""));
    assert!(req.body().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_get_user_tweets_query_order() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{
            "data": [
                {"id": "1460323737035677698", "text": "Introducing a new era"},
                {"id": "1458172421115101189", "text": "Hello"}
            ],
            "meta": {
                "newest_id": "1460323737035677698",
                "oldest_id": "1458172421115101189",
                "result_count": 2,
                "next_token": "7140dibdnow9c7btw3z2vwioavpvutgzrzm9icis4ndix"
            }
        }"#,
    );

    let page = service(&mock)
        .get_user_tweets(
            "2244994945",
            Some("1458172421115101188"),
            Some("7140dibdnow9c7btw3w2q6jsqguw8jf1qy0czwb4tbzxn"),
        )
        .await?;

    assert_eq!(page.data.len(), 2);
    assert_eq!(
        page.data[0],
        Tweet {
            id: "1460323737035677698".to_string(),
            text: "Introducing a new era".to_string(),
        }
    );
    assert_eq!(
        page.next_token(),
        Some("7140dibdnow9c7btw3z2vwioavpvutgzrzm9icis4ndix")
    );

    let req = mock.last_request();
    assert_eq!(
        req.uri().query(),
        Some("max_results=20&since_id=1458172421115101188&pagination_token=7140dibdnow9c7btw3w2q6jsqguw8jf1qy0czwb4tbzxn")
    );
    Ok(())
}

#[tokio::test]
async fn test_get_user_tweets_empty_page() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, r#"{"meta":{"result_count":0}}"#);

    let page = service(&mock).get_user_tweets("2244994945", None, None).await?;

    assert!(page.data.is_empty());
    assert_eq!(page.next_token(), None);
    assert_eq!(mock.last_request().uri().query(), Some("max_results=20"));
    Ok(())
}

#[tokio::test]
async fn test_get_multiple_tweets() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{"data":[{"id":"1","text":"a"},{"id":"2","text":"b"}]}"#,
    );

    let page = service(&mock).get_multiple_tweets(&["1", "2"]).await?;

    assert_eq!(page.data.len(), 2);
    assert!(page.meta.is_none());
    assert_eq!(mock.last_request().uri().query(), Some("ids=1,2"));
    Ok(())
}

#[tokio::test]
async fn test_retweet() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, r#"{"data":{"retweeted":true}}"#);

    let resp = service(&mock).retweet("1460323737035677698").await?;
    assert_eq!(resp["data"]["retweeted"], true);

    let req = mock.last_request();
    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.uri(), "https://api.twitter.com/2/users/12/retweets");
    assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(
        req.body().as_ref(),
        br#"{"tweet_id":"1460323737035677698"}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_like_signature_ignores_body() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, r#"{"data":{"liked":true}}"#);
    let svc = service(&mock).with_endpoint("https://api.twitter.com/2/");

    let resp = svc.like("1").await?;
    assert_eq!(resp["data"]["liked"], true);

    let req = mock.last_request();
    assert_eq!(req.uri(), "https://api.twitter.com/2/users/12/likes");
    assert!(req.headers()[AUTHORIZATION]
        .to_str()?
        .contains("oauth_signature=\"JSkmuWCxIPjICASx8ZaZHu9k70A%3D\""));
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_is_credential_denied() {
    let mock = MockHttpSend::new(
        StatusCode::UNAUTHORIZED,
        r#"{"title":"Unauthorized","status":401}"#,
    );

    let err = service(&mock)
        .get_user_id("TwitterDev")
        .await
        .expect_err("401 must fail");

    assert_eq!(err.kind(), ErrorKind::CredentialDenied);
    assert!(err.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn test_rate_limited_is_unexpected() {
    let mock = MockHttpSend::new(StatusCode::TOO_MANY_REQUESTS, "Too Many Requests");

    let err = service(&mock)
        .like("1")
        .await
        .expect_err("429 must fail");

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn test_malformed_json_is_unexpected() {
    let mock = MockHttpSend::new(StatusCode::OK, "<html>");

    let err = service(&mock)
        .get_user_id("TwitterDev")
        .await
        .expect_err("html must fail");

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_from_config() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        envs: [
            ("TWITTER_ACCOUNT_ID".to_string(), "12".to_string()),
            (
                "TWITTER_API_ENDPOINT".to_string(),
                "http://127.0.0.1:9000/2".to_string(),
            ),
        ]
        .into_iter()
        .collect(),
    });
    let signer = RequestSigner::new(Credential::new("ck", "cs", "at", "as"));

    let config = Config::new().from_env(&ctx);
    let svc = TwitterService::from_config(ctx, signer.clone(), &config)?;
    assert_eq!(svc.account_id(), "12");

    let err = TwitterService::from_config(Context::new(), signer, &Config::new())
        .expect_err("account id is required");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    Ok(())
}
