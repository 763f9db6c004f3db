use engage_core::{Context, OsEnv, Result};
use engage_oauth1::{Config, QueryParams, RequestSigner};
use http::Method;

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_env(OsEnv);
    let Some(cred) = Config::new().from_env(&ctx).to_credential() else {
        eprintln!("set OAUTH1_CONSUMER_KEY, OAUTH1_CONSUMER_SECRET, OAUTH1_ACCESS_TOKEN and OAUTH1_ACCESS_SECRET");
        return Ok(());
    };

    let params = QueryParams::new().with("max_results", "20");
    let signed = RequestSigner::new(cred).sign(
        &Method::GET,
        "https://api.twitter.com/2/users/12/tweets",
        Some(&params),
        None,
    );

    println!("{} {}", signed.method, signed.url);
    for (name, value) in &signed.headers {
        println!("{name}: {value}");
    }

    let req = signed.into_http_request()?;
    println!("{:?}", req.uri());
    Ok(())
}
