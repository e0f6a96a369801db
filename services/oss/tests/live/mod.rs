use log::warn;
use ossign_core::{Context, OsEnv, Result};
use ossign_http_send_reqwest::ReqwestHttpSend;
use ossign_oss::{parse_list_buckets, Acl, Client, Config};
use std::env;

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("OSSIGN_OSS_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    Some(Client::from_config(ctx, &config).expect("env ALIBABA_CLOUD_* must be set"))
}

#[tokio::test]
async fn test_bucket_lifecycle() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("OSSIGN_OSS_TEST is not set, skipped");
        return Ok(());
    };

    let bucket = env::var("OSSIGN_OSS_BUCKET").expect("env OSSIGN_OSS_BUCKET must set");

    client.create_bucket(&bucket).await?;
    client.put_bucket_acl(&bucket, Acl::PublicRead).await?;

    let body = client.list_buckets().await?;
    let buckets = parse_list_buckets(&body)?;
    assert!(buckets.iter().any(|b| b.name == bucket));

    client.delete_bucket(&bucket).await?;
    Ok(())
}
