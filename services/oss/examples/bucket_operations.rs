use anyhow::Result;
use log::info;
use ossign_core::{Context, OsEnv};
use ossign_http_send_reqwest::ReqwestHttpSend;
use ossign_oss::{parse_list_buckets, Acl, Client, Config};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let bucket = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ossign-demo-bucket".to_string());

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    // Reads ALIBABA_CLOUD_OSS_ENDPOINT and the ALIBABA_CLOUD_ACCESS_KEY_* pair.
    let config = Config::default().from_env(&ctx);
    let client = Client::from_config(ctx, &config)?;

    client.create_bucket(&bucket).await?;
    info!("created bucket {bucket}");

    client.put_bucket_acl(&bucket, Acl::PublicRead).await?;
    info!("set acl of {bucket} to {}", Acl::PublicRead);

    let body = client.list_buckets().await?;
    for b in parse_list_buckets(&body)? {
        println!("{}\t{}", b.name, b.creation_date);
    }

    client.delete_bucket(&bucket).await?;
    info!("deleted bucket {bucket}");

    Ok(())
}
