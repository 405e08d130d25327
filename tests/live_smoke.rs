use coinmarketcap_api_client::Client;
use coinmarketcap_api_client::cryptocurrency::CryptocurrencyQuotesOptions;

fn live_tests_enabled() -> bool {
    std::env::var("CMC_LIVE_TESTS").ok().as_deref() == Some("1")
}

fn api_key_from_env() -> Option<String> {
    std::env::var("CMC_API_KEY").ok().filter(|key| !key.is_empty())
}

#[tokio::test]
#[ignore]
async fn live_sandbox_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let api_key = match api_key_from_env() {
        Some(key) => key,
        None => return Ok(()),
    };
    let client = Client::builder().api_key(api_key).sandbox(true).build();

    let options = CryptocurrencyQuotesOptions {
        symbol: vec!["BTC".to_string()],
        convert: vec!["USD".to_string()],
        ..Default::default()
    };
    let quotes = client
        .get_cryptocurrency_quotes_latest(Some(&options))
        .await?;
    assert!(quotes.data.contains_key("BTC"));

    let key_info = client.get_key_info().await?;
    assert!(key_info.data.plan.rate_limit_minute > 0);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_global_metrics_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let api_key = match api_key_from_env() {
        Some(key) => key,
        None => return Ok(()),
    };
    let client = Client::builder().api_key(api_key).build();

    let metrics = client.get_global_metrics_latest(None).await?;
    assert!(metrics.data.btc_dominance.is_some());

    Ok(())
}
