use ip_api_rs::{IpApi, IpApiError};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let mut client = IpApi::init("");

    match client.fetch_location("24.48.0.1").await {
        Ok(location) => println!("{location}"),
        Err(e) => eprintln!("lookup failed: {e}"),
    }

    match client.fetch_location("192.168.0.1").await {
        Err(IpApiError::Service(failure)) => println!("192.168.0.1: {failure}"),
        other => println!("192.168.0.1: {other:?}"),
    }

    if let Ok(key) = std::env::var("IP_API_KEY") {
        client.use_pro(key);
        match client.fetch_location("2001:4860:4860::8888").await {
            Ok(location) => println!("{location}"),
            Err(e) => eprintln!("pro lookup failed: {e}"),
        }
    }
}
