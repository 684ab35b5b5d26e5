/// Example program walking the plugin through its channel contract
/// Run with: cargo run --example platform_version

use pose_detection_plugin::{
    decode_method_call, encode_response, ChannelRegistrar, MethodCall, PoseDetectionPlugin,
    CHANNEL_NAME, METHOD_GET_PLATFORM_VERSION,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Platform Channel Test ===\n");

    let registrar = ChannelRegistrar::new();
    PoseDetectionPlugin::register(&registrar).await?;
    println!("Registered channels: {:?}\n", registrar.channels().await);

    // The one recognized query
    println!("Recognized method:");
    let response = registrar
        .dispatch(CHANNEL_NAME, MethodCall::new(METHOD_GET_PLATFORM_VERSION))
        .await?;
    match response.value() {
        Some(version) => println!("  {} -> {}", METHOD_GET_PLATFORM_VERSION, version),
        None => println!("  {} -> not implemented?!", METHOD_GET_PLATFORM_VERSION),
    }
    println!();

    // Everything else gets the not-implemented signal
    println!("Unrecognized methods:");
    for method in ["unknownMethod", "", "getplatformversion"] {
        let response = registrar
            .dispatch(CHANNEL_NAME, MethodCall::new(method))
            .await?;
        println!(
            "  {:?} -> {}",
            method,
            if response.is_not_implemented() {
                "not implemented"
            } else {
                "success"
            }
        );
    }
    println!();

    // The same exchange through the wire envelope
    println!("Wire envelope round trip:");
    let request = br#"{"method": "getPlatformVersion"}"#;
    let call = decode_method_call(request)?;
    let response = registrar.dispatch(CHANNEL_NAME, call).await?;
    let encoded = encode_response(&response);
    println!("  request:  {}", String::from_utf8_lossy(request));
    println!("  response: {}", String::from_utf8_lossy(&encoded));

    println!("\n✓ Platform channel test complete!");

    Ok(())
}
