use poem::test::{TestClient, TestResponse};
use poem::{Endpoint, EndpointExt};

use crate::prelude::*;
use crate::regression::{Dataset, Model};
use crate::web::create_standalone_app;
use crate::web::tracking_code::TrackingCode;

const DATASET: &str = "\
asset,avg_return,volatility,liquidity,risk_score,momentum,grade
Alpha Growth,10,20,5,3,4,50
Helios Energy,20,10,10,1,8,80
Northwind Bonds,15,25,7,5,2,55
Orbit Telecom,8,12,3,2,6,45
Summit Tech,30,18,12,4,9,90
Cedar Retail,12,30,6,7,1,35
Atlas Mining,25,22,9,6,5,70
Delta Health,5,8,2,1,3,40
";

pub fn test_dataset() -> Result<Dataset> {
    Ok(Dataset::from_reader(DATASET.as_bytes())?)
}

pub fn create_standalone_test_client() -> Result<TestClient<impl Endpoint>> {
    let dataset = test_dataset()?;
    let model = Model::fit(&dataset)?;
    let app = create_standalone_app(Arc::new(model), Arc::new(dataset)).data(TrackingCode::default());
    Ok(TestClient::new(app))
}

pub async fn read_text(response: TestResponse) -> Result<String> {
    Ok(response.0.into_body().into_string().await?)
}

#[tokio::test]
async fn unknown_path_error() -> Result {
    let client = create_standalone_test_client()?;
    client.get("/nope").send().await.assert_status(poem::http::StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unknown_api_path_error() -> Result {
    let client = create_standalone_test_client()?;
    let response = client.get("/api/nope").send().await;
    response.assert_status(poem::http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&read_text(response).await?)?;
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn wrong_method_error() -> Result {
    let client = create_standalone_test_client()?;
    client
        .delete("/predictor")
        .send()
        .await
        .assert_status(poem::http::StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}

#[tokio::test]
async fn security_headers_ok() -> Result {
    let client = create_standalone_test_client()?;
    let response = client.get("/").send().await;
    response.assert_status_is_ok();
    response.assert_header("X-Content-Type-Options", "nosniff");
    response.assert_header("X-Frame-Options", "deny");
    let policy = response.0.headers().get("Content-Security-Policy").and_then(|value| value.to_str().ok());
    assert!(policy.unwrap_or_default().contains("frame-ancestors 'none'"));
    Ok(())
}
