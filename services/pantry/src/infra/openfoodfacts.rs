use anyhow::Context as _;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::repository::ProductLookupPort;
use crate::domain::types::ProductInfo;

pub const USER_AGENT: &str = "BeforeYouGo/0.1";
const PRODUCT_FIELDS: &str = "product_name,quantity,brands";

/// Open Food Facts product API client.
#[derive(Clone)]
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    fn product_url(&self, barcode: &str) -> String {
        format!(
            "{}/api/v2/product/{barcode}?fields={PRODUCT_FIELDS}",
            self.base_url
        )
    }
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    product: Option<ProductFields>,
}

#[derive(Debug, Deserialize)]
struct ProductFields {
    product_name: Option<String>,
    brands: Option<String>,
    quantity: Option<String>,
}

impl ProductResponse {
    fn into_product(self) -> Option<ProductInfo> {
        if self.status == 0 {
            return None;
        }
        self.product.map(|p| ProductInfo {
            product_name: p.product_name,
            brands: p.brands,
            quantity: p.quantity,
        })
    }
}

impl ProductLookupPort for OpenFoodFactsClient {
    async fn fetch(&self, barcode: &str) -> anyhow::Result<Option<ProductInfo>> {
        // Barcodes are plain digit strings; anything else cannot name a product.
        if !barcode.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(None);
        }
        let response = self
            .http
            .get(self.product_url(barcode))
            .send()
            .await
            .context("request product")?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: ProductResponse = response
            .error_for_status()
            .context("product response status")?
            .json()
            .await
            .context("decode product response")?;
        Ok(body.into_product())
    }
}
