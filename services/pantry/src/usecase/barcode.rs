//! Barcode → product display string, memoised in the barcode cache.
//!
//! Lookup never fails: a cache read error, a provider error, an unknown barcode or a
//! timeout all yield an empty string so a check-in is never blocked on the provider.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::repository::{BarcodeCacheRepository, ProductLookupPort};

pub struct LookupBarcodeUseCase<C: BarcodeCacheRepository, P: ProductLookupPort> {
    pub cache: C,
    pub products: P,
    /// Bound on one provider call; elapsing counts as a miss.
    pub timeout: Duration,
}

impl<C: BarcodeCacheRepository, P: ProductLookupPort> LookupBarcodeUseCase<C, P> {
    pub async fn execute(&self, barcode: &str) -> String {
        if barcode.trim().is_empty() {
            return String::new();
        }

        match self.cache.get(barcode).await {
            Ok(Some(data)) => {
                debug!(barcode, "barcode cache hit");
                return data;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(barcode, error = %e, "barcode cache read failed");
                return String::new();
            }
        }

        let product = match tokio::time::timeout(self.timeout, self.products.fetch(barcode)).await {
            Ok(Ok(Some(product))) => product,
            Ok(Ok(None)) => {
                debug!(barcode, "barcode unknown to product provider");
                return String::new();
            }
            Ok(Err(e)) => {
                warn!(barcode, error = %e, "product lookup failed");
                return String::new();
            }
            Err(_) => {
                warn!(
                    barcode,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "product lookup timed out"
                );
                return String::new();
            }
        };

        let display = product.display_name();
        if let Err(e) = self.cache.insert_if_absent(barcode, &display).await {
            warn!(barcode, error = %e, "barcode cache write failed");
        }
        display
    }
}
