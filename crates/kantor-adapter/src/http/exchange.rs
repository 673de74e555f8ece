/*
[INPUT]:  Currency code and quantity of that currency
[OUTPUT]: Backend confirmation of the settled exchange
[POS]:    HTTP layer - buy/sell endpoints (require session)
[UPDATE]: When exchange endpoints or order payload change
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{KantorClient, RequestOptions, Result};
use crate::types::{ExchangeRequest, ExchangeSide};

impl KantorClient {
    /// Buy `amount` units of `currency`, paying PLN
    ///
    /// POST /exchange/buy
    pub async fn buy(&self, currency: &str, amount: Decimal) -> Result<Value> {
        self.exchange(ExchangeSide::Buy, currency, amount).await
    }

    /// Sell `amount` units of `currency`, receiving PLN
    ///
    /// POST /exchange/sell
    pub async fn sell(&self, currency: &str, amount: Decimal) -> Result<Value> {
        self.exchange(ExchangeSide::Sell, currency, amount).await
    }

    /// Submit an exchange; settlement rate and PLN value are decided server-side.
    pub async fn exchange(
        &self,
        side: ExchangeSide,
        currency: &str,
        amount: Decimal,
    ) -> Result<Value> {
        let body = ExchangeRequest {
            currency: currency.to_string(),
            amount,
        };
        tracing::info!(%side, currency, amount = %amount, "submitting exchange");
        self.request_value(side.path(), RequestOptions::post(&body)?)
            .await
    }
}
