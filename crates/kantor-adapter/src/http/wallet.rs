/*
[INPUT]:  Bearer session and deposit amounts
[OUTPUT]: Wallet balances and deposit confirmations
[POS]:    HTTP layer - wallet endpoints (require session)
[UPDATE]: When wallet endpoints or payloads change
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{KantorClient, RequestOptions, Result};
use crate::types::{DepositRequest, Wallet};

impl KantorClient {
    /// Read the signed-in user's wallet
    ///
    /// GET /wallet/me
    pub async fn wallet_me(&self) -> Result<Wallet> {
        self.request("/wallet/me", RequestOptions::get()).await
    }

    /// Simulate a PLN deposit
    ///
    /// POST /wallet/deposit
    pub async fn deposit(&self, amount_pln: Decimal) -> Result<Value> {
        let body = DepositRequest { amount_pln };
        tracing::info!(amount_pln = %amount_pln, "depositing");
        self.request_value("/wallet/deposit", RequestOptions::post(&body)?)
            .await
    }
}
