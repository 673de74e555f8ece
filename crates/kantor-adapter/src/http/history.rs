/*
[INPUT]:  Bearer session
[OUTPUT]: Transaction list normalized from bare or wrapped payloads
[POS]:    HTTP layer - transaction history endpoint (requires session)
[UPDATE]: When history endpoint or envelope shapes change
*/

use crate::http::{KantorClient, RequestOptions, Result};
use crate::types::{Transaction, TransactionPage};

impl KantorClient {
    /// Read the signed-in user's transactions
    ///
    /// GET /transactions
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        let page: TransactionPage = self.request("/transactions", RequestOptions::get()).await?;
        Ok(page.into_items())
    }
}
