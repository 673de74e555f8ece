/*
[INPUT]:  Optional calendar date
[OUTPUT]: Rates snapshot (date + PLN rate per currency)
[POS]:    HTTP layer - exchange rate endpoints
[UPDATE]: When rate endpoints or query parameters change
*/

use chrono::NaiveDate;

use crate::http::{KantorClient, RequestOptions, Result};
use crate::types::RatesSnapshot;

impl KantorClient {
    /// Latest published rates
    ///
    /// GET /rates/latest
    pub async fn rates_latest(&self) -> Result<RatesSnapshot> {
        self.request("/rates/latest", RequestOptions::get()).await
    }

    /// Rates published for a calendar date
    ///
    /// GET /rates/history?date={YYYY-MM-DD}
    pub async fn rates_by_date(&self, date: NaiveDate) -> Result<RatesSnapshot> {
        let endpoint = format!("/rates/history?date={}", date.format("%Y-%m-%d"));
        self.request(&endpoint, RequestOptions::get()).await
    }
}
