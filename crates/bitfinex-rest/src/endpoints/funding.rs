//! Private funding endpoints
//!
//! Margin funding offers and credits. These endpoints require
//! authentication.

use crate::client::BitfinexClient;
use crate::decode::{decode, decode_with};
use crate::error::{RestError, RestResult};
use crate::types::{Credit, Direction, Offer};
use bitfinex_auth::next_nonce;
use tracing::{debug, instrument};

/// Private funding endpoints
pub struct FundingEndpoints<'a> {
    client: &'a BitfinexClient,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(client: &'a BitfinexClient) -> Self {
        Self { client }
    }

    /// Submit a new funding offer
    ///
    /// # Arguments
    /// * `currency` - Currency to lend or borrow (e.g., "usd"), case insensitive
    /// * `amount` - Amount to place
    /// * `rate` - Yearly percentage rate, 0.0 to float at the flash return rate
    /// * `period` - Duration in days
    /// * `direction` - Whether to lend or borrow
    #[instrument(skip(self))]
    pub async fn new_offer(
        &self,
        currency: &str,
        amount: f64,
        rate: f64,
        period: u32,
        direction: Direction,
    ) -> RestResult<Offer> {
        debug!(
            "Submitting {} offer for {} {}",
            direction.as_str(),
            amount,
            currency
        );

        let request = NewOfferRequest {
            request: "/v1/offer/new",
            nonce: next_nonce().to_string(),
            currency: currency.to_uppercase(),
            amount,
            rate,
            period,
            direction,
        };
        let body = self.client.post("/v1/offer/new", &request).await?;
        // The exchange never hands out offer id 0
        decode_with(&body, "offer with id 0", |offer: &Offer| offer.id != 0)
    }

    /// Cancel a funding offer by id
    ///
    /// Returns [`RestError::AlreadyCancelled`] when the offer was cancelled
    /// before the request arrived.
    #[instrument(skip(self))]
    pub async fn cancel_offer(&self, id: u64) -> RestResult<()> {
        debug!("Cancelling offer {}", id);

        let request = CancelOfferRequest {
            request: "/v1/offer/cancel",
            nonce: next_nonce().to_string(),
            offer_id: id,
        };
        let body = self.client.post("/v1/offer/cancel", &request).await?;
        // An ack for a different id means the body was not really an ack
        let ack = decode_with(
            &body,
            "cancel ack for a different offer id",
            |ack: &CancelOfferAck| ack.id == id,
        )?;

        if ack.is_cancelled {
            return Err(RestError::AlreadyCancelled { id });
        }
        Ok(())
    }

    /// Get all active funding offers
    #[instrument(skip(self))]
    pub async fn active_offers(&self) -> RestResult<Vec<Offer>> {
        debug!("Fetching active offers");

        let request = PlainRequest {
            request: "/v1/offers",
            nonce: next_nonce().to_string(),
        };
        let body = self.client.post("/v1/offers", &request).await?;
        decode(&body)
    }

    /// Get all active credits
    #[instrument(skip(self))]
    pub async fn active_credits(&self) -> RestResult<Vec<Credit>> {
        debug!("Fetching active credits");

        let request = PlainRequest {
            request: "/v1/credits",
            nonce: next_nonce().to_string(),
        };
        let body = self.client.post("/v1/credits", &request).await?;
        decode(&body)
    }

    /// Cancel every active funding offer
    ///
    /// Offers are cancelled one at a time in the order the exchange lists
    /// them. The first failure stops the run and offers cancelled up to that
    /// point stay cancelled.
    #[instrument(skip(self))]
    pub async fn cancel_all_active_offers(&self) -> RestResult<()> {
        let offers = self.active_offers().await?;
        debug!("Cancelling {} active offers", offers.len());

        for offer in offers {
            self.cancel_offer(offer.id).await?;
        }
        Ok(())
    }

    /// Cancel every active funding offer in one currency
    ///
    /// Currency matching ignores case. As with
    /// [`cancel_all_active_offers`](Self::cancel_all_active_offers), the
    /// first failure stops the run.
    #[instrument(skip(self))]
    pub async fn cancel_active_offers_by_currency(&self, currency: &str) -> RestResult<()> {
        let wanted = currency.to_lowercase();
        let offers = self.active_offers().await?;

        for offer in offers {
            if offer.currency.to_lowercase() == wanted {
                self.cancel_offer(offer.id).await?;
            }
        }
        Ok(())
    }
}

// Request and response payloads specific to funding endpoints

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct PlainRequest {
    request: &'static str,
    nonce: String,
}

#[derive(Serialize)]
struct NewOfferRequest {
    request: &'static str,
    nonce: String,
    currency: String,
    #[serde(with = "crate::types::serde_helpers::f64_string")]
    amount: f64,
    #[serde(with = "crate::types::serde_helpers::f64_string")]
    rate: f64,
    period: u32,
    direction: Direction,
}

#[derive(Serialize)]
struct CancelOfferRequest {
    request: &'static str,
    nonce: String,
    offer_id: u64,
}

/// Acknowledgement returned by the cancel endpoint
#[derive(Debug, Deserialize)]
struct CancelOfferAck {
    id: u64,
    is_cancelled: bool,
}
