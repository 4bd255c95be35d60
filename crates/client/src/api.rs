//! HTTP client for the inventory backend.

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, ItemDraft};

use crate::error::ClientError;
use crate::wire::{
    AnalyticsEnvelope, AnalyticsReport, ChatMessage, CommandEnvelope, DeleteItemRequest,
    InventoryPayload, QuantityChange, QuantityEnvelope, SendMessageRequest, UpdateItemRequest,
    UpdateQuantityRequest,
};

/// Client for the backend REST contract.
///
/// Holds a connection-pooled [`reqwest::Client`]; cheap to clone. An optional
/// bearer token is attached to every request so a fronting proxy can enforce
/// auth without this crate knowing about it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let req = self.http.get(format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let req = self.http.post(format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// `GET /api/inventory` — the whole inventory as the backend holds it.
    pub async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>, ClientError> {
        let resp = self
            .get("/api/inventory")
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let resp = expect_ok(resp).await?;
        let payload: InventoryPayload = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(payload.items)
    }

    /// `POST /api/add_item` — create an item; the backend assigns the id.
    pub async fn add_item(&self, draft: &ItemDraft) -> Result<(), ClientError> {
        self.post_command("/api/add_item", draft).await
    }

    /// `POST /api/update_item` — overwrite the fields of an existing item.
    pub async fn update_item(&self, id: &ItemId, draft: &ItemDraft) -> Result<(), ClientError> {
        self.post_command("/api/update_item", &UpdateItemRequest { id, fields: draft })
            .await
    }

    /// `POST /api/update_quantity` — set an item's quantity.
    ///
    /// The backend reports the previous quantity so the caller can show the
    /// signed change.
    pub async fn update_quantity(
        &self,
        id: &ItemId,
        quantity: u32,
    ) -> Result<QuantityChange, ClientError> {
        let resp = self
            .post("/api/update_quantity")
            .json(&UpdateQuantityRequest { item_id: id, quantity })
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let resp = expect_ok(resp).await?;
        let envelope: QuantityEnvelope = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        if !envelope.success {
            return Err(ClientError::Rejected(
                envelope
                    .error
                    .unwrap_or_else(|| "backend rejected the request".to_string()),
            ));
        }
        let old_quantity = envelope
            .old_quantity
            .ok_or_else(|| ClientError::Parse("missing old_quantity in response".to_string()))?;
        Ok(QuantityChange {
            old_quantity,
            new_quantity: quantity,
        })
    }

    /// `POST /api/delete_item` — destructive; callers confirm with the user
    /// before invoking.
    pub async fn delete_item(&self, id: &ItemId) -> Result<(), ClientError> {
        self.post_command("/api/delete_item", &DeleteItemRequest { id })
            .await
    }

    /// `GET /api/analytics` — backend-computed inventory analytics.
    pub async fn fetch_analytics(&self) -> Result<AnalyticsReport, ClientError> {
        let resp = self
            .get("/api/analytics")
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let resp = expect_ok(resp).await?;
        let envelope: AnalyticsEnvelope = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        envelope.into_result()
    }

    /// `GET /api/messages` — the team message log, oldest first.
    pub async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, ClientError> {
        let resp = self
            .get("/api/messages")
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let resp = expect_ok(resp).await?;
        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// `POST /api/send_message` — broadcast a message to the team.
    pub async fn send_message(&self, message: &str) -> Result<(), ClientError> {
        self.post_command("/api/send_message", &SendMessageRequest { message })
            .await
    }

    /// POST a JSON body and fold the `{ success, error? }` envelope.
    async fn post_command<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let resp = self
            .post(path)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let resp = expect_ok(resp).await?;
        let envelope: CommandEnvelope = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        envelope.into_result()
    }
}

/// Map non-2xx responses to [`ClientError::Api`] with the body text.
async fn expect_ok(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(ClientError::Api(status, body))
    }
}
