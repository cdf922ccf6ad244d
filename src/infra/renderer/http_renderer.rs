use crate::domain::ports::DocumentRenderer;
use crate::domain::services::invoice::InvoiceData;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::error;

/// Posts assembled invoice data to the external PDF renderer and returns
/// the rendered document bytes. Layout is entirely the renderer's concern.
pub struct HttpDocumentRenderer {
    client: Client,
    render_url: String,
}

impl HttpDocumentRenderer {
    pub fn new(render_url: String) -> Self {
        Self {
            client: Client::new(),
            render_url,
        }
    }
}

#[async_trait]
impl DocumentRenderer for HttpDocumentRenderer {
    async fn render_invoice(&self, invoice: &InvoiceData) -> Result<Vec<u8>, AppError> {
        let res = self
            .client
            .post(&self.render_url)
            .json(invoice)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Renderer connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Renderer failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        res.bytes().await.map(|b| b.to_vec()).map_err(|e| {
            let msg = format!("Renderer response read error: {}", e);
            error!("{}", msg);
            AppError::InternalWithMsg(msg)
        })
    }
}
