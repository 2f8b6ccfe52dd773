//! Promotional-post service.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use sellcraft_types::generation::GenerationRequest;

use crate::credential::{ensure_credential, CredentialGate};
use crate::parse::parse_posts;
use crate::prompt::promo;
use crate::provider::{ModelIds, ModelInvoker};

use super::ToolError;

/// Characters left unescaped by `encodeURIComponent`; everything else
/// alphanumeric-adjacent gets percent-encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Base of the community posting deep link.
const TWEET_BASE: &str = "https://libecity.com/tweet/all?create=";

/// Generates ready-to-post promotional texts for a published listing.
pub struct PromoterService<M, G> {
    invoker: M,
    gate: G,
    models: ModelIds,
}

impl<M, G> PromoterService<M, G>
where
    M: ModelInvoker,
    G: CredentialGate,
{
    pub fn new(invoker: M, gate: G, models: ModelIds) -> Self {
        Self {
            invoker,
            gate,
            models,
        }
    }

    /// Run a 20-post round from the listing body and its URL.
    ///
    /// An empty body is rejected before any model call. Returned posts
    /// are cosmetically reformatted (sentence breaks) but otherwise
    /// untouched.
    pub async fn generate_posts(
        &self,
        service_body: &str,
        service_url: &str,
    ) -> Result<Vec<String>, ToolError> {
        if service_body.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }
        if !ensure_credential(&self.gate).await {
            return Err(ToolError::CredentialMissing);
        }

        let prompt = promo::build(service_body, service_url);
        let request = GenerationRequest {
            model: self.models.text.clone(),
            instruction: prompt.instruction,
            config: prompt.config,
        };
        let response = self.invoker.generate(&request).await?;
        let posts = parse_posts(response.text_or_empty())?;

        tracing::info!(count = posts.len(), "promotion round complete");
        Ok(posts.iter().map(|p| reformat_post(p)).collect())
    }
}

/// Insert a line break after every sentence-ending `。` that is not
/// already followed by one, then trim.
pub fn reformat_post(post: &str) -> String {
    let mut out = String::with_capacity(post.len() + 8);
    let mut chars = post.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '。' && chars.peek() != Some(&'\n') {
            out.push('\n');
        }
    }
    out.trim().to_string()
}

/// Deep link that opens the community composer pre-filled with `post`.
pub fn tweet_intent_url(post: &str) -> String {
    format!("{TWEET_BASE}{}", utf8_percent_encode(post, COMPONENT))
}
