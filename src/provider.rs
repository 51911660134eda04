//! # Design Providers
//!
//! Sources of card and logo design concepts. The [`DesignProvider`] trait
//! is the seam between the HTTP surface and whatever produces designs:
//!
//! - [`LocalProvider`]: deterministic built-in concepts
//! - [`HttpProvider`]: an external generation service, falling back to
//!   [`LocalProvider`] whenever the service fails
//!
//! Whatever a provider returns is untrusted; card suggestions go through
//! the layout engine's normalizer before anything is drawn.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CardgenError;
use crate::suggestion::{
    Content, DesignSuggestion, RawElement, RawElements, RawLayout, RawPalette, RawTypography,
};

/// Designs generated when a request does not say how many.
pub const DEFAULT_DESIGN_COUNT: usize = 10;

/// Upper bound on designs per request.
pub const MAX_DESIGN_COUNT: usize = 50;

/// Card details a design is generated for.
pub type CardData = Content;

/// Body of a card design request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardDesignRequest {
    pub card_data: CardData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl CardDesignRequest {
    /// Name and company are required.
    pub fn validate(&self) -> Result<(), CardgenError> {
        if present(&self.card_data.name) && present(&self.card_data.company) {
            Ok(())
        } else {
            Err(CardgenError::InvalidRequest(
                "Name and company are required for card generation".into(),
            ))
        }
    }

    /// Requested count, defaulted and capped.
    pub fn design_count(&self) -> usize {
        match self.count {
            None | Some(0) => DEFAULT_DESIGN_COUNT,
            Some(n) => n.min(MAX_DESIGN_COUNT),
        }
    }
}

/// Body of a logo design request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoRequest {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LogoRequest {
    pub fn validate(&self) -> Result<(), CardgenError> {
        if self.company_name.trim().is_empty() {
            return Err(CardgenError::InvalidRequest(
                "Company name is required for logo generation".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoColors {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoTypography {
    pub font: String,
    pub weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoLayout {
    pub template: String,
    pub spacing: String,
    pub alignment: String,
}

/// One logo concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoConcept {
    pub name: String,
    pub style: String,
    pub colors: LogoColors,
    pub icon: String,
    pub typography: LogoTypography,
    pub layout: LogoLayout,
    pub description: String,
}

/// Produces design concepts.
#[async_trait]
pub trait DesignProvider: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    async fn card_designs(&self, req: &CardDesignRequest) -> Result<Vec<DesignSuggestion>, CardgenError>;

    async fn logo_designs(&self, req: &LogoRequest) -> Result<Vec<LogoConcept>, CardgenError>;
}

// ============================================================================
// LOCAL PROVIDER
// ============================================================================

const CARD_PALETTES: [(&str, &str); 4] = [
    ("#3b82f6", "#1e40af"),
    ("#ef4444", "#b91c1c"),
    ("#10b981", "#065f46"),
    ("#f59e0b", "#b45309"),
];
const CARD_FONTS: [&str; 4] = ["Inter", "Poppins", "Montserrat", "Roboto"];
const CARD_TEMPLATES: [&str; 4] = ["modern", "classic", "minimal", "corporate"];
const LAYOUT_STYLES: [&str; 3] = ["left-aligned", "centered", "split"];

const LOGO_ICONS: [&str; 6] = ["💡", "⚙️", "🔷", "🔶", "✦", "✺"];
const LOGO_COLORS: [&str; 4] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b"];
const LOGO_STYLES: [&str; 4] = ["modern", "minimalist", "corporate", "creative"];

/// Deterministic built-in concepts. Concept `i` depends only on `i` and
/// the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn card_design(card: &CardData, i: usize) -> DesignSuggestion {
        let (primary, secondary) = CARD_PALETTES[i % CARD_PALETTES.len()];
        let font = CARD_FONTS[i % CARD_FONTS.len()];
        let base = card.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Name");

        let name = RawElement {
            weight: Some("semibold".into()),
            ..RawElement::at("center left", "large")
        };
        let contacts = RawElement {
            position: Some("bottom left".into()),
            ..Default::default()
        };

        DesignSuggestion {
            name: Some(format!("{} Concept {}", base, i + 1)),
            template: Some(CARD_TEMPLATES[i % CARD_TEMPLATES.len()].into()),
            palette: RawPalette {
                primary: Some(primary.into()),
                secondary: Some(secondary.into()),
                accent: Some(primary.into()),
                background: Some("#ffffff".into()),
                text: Some("#111827".into()),
            },
            typography: RawTypography {
                heading: Some(font.into()),
                body: Some(font.into()),
            },
            layout: RawLayout {
                style: Some(LAYOUT_STYLES[i % LAYOUT_STYLES.len()].into()),
                elements: RawElements {
                    company: Some(RawElement::at("top left", "medium")),
                    name: Some(name),
                    title: Some(RawElement::at("center left", "medium")),
                    contacts: Some(contacts),
                },
            },
            content: card.clone(),
            ..Default::default()
        }
    }

    pub fn logo_concepts(req: &LogoRequest) -> Vec<LogoConcept> {
        let company = if req.company_name.trim().is_empty() {
            "Company"
        } else {
            req.company_name.as_str()
        };
        LOGO_ICONS
            .iter()
            .enumerate()
            .map(|(i, icon)| LogoConcept {
                name: format!("{} {}", company, i + 1),
                style: LOGO_STYLES[i % LOGO_STYLES.len()].into(),
                colors: LogoColors {
                    primary: LOGO_COLORS[i % LOGO_COLORS.len()].into(),
                    secondary: LOGO_COLORS[(i + 1) % LOGO_COLORS.len()].into(),
                },
                icon: icon.to_string(),
                typography: LogoTypography {
                    font: "Inter".into(),
                    weight: 400,
                },
                layout: LogoLayout {
                    template: "icon-left".into(),
                    spacing: "regular".into(),
                    alignment: "left".into(),
                },
                description: "Built-in logo concept.".into(),
            })
            .collect()
    }
}

#[async_trait]
impl DesignProvider for LocalProvider {
    fn name(&self) -> &str {
        "local"
    }

    async fn card_designs(&self, req: &CardDesignRequest) -> Result<Vec<DesignSuggestion>, CardgenError> {
        Ok((0..req.design_count())
            .map(|i| Self::card_design(&req.card_data, i))
            .collect())
    }

    async fn logo_designs(&self, req: &LogoRequest) -> Result<Vec<LogoConcept>, CardgenError> {
        Ok(Self::logo_concepts(req))
    }
}

// ============================================================================
// HTTP PROVIDER
// ============================================================================

#[derive(Debug, Deserialize)]
struct DesignsResponse<T> {
    designs: Vec<T>,
}

/// Client for an external design service.
///
/// Requests are POSTed as JSON to `{base}/card-designs` and
/// `{base}/logo-designs`; both answer `{"designs": [...]}`.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    http: Client,
    base_url: String,
    fallback: LocalProvider,
}

impl HttpProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CardgenError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CardgenError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback: LocalProvider,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<Vec<T>, CardgenError>
    where
        B: Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response: DesignsResponse<T> = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| CardgenError::Provider(format!("{} unreachable: {}", url, e)))?
            .error_for_status()
            .map_err(|e| CardgenError::Provider(format!("{} returned an error status: {}", url, e)))?
            .json()
            .await
            .map_err(|e| CardgenError::Provider(format!("failed to decode {} response: {}", url, e)))?;
        Ok(response.designs)
    }
}

#[async_trait]
impl DesignProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn card_designs(&self, req: &CardDesignRequest) -> Result<Vec<DesignSuggestion>, CardgenError> {
        match self.post::<_, DesignSuggestion>("card-designs", req).await {
            Ok(designs) if !designs.is_empty() => {
                Ok(designs.into_iter().take(req.design_count()).collect())
            }
            Ok(_) => {
                log::warn!("[provider] {} returned no card designs, using built-in concepts", self.base_url);
                self.fallback.card_designs(req).await
            }
            Err(e) => {
                log::warn!("[provider] {}, using built-in concepts", e);
                self.fallback.card_designs(req).await
            }
        }
    }

    async fn logo_designs(&self, req: &LogoRequest) -> Result<Vec<LogoConcept>, CardgenError> {
        match self.post::<_, LogoConcept>("logo-designs", req).await {
            Ok(designs) if !designs.is_empty() => Ok(designs),
            Ok(_) => {
                log::warn!("[provider] {} returned no logo designs, using built-in concepts", self.base_url);
                self.fallback.logo_designs(req).await
            }
            Err(e) => {
                log::warn!("[provider] {}, using built-in concepts", e);
                self.fallback.logo_designs(req).await
            }
        }
    }
}
