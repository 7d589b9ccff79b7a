use crate::api::GenerateRequest;

/// The brand context a case study is generated for.
///
/// An industry tag and a custom description can never both be set; picking one replaces the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Industry(String),
    Custom(String),
}

impl Selection {
    pub fn industry(tag: impl Into<String>) -> Self {
        Self::from_text(tag.into(), Self::Industry)
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Self::from_text(text.into(), Self::Custom)
    }

    // Presence only: any non-empty text counts, whitespace included.
    fn from_text(text: String, wrap: fn(String) -> Self) -> Self {
        if text.is_empty() {
            Self::None
        } else {
            wrap(text)
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The text spliced into the prompt as "in the {..} industry".
    pub fn brand_type(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Industry(tag) => Some(tag),
            Self::Custom(text) => Some(text),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Industry(_) => "industry",
            Self::Custom(_) => "custom",
        }
    }

    pub fn to_request(&self) -> GenerateRequest {
        match self {
            Self::None => GenerateRequest::default(),
            Self::Industry(tag) => GenerateRequest {
                industry: Some(tag.clone()),
                custom_brand: None,
            },
            Self::Custom(text) => GenerateRequest {
                industry: None,
                custom_brand: Some(text.clone()),
            },
        }
    }
}

impl From<&GenerateRequest> for Selection {
    /// A non-empty custom brand wins over the industry tag.
    fn from(request: &GenerateRequest) -> Self {
        let custom = Self::custom(request.custom_brand.clone().unwrap_or_default());
        if !custom.is_none() {
            return custom;
        }
        Self::industry(request.industry.clone().unwrap_or_default())
    }
}
