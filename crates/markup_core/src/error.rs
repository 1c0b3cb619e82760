use thiserror::Error;

/// Errors raised while parsing input records or serializing markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("unknown availability {0:?} (expected InStock, OutOfStock or PreOrder)")]
    UnknownAvailability(String),

    #[error("unknown item condition {0:?} (expected New, Used or Refurbished)")]
    UnknownItemCondition(String),

    #[error("unknown article type {0:?} (expected Article, NewsArticle or BlogPosting)")]
    UnknownArticleType(String),

    #[error("unknown author type {0:?} (expected Person or Organization)")]
    UnknownAuthorType(String),

    #[error("unknown schema kind {0:?} (expected faq, product, local-business or article)")]
    UnknownSchemaKind(String),

    #[error("failed to serialize markup: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
