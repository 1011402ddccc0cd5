use serde::{Deserialize, Serialize};

/// How the transport should render the message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    #[default]
    Plain,
    /// `*bold*` style markers
    Markdown,
}

/// Inline button that opens a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkButton {
    pub label: String,
    pub url: String,
}

impl LinkButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A reply handed to the chat transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub text: String,
    pub format: MessageFormat,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkButton>,
    #[serde(default)]
    pub disable_link_preview: bool,
}

impl OutboundMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: MessageFormat::Plain,
            links: Vec::new(),
            disable_link_preview: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            format: MessageFormat::Markdown,
            ..Self::plain(text)
        }
    }

    pub fn with_links(mut self, links: Vec<LinkButton>) -> Self {
        self.links = links;
        self
    }

    pub fn without_link_preview(mut self) -> Self {
        self.disable_link_preview = true;
        self
    }
}
