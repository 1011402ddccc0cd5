//! Ask and projects commands - one-shot use of the pipeline from a terminal

use std::io::Write;

use async_trait::async_trait;
use clap::Args;

use crate::domain::{DomainError, OutboundMessage, ReplySink};

/// Arguments for the ask command
#[derive(Args, Clone, Debug)]
pub struct AskArgs {
    /// Message text, e.g. `summarize retail-sales`
    #[arg(required = true, trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Resolve one message and print the replies
pub async fn run(args: AskArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let resolver = crate::create_resolver(&config)?;

    resolver
        .handle_user_text(&args.text.join(" "), &StdoutSink)
        .await;

    Ok(())
}

/// Print the repository listing
pub async fn run_projects() -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let resolver = crate::create_resolver(&config)?;

    resolver.list_projects(&StdoutSink).await;

    Ok(())
}

/// Writes replies to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    fn render(message: &OutboundMessage) -> String {
        let mut rendered = message.text.clone();

        for link in &message.links {
            rendered.push_str(&format!("\n  - {} <{}>", link.label, link.url));
        }

        rendered.push('\n');
        rendered
    }
}

#[async_trait]
impl ReplySink for StdoutSink {
    async fn send(&self, message: OutboundMessage) -> Result<(), DomainError> {
        let mut stdout = std::io::stdout().lock();

        writeln!(stdout, "{}", Self::render(&message))
            .map_err(|e| DomainError::transport_send(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LinkButton;

    #[test]
    fn test_render_links() {
        let message = OutboundMessage::plain("Here are some repos:").with_links(vec![
            LinkButton::new("spoon-knife", "https://github.com/octocat/spoon-knife"),
        ]);

        assert_eq!(
            StdoutSink::render(&message),
            "Here are some repos:\n  - spoon-knife <https://github.com/octocat/spoon-knife>\n"
        );
    }
}
