use std::io::{self, BufRead, Write};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use yb_core::ports::{SignMessagePort, WalletError};
use yb_core::Signature;

/// Asks the user whether a message may be signed.
#[async_trait]
pub trait ApprovalPrompt: Send + Sync {
    async fn approve(&self, message: &str) -> bool;
}

/// Reads `y`/`n` from stdin.
pub struct TerminalApprovalPrompt;

#[async_trait]
impl ApprovalPrompt for TerminalApprovalPrompt {
    async fn approve(&self, message: &str) -> bool {
        let message = message.to_string();
        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "Signature request:\n  {message}")?;
            write!(stdout, "Sign? [y/N] ")?;
            stdout.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(Err(err)) => {
                warn!(error = %err, "failed to read approval from terminal");
                false
            }
            Err(err) => {
                warn!(error = %err, "approval prompt task failed");
                false
            }
        }
    }
}

/// Wallet signer gated by an approval prompt.
pub struct PromptingSigner {
    inner: Arc<dyn SignMessagePort>,
    prompt: Arc<dyn ApprovalPrompt>,
}

impl PromptingSigner {
    pub fn new(inner: Arc<dyn SignMessagePort>, prompt: Arc<dyn ApprovalPrompt>) -> Self {
        Self { inner, prompt }
    }
}

#[async_trait]
impl SignMessagePort for PromptingSigner {
    async fn sign_message(&self, message: &str) -> Result<Signature, WalletError> {
        if !self.prompt.approve(message).await {
            info!("signature request declined at prompt");
            return Err(WalletError::Rejected);
        }
        self.inner.sign_message(message).await
    }
}
