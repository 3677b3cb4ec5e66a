// src/cli/handlers.rs
use anyhow::anyhow;
use console::style;

use crate::core::config::Config;
use crate::models::CharClass;
use crate::ui::strength::{StrengthBand, StrengthIndicator};
use crate::ui::{
    ActionError, Clipboard, HttpPasswordApi, PageController, PageState, PasswordApi, SystemClipboard,
};

const BAR_CELLS: usize = 20;

pub type Controller = PageController<HttpPasswordApi, SystemClipboard>;

/// Controller wired to the HTTP API and the system clipboard. `api_url`
/// overrides the configured base URL.
pub fn build_controller(config: &Config, api_url: Option<String>) -> Controller {
    let api_url = api_url.unwrap_or_else(|| config.api_url.clone());
    log::debug!("Using password API at {}", api_url);

    PageController::new(
        HttpPasswordApi::new(api_url),
        SystemClipboard::new(),
        PageState::new(config.default_password_length),
    )
}

pub async fn handle_generate<A, C>(
    controller: &PageController<A, C>,
    length: Option<usize>,
    excluded: &[CharClass],
    copy: bool,
) -> anyhow::Result<()>
where
    A: PasswordApi,
    C: Clipboard,
{
    if let Some(length) = length {
        controller.set_length_input(length.to_string());
    }
    for class in excluded {
        controller.set_included(*class, false);
    }

    controller.generate().await.map_err(alert)?;

    let page = controller.snapshot();
    println!("🔑 {}", style(&page.password_output).bold());
    println!("{}", strength_bar(&page.generated_strength));

    if copy {
        controller.copy().await.map_err(alert)?;
        controller.persist_clipboard().await.map_err(alert)?;
        println!("📋 Copied to clipboard");
    }

    Ok(())
}

pub async fn handle_evaluate<A, C>(controller: &PageController<A, C>, password: &str) -> anyhow::Result<()>
where
    A: PasswordApi,
    C: Clipboard,
{
    controller.input_existing_password(password);
    controller.evaluate().await.map_err(alert)?;

    let page = controller.snapshot();
    println!("{}", strength_bar(&page.existing_strength));
    println!("{}", page.feedback.content);

    Ok(())
}

pub async fn handle_strengthen<A, C>(controller: &PageController<A, C>, password: &str) -> anyhow::Result<()>
where
    A: PasswordApi,
    C: Clipboard,
{
    controller.input_existing_password(password);
    let outcome = controller.strengthen().await.map_err(alert)?;

    let page = controller.snapshot();
    println!("🔑 {}", style(&outcome.strong_password).bold());
    println!("{}", strength_bar(&page.existing_strength));
    println!("{}", page.feedback.content);

    Ok(())
}

/// Prints the alert the way the page would show it and keeps the cause
/// for the exit status.
pub fn alert(err: ActionError) -> anyhow::Error {
    eprintln!("{}", style(format!("⚠️  {}", err.alert_message())).red());
    anyhow!(err)
}

/// Text rendition of a strength bar: 20 cells filled to the band width,
/// colored by band, followed by the caption.
pub fn strength_bar(indicator: &StrengthIndicator) -> String {
    let filled = indicator.width_percent() as usize * BAR_CELLS / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled));

    let bar = match indicator.band() {
        Some(StrengthBand::VeryWeak) | Some(StrengthBand::Weak) => style(bar).red(),
        Some(StrengthBand::Medium) => style(bar).yellow(),
        Some(StrengthBand::Strong) => style(bar).green(),
        Some(StrengthBand::VeryStrong) => style(bar).green().bold(),
        None => style(bar).dim(),
    };

    format!("{} {}", bar, indicator.text())
}
