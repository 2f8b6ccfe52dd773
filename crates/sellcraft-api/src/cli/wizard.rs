//! Wizard state commands for the CLI.

use crate::state::AppState;

/// `sellcraft status` - Show the saved wizard state.
pub async fn status(state: &AppState, json: bool) -> anyhow::Result<()> {
    let wizard = state.creator.state().await;

    if json {
        let out = serde_json::json!({
            "step": wizard.step.to_string(),
            "idea_count": wizard.ideas.len(),
            "selected": wizard.selected.map(|id| id.to_string()),
            "has_raw_input": !wizard.raw_text.is_empty(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!();
        println!(
            "  {} Wizard step: {}",
            console::style("📋").bold(),
            console::style(wizard.step.to_string()).cyan()
        );
        println!("  Ideas saved: {}", wizard.ideas.len());
        if let Some(idea) = wizard.selected_idea() {
            println!("  Selected: {}", console::style(&idea.title).cyan());
        }
        println!();
    }

    Ok(())
}

/// `sellcraft reset` - Discard wizard state and snapshots.
pub async fn reset(state: &AppState, force: bool, json: bool) -> anyhow::Result<()> {
    let wizard = state.creator.state().await;
    if !force && !wizard.ideas.is_empty() {
        anyhow::bail!(
            "refusing to discard {} saved ideas; pass --force to confirm",
            wizard.ideas.len()
        );
    }

    state.creator.reset().await;

    if json {
        println!("{}", serde_json::json!({ "reset": true }));
    } else {
        println!();
        println!("  {} Wizard state cleared.", console::style("✓").green());
        println!();
    }

    Ok(())
}
