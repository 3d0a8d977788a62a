use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vocab-mate generate`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx
        .daily
        .generate_daily_batch()
        .await
        .context("daily sentence generation failed")?;
    output(&response, flags.format)
}
