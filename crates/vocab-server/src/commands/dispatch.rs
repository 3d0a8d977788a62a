use vocab_config::VocabConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Build the shared context and route to the command handler.
pub async fn dispatch(
    command: Commands,
    config: VocabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ctx = AppContext::init(config).await?;
    match command {
        Commands::Generate => super::generate::handle(&ctx, flags).await,
        Commands::Serve { bind } => super::serve::handle(&ctx, bind.as_deref(), flags).await,
    }
}
