use anyhow::Result;

use super::{CommandContext, run_document};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    run_document(&ctx, &query, variables.as_deref())
}
