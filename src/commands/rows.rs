use anyhow::Result;
use serde_json::json;

use listtree::presentation::json::emit;
use listtree::presentation::{rows_table, OutputFormat};

use super::Context;
use crate::cli::InputArgs;

pub fn cmd_rows(ctx: &Context, input: &InputArgs) -> Result<()> {
    let tree = ctx.load_tree(input)?;

    match ctx.format {
        OutputFormat::Json => emit(json!({
            "event": "rows",
            "rows": serde_json::to_value(tree.rows())?,
        }))?,
        OutputFormat::Text => print!("{}", rows_table(tree.rows())),
    }
    Ok(())
}
