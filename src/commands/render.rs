use anyhow::Result;

use listtree::presentation::json::emit;
use listtree::presentation::{render_text, tree_event, OutputFormat};

use super::Context;
use crate::cli::{InputArgs, RenderArgs};

pub fn cmd_render(ctx: &Context, input: &InputArgs, render: &RenderArgs) -> Result<()> {
    let tree = ctx.load_tree(input)?;
    let lines = tree.lines(&ctx.render_options(render));

    match ctx.format {
        OutputFormat::Json => emit(tree_event(&tree, &lines)?)?,
        OutputFormat::Text => println!("{}", render_text(&lines, ctx.color)),
    }
    Ok(())
}
