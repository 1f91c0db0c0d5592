use anyhow::Result;

use listtree::presentation::json::emit;
use listtree::presentation::{filter_event, render_text, tree_event, OutputFormat};
use listtree::FilterMode;

use super::Context;
use crate::cli::{InputArgs, RenderArgs};

pub fn cmd_filter(
    ctx: &Context,
    input: &InputArgs,
    keywords: &[String],
    subtree: bool,
    as_tree: bool,
    render: &RenderArgs,
) -> Result<()> {
    let tree = ctx.load_tree(input)?;
    let mode = if subtree || as_tree {
        FilterMode::Subtree
    } else {
        FilterMode::Simple
    };
    let kept = tree.filter(keywords, mode)?;
    log::info!("{} of {} items matched", kept.len(), tree.items().len());

    if as_tree {
        if kept.is_empty() {
            return Ok(());
        }
        let sub = tree.subtree(keywords)?;
        let lines = sub.lines(&ctx.render_options(render));
        match ctx.format {
            OutputFormat::Json => emit(tree_event(&sub, &lines)?)?,
            OutputFormat::Text => println!("{}", render_text(&lines, ctx.color)),
        }
        return Ok(());
    }

    match ctx.format {
        OutputFormat::Json => emit(filter_event(keywords, mode, &kept))?,
        OutputFormat::Text => {
            for item in &kept {
                println!("{}", item);
            }
        }
    }
    Ok(())
}
