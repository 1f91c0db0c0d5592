//! Command handlers
//!
//! Each handler takes the resolved context plus its parsed arguments and
//! writes to stdout. Errors bubble up to `main` as `anyhow` errors.

pub mod filter;
pub mod render;
pub mod rows;

use anyhow::{Context as _, Result};

use listtree::infrastructure::{read_items, read_labels};
use listtree::presentation::{color_enabled, detect_capabilities, OutputFormat};
use listtree::{BuildOptions, Charset, Config, ConfigWarning, ListTree, Orientation, RenderOptions};

use crate::cli::{Cli, InputArgs, RenderArgs};

/// Settings shared by every command
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
    pub color: bool,
    /// False on terminals that cannot draw box characters (`TERM=dumb`)
    pub unicode: bool,
}

impl Context {
    pub fn new(config: Config, cli: &Cli) -> Self {
        let format = OutputFormat::from_json_flag(cli.json);
        let caps = detect_capabilities();
        let mode = cli.color.unwrap_or(config.output.color);
        let color = format == OutputFormat::Text && color_enabled(mode, &caps);
        Self {
            config,
            format,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Config build options with input flags on top
    pub fn build_options(&self, args: &InputArgs) -> BuildOptions {
        let mut options = self.config.build_options();
        if let Some(dialect) = args.dialect {
            options.dialect = dialect;
        }
        if let Some(pad_width) = args.pad_width {
            options.pad_width = pad_width;
        }
        if let Some(duplicates) = args.duplicates {
            options.duplicates = duplicates;
        }
        if args.infer_parents {
            options.infer_parents = true;
        }
        options
    }

    /// Config render options with render flags on top
    pub fn render_options(&self, args: &RenderArgs) -> RenderOptions {
        let mut options = self.config.render_options();
        if args.mirrored {
            options.orientation = Orientation::Mirrored;
        }
        if args.ascii || !self.unicode {
            options.charset = Charset::Ascii;
        }
        if args.no_property {
            options.show_property = false;
        }
        options
    }

    /// Read the input and build the tree
    pub fn load_tree(&self, args: &InputArgs) -> Result<ListTree> {
        let source = args
            .input
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string());

        let parsed = read_items(args.input.as_deref(), args.tab_labels)
            .with_context(|| format!("Failed to read items from {}", source))?;

        let labels = match &args.labels {
            Some(path) => Some(
                read_labels(path)
                    .with_context(|| format!("Failed to read labels from {}", path.display()))?,
            ),
            None => parsed.labels,
        };

        ListTree::build(parsed.items, labels, self.build_options(args))
            .with_context(|| format!("Failed to build tree from {}", source))
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listtree::{DuplicatePolicy, InputDialect};

    fn context(config: Config) -> Context {
        Context {
            config,
            format: OutputFormat::Text,
            color: false,
            unicode: true,
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.build.duplicates = DuplicatePolicy::Reject;
        config.render.show_property = true;
        let ctx = context(config);

        let input = InputArgs {
            dialect: Some(InputDialect::DotSpace),
            duplicates: Some(DuplicatePolicy::Merge),
            ..InputArgs::default()
        };
        let build = ctx.build_options(&input);
        assert_eq!(build.dialect, InputDialect::DotSpace);
        assert_eq!(build.duplicates, DuplicatePolicy::Merge);

        let render = ctx.render_options(&RenderArgs {
            mirrored: true,
            no_property: true,
            ..RenderArgs::default()
        });
        assert_eq!(render.orientation, Orientation::Mirrored);
        assert!(!render.show_property);
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = Config::default();
        config.build.infer_parents = true;
        config.render.charset = Charset::Ascii;
        let ctx = context(config);

        assert!(ctx.build_options(&InputArgs::default()).infer_parents);
        assert_eq!(ctx.render_options(&RenderArgs::default()).charset, Charset::Ascii);
    }

    #[test]
    fn dumb_terminal_falls_back_to_ascii() {
        let ctx = Context {
            unicode: false,
            ..context(Config::default())
        };
        assert_eq!(ctx.render_options(&RenderArgs::default()).charset, Charset::Ascii);
        assert_eq!(
            context(Config::default()).render_options(&RenderArgs::default()).charset,
            Charset::Unicode
        );
    }
}
