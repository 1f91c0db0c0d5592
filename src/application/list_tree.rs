//! ListTree - builds the entry arena once and renders it on demand

use crate::domain::entities::Entry;
use crate::domain::services::{
    assemble_lines, build_records, filter_items, group_rows, join_lines, normalize_items,
    render_prefixes, AssembleOptions, NormalizeOptions, TreeLine,
};
use crate::domain::services::assembler::DEFAULT_PROPERTY_SEPARATOR;
use crate::domain::services::normalizer::{DEFAULT_PAD_WIDTH, DEFAULT_PSEUDO_MARKER};
use crate::domain::value_objects::{
    Charset, DuplicatePolicy, FilterMode, GlyphSet, InputDialect, Orientation,
};
use crate::error::ListTreeResult;

/// Options that shape the entry collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub dialect: InputDialect,
    pub pad_width: usize,
    pub pseudo_marker: String,
    pub duplicates: DuplicatePolicy,
    pub infer_parents: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            dialect: InputDialect::default(),
            pad_width: DEFAULT_PAD_WIDTH,
            pseudo_marker: DEFAULT_PSEUDO_MARKER.to_string(),
            duplicates: DuplicatePolicy::default(),
            infer_parents: false,
        }
    }
}

impl BuildOptions {
    pub fn dot_space() -> Self {
        Self {
            dialect: InputDialect::DotSpace,
            ..Self::default()
        }
    }

    fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            dialect: self.dialect,
            pad_width: self.pad_width,
            pseudo_marker: self.pseudo_marker.clone(),
        }
    }
}

/// Options that only affect the printed lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub orientation: Orientation,
    pub charset: Charset,
    pub show_property: bool,
    pub property_separator: String,
    /// Overrides the orientation's default branch suffix
    pub branch_suffix: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            charset: Charset::default(),
            show_property: true,
            property_separator: DEFAULT_PROPERTY_SEPARATOR.to_string(),
            branch_suffix: None,
        }
    }
}

impl RenderOptions {
    pub fn mirrored() -> Self {
        Self {
            orientation: Orientation::Mirrored,
            ..Self::default()
        }
    }

    fn glyphs(&self) -> GlyphSet {
        let set = GlyphSet::new(self.orientation, self.charset);
        match &self.branch_suffix {
            Some(suffix) => set.with_branch_suffix(suffix.clone()),
            None => set,
        }
    }
}

/// A tree rebuilt from a flat list of path-like items
///
/// Construction runs the whole build pipeline; rendering never mutates the
/// entries, so the same tree can be printed in any orientation repeatedly.
#[derive(Debug, Clone)]
pub struct ListTree {
    items: Vec<String>,
    labels: Option<Vec<String>>,
    options: BuildOptions,
    entries: Vec<Entry>,
}

impl ListTree {
    /// Build from plain paths with default options
    pub fn new<I, S>(items: I) -> ListTreeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(collect(items), None, BuildOptions::default())
    }

    /// Build from plain paths, one label per path
    pub fn with_labels<I, S, L, T>(items: I, labels: L) -> ListTreeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::build(collect(items), Some(collect(labels)), BuildOptions::default())
    }

    /// Build from dot-space lines with default options
    pub fn dot_space<I, S>(lines: I) -> ListTreeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(collect(lines), None, BuildOptions::dot_space())
    }

    pub fn build(
        items: Vec<String>,
        labels: Option<Vec<String>>,
        options: BuildOptions,
    ) -> ListTreeResult<Self> {
        let normalized = normalize_items(&items, labels.as_deref(), &options.normalize_options())?;
        let records = build_records(normalized, options.infer_parents);
        let entries = group_rows(records, options.duplicates)?;

        Ok(Self {
            items,
            labels,
            options,
            entries,
        })
    }

    /// The raw items, in input order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The grouped rows, sorted by row index
    pub fn rows(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_level(&self) -> usize {
        self.entries.iter().map(|e| e.level).max().unwrap_or(0)
    }

    pub fn lines(&self, render: &RenderOptions) -> Vec<TreeLine> {
        let grid = render_prefixes(&self.entries);
        let assemble = AssembleOptions {
            dialect: self.options.dialect,
            orientation: render.orientation,
            show_property: render.show_property,
            property_separator: render.property_separator.clone(),
        };
        assemble_lines(&self.entries, &grid, &render.glyphs(), &assemble)
    }

    /// The tree as one newline-joined string
    pub fn render(&self, render: &RenderOptions) -> String {
        join_lines(&self.lines(render))
    }

    /// The raw items containing at least one keyword
    pub fn filter(&self, keywords: &[String], mode: FilterMode) -> ListTreeResult<Vec<&str>> {
        let kept = filter_items(&self.items, &self.entries, keywords, mode)?;
        Ok(kept.into_iter().map(|i| self.items[i].as_str()).collect())
    }

    /// A new tree holding the matched items and their ancestors
    pub fn subtree(&self, keywords: &[String]) -> ListTreeResult<ListTree> {
        let kept = filter_items(&self.items, &self.entries, keywords, FilterMode::Subtree)?;
        let items = kept.iter().map(|&i| self.items[i].clone()).collect();
        let labels = self
            .labels
            .as_ref()
            .map(|labels| kept.iter().map(|&i| labels[i].clone()).collect());
        Self::build(items, labels, self.options.clone())
    }
}

impl std::fmt::Display for ListTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

fn collect<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
