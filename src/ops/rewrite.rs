//! Caret-constraint rewriting over a format-preserving pyproject document.
//!
//! The walker only ever visits the two Poetry dependency-table locations:
//! `[tool.poetry.dependencies]` and `[tool.poetry.group.<name>.dependencies]`.
//! Everything else in the document serializes byte-identical to the input.

use toml_edit::{DocumentMut, Item, TableLike, Value};

/// How a caret constraint is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteMode {
    /// `^1.2.3` becomes `>=1.2.3`.
    #[default]
    Minimum,
    /// `^1.2.3` becomes `1.2.3`, an exact pin in Poetry.
    Pin,
}

impl RewriteMode {
    pub fn from_pin(pin: bool) -> Self {
        if pin { RewriteMode::Pin } else { RewriteMode::Minimum }
    }
}

/// Shape of one dependency-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A plain constraint string, e.g. `black = "^23.1.0"`.
    Bare,
    /// A table-like value carrying a string `version` field alongside
    /// passthrough attributes, e.g. `{version = "^3.0.0", extras = ["pydantic"]}`.
    Attributed,
    /// Anything else: booleans, arrays, tables without a `version` string.
    /// Never rewritten.
    Opaque,
}

/// Classifies a dependency-table entry without modifying it.
///
/// Deliberately permissive: unexpected shapes fall through to
/// [`ConstraintKind::Opaque`] rather than erroring, so an unusual manifest
/// layout never aborts the run.
pub fn classify(item: &Item) -> ConstraintKind {
    if item.as_str().is_some() {
        ConstraintKind::Bare
    } else if item
        .as_table_like()
        .and_then(|table| table.get("version"))
        .and_then(Item::as_str)
        .is_some()
    {
        ConstraintKind::Attributed
    } else {
        ConstraintKind::Opaque
    }
}

/// Rewrites a single version-constraint string.
///
/// Only the leading caret sigil is inspected; the remainder of the string is
/// carried over untouched and never validated. Anything not starting with `^`
/// is returned unchanged, so the function is total over arbitrary input.
pub fn rewrite_constraint(constraint: &str, mode: RewriteMode) -> String {
    match constraint.strip_prefix('^') {
        Some(version) => match mode {
            RewriteMode::Minimum => format!(">={version}"),
            RewriteMode::Pin => version.to_string(),
        },
        None => constraint.to_string(),
    }
}

/// Removes caret caps from both Poetry dependency-table locations.
///
/// Missing tables are treated as empty. Returns the number of constraints
/// rewritten.
pub fn uncap_document(doc: &mut DocumentMut, mode: RewriteMode) -> usize {
    let mut count = 0;

    if let Some(deps) = doc
        .get_mut("tool")
        .and_then(|tool| tool.get_mut("poetry"))
        .and_then(|poetry| poetry.get_mut("dependencies"))
        .and_then(Item::as_table_like_mut)
    {
        count += uncap_table(deps, mode);
    }

    if let Some(groups) = doc
        .get_mut("tool")
        .and_then(|tool| tool.get_mut("poetry"))
        .and_then(|poetry| poetry.get_mut("group"))
        .and_then(Item::as_table_like_mut)
    {
        for (name, group) in groups.iter_mut() {
            if let Some(deps) = group
                .get_mut("dependencies")
                .and_then(Item::as_table_like_mut)
            {
                log::debug!("Walking dependency group '{}'", name.get());
                count += uncap_table(deps, mode);
            }
        }
    }

    count
}

/// Applies the rewrite to every entry of one dependency table.
///
/// Entries are independent; `python` gets no special treatment and is
/// rewritten like any other dependency.
fn uncap_table(table: &mut dyn TableLike, mode: RewriteMode) -> usize {
    let mut count = 0;

    for (key, item) in table.iter_mut() {
        let rewritten = match classify(item) {
            ConstraintKind::Bare => rewrite_string_item(item, mode),
            ConstraintKind::Attributed => item
                .get_mut("version")
                .is_some_and(|version| rewrite_string_item(version, mode)),
            ConstraintKind::Opaque => false,
        };

        if rewritten {
            log::debug!("Uncapped constraint for '{}'", key.get());
            count += 1;
        }
    }

    count
}

/// Replaces a string item's semantic value in place, keeping its surrounding
/// decor (whitespace and trailing comments) so untouched lexical content
/// survives serialization.
fn rewrite_string_item(item: &mut Item, mode: RewriteMode) -> bool {
    let Some(current) = item.as_str().map(str::to_owned) else {
        return false;
    };

    let rewritten = rewrite_constraint(&current, mode);
    if rewritten == current {
        return false;
    }

    if let Some(value) = item.as_value_mut() {
        let decor = value.decor().clone();
        let mut replacement = Value::from(rewritten);
        *replacement.decor_mut() = decor;
        *value = replacement;
        return true;
    }

    false
}
