//! Entry selection with optional rest partition.

use crate::engine::{traverse, Accumulator, Entry, Fold};
use crate::options::TraversalOptions;
use objwalk_types::{Error, Object, Result, Value};

/// Kept and rejected entries, shaped like the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub kept: Object,
    pub rest: Object,
}

impl Accumulator for Partition {
    fn assign(&mut self, key: &str, nested: Self) -> Result<()> {
        self.kept.set(key, nested.kept)?;
        if !nested.rest.is_empty() {
            self.rest.set(key, nested.rest)?;
        }
        Ok(())
    }

    fn freeze(&mut self) {
        self.kept.freeze_deep();
        self.rest.freeze_deep();
    }
}

/// Result of a filter: the kept entries, plus the rejected ones when
/// `with_rest` was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Kept(Object),
    Split { kept: Object, rest: Object },
}

impl Selection {
    #[must_use]
    pub fn kept(&self) -> &Object {
        match self {
            Selection::Kept(kept) | Selection::Split { kept, .. } => kept,
        }
    }

    #[must_use]
    pub fn rest(&self) -> Option<&Object> {
        match self {
            Selection::Kept(_) => None,
            Selection::Split { rest, .. } => Some(rest),
        }
    }

    #[must_use]
    pub fn into_kept(self) -> Object {
        match self {
            Selection::Kept(kept) | Selection::Split { kept, .. } => kept,
        }
    }

    #[must_use]
    pub fn into_parts(self) -> (Object, Option<Object>) {
        match self {
            Selection::Kept(kept) => (kept, None),
            Selection::Split { kept, rest } => (kept, Some(rest)),
        }
    }
}

/// Default filter predicate: keeps every entry whose value is not undefined.
#[must_use]
pub fn is_defined(entry: Entry<'_>) -> bool {
    !entry.value.is_undefined()
}

struct FilterFold<P> {
    predicate: P,
    with_rest: bool,
}

impl<P, E> Fold for FilterFold<P>
where
    P: FnMut(Entry<'_>) -> std::result::Result<bool, E>,
    E: From<Error>,
{
    type Acc = Partition;
    type Error = E;

    fn entry(&mut self, acc: &mut Partition, entry: Entry<'_>) -> std::result::Result<(), E> {
        if (self.predicate)(entry)? {
            acc.kept.set(entry.key, entry.value.clone())?;
        } else if self.with_rest {
            acc.rest.set(entry.key, entry.value.clone())?;
        }
        Ok(())
    }
}

/// Deep filter with the default predicate, dropping undefined values at
/// every level.
pub fn filter(value: &Value) -> Result<Object> {
    let options = TraversalOptions::new().deep();
    filter_by(value, &options, is_defined).map(Selection::into_kept)
}

/// Keeps the entries accepted by `predicate`.
///
/// With `options.deep`, nested plain objects are filtered recursively and
/// their kept part always appears at the same key; their rejected part
/// appears in the rest only when non-empty. Undefined or null input yields
/// empty results.
pub fn filter_by<P>(
    value: &Value,
    options: &TraversalOptions,
    mut predicate: P,
) -> Result<Selection>
where
    P: FnMut(Entry<'_>) -> bool,
{
    try_filter_by(value, options, |entry| Ok::<_, Error>(predicate(entry)))
}

/// [`filter_by`] with a fallible predicate. The first error aborts the
/// traversal.
pub fn try_filter_by<P, E>(
    value: &Value,
    options: &TraversalOptions,
    predicate: P,
) -> std::result::Result<Selection, E>
where
    P: FnMut(Entry<'_>) -> std::result::Result<bool, E>,
    E: From<Error>,
{
    let mut fold = FilterFold {
        predicate,
        with_rest: options.with_rest,
    };
    let Partition { kept, rest } = traverse(value, options, &mut fold)?;
    Ok(if options.with_rest {
        Selection::Split { kept, rest }
    } else {
        Selection::Kept(kept)
    })
}

/// Splits entries into `(kept, rest)` regardless of `options.with_rest`.
pub fn partition<P>(
    value: &Value,
    options: &TraversalOptions,
    predicate: P,
) -> Result<(Object, Object)>
where
    P: FnMut(Entry<'_>) -> bool,
{
    let options = options.clone().with_rest();
    let (kept, rest) = filter_by(value, &options, predicate)?.into_parts();
    Ok((kept, rest.unwrap_or_default()))
}
