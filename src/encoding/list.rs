use crate::{
    encoding::{
        ChurchBool, Encoding,
        boolean::{make_false, make_true},
        pair::{Pair, first, make_pair, second},
    },
    error::{ChurchError, EvalResult},
    runtime::Value,
};

encoding!(
    /// A persistent singly linked list.
    ///
    /// `nil = pair(true, true)` and `cons(h, t) = pair(false, pair(h, t))`.
    /// A cons cell stores its tail as-is, so [`tail`] hands back the very
    /// list that was passed to [`cons`].
    List,
    "List"
);

impl List {
    fn as_pair(&self) -> Pair {
        Pair::from_function(self.0.clone())
    }

    /// The `(head, tail)` pair of a cons cell. Meaningless on nil.
    fn cell(&self) -> EvalResult<Pair> {
        Pair::from_value(second(&self.as_pair())?)
    }
}

pub fn make_nil() -> List {
    List::from_function(make_pair(make_true().into(), make_true().into()).as_function().clone())
}

pub fn cons(head: Value, tail: &List) -> List {
    let cell = make_pair(head, tail.to_value());
    List::from_function(make_pair(make_false().into(), cell.into()).as_function().clone())
}

pub fn is_nil(list: &List) -> EvalResult<ChurchBool> {
    ChurchBool::from_value(first(&list.as_pair())?)
}

/// First element; fails with [`ChurchError::EmptyList`] on nil.
pub fn head(list: &List) -> EvalResult {
    let list_ref = list.clone();
    is_nil(list)?.branch(
        || Err(ChurchError::empty_list("head")),
        move || first(&list_ref.cell()?),
    )
}

/// Everything after the first element; fails with
/// [`ChurchError::EmptyList`] on nil.
pub fn tail(list: &List) -> EvalResult<List> {
    let list_ref = list.clone();
    let rest = is_nil(list)?.branch(
        || Err(ChurchError::empty_list("tail")),
        move || second(&list_ref.cell()?),
    )?;
    List::from_value(rest)
}
