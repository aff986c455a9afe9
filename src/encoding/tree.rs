//! Binary trees: the empty tree is nil, a node is the list
//! `[value, left, right]`.
use crate::{
    encoding::{
        ChurchBool, Encoding, List, Numeral,
        arithmetic::add,
        list::{cons, head, is_nil, make_nil, tail},
        list_ops::append_with_limit,
        numeral::{make_zero, successor},
        recursion::{DEFAULT_RECURSION_LIMIT, recursive_with_limit},
    },
    error::{ChurchError, EvalResult},
    runtime::Value,
};

encoding!(
    /// Nil, or a three-element list of value and subtrees.
    Tree,
    "Tree"
);

impl Tree {
    fn as_list(&self) -> List {
        List::from_function(self.0.clone())
    }

    /// The node's list after dropping `skip` cells, or `EmptyList` on the
    /// empty tree.
    fn field(&self, operation: &'static str, skip: usize) -> EvalResult {
        let list = self.as_list();
        is_nil(&list)?.branch(
            move || Err(ChurchError::empty_list(operation)),
            move || {
                let mut rest = list.clone();
                for _ in 0..skip {
                    rest = tail(&rest)?;
                }
                head(&rest)
            },
        )
    }
}

pub fn empty() -> Tree {
    Tree::from_function(make_nil().as_function().clone())
}

pub fn node(value: Value, left: &Tree, right: &Tree) -> Tree {
    let fields = cons(right.to_value(), &make_nil());
    let fields = cons(left.to_value(), &fields);
    Tree::from_function(cons(value, &fields).as_function().clone())
}

pub fn is_empty(tree: &Tree) -> EvalResult<ChurchBool> {
    is_nil(&tree.as_list())
}

pub fn value(tree: &Tree) -> EvalResult {
    tree.field("value", 0)
}

pub fn left(tree: &Tree) -> EvalResult<Tree> {
    Tree::from_value(tree.field("left", 1)?)
}

pub fn right(tree: &Tree) -> EvalResult<Tree> {
    Tree::from_value(tree.field("right", 2)?)
}

/// Number of nodes.
pub fn size(tree: &Tree) -> EvalResult<Numeral> {
    size_with_limit(tree, DEFAULT_RECURSION_LIMIT)
}

/// Unfolds once per level, so `limit` bounds the tree's height.
pub fn size_with_limit(tree: &Tree, limit: usize) -> EvalResult<Numeral> {
    let step = recursive_with_limit("size", limit, |recur, arg| {
        let tree = Tree::from_value(arg)?;
        let (cell, recur) = (tree.clone(), recur.clone());
        is_empty(&tree)?.branch(
            || Ok(make_zero().into()),
            move || {
                let l = Numeral::from_value(recur.call(left(&cell)?.into())?)?;
                let r = Numeral::from_value(recur.call(right(&cell)?.into())?)?;
                Ok(successor(&add(&l, &r)).into())
            },
        )
    })?;
    Numeral::from_value(step.call(tree.to_value())?)
}

/// Values in left-to-right order.
pub fn in_order(tree: &Tree) -> EvalResult<List> {
    in_order_with_limit(tree, DEFAULT_RECURSION_LIMIT)
}

pub fn in_order_with_limit(tree: &Tree, limit: usize) -> EvalResult<List> {
    let step = recursive_with_limit("in_order", limit, move |recur, arg| {
        let tree = Tree::from_value(arg)?;
        let (cell, recur) = (tree.clone(), recur.clone());
        is_empty(&tree)?.branch(
            || Ok(make_nil().into()),
            move || {
                let l = List::from_value(recur.call(left(&cell)?.into())?)?;
                let r = List::from_value(recur.call(right(&cell)?.into())?)?;
                Ok(append_with_limit(&l, &cons(value(&cell)?, &r), limit)?.into())
            },
        )
    })?;
    List::from_value(step.call(tree.to_value())?)
}
