//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable cons-list whose
//! nodes are shared between lists through `Rc`.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`), head and tail access
//! - O(n) `len`: the length is not cached, it is counted by walking the list
//! - O(n) `append`, `reverse` and `filter`
//! - quicksort-based `sort` / `sort_by`, O(n log n) on average
//!
//! Equality and ordering are structural: lists compare lexicographically and
//! the empty list is the unique minimum, so a strict prefix sorts first.
//!
//! # Examples
//!
//! ```rust
//! use corelude::persistent::PersistentList;
//!
//! let list = PersistentList::of(&[1, 2, 3]);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(format!("{list}"), "[1, 2, 3]");
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! assert!(PersistentList::of(&[1]) < PersistentList::of(&[1, 2]));
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use crate::typeclass::{
    Alternative, Applicative, Foldable, Functor, Monad, Monoid, Semigroup, Traversable,
    TypeConstructor,
};

/// A cell of the list. `next` is `None` at the end of the chain.
struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(n)       |
/// | `of`      | O(n)       |
/// | `append`  | O(n)       |
/// | `filter`  | O(n)       |
/// | `sort`    | O(n log n) average, O(n²) worst |
///
/// # Examples
///
/// ```rust
/// use corelude::persistent::PersistentList;
///
/// let list = PersistentList::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
pub struct PersistentList<T> {
    head: Option<Rc<Node<T>>>,
}

impl<T> Clone for PersistentList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

/// Unlinks uniquely owned nodes one at a time; the default recursive drop
/// would use stack proportional to the list length.
impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list from a Vec, popping from the back so no reversal is
    /// needed.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list = list.cons(element);
        }
        list
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares every node of `self`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list, PersistentList::of(&[1, 2, 3]));
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
        }
    }

    /// Returns a reference to the first element, or `None` when empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of an empty list is empty. The result shares structure with
    /// `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let list = PersistentList::of(&[1, 2, 3]);
    /// assert_eq!(list.tail(), PersistentList::of(&[2, 3]));
    /// ```
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        Self {
            head: self.head.as_ref().and_then(|node| node.next.clone()),
        }
    }

    /// Splits the list into its head and tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let list = PersistentList::of(&[1, 2]);
    /// let (head, tail) = list.uncons().unwrap();
    /// assert_eq!(*head, 1);
    /// assert_eq!(tail, PersistentList::singleton(2));
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            (
                &node.element,
                Self {
                    head: node.next.clone(),
                },
            )
        })
    }

    /// Counts the elements by walking the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_ref(),
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &Rc<Node<T>>> {
        std::iter::successors(self.head.as_ref(), |node| node.next.as_ref())
    }
}

impl<T: Clone> PersistentList<T> {
    /// Builds a list holding the elements of a slice, in order.
    ///
    /// The index counts down from `elements.len()` to `1`; each step prepends
    /// `elements[index - 1]` to the list built so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let list = PersistentList::of(&[1, 2]);
    /// assert_eq!(list, PersistentList::new().cons(2).cons(1));
    /// assert!(PersistentList::<i32>::of(&[]).is_empty());
    /// ```
    #[must_use]
    pub fn of(elements: &[T]) -> Self {
        (1..=elements.len())
            .rev()
            .fold(Self::new(), |list, index| list.cons(elements[index - 1].clone()))
    }

    /// Appends another list to this list.
    ///
    /// The elements of `self` are copied; `other` becomes the shared tail of
    /// the result. Appending to or from an empty list returns the other side
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let combined = PersistentList::of(&[1, 2]).append(&PersistentList::of(&[3, 4]));
    /// assert_eq!(combined, PersistentList::of(&[1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }

    /// Returns a new list with the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| reversed.cons(element.clone()))
    }

    /// Keeps the elements that satisfy `predicate`, in their original order.
    ///
    /// The tail is handled before the head, so `predicate` sees the elements
    /// from last to first. The longest suffix in which every element passes
    /// is shared with `self` rather than copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let list = PersistentList::of(&[1, 2, 3, 4, 5]);
    /// assert_eq!(list.filter(|x| x % 2 == 1), PersistentList::of(&[1, 3, 5]));
    /// assert!(list.filter(|_| false).is_empty());
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let nodes: Vec<&Rc<Node<T>>> = self.nodes().collect();
        let mut result = Self::new();
        // `result` is the very suffix that follows the node being visited.
        let mut sharing = true;
        for node in nodes.into_iter().rev() {
            if predicate(&node.element) {
                result = if sharing {
                    Self {
                        head: Some(Rc::clone(node)),
                    }
                } else {
                    result.cons(node.element.clone())
                };
            } else {
                sharing = false;
            }
        }
        result
    }

    /// Sorts the list with a caller-supplied comparator.
    ///
    /// Quicksort with the head as pivot. One front-to-back pass over the
    /// rest prepends each element to the less, equal or greater bucket
    /// according to `compare(element, pivot)`; the pivot seeds the equal
    /// bucket. The result is `sort(less) ++ equal ++ sort(greater)`.
    ///
    /// Because the buckets are built by prepending, elements that compare
    /// equal come out in reverse encounter order: the sort is not stable.
    ///
    /// # Complexity
    ///
    /// O(n log n) on average, O(n²) for already sorted input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let list = PersistentList::of(&[(1, 'a'), (0, 'z'), (1, 'b')]);
    /// let sorted = list.sort_by(|left, right| left.0.cmp(&right.0));
    /// assert_eq!(sorted, PersistentList::of(&[(0, 'z'), (1, 'b'), (1, 'a')]));
    /// ```
    #[must_use]
    pub fn sort_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Self::quicksort(self, &mut compare)
    }

    fn quicksort<F>(list: &Self, compare: &mut F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let Some((pivot, rest)) = list.uncons() else {
            return Self::new();
        };

        let mut less = Self::new();
        let mut equal = Self::singleton(pivot.clone());
        let mut greater = Self::new();
        let (mut less_count, mut equal_count, mut greater_count) = (0_usize, 1_usize, 0_usize);

        for element in &rest {
            match compare(element, pivot) {
                Ordering::Less => {
                    less = less.cons(element.clone());
                    less_count += 1;
                }
                Ordering::Equal => {
                    equal = equal.cons(element.clone());
                    equal_count += 1;
                }
                Ordering::Greater => {
                    greater = greater.cons(element.clone());
                    greater_count += 1;
                }
            }
        }

        tracing::trace!(
            less = less_count,
            equal = equal_count,
            greater = greater_count,
            "partitioned around pivot"
        );

        Self::quicksort(&less, compare)
            .append(&equal)
            .append(&Self::quicksort(&greater, compare))
    }
}

impl<T: Clone + Ord> PersistentList<T> {
    /// Sorts the list in ascending order.
    ///
    /// See [`sort_by`](PersistentList::sort_by) for the algorithm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let list = PersistentList::of(&[3, 1, 2, 1]);
    /// assert_eq!(list.sort(), PersistentList::of(&[1, 1, 2, 3]));
    /// ```
    #[must_use]
    pub fn sort(&self) -> Self {
        self.sort_by(T::cmp)
    }
}

// =============================================================================
// Specialized Methods for Nested Lists
// =============================================================================

impl<T: Clone> PersistentList<PersistentList<T>> {
    /// Concatenates a list of lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::persistent::PersistentList;
    ///
    /// let nested = PersistentList::of(&[PersistentList::of(&[1, 2]), PersistentList::of(&[3])]);
    /// assert_eq!(nested.flatten(), PersistentList::of(&[1, 2, 3]));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> PersistentList<T> {
        let lists: Vec<&PersistentList<T>> = self.iter().collect();
        lists
            .into_iter()
            .rev()
            .fold(PersistentList::new(), |flattened, list| list.append(&flattened))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            &node.element
        })
    }
}

/// An owning iterator over elements of a [`PersistentList`].
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self
            .list
            .uncons()
            .map(|(head, tail)| (head.clone(), tail))?;
        self.list = tail;
        Some(head)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: PartialOrd> PartialOrd for PersistentList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

/// Lexicographic order with the empty list as the unique minimum.
///
/// Heads are compared first; on a tie the tails decide. A strict prefix is
/// less than the longer list.
///
/// # Examples
///
/// ```rust
/// use corelude::persistent::PersistentList;
/// use std::cmp::Ordering;
///
/// let empty = PersistentList::<i32>::new();
/// assert_eq!(empty.cmp(&empty), Ordering::Equal);
/// assert_eq!(PersistentList::of(&[1]).cmp(&empty), Ordering::Greater);
/// assert_eq!(PersistentList::of(&[1]).cmp(&PersistentList::of(&[1, 2])), Ordering::Less);
/// ```
impl<T: Ord> Ord for PersistentList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0_usize;
        for element in self {
            element.hash(state);
            count += 1;
        }
        // Terminates the element sequence so nested lists hash unambiguously.
        count.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `[e1, e2, ..., en]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentList<T> {
    type Inner = T;
    type WithType<B> = PersistentList<B>;
}

impl<T: Clone> Functor for PersistentList<T> {
    fn fmap<B, F>(self, function: F) -> PersistentList<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

/// The "all combinations" applicative: `map2` pairs each element of `self`
/// with every element of `other`, `self` outermost.
///
/// # Examples
///
/// ```rust
/// use corelude::persistent::PersistentList;
/// use corelude::typeclass::Applicative;
///
/// let functions: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 10];
/// let applied = PersistentList::of(&functions).apply(PersistentList::of(&[1, 2]));
/// assert_eq!(applied, PersistentList::of(&[2, 3, 10, 20]));
/// ```
impl<T: Clone> Applicative for PersistentList<T> {
    #[inline]
    fn pure<B>(value: B) -> PersistentList<B> {
        PersistentList::singleton(value)
    }

    fn map2<B, C, F>(self, other: PersistentList<B>, mut function: F) -> PersistentList<C>
    where
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        let mut combined = Vec::new();
        for left in &self {
            for right in &other {
                combined.push(function(left.clone(), right.clone()));
            }
        }
        PersistentList::from(combined)
    }

    fn map2_deferred<B, C, F, G>(self, other: G, function: F) -> PersistentList<C>
    where
        B: Clone,
        F: FnMut(T, B) -> C,
        G: FnOnce() -> PersistentList<B>,
    {
        if self.is_empty() {
            PersistentList::new()
        } else {
            self.map2(other(), function)
        }
    }
}

/// Choice on lists is concatenation; the empty list is the failure value.
impl<T: Clone> Alternative for PersistentList<T> {
    #[inline]
    fn empty<B>() -> PersistentList<B> {
        PersistentList::new()
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.append(&alternative)
    }

    fn optional(self) -> PersistentList<Option<T>> {
        self.fmap(Some).append(&PersistentList::singleton(None))
    }
}

impl<T: Clone> Monad for PersistentList<T> {
    fn flat_map<B, F>(self, function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(T) -> PersistentList<B>,
    {
        self.fmap(function).flatten()
    }
}

impl<T: Clone> Foldable for PersistentList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

/// Traversal is a right fold whose step is
/// `function(element).map2(accumulator, cons)`, seeded with `pure([])`.
///
/// `function` is therefore called from the last element to the first, while
/// the applicative combines its results front to back.
///
/// # Examples
///
/// ```rust
/// use corelude::persistent::PersistentList;
/// use corelude::typeclass::Traversable;
///
/// let texts = PersistentList::of(&["1", "2", "3"]);
/// let numbers: Option<PersistentList<i32>> = texts.traverse(|text| text.parse().ok());
/// assert_eq!(numbers, Some(PersistentList::of(&[1, 2, 3])));
/// ```
impl<T: Clone> Traversable for PersistentList<T> {
    fn traverse<G, F>(self, mut function: F) -> G::WithType<PersistentList<G::Inner>>
    where
        G: Applicative,
        G::Inner: Clone,
        F: FnMut(T) -> G,
    {
        self.fold_right(G::pure(PersistentList::new()), |element, accumulator| {
            function(element).map2(accumulator, |head, tail: PersistentList<G::Inner>| {
                tail.cons(head)
            })
        })
    }
}

impl<T: Clone> Semigroup for PersistentList<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for PersistentList<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::new();
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(PersistentList::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
