use crate::core::TimeOrdered;
use crate::error::{TimelineError, TimelineResult};

/// Ordered sequence of scrobbles or points.
///
/// Collections built with [`PointCollection::from_sorted`] keep items ascending
/// by timestamp and support logarithmic time lookups. A collection built with
/// [`PointCollection::new`] and grown with `push` carries no ordering guarantee
/// and is only used as a plain list (e.g. highlighted pixel positions).
#[derive(Debug, Clone, PartialEq)]
pub struct PointCollection<T> {
    items: Vec<T>,
}

impl<T> Default for PointCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> PointCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get_first(&self) -> TimelineResult<&T> {
        self.items.first().ok_or(TimelineError::EmptyCollection)
    }

    pub fn get_last(&self) -> TimelineResult<&T> {
        self.items.last().ok_or(TimelineError::EmptyCollection)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Drains all items, leaving the collection empty.
    pub fn take_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }
}

impl<T: TimeOrdered> PointCollection<T> {
    /// Wraps items that are already sorted by timestamp.
    pub fn from_sorted(items: Vec<T>) -> TimelineResult<Self> {
        if items
            .windows(2)
            .any(|pair| pair[0].timestamp() > pair[1].timestamp())
        {
            return Err(TimelineError::InvalidData(
                "point collection items must be sorted by timestamp".to_owned(),
            ));
        }
        Ok(Self { items })
    }

    /// Last item with `timestamp <= time`, clamped to the first item.
    pub fn get_previous(&self, time: i64) -> TimelineResult<&T> {
        let first = self.get_first()?;
        let position = self.items.partition_point(|item| item.timestamp() <= time);
        Ok(position
            .checked_sub(1)
            .map_or(first, |last_qualifying| &self.items[last_qualifying]))
    }

    /// First item with `timestamp >= time`, clamped to the last item.
    pub fn get_next(&self, time: i64) -> TimelineResult<&T> {
        let last = self.get_last()?;
        let position = self.items.partition_point(|item| item.timestamp() < time);
        Ok(self.items.get(position).unwrap_or(last))
    }

    /// Position of `item` in this collection, matched by dataset index.
    #[must_use]
    pub fn position_of<U: TimeOrdered + ?Sized>(&self, item: &U) -> Option<usize> {
        let timestamp = item.timestamp();
        let start = self.items.partition_point(|entry| entry.timestamp() < timestamp);
        self.items[start..]
            .iter()
            .take_while(|entry| entry.timestamp() == timestamp)
            .position(|entry| entry.index() == item.index())
            .map(|offset| start + offset)
    }

    /// Walks from `item` by `shift` steps and returns the first item accepted
    /// by `filter`.
    ///
    /// `shift` is normally `1` or `-1`. Returns `None` when `item` is not in the
    /// collection, when `shift` is zero, or when the walk leaves the sequence
    /// without a match.
    pub fn get_adjacent<U, F>(&self, item: &U, shift: isize, filter: F) -> Option<&T>
    where
        U: TimeOrdered + ?Sized,
        F: Fn(&T) -> bool,
    {
        if shift == 0 {
            return None;
        }

        let mut position = self.position_of(item)?;
        loop {
            position = position.checked_add_signed(shift)?;
            let candidate = self.items.get(position)?;
            if filter(candidate) {
                return Some(candidate);
            }
        }
    }

    /// Unfiltered single-step neighbor in time order.
    pub fn get_neighbor<U: TimeOrdered + ?Sized>(&self, item: &U, shift: isize) -> Option<&T> {
        self.get_adjacent(item, shift, |_| true)
    }
}

impl<T: Clone> PointCollection<T> {
    /// Copies the inclusive `[first, last]` position range into a new collection.
    pub fn slice_inclusive(&self, first: usize, last: usize) -> TimelineResult<Self> {
        if first > last || last >= self.items.len() {
            return Err(TimelineError::InvalidData(format!(
                "slice [{first}, {last}] out of bounds for collection of {}",
                self.items.len()
            )));
        }
        Ok(Self {
            items: self.items[first..=last].to_vec(),
        })
    }
}

impl<'a, T> IntoIterator for &'a PointCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
