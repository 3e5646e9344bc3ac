//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints its items with their own `Display` impl and a fixed
//! message when empty.

use std::{fmt, ops::Index};

use crate::models::{DayPlan, ExecutionRecord, Exercise};

/// Generates the slice-like accessors shared by every collection wrapper.
macro_rules! collection_wrapper {
    ($wrapper:ident, $item:ty) => {
        impl $wrapper {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $wrapper {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

/// Newtype wrapper for displaying the exercise catalog.
///
/// # Examples
///
/// ```rust
/// use ironlog_core::display::Exercises;
///
/// assert_eq!(Exercises(vec![]).to_string(), "No exercises found.\n");
/// ```
pub struct Exercises(pub Vec<Exercise>);

collection_wrapper!(Exercises, Exercise);

impl fmt::Display for Exercises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No exercises found.")
        } else {
            for exercise in &self.0 {
                write!(f, "{exercise}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the weekly plan, one section per day.
pub struct DayPlans(pub Vec<DayPlan>);

collection_wrapper!(DayPlans, DayPlan);

impl fmt::Display for DayPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No weekly plan yet.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying an execution history.
pub struct Executions(pub Vec<ExecutionRecord>);

collection_wrapper!(Executions, ExecutionRecord);

impl fmt::Display for Executions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No executions found.")
        } else {
            for execution in &self.0 {
                write!(f, "{execution}")?;
            }
            Ok(())
        }
    }
}
