//! Rendering of plain value lists.

use std::fmt::{self, Display};

/// Displays a list of values separated by single spaces.
///
/// ```
/// use logshim::log::Values;
///
/// assert_eq!(Values::new(&[&"tile", &42, &true]).to_string(), "tile 42 true");
/// assert_eq!(Values::new(&[]).to_string(), "");
/// ```
#[derive(Clone, Copy)]
pub struct Values<'a>(&'a [&'a dyn Display]);

impl<'a> Values<'a> {
    pub fn new(values: &'a [&'a dyn Display]) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.0 {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Values({:?})", self.to_string())
    }
}
