use crate::error::HatError;
use crate::multiset::{validate_label, Multiset};
use rand::Rng;

/// A hat full of colored balls.
///
/// Each ball is one entry in `contents`, so `contents.len()` is always the
/// number of balls left. Draws only ever remove balls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hat {
    contents: Vec<String>,
}

impl Hat {
    /// Builds a hat holding `count` balls of each `label`, in the given order.
    pub fn new<I, S>(counts: I) -> Result<Self, HatError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut contents = Vec::new();
        for (label, count) in counts {
            let label = label.as_ref();
            validate_label(label)?;
            contents.extend(std::iter::repeat(label.to_string()).take(count));
        }
        Ok(Self { contents })
    }

    /// Balls still in the hat, one entry per ball. Order carries no meaning.
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    /// Number of balls left.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True once every ball has been drawn.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Per-color tally of the remaining balls, rebuilt on every call.
    pub fn counts(&self) -> Multiset {
        Multiset::from_labels(&self.contents)
    }

    /// Removes `n` balls at random and returns them.
    ///
    /// Asking for more balls than the hat holds empties it and returns
    /// everything that was left.
    pub fn draw(&mut self, n: usize) -> Vec<String> {
        self.draw_with_rng(n, &mut rand::thread_rng())
    }

    /// Same as [`Hat::draw`] with a caller-supplied RNG.
    pub fn draw_with_rng<R: Rng>(&mut self, n: usize, rng: &mut R) -> Vec<String> {
        let len = self.contents.len();
        if n >= len {
            if n > len {
                tracing::debug!(requested = n, available = len, "overdraw, returning whole hat");
            }
            return std::mem::take(&mut self.contents);
        }

        // Partial Fisher-Yates: the last n slots end up holding a uniform
        // n-subset of positions, which is then split off in one go.
        for k in 0..n {
            let last = len - 1 - k;
            let j = rng.gen_range(0..=last);
            self.contents.swap(j, last);
        }
        self.contents.split_off(len - n)
    }
}
