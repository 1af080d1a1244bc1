//! Drink picker port
//!
//! Abstracts the random source used to choose the next drink.

/// Chooses an index into the drink list.
///
/// Implementations must return a value in `0..len` and should pick
/// uniformly. Repeating the previous pick is allowed.
pub trait DrinkPicker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: DrinkPicker + ?Sized> DrinkPicker for Box<P> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Picker that replays a fixed sequence of indices, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequencePicker {
    indices: Vec<usize>,
    position: usize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }
}

impl DrinkPicker for SequencePicker {
    fn pick(&mut self, _len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.position % self.indices.len()];
        self.position += 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_picker_cycles() {
        let mut picker = SequencePicker::new(vec![2, 0]);
        assert_eq!(picker.pick(3), 2);
        assert_eq!(picker.pick(3), 0);
        assert_eq!(picker.pick(3), 2);
    }

    #[test]
    fn test_sequence_picker_empty_defaults_to_zero() {
        let mut picker = SequencePicker::new(vec![]);
        assert_eq!(picker.pick(5), 0);
    }

    #[test]
    fn test_boxed_picker_delegates() {
        let mut picker: Box<dyn DrinkPicker> = Box::new(SequencePicker::new(vec![1]));
        assert_eq!(picker.pick(2), 1);
    }
}
