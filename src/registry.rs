use rvec::library::Vector;
use crate::command::CommandError;

pub const SLOTS: usize = 26;

/// Named vector storage, one slot per letter A-Z. Slots start undefined and
/// are only ever overwritten, never cleared.
pub struct Registry {
    slots: [Option<Vector>; SLOTS],
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            slots: [None; SLOTS],
        }
    }

    pub fn index(name: char) -> Result<usize, CommandError> {
        if name.is_ascii_uppercase() {
            return Ok(name as usize - 'A' as usize);
        }
        Err(CommandError::InvalidName(name))
    }

    pub fn get(&self, name: char) -> Result<Vector, CommandError> {
        let idx = Self::index(name)?;
        self.slots[idx].ok_or(CommandError::Undefined(name))
    }

    pub fn set(&mut self, name: char, value: Vector) -> Result<(), CommandError> {
        let idx = Self::index(name)?;
        self.slots[idx] = Some(value);
        Ok(())
    }

    /// Defined slots in A-Z order.
    pub fn defined(&self) -> impl Iterator<Item = (char, Vector)> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.map(|value| ((b'A' + idx as u8) as char, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let registry = Registry::new();
        assert_eq!(registry.defined().count(), 0);
        assert_eq!(registry.get('A'), Err(CommandError::Undefined('A')));
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Registry::default().defined().count(), 0);
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(Registry::index('A'), Ok(0));
        assert_eq!(Registry::index('Z'), Ok(25));
        assert_eq!(Registry::index('a'), Err(CommandError::InvalidName('a')));
        assert_eq!(Registry::index('['), Err(CommandError::InvalidName('[')));
        assert_eq!(Registry::index('@'), Err(CommandError::InvalidName('@')));
    }

    #[test]
    fn test_set_overwrites() {
        let mut registry = Registry::new();
        registry.set('C', Vector::new(1.0, 2.0)).unwrap();
        registry.set('C', Vector::new(3.0, 4.0)).unwrap();
        assert_eq!(registry.get('C'), Ok(Vector::new(3.0, 4.0)));
        assert_eq!(registry.defined().count(), 1);
    }

    #[test]
    fn test_set_rejects_bad_name() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.set('1', Vector::ZERO),
            Err(CommandError::InvalidName('1'))
        );
        assert_eq!(registry.defined().count(), 0);
    }

    #[test]
    fn test_defined_in_letter_order() {
        let mut registry = Registry::new();
        registry.set('Q', Vector::new(1.0, 0.0)).unwrap();
        registry.set('B', Vector::new(0.0, 1.0)).unwrap();
        registry.set('Z', Vector::ZERO).unwrap();
        let names: Vec<char> = registry.defined().map(|(name, _)| name).collect();
        assert_eq!(names, vec!['B', 'Q', 'Z']);
    }
}
