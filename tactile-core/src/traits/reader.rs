//! Raw switch sampling

/// Reads the raw pressed state of a button location
///
/// Implementations return the instantaneous logical level with no
/// filtering; debouncing is the engine's job. Reads must not block and
/// cannot fail. Drivers whose hardware can report errors decide how to
/// map them (typically to "not pressed").
///
/// Any `FnMut(&L) -> bool` closure is a port reader, which covers the
/// common case of wrapping a vendor `read_pin(port, pin)` function.
pub trait PortReader<L: ?Sized> {
    /// Check if the switch at `location` is currently pressed
    fn is_pressed(&mut self, location: &L) -> bool;
}

impl<L: ?Sized, F> PortReader<L> for F
where
    F: FnMut(&L) -> bool,
{
    fn is_pressed(&mut self, location: &L) -> bool {
        self(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample<L, R: PortReader<L>>(reader: &mut R, location: &L) -> bool {
        reader.is_pressed(location)
    }

    #[test]
    fn test_closure_reader() {
        let mut reads = 0;
        let mut reader = |pin: &(u8, u8)| {
            reads += 1;
            pin.1 == 13
        };

        assert!(sample(&mut reader, &(0, 13)));
        assert!(!sample(&mut reader, &(0, 5)));
        assert_eq!(reads, 2);
    }
}
