/// Decides whether two neighbouring values belong to the same run.
pub trait Identical<T> {
    /// `true` if `first` and `second` should be collapsed into a single run.
    /// No guarantees are made about which of the two values represents the run.
    fn identical(&self, first: &T, second: &T) -> bool;
}

/// Plain equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Equal;

impl<T: PartialEq> Identical<T> for Equal {
    #[inline(always)]
    fn identical(&self, first: &T, second: &T) -> bool {
        first == second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        for (a, b, expected) in [(1, 1, true), (1, 3, false), (-4, 4, false), (0, 0, true)] {
            assert_eq!(Equal.identical(&a, &b), expected);
        }
    }
}
