use std::ops::Neg;

use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    /// Unit step in cells, y grows downwards like screen coordinates
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (0, -1),
            R => (1, 0),
            D => (0, 1),
            L => (-1, 0),
        }
    }

    /// Turning from `self` to `other` would reverse the snake into itself
    pub fn is_opposite(self, other: Self) -> bool {
        -self == other
    }
}

#[test]
fn test_opposite() {
    for (dir, opposite) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, opposite);
        assert!(dir.is_opposite(opposite), "{:?} => {:?}", dir, opposite);
    }

    for dir in [U, R, D, L] {
        assert!(!dir.is_opposite(dir));
        assert_eq!(-(-dir), dir);
    }

    assert!(!U.is_opposite(L));
    assert!(!U.is_opposite(R));
}

#[test]
fn test_delta() {
    assert_eq!(U.delta(), (0, -1));
    assert_eq!(D.delta(), (0, 1));
    assert_eq!(L.delta(), (-1, 0));
    assert_eq!(R.delta(), (1, 0));

    // opposite directions cancel out
    for dir in [U, R, D, L] {
        let (dx, dy) = dir.delta();
        let (ox, oy) = (-dir).delta();
        assert_eq!((dx + ox, dy + oy), (0, 0));
    }
}
