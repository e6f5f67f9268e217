/// A query position in the `[batch, heads, depth, height, width]` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub batch: usize,
    pub head: usize,
    pub depth: usize,
    pub height: usize,
    pub width: usize,
}

/// Recovers the grid position of the flat work item `x`, innermost axis first.
#[inline(always)]
pub fn decompose(x: usize, heads: usize, depth: usize, height: usize, width: usize) -> Position {
    let rest = x / width;
    let w = x - rest * width;
    let x = rest;
    let rest = x / height;
    let h = x - rest * height;
    let x = rest;
    let rest = x / depth;
    let d = x - rest * depth;
    let x = rest;
    let batch = x / heads;
    let head = x - batch * heads;
    Position {
        batch,
        head,
        depth: d,
        height: h,
        width: w,
    }
}

impl Position {
    /// The flat work item index of this position, inverse of [`decompose`].
    pub fn linear(&self, heads: usize, depth: usize, height: usize, width: usize) -> usize {
        (((self.batch * heads + self.head) * depth + self.depth) * height + self.height) * width
            + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn innermost_first() {
        let p = decompose(0, 2, 3, 4, 5);
        assert_eq!(
            p,
            Position {
                batch: 0,
                head: 0,
                depth: 0,
                height: 0,
                width: 0
            }
        );
        let p = decompose(1, 2, 3, 4, 5);
        assert_eq!(p.width, 1);
        let p = decompose(5, 2, 3, 4, 5);
        assert_eq!((p.height, p.width), (1, 0));
        let p = decompose(2 * 3 * 4 * 5 + 7, 2, 3, 4, 5);
        assert_eq!((p.batch, p.head, p.depth, p.height, p.width), (1, 0, 0, 1, 2));
    }

    #[test]
    fn roundtrip() {
        let (b, h, d, hh, w) = (2, 3, 2, 4, 3);
        for x in 0..b * h * d * hh * w {
            assert_eq!(decompose(x, h, d, hh, w).linear(h, d, hh, w), x);
        }
    }
}
