use std::iter::FusedIterator;

use crate::Iter;

/// An `Iterator` over the segments an `Iter` cursor yields.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    cursor: Iter<'a>,
}

impl<'a> Segments<'a> {
    /// Consumes the next segment and returns it, so the following `next()` skips it.
    pub fn skip_next(&mut self) -> Option<&'a str> { self.cursor.advance() }

    /// The part of the input not yet consumed.
    pub fn remainder(&self) -> &'a str { self.cursor.remainder() }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> { self.cursor.advance() }
}

impl FusedIterator for Segments<'_> {}

/// Splits `input` on `sep` with the same rules as `Iter`.
pub fn split<'a>(input: &'a str, sep: &'a str) -> Segments<'a> {
    Segments { cursor: Iter::new(input, sep) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i2s(i: &mut dyn std::iter::Iterator<Item=&str>) -> String {
        let i_vec: Vec<&str> = i.collect();
        i_vec.join(",")
    }

    #[test]
    fn data_empty() {
        assert_eq!("", i2s(&mut split("", "s")));
        assert_eq!("", i2s(&mut split("", "")));
    }

    #[test]
    fn matches_str_split() {
        for &(input, sep) in &[("a.b.c", "."), ("data1", "s"), ("ab--cd--ef", "--"), ("é,ü", ",")] {
            assert_eq!(
                input.split(sep).collect::<Vec<_>>(),
                split(input, sep).collect::<Vec<_>>(),
                "input={:?} sep={:?}", input, sep);
        }
    }

    #[test]
    fn trailing_sep() {
        assert_eq!(vec!["a", ""], "a.".split('.').collect::<Vec<_>>());
        assert_eq!("a", i2s(&mut split("a.", ".")));
    }

    #[test]
    fn skip_next() {
        let mut segments = split("a.0.b.c", ".");
        let mut seen = Vec::new();
        while let Some(k) = segments.next() {
            if k == "a" {
                assert_eq!(Some("0"), segments.skip_next());
                assert_eq!("b.c", segments.remainder());
            }
            seen.push(k);
        }
        assert_eq!(vec!["a", "b", "c"], seen);
    }

    #[test]
    fn next_called_again() {
        let mut s = split("abc", "b");
        assert_eq!(Some("a"), s.next());
        assert_eq!(Some("c"), s.next());
        assert_eq!(None, s.next());
        assert_eq!(None, s.next());
    }

    #[test]
    fn skip_next_after_end() {
        let mut s = split("a", ".");
        assert_eq!(Some("a"), s.next());
        assert_eq!(None, s.next());
        assert_eq!(None, s.skip_next());
        assert_eq!(None, s.next());
        assert_eq!(Vec::<&str>::new(), s.clone().fuse().collect::<Vec<_>>());
    }

    #[test]
    fn clone_resumes_independently() {
        let mut s = split("x.y.z", ".");
        assert_eq!(Some("x"), s.next());
        let rest = s.clone();
        assert_eq!(Some("y"), s.next());
        assert_eq!(vec!["y", "z"], rest.collect::<Vec<_>>());
        assert_eq!(vec!["z"], s.collect::<Vec<_>>());
    }

    #[test]
    fn combinators() {
        assert_eq!(3, split("x y z", " ").count());
        assert_eq!(Some("z"), split("x y z", " ").last());
        assert_eq!(vec!["1", "2"], split("1,2,3", ",").take(2).collect::<Vec<_>>());
    }
}
