//! Escaper doubles shared across the test suite.

use alloc::rc::Rc;
use core::cell::Cell;

use crate::escape::{Escaper, Transform};

/// Wraps an escaper and counts scan/transform invocations.
pub struct CountingEscaper<E> {
    inner: E,
    scans: Rc<Cell<usize>>,
    transforms: Rc<Cell<usize>>,
}

impl<E> CountingEscaper<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            scans: Rc::new(Cell::new(0)),
            transforms: Rc::new(Cell::new(0)),
        }
    }

    /// Handle to the scan counter; keep a clone before moving the escaper
    /// into a builder.
    pub fn scans(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.scans)
    }

    pub fn transforms(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.transforms)
    }
}

impl<E: Escaper> Escaper for CountingEscaper<E> {
    fn scan(&self, input: &[u8]) -> Option<usize> {
        self.scans.set(self.scans.get() + 1);
        self.inner.scan(input)
    }

    fn max_expansion(&self) -> usize {
        self.inner.max_expansion()
    }

    fn transform(&self, input: &[u8], dest: &mut [u8]) -> Transform {
        self.transforms.set(self.transforms.get() + 1);
        self.inner.transform(input, dest)
    }
}

/// Expands every byte to `width` copies of itself; its declared worst case
/// is exact, so every non-empty input is maximally expanding.
pub struct WideEscaper {
    pub width: usize,
}

impl Escaper for WideEscaper {
    fn scan(&self, input: &[u8]) -> Option<usize> {
        if input.is_empty() { None } else { Some(0) }
    }

    fn max_expansion(&self) -> usize {
        self.width
    }

    fn transform(&self, input: &[u8], dest: &mut [u8]) -> Transform {
        let needed = input.len() * self.width;
        if needed > dest.len() {
            return Transform::DestTooSmall;
        }
        for (i, &b) in input.iter().enumerate() {
            dest[i * self.width..(i + 1) * self.width].fill(b);
        }
        Transform::Complete { written: needed }
    }
}

/// Declares no expansion but actually triples every byte, so even the
/// "guaranteed" retry destination is undersized.
pub struct UndersellingEscaper;

impl Escaper for UndersellingEscaper {
    fn scan(&self, input: &[u8]) -> Option<usize> {
        if input.is_empty() { None } else { Some(0) }
    }

    fn max_expansion(&self) -> usize {
        1
    }

    fn transform(&self, input: &[u8], dest: &mut [u8]) -> Transform {
        let needed = input.len() * 3;
        if needed > dest.len() {
            return Transform::DestTooSmall;
        }
        for (i, &b) in input.iter().enumerate() {
            dest[i * 3..(i + 1) * 3].fill(b);
        }
        Transform::Complete { written: needed }
    }
}

/// Reports more output than the destination can hold without writing it.
pub struct OverreportingEscaper;

impl Escaper for OverreportingEscaper {
    fn scan(&self, input: &[u8]) -> Option<usize> {
        if input.is_empty() { None } else { Some(0) }
    }

    fn max_expansion(&self) -> usize {
        1
    }

    fn transform(&self, _input: &[u8], dest: &mut [u8]) -> Transform {
        Transform::Complete {
            written: dest.len() + 1,
        }
    }
}
