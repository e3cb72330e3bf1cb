//! Work distribution for the render loop.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out pixels of one render to worker threads, each exactly once.
///
/// A single atomic counter walks the image in row-major order; workers
/// pull until it runs out. A second counter tracks completed pixels for
/// progress logging. One dispenser belongs to one render call, so two
/// renders never share state.
pub struct PixelDispenser {
    nx: u32,
    ny: u32,
    next: AtomicUsize,
    done: AtomicUsize,
    log_interval: usize,
}

impl PixelDispenser {
    pub fn new(nx: u32, ny: u32) -> Self {
        let total = (nx as usize) * (ny as usize);
        Self {
            nx,
            ny,
            next: AtomicUsize::new(0),
            done: AtomicUsize::new(0),
            // About one progress line per percent, at least every row.
            log_interval: (total / 100).max(nx as usize).max(1),
        }
    }

    /// The next unclaimed `(col, row)`, or `None` when the image is
    /// exhausted.
    pub fn claim(&self) -> Option<(u32, u32)> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        let total = (self.nx as usize) * (self.ny as usize);
        if index >= total {
            return None;
        }
        let col = (index % self.nx as usize) as u32;
        let row = (index / self.nx as usize) as u32;
        Some((col, row))
    }

    /// Record one finished pixel, logging progress at intervals.
    pub fn mark_done(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        let total = (self.nx as usize) * (self.ny as usize);
        if done % self.log_interval == 0 || done == total {
            log::debug!("rendered {done}/{total} pixels");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_claims_every_pixel_once() {
        let dispenser = PixelDispenser::new(4, 3);
        let mut seen = HashSet::new();
        while let Some(pixel) = dispenser.claim() {
            assert!(seen.insert(pixel));
        }
        assert_eq!(seen.len(), 12);
        assert!(dispenser.claim().is_none());
    }

    #[test]
    fn test_row_major_order() {
        let dispenser = PixelDispenser::new(3, 2);
        assert_eq!(dispenser.claim(), Some((0, 0)));
        assert_eq!(dispenser.claim(), Some((1, 0)));
        assert_eq!(dispenser.claim(), Some((2, 0)));
        assert_eq!(dispenser.claim(), Some((0, 1)));
    }

    #[test]
    fn test_concurrent_claims_are_disjoint() {
        let dispenser = Arc::new(PixelDispenser::new(50, 40));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let dispenser = Arc::clone(&dispenser);
            handles.push(std::thread::spawn(move || {
                let mut claimed = Vec::new();
                while let Some(pixel) = dispenser.claim() {
                    claimed.push(pixel);
                    dispenser.mark_done();
                }
                claimed
            }));
        }
        let mut all = HashSet::new();
        for handle in handles {
            for pixel in handle.join().unwrap() {
                assert!(all.insert(pixel), "pixel claimed twice");
            }
        }
        assert_eq!(all.len(), 2000);
    }
}
