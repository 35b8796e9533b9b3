use alloc::vec::Vec;

use super::{ClimbConfig, Hiker, Mountain, RestStop};
use crate::raw::Handle;
use crate::{GrowableMatrix, Result};

/// One pending step of the search: the arguments a recursive call would take.
struct Frame<'a> {
    node: Option<Handle>,
    hiker: Hiker,
    path: Vec<&'a RestStop>,
    depth: usize,
}

impl Mountain {
    /// Finds every full-length path down the mountain that a hiker starting with
    /// no supplies survives, using [`ClimbConfig::default`].
    ///
    /// # Errors
    ///
    /// Only if a completed path does not fit the result matrix, which the tree's
    /// structure rules out.
    pub fn find_paths(&self) -> Result<GrowableMatrix<&RestStop>> {
        self.find_paths_with(&ClimbConfig::default())
    }

    /// Finds every root-to-leaf path of maximal length along which the hiker's
    /// counters stay non-negative after each stop, the summit and the final stop
    /// included.
    ///
    /// Each row of the result has one column per level of the tree. Paths that
    /// end at a leaf above the deepest level are incomplete and never reported.
    /// Rows come out left to right.
    ///
    /// The search runs on an explicit stack. Each level that is expanded adds two
    /// frames and removes one, so at most `height + 1` frames are pending at once.
    ///
    /// # Errors
    ///
    /// Only if a completed path does not fit the result matrix, which the tree's
    /// structure rules out.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_mountain::{ClimbConfig, Mountain, RationPolicy, RestStop, Supplies};
    ///
    /// let mountain = Mountain::from_stops([
    ///     RestStop::new("B", 1, 0, 0),
    ///     RestStop::new("A", 0, 0, 0),
    ///     RestStop::new("C", 1, 0, 0),
    /// ]);
    ///
    /// assert_eq!(mountain.find_paths().unwrap().rows(), 2);
    ///
    /// let hungry = ClimbConfig { rations: RationPolicy::ConsumePerStop, ..ClimbConfig::default() };
    /// let paths = mountain.find_paths_with(&hungry).unwrap();
    /// assert_eq!(paths.rows(), 1);
    /// assert_eq!(paths.get(0, 1).unwrap().label(), "C");
    /// ```
    pub fn find_paths_with(&self, config: &ClimbConfig) -> Result<GrowableMatrix<&RestStop>> {
        let raw = self.stops.raw();
        let height = raw.height();
        let mut results = GrowableMatrix::new(height);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("find_paths", height, stops = raw.len()).entered();

        if height == 0 {
            return Ok(results);
        }

        let mut frames: Vec<Frame<'_>> = Vec::with_capacity(height + 1);
        frames.push(Frame {
            node: raw.root(),
            hiker: Hiker::new(config.starting_supplies),
            path: Vec::with_capacity(height),
            depth: 0,
        });

        #[cfg(feature = "tracing")]
        let mut processed = 0usize;

        while let Some(frame) = frames.pop() {
            // A missing child: this branch ended above the deepest level.
            let Some(handle) = frame.node else {
                continue;
            };

            #[cfg(feature = "tracing")]
            {
                processed += 1;
            }

            let node = raw.node(handle);
            let stop = node.value();
            let mut hiker = frame.hiker;
            hiker.visit(stop, config.rations);
            if !hiker.is_alive() {
                #[cfg(feature = "tracing")]
                tracing::trace!(stop = stop.label(), depth = frame.depth, "hiker did not survive");
                continue;
            }

            let mut path = frame.path;
            path.push(stop);

            if frame.depth + 1 == height {
                results.append(&path)?;
                continue;
            }

            // Right first so the left branch is explored first.
            frames.push(Frame {
                node: node.right(),
                hiker,
                path: path.clone(),
                depth: frame.depth + 1,
            });
            frames.push(Frame {
                node: node.left(),
                hiker,
                path,
                depth: frame.depth + 1,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = results.rows(), processed, "path search finished");

        Ok(results)
    }
}
