//! Captured call stacks.

use core::fmt;
use core::slice;

use crate::frame::Frame;

/// Maximum number of frames recorded by [`Stack::capture`].
pub const MAX_DEPTH: usize = 32;

/// Upper bound on frames walked while looking for the capture routine itself.
const MAX_WALK: usize = 256;

/// An immutable snapshot of the call stack, origin first.
///
/// Index 0 is the deepest recorded call site, the place where the snapshot
/// was taken. Only raw instruction pointers are stored; the snapshot stays
/// valid after the stack that produced it has unwound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Stack {
    frames: Box<[Frame]>,
}

impl Stack {
    /// Records up to [`MAX_DEPTH`] frames of the current call stack.
    ///
    /// With `skip == 0` the first frame is the function that called `capture`;
    /// each increment drops one more caller. Frames belonging to the capture
    /// routine itself are never recorded. Skipping past the outermost frame
    /// yields an empty stack.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let anchor = Self::capture as fn(usize) -> Self as usize;
        let mut raw: Vec<usize> = Vec::with_capacity(MAX_DEPTH + 8);
        // Index of the first frame after `capture`, once it has been seen.
        let mut start: Option<usize> = None;

        backtrace::trace(|frame| {
            raw.push(frame.ip() as usize);
            if start.is_none() && frame.symbol_address() as usize == anchor {
                start = Some(raw.len());
            }
            let limit = start.map_or(MAX_WALK, |begin| {
                begin.saturating_add(skip).saturating_add(MAX_DEPTH)
            });
            raw.len() < limit
        });

        let begin = start.unwrap_or(0).saturating_add(skip);
        let frames = raw
            .into_iter()
            .skip(begin)
            .take(MAX_DEPTH)
            .map(Frame::from_ip)
            .collect();
        Self { frames }
    }

    /// Builds a stack from frames recorded elsewhere, origin first.
    pub fn from_frames(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Returns every recorded frame, origin first.
    #[inline]
    pub fn stack_trace(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the origin frame, or `None` for an empty stack.
    #[inline]
    pub fn stack_source(&self) -> Option<Frame> {
        self.frames.first().copied()
    }

    /// Number of recorded frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frame was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates over the frames, origin first.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Frame;
    type IntoIter = slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Frame> for Stack {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self::from_frames(iter)
    }
}

/// Renders each frame on its own line as `function\n\tpath:line`, followed by
/// a trailing newline.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.iter() {
            write!(f, "\n{frame:#}")?;
        }
        f.write_str("\n")
    }
}
