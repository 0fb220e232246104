//! Story playback
//!
//! A story is a user's short stack of images shown full-screen, one at a
//! time. The player owns only the frame cursor: the host drives it with
//! taps and a dwell timer, advancing until the stack ends and the viewer
//! closes.

use serde::{Deserialize, Serialize};

/// How long each frame is shown before auto-advancing (ms)
pub const FRAME_DURATION_MS: u64 = 5000;

/// One user's story: profile header plus an ordered image stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: u32,
    pub username: String,
    pub profile_pic: String,
    pub images: Vec<String>,
}

/// Result of advancing the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryAdvance {
    /// Moved to the frame at this index
    Next(usize),
    /// The last frame finished; the viewer should close
    Finished,
}

/// Fill state of one progress-bar segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameProgress {
    Seen,
    Current,
    Upcoming,
}

/// Frame cursor over one story's image stack
#[derive(Debug, Clone, PartialEq)]
pub struct StoryPlayer {
    story: Story,
    current_index: usize,
}

impl StoryPlayer {
    pub fn new(story: Story) -> Self {
        Self {
            story,
            current_index: 0,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// URL of the frame currently on screen
    pub fn current_image(&self) -> Option<&str> {
        self.story.images.get(self.current_index).map(String::as_str)
    }

    /// Move forward one frame; finishing the last frame closes the viewer
    pub fn advance(&mut self) -> StoryAdvance {
        if self.current_index + 1 >= self.story.images.len() {
            StoryAdvance::Finished
        } else {
            self.current_index += 1;
            StoryAdvance::Next(self.current_index)
        }
    }

    /// Move back one frame, clamping at the first
    pub fn rewind(&mut self) -> usize {
        self.current_index = self.current_index.saturating_sub(1);
        self.current_index
    }

    /// Progress-bar state for each frame in the stack
    pub fn progress(&self) -> Vec<FrameProgress> {
        (0..self.story.images.len())
            .map(|index| {
                if index < self.current_index {
                    FrameProgress::Seen
                } else if index == self.current_index {
                    FrameProgress::Current
                } else {
                    FrameProgress::Upcoming
                }
            })
            .collect()
    }
}
