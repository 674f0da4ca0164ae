use std::cell::RefCell;

use word_counter_ports::render::{PanelView, Renderer};
use word_counter_shared_kernel::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Shown(PanelView),
    Hidden,
}

/// Records every call so tests can assert on the sequence.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: RefCell<Vec<Frame>>,
}

impl RecordingRenderer {
    pub fn last(&self) -> Option<Frame> {
        self.frames.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }
}

impl Renderer for RecordingRenderer {
    fn show(&self, view: &PanelView) -> Result<()> {
        self.frames.borrow_mut().push(Frame::Shown(view.clone()));
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        self.frames.borrow_mut().push(Frame::Hidden);
        Ok(())
    }
}
