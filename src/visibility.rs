use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::pointer::{ListenerControl, PointerHub, PointerPress, Subscription};

/// Open/closed state of a panel, with dismissal on presses outside it.
///
/// While open, a listener on the [`PointerHub`] closes the panel when a press
/// lands outside the root region. The listener exists only while open.
pub struct Visibility {
    open: Rc<Cell<bool>>,
    /// Screen rectangles the panel occupied on the last frame. Empty until
    /// the panel has been drawn.
    root: Rc<RefCell<Vec<egui::Rect>>>,
    hub: PointerHub,
    outside_press: Option<Subscription>,
}

impl Visibility {
    pub fn new(hub: PointerHub) -> Self {
        Self {
            open: Rc::new(Cell::new(false)),
            root: Rc::new(RefCell::new(Vec::new())),
            hub,
            outside_press: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.open.set(true);
        if !self.is_listening() {
            self.outside_press = Some(self.watch_outside_presses());
        }
    }

    pub fn close(&mut self) {
        self.open.set(false);
        self.outside_press = None;
    }

    /// True while an outside-press listener is attached to the hub.
    pub fn is_listening(&self) -> bool {
        self.outside_press
            .as_ref()
            .is_some_and(Subscription::is_attached)
    }

    /// Records the rectangles that count as inside the panel. Each one is
    /// hit-tested on its own; gaps between them are outside.
    pub fn set_root(&self, rects: Vec<egui::Rect>) {
        *self.root.borrow_mut() = rects;
    }

    /// Drops the spent subscription left behind by an outside dismissal.
    pub fn sync(&mut self) {
        if !self.is_open() {
            self.outside_press = None;
        }
    }

    fn watch_outside_presses(&self) -> Subscription {
        let open = Rc::clone(&self.open);
        let root = Rc::clone(&self.root);
        self.hub.subscribe(move |press: &PointerPress| {
            let rects = root.borrow();
            if rects.is_empty() || rects.iter().any(|rect| rect.contains(press.pos)) {
                return ListenerControl::Keep;
            }
            tracing::debug!(
                x = press.pos.x,
                y = press.pos.y,
                "style panel dismissed by outside press"
            );
            open.set(false);
            ListenerControl::Remove
        })
    }
}
