use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::controller::{ListController, SubscriptionId};
use crate::database::Database;
use crate::environment::EnvironmentInfo;
use crate::i18n::Strings;
use crate::models::FocusArea;

/// Work queued to run once the current frame has been drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// Put the cursor back on whatever now sits at `index_before`.
    RestoreListFocus { index_before: usize },
}

pub struct App {
    pub controller: ListController,
    pub strings: Strings,
    pub environment: EnvironmentInfo,
    pub focus: FocusArea,
    pub cursor: Option<usize>,
    deferred: VecDeque<DeferredTask>,
    redraw: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl App {
    pub fn new(strings: Strings, environment: EnvironmentInfo) -> Self {
        Self::with_controller(ListController::new(&Database::new()), strings, environment)
    }

    pub fn with_controller(mut controller: ListController, strings: Strings, environment: EnvironmentInfo) -> Self {
        let redraw = Rc::new(Cell::new(true));
        let flag = redraw.clone();
        let subscription = controller.subscribe(move |event| {
            tracing::trace!(?event, commands = ?event.affected_commands(), "re-evaluating commands");
            flag.set(true);
        });
        let cursor = if controller.varieties().is_empty() { None } else { Some(0) };
        Self {
            controller,
            strings,
            environment,
            focus: FocusArea::Input,
            cursor,
            deferred: VecDeque::new(),
            redraw,
            subscription,
        }
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    pub fn defer(&mut self, task: DeferredTask) {
        self.deferred.push_back(task);
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Runs the tasks queued before this call. Call after drawing.
    pub fn run_deferred(&mut self) {
        let pending: Vec<DeferredTask> = self.deferred.drain(..).collect();
        for task in pending {
            match task {
                DeferredTask::RestoreListFocus { index_before } => self.restore_list_focus(index_before),
            }
        }
    }

    fn restore_list_focus(&mut self, index_before: usize) {
        let len = self.controller.varieties().len();
        if len > 0 {
            let index = index_before.min(len - 1);
            self.cursor = Some(index);
            let name = self.controller.varieties()[index].clone();
            self.controller.select(&name);
        } else {
            self.cursor = None;
        }
        self.focus = FocusArea::List;
        self.request_redraw();
    }

    /// Keeps the cursor inside the list after it shrank or grew from empty.
    pub fn clamp_cursor(&mut self) {
        let len = self.controller.varieties().len();
        self.cursor = match (self.cursor, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    /// Stops redraw requests from controller changes.
    pub fn detach(&mut self) {
        self.controller.unsubscribe(self.subscription);
    }

    pub fn cursor_variety(&self) -> Option<&str> {
        self.cursor
            .and_then(|i| self.controller.varieties().get(i))
            .map(String::as_str)
    }
}
