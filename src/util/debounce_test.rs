use super::*;

use std::cell::Cell;
use std::rc::Rc;

/// Timer queue driven by hand; a dropped handle marks its task cancelled.
#[derive(Clone, Default)]
struct ManualScheduler {
    now_ms: Rc<Cell<u32>>,
    queue: Rc<RefCell<Vec<Timer>>>,
}

struct Timer {
    due_ms: u32,
    cancelled: Rc<Cell<bool>>,
    task: Option<Box<dyn FnOnce()>>,
}

struct CancelOnDrop(Rc<Cell<bool>>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Pending = CancelOnDrop;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> CancelOnDrop {
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push(Timer {
            due_ms: self.now_ms.get() + delay_ms,
            cancelled: Rc::clone(&cancelled),
            task: Some(task),
        });
        CancelOnDrop(cancelled)
    }
}

impl ManualScheduler {
    fn advance(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get() + ms);
        let now = self.now_ms.get();
        let due: Vec<Box<dyn FnOnce()>> = self
            .queue
            .borrow_mut()
            .iter_mut()
            .filter(|t| t.due_ms <= now && !t.cancelled.get())
            .filter_map(|t| t.task.take())
            .collect();
        for task in due {
            task();
        }
    }
}

fn counting_task(count: &Rc<Cell<u32>>) -> impl FnOnce() + 'static {
    let count = Rc::clone(count);
    move || count.set(count.get() + 1)
}

#[test]
fn single_trigger_fires_after_delay() {
    let scheduler = ManualScheduler::default();
    let debouncer = Debouncer::new(scheduler.clone(), 250);
    let count = Rc::new(Cell::new(0));

    debouncer.trigger(counting_task(&count));
    scheduler.advance(249);
    assert_eq!(count.get(), 0);
    scheduler.advance(1);
    assert_eq!(count.get(), 1);
}

#[test]
fn rapid_triggers_collapse_into_one_run() {
    let scheduler = ManualScheduler::default();
    let debouncer = Debouncer::new(scheduler.clone(), 250);
    let count = Rc::new(Cell::new(0));

    debouncer.trigger(counting_task(&count));
    scheduler.advance(100);
    debouncer.trigger(counting_task(&count));
    scheduler.advance(100);
    debouncer.trigger(counting_task(&count));
    scheduler.advance(249);
    assert_eq!(count.get(), 0);

    scheduler.advance(1);
    assert_eq!(count.get(), 1);
    scheduler.advance(1000);
    assert_eq!(count.get(), 1);
}

#[test]
fn separated_bursts_each_run_once() {
    let scheduler = ManualScheduler::default();
    let debouncer = Debouncer::new(scheduler.clone(), 250);
    let count = Rc::new(Cell::new(0));

    debouncer.trigger(counting_task(&count));
    scheduler.advance(300);
    debouncer.trigger(counting_task(&count));
    debouncer.trigger(counting_task(&count));
    scheduler.advance(300);
    assert_eq!(count.get(), 2);
}

#[test]
fn delay_is_reported() {
    let debouncer = Debouncer::new(ManualScheduler::default(), 250);
    assert_eq!(debouncer.delay_ms(), 250);
}
